//! # Pricer Models
//!
//! Market inputs and closed-form reference models for European option
//! valuation under Geometric Brownian Motion.
//!
//! - [`market`]: immutable [`MarketParams`] for a single valuation run
//! - [`analytical`]: Black-Scholes closed form and standard normal functions
//! - [`error`]: parameter validation errors naming the offending field
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::black_scholes_call;
//! use pricer_models::MarketParams;
//!
//! let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let price = black_scholes_call(&params);
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```

#![deny(missing_docs)]

pub mod analytical;
pub mod error;
pub mod market;

pub use error::ModelError;
pub use market::MarketParams;
