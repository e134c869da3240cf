//! # Pricer Pricing
//!
//! Monte Carlo valuation of European calls under risk-neutral Geometric
//! Brownian Motion.
//!
//! ## Pipeline
//!
//! ```text
//! MarketParams + MonteCarloConfig
//!   └── ShockMatrix       (N × M standard normals, one RNG stream per path)
//!       └── PathMatrix    (N × (M+1) prices, exact log-space stepping)
//!           └── evaluate_call()  (discounted mean payoff, P(profit), P(loss))
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::MarketParams;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(12)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let valuation = MonteCarloPricer::new(config)
//!     .unwrap()
//!     .price_european_call(&params)
//!     .unwrap();
//!
//! let stats = &valuation.statistics;
//! assert!((stats.price - 10.45).abs() < 4.0 * stats.std_error);
//! assert!((stats.prob_profit + stats.prob_loss - 100.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod mc;
pub mod rng;

pub use error::PricingError;
pub use mc::{
    evaluate_call, generate_gbm_paths, simulate_paths, MonteCarloConfig, MonteCarloPricer,
    PathMatrix, PayoffStatistics, ShockMatrix, Valuation,
};
