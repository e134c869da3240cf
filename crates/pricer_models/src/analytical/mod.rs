//! Closed-form reference prices for European calls.
//!
//! The Monte Carlo estimator converges to these values as the path count
//! grows, so they serve as the benchmark in convergence tests and in the
//! valuation report.
//!
//! - Generic over `T: Float`
//! - erfc-based standard normal CDF

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{black_scholes_call, BlackScholes};
pub use distributions::norm_cdf;
