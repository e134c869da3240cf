//! Monte Carlo valuation of European calls under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path/step counts, seed)
//! ├── ShockMatrix       (N × M normals, per-path RNG streams)
//! ├── PathMatrix        (N × (M+1) prices)
//! └── evaluate_call()   (payoff statistics)
//! ```
//!
//! # Exact Stepping
//!
//! Paths evolve with the exact solution of GBM over each sub-interval:
//! ```text
//! S[t] = S[t-1] × exp((r - σ²/2)·dt + σ·√dt·Z)
//! ```
//! An Euler update `S[t-1] × (1 + r·dt + σ·√dt·Z)` would add a discretisation
//! bias and can go negative; it is not used anywhere in this module.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::MarketParams;
//! use pricer_pricing::mc::{simulate_paths, evaluate_call, MonteCarloConfig};
//!
//! let params = MarketParams::new(255.78, 265.0, 1.0, 0.041, 0.28).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(1_000)
//!     .n_steps(252)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let paths = simulate_paths(&params, &config).unwrap();
//! assert!(paths.initial_prices().all(|s| s == params.spot));
//!
//! let stats = evaluate_call(&paths.terminal_prices(), &params).unwrap();
//! assert!(stats.price >= 0.0);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod shocks;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_CELLS, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{generate_gbm_paths, simulate_paths, PathMatrix};
pub use payoff::{call_payoff, evaluate_call, PayoffStatistics};
pub use pricer::{MonteCarloPricer, Valuation};
pub use shocks::ShockMatrix;
