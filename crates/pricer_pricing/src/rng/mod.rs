//! # Random Number Generation
//!
//! Seeded pseudo-random streams for Monte Carlo path generation.
//!
//! - **Reproducibility**: a seed fully determines every shock
//! - **Independence**: each path draws from its own stream, derived from
//!   `(seed, path_index)`, so results do not depend on thread scheduling
//! - **Zero allocation**: batch fills write into caller-owned `&mut [f64]`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! // Per-path stream for path 7 of a seed-42 run
//! let mut row = vec![0.0; 252];
//! PricerRng::for_path(42, 7).fill_normal(&mut row);
//! ```

mod prng;

pub use prng::PricerRng;
