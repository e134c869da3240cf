//! GBM path generation.
//!
//! # Memory Layout
//!
//! Paths are stored row-major: `paths[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` holds the initial spot price.

use pricer_models::MarketParams;
use rayon::prelude::*;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::shocks::ShockMatrix;
use crate::error::PricingError;

/// N × (M+1) matrix of simulated prices.
///
/// Column 0 is S₀ for every row; every entry is strictly positive because
/// each step multiplies by an exponential.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathMatrix {
    /// Number of simulated paths (N).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps (M); each row has M+1 prices.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Prices of one path, from S₀ to S(T).
    ///
    /// # Panics
    ///
    /// Panics if `path_idx >= n_paths`.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let width = self.n_steps + 1;
        let start = path_idx * width;
        &self.data[start..start + width]
    }

    /// Iterator over all paths.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_steps + 1)
    }

    /// First column.
    pub fn initial_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.paths().map(|path| path[0])
    }

    /// Last column, one terminal price per path.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths().map(|path| path[self.n_steps]).collect()
    }

    /// Row-major view of the whole matrix.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Evolves one path per shock row with exact log-space GBM stepping.
///
/// ```text
/// S[t] = S[t-1] × exp((r - 0.5σ²)dt + σ√dt × Z[t-1])
/// ```
///
/// `dt = maturity / shocks.n_steps()`. Rows are independent and evolved in
/// parallel. Parameters are assumed validated; see [`simulate_paths`] for the
/// checked entry point.
///
/// # Examples
///
/// ```rust
/// use pricer_models::MarketParams;
/// use pricer_pricing::mc::{generate_gbm_paths, ShockMatrix};
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let shocks = ShockMatrix::generate(10, 4, 42).unwrap();
/// let paths = generate_gbm_paths(&params, &shocks);
///
/// assert_eq!(paths.path(0).len(), 5);
/// assert!(paths.as_slice().iter().all(|&s| s > 0.0));
/// ```
pub fn generate_gbm_paths(params: &MarketParams, shocks: &ShockMatrix) -> PathMatrix {
    let n_paths = shocks.n_paths();
    let n_steps = shocks.n_steps();

    let dt = params.maturity / n_steps as f64;
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let mut data = vec![0.0; n_paths * (n_steps + 1)];
    data.par_chunks_mut(n_steps + 1)
        .zip(shocks.as_slice().par_chunks(n_steps))
        .for_each(|(path, z)| {
            path[0] = params.spot;
            for step in 0..n_steps {
                path[step + 1] = path[step] * (drift_dt + vol_sqrt_dt * z[step]).exp();
            }
        });

    PathMatrix {
        data,
        n_paths,
        n_steps,
    }
}

/// Validates inputs, draws shocks, and simulates the path matrix.
///
/// Uses the configured seed, or a fresh entropy seed when none is set.
///
/// # Errors
///
/// [`PricingError`] naming the offending field when market parameters or
/// simulation controls are invalid.
pub fn simulate_paths(
    params: &MarketParams,
    config: &MonteCarloConfig,
) -> Result<PathMatrix, PricingError> {
    params.validate()?;
    config.validate()?;

    let seed = config.seed().unwrap_or_else(rand::random);
    debug!(
        n_paths = config.n_paths(),
        n_steps = config.n_steps(),
        seed,
        "drawing shock matrix"
    );

    let shocks = ShockMatrix::generate(config.n_paths(), config.n_steps(), seed)?;
    Ok(generate_gbm_paths(params, &shocks))
}
