//! Random shock matrix for path generation.
//!
//! # Memory Layout
//!
//! Row-major: `shocks[path_idx * n_steps + step_idx]`. Row `i` is drawn from
//! [`PricerRng::for_path(seed, i)`](crate::rng::PricerRng::for_path), so the
//! matrix is identical for a given seed however rayon splits the rows.

use rayon::prelude::*;

use super::config::check_dimensions;
use super::error::ConfigError;
use crate::rng::PricerRng;

/// N × M matrix of independent standard normal draws.
///
/// Consumed once by [`generate_gbm_paths`](super::paths::generate_gbm_paths).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::ShockMatrix;
///
/// let shocks = ShockMatrix::generate(100, 12, 42).unwrap();
/// assert_eq!(shocks.row(3).len(), 12);
/// assert_eq!(shocks, ShockMatrix::generate(100, 12, 42).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShockMatrix {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl ShockMatrix {
    /// Draws the matrix, one RNG stream per row, rows filled in parallel.
    ///
    /// # Errors
    ///
    /// Same dimension checks as
    /// [`MonteCarloConfig::validate`](super::config::MonteCarloConfig::validate),
    /// applied before anything is allocated.
    pub fn generate(n_paths: usize, n_steps: usize, seed: u64) -> Result<Self, ConfigError> {
        check_dimensions(n_paths, n_steps)?;

        let mut data = vec![0.0; n_paths * n_steps];
        data.par_chunks_mut(n_steps)
            .enumerate()
            .for_each(|(path_idx, row)| {
                PricerRng::for_path(seed, path_idx as u64).fill_normal(row);
            });

        Ok(Self {
            data,
            n_paths,
            n_steps,
        })
    }

    /// Number of rows (paths).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of columns (time steps).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Shocks for one path.
    ///
    /// # Panics
    ///
    /// Panics if `path_idx >= n_paths`.
    #[inline]
    pub fn row(&self, path_idx: usize) -> &[f64] {
        let start = path_idx * self.n_steps;
        &self.data[start..start + self.n_steps]
    }

    /// Row-major view of all shocks.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
