//! Monte Carlo simulation configuration.
//!
//! Path and step counts plus an optional seed. The step size `dt = T / M`
//! is derived from the maturity when paths are evolved.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of path-matrix cells, `n_paths × (n_steps + 1)`.
///
/// Each run holds a path matrix and a shock matrix of about this size, so
/// the bound keeps one run under roughly 1.6 GB of `f64` buffers.
pub const MAX_CELLS: usize = 100_000_000;

/// Checks path and step counts, individually and as a product.
pub(crate) fn check_dimensions(n_paths: usize, n_steps: usize) -> Result<(), ConfigError> {
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(ConfigError::InvalidPathCount(n_paths));
    }
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(ConfigError::InvalidStepCount(n_steps));
    }
    match n_paths.checked_mul(n_steps + 1) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(ConfigError::TooManyCells { n_paths, n_steps }),
    }
}

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`MonteCarloConfigBuilder`] to construct
/// instances; invalid counts are rejected by [`build`](MonteCarloConfigBuilder::build).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths (N).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path (M).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the seed, if one was fixed.
    ///
    /// `None` means the caller leaves seeding to the engine, which draws a
    /// fresh seed from OS entropy per run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns a copy of this configuration with the seed fixed.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - `n_paths × (n_steps + 1)` exceeds [`MAX_CELLS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.n_paths, self.n_steps)
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` not set or invalid
    /// - `n_steps` not set or invalid
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
