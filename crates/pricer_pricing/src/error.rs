//! Top-level error type for the pricing crate.

use pricer_models::ModelError;
use thiserror::Error;

use crate::mc::ConfigError;

/// Errors raised before or during a Monte Carlo valuation.
///
/// All failures are input validation failures: the computation itself is a
/// single in-memory batch with nothing that can fail transiently.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Invalid market parameters.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Invalid simulation controls.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PricingError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Model(err) => err.name(),
            Self::Config(err) => err.field(),
        }
    }
}
