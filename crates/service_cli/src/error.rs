//! Error types for the mcval CLI.

use pricer_pricing::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid market or simulation input, or a failed valuation
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Chart data serialisation failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
