//! Error types for Monte Carlo simulation controls.

use thiserror::Error;

/// Configuration error for the Monte Carlo engine.
///
/// Raised at construction time, before any buffer is allocated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Path matrix `n_paths × (n_steps + 1)` too large to hold in memory.
    #[error("Path matrix of {n_paths} paths × {n_steps} steps exceeds 100_000_000 cells")]
    TooManyCells {
        /// Requested path count.
        n_paths: usize,
        /// Requested step count.
        n_steps: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidPathCount(_) => "n_paths",
            Self::InvalidStepCount(_) => "n_steps",
            Self::TooManyCells { .. } => "n_paths",
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));

        let err = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter 'n_paths': must be specified");
    }

    #[test]
    fn test_config_error_field() {
        assert_eq!(ConfigError::InvalidPathCount(0).field(), "n_paths");
        assert_eq!(ConfigError::InvalidStepCount(0).field(), "n_steps");
        assert_eq!(
            ConfigError::TooManyCells {
                n_paths: 1,
                n_steps: 1
            }
            .field(),
            "n_paths"
        );
    }
}
