//! Error types for market parameter validation.

use thiserror::Error;

/// Model-level validation errors.
///
/// Every variant names the field that failed so callers can report it
/// without inspecting the value themselves.
///
/// # Examples
/// ```
/// use pricer_models::ModelError;
///
/// let err = ModelError::InvalidParameter {
///     name: "spot",
///     value: -1.0,
///     reason: "must be positive and finite",
/// };
/// assert_eq!(err.name(), "spot");
/// assert!(err.to_string().contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// A market parameter is outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Field name (`spot`, `strike`, `maturity`, `rate`, `volatility`).
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Constraint the value violated.
        reason: &'static str,
    },
}

impl ModelError {
    /// Returns the name of the offending field.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}
