//! Market parameters for a single European call valuation.
//!
//! The underlying follows risk-neutral GBM:
//! ```text
//! dS = r S dt + σ S dW
//! ```

use crate::error::ModelError;

/// Immutable market inputs for one valuation run.
///
/// Construct through [`MarketParams::new`], which rejects values that would
/// otherwise turn into NaN or degenerate paths downstream.
///
/// # Examples
///
/// ```rust
/// use pricer_models::MarketParams;
///
/// let params = MarketParams::new(255.78, 265.0, 1.0, 0.041, 0.28).unwrap();
/// assert_eq!(params.strike, 265.0);
///
/// let err = MarketParams::new(255.78, 265.0, 0.0, 0.041, 0.28).unwrap_err();
/// assert_eq!(err.name(), "maturity");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Current spot price (S₀).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity (T) in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
}

impl MarketParams {
    /// Creates validated market parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParameter`] naming the first field that is
    /// out of range; see [`validate`](Self::validate).
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, ModelError> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all fields.
    ///
    /// Fields are public, so values built with struct literal syntax must be
    /// validated before simulation.
    ///
    /// # Errors
    ///
    /// - `spot`, `strike`, `maturity`: must be positive and finite
    /// - `rate`: must be finite
    /// - `volatility`: must be non-negative and finite
    pub fn validate(&self) -> Result<(), ModelError> {
        positive("spot", self.spot)?;
        positive("strike", self.strike)?;
        positive("maturity", self.maturity)?;

        if !self.rate.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "rate",
                value: self.rate,
                reason: "must be finite",
            });
        }

        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(ModelError::InvalidParameter {
                name: "volatility",
                value: self.volatility,
                reason: "must be non-negative and finite",
            });
        }

        Ok(())
    }

    /// Risk-neutral discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Forward price S₀·e^(rT), the risk-neutral mean of S(T).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ModelError> {
    // Negated comparison so NaN is rejected too
    if !(value > 0.0 && value.is_finite()) {
        return Err(ModelError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn aapl() -> MarketParams {
        MarketParams::new(255.78, 265.0, 1.0, 0.041, 0.28).unwrap()
    }

    #[test]
    fn test_valid_params() {
        let params = aapl();
        assert_eq!(params.spot, 255.78);
        assert_eq!(params.volatility, 0.28);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_volatility_is_valid() {
        assert!(MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.0).is_ok());
    }

    #[test]
    fn test_negative_rate_is_valid() {
        assert!(MarketParams::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_each_invalid_field_is_named() {
        let cases = [
            (MarketParams::new(0.0, 100.0, 1.0, 0.05, 0.2), "spot"),
            (MarketParams::new(-5.0, 100.0, 1.0, 0.05, 0.2), "spot"),
            (MarketParams::new(100.0, 0.0, 1.0, 0.05, 0.2), "strike"),
            (MarketParams::new(100.0, 100.0, -1.0, 0.05, 0.2), "maturity"),
            (MarketParams::new(100.0, 100.0, 1.0, f64::NAN, 0.2), "rate"),
            (MarketParams::new(100.0, 100.0, 1.0, 0.05, -0.1), "volatility"),
            (MarketParams::new(f64::INFINITY, 100.0, 1.0, 0.05, 0.2), "spot"),
        ];

        for (result, expected) in cases {
            let err = result.unwrap_err();
            assert_eq!(err.name(), expected, "unexpected field in {}", err);
        }
    }

    #[test]
    fn test_struct_literal_validation() {
        let params = MarketParams {
            volatility: f64::NAN,
            ..aapl()
        };
        assert_eq!(params.validate().unwrap_err().name(), "volatility");
    }

    #[test]
    fn test_discount_factor_and_forward() {
        let params = aapl();
        assert_relative_eq!(params.discount_factor(), (-0.041_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(
            params.forward() * params.discount_factor(),
            params.spot,
            epsilon = 1e-12
        );
    }
}
