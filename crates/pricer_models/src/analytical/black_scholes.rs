//! Black-Scholes closed form for European calls.
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With σ = 0 the terminal price is the forward S·e^(rT) with certainty, so
//! the price collapses to max(S·e^(rT) - K, 0)·e^(-rT).

use num_traits::Float;

use super::distributions::{lit, norm_cdf};
use crate::error::ModelError;
use crate::market::MarketParams;

/// Black-Scholes model for European call pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let price = bs.price_call(100.0, 1.0);
/// assert!((price - 10.4506).abs() < 1e-3);
///
/// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `spot` must be positive and finite
    /// - `rate` must be finite
    /// - `volatility` must be non-negative and finite (zero selects the
    ///   deterministic limit)
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ModelError> {
        let zero = T::zero();

        if !(spot > zero && spot.is_finite()) {
            return Err(ModelError::InvalidParameter {
                name: "spot",
                value: spot.to_f64().unwrap_or(f64::NAN),
                reason: "must be positive and finite",
            });
        }

        if !rate.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
                reason: "must be finite",
            });
        }

        if !(volatility >= zero && volatility.is_finite()) {
            return Err(ModelError::InvalidParameter {
                name: "volatility",
                value: volatility.to_f64().unwrap_or(f64::NAN),
                reason: "must be non-negative and finite",
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful when σ√T > 0.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = lit::<T>(0.5);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price.
    ///
    /// Falls back to the discounted intrinsic value on the forward when
    /// σ√T vanishes.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let discount = (-self.rate * expiry).exp();

        if self.volatility * expiry.sqrt() <= lit::<T>(1e-12) {
            let forward = self.spot * (self.rate * expiry).exp();
            let intrinsic = forward - strike;
            return if intrinsic > zero {
                intrinsic * discount
            } else {
                zero
            };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Risk-neutral probability that the call finishes in the money, N(d₂).
    #[inline]
    pub fn prob_in_the_money(&self, strike: T, expiry: T) -> T {
        if self.volatility * expiry.sqrt() <= lit::<T>(1e-12) {
            let forward = self.spot * (self.rate * expiry).exp();
            return if forward > strike { T::one() } else { T::zero() };
        }
        norm_cdf(self.d2(strike, expiry))
    }
}

/// Black-Scholes call price for a validated [`MarketParams`].
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_call;
/// use pricer_models::MarketParams;
///
/// let params = MarketParams::new(255.78, 265.0, 1.0, 0.041, 0.28).unwrap();
/// let price = black_scholes_call(&params);
/// assert!((price - 29.117).abs() < 1e-2);
/// ```
pub fn black_scholes_call(params: &MarketParams) -> f64 {
    BlackScholes {
        spot: params.spot,
        rate: params.rate,
        volatility: params.volatility,
    }
    .price_call(params.strike, params.maturity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_atm_reference_price() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        // Hull, reference value 10.4506
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.450583572185565, epsilon = 1e-4);
    }

    #[test]
    fn test_scenario_reference_price() {
        let params = MarketParams::new(255.78, 265.0, 1.0, 0.041, 0.28).unwrap();
        assert_relative_eq!(black_scholes_call(&params), 29.11746, epsilon = 1e-3);

        let bs = BlackScholes::new(255.78, 0.041, 0.28).unwrap();
        assert_relative_eq!(bs.prob_in_the_money(265.0, 1.0), 0.452224, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_volatility_limit() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();

        // Forward 105.127 above strike: discounted intrinsic on the forward
        let expected = (100.0 * 0.05_f64.exp() - 100.0) * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call(100.0, 1.0), expected, epsilon = 1e-12);
        assert_eq!(bs.prob_in_the_money(100.0, 1.0), 1.0);

        // Forward below strike: worthless
        assert_eq!(bs.price_call(110.0, 1.0), 0.0);
        assert_eq!(bs.prob_in_the_money(110.0, 1.0), 0.0);
    }

    #[test]
    fn test_price_bounds() {
        // max(S - K·e^(-rT), 0) <= C <= S
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.3).unwrap();
        for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let price = bs.price_call(strike, 2.0);
            let lower = (100.0 - strike * (-0.1_f64).exp()).max(0.0);
            assert!(price >= lower - 1e-4, "K={} price={}", strike, price);
            assert!(price <= 100.0, "K={} price={}", strike, price);
        }
    }

    #[test]
    fn test_price_increases_with_volatility() {
        let low = BlackScholes::new(100.0_f64, 0.05, 0.1).unwrap();
        let high = BlackScholes::new(100.0_f64, 0.05, 0.4).unwrap();
        assert!(high.price_call(100.0, 1.0) > low.price_call(100.0, 1.0));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            BlackScholes::new(0.0_f64, 0.05, 0.2).unwrap_err().name(),
            "spot"
        );
        assert_eq!(
            BlackScholes::new(100.0_f64, 0.05, -0.2).unwrap_err().name(),
            "volatility"
        );
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(
            BlackScholes::new(f64::INFINITY, 0.05, 0.2).unwrap_err().name(),
            "spot"
        );
        assert_eq!(
            BlackScholes::new(100.0_f64, f64::NAN, 0.2).unwrap_err().name(),
            "rate"
        );
        assert_eq!(
            BlackScholes::new(100.0_f64, f64::NEG_INFINITY, 0.2)
                .unwrap_err()
                .name(),
            "rate"
        );
        assert_eq!(
            BlackScholes::new(100.0_f64, 0.05, f64::INFINITY).unwrap_err().name(),
            "volatility"
        );
    }

    #[test]
    fn test_d2_relationship() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d1 - d2, 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_call_within_no_arbitrage_bounds(
            spot in 1.0..500.0_f64,
            strike in 1.0..500.0_f64,
            expiry in 0.01..5.0_f64,
            rate in -0.02..0.1_f64,
            volatility in 0.0..1.0_f64,
        ) {
            let bs = BlackScholes::new(spot, rate, volatility).unwrap();
            let price = bs.price_call(strike, expiry);
            let lower = (spot - strike * (-rate * expiry).exp()).max(0.0);

            prop_assert!(price >= lower - 1e-3);
            prop_assert!(price <= spot + 1e-3);

            let prob = bs.prob_in_the_money(strike, expiry);
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&prob));
        }
    }
}
