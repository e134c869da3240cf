//! Monte Carlo pricing engine.
//!
//! [`MonteCarloPricer`] coordinates:
//! 1. Seed resolution (configured, or fresh entropy)
//! 2. Shock and path generation (via [`simulate_paths`])
//! 3. Payoff evaluation (via [`evaluate_call`])

use pricer_models::MarketParams;
use tracing::{debug, info};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::paths::{simulate_paths, PathMatrix};
use super::payoff::{evaluate_call, PayoffStatistics};
use crate::error::PricingError;

/// Output of one valuation run.
///
/// Keeps the full path matrix so callers can hand it to a chart renderer.
#[derive(Clone, Debug)]
pub struct Valuation {
    /// Price estimate and profit/loss probabilities.
    pub statistics: PayoffStatistics,
    /// Simulated price paths.
    pub paths: PathMatrix,
    /// Seed the shocks were drawn from; rerunning with it reproduces `paths`.
    pub seed: u64,
}

/// Monte Carlo pricing engine for European calls.
///
/// # Examples
///
/// ```rust
/// use pricer_models::MarketParams;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(1_000)
///     .n_steps(52)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = MarketParams::new(100.0, 105.0, 0.5, 0.03, 0.25).unwrap();
/// let valuation = pricer.price_european_call(&params).unwrap();
/// assert_eq!(valuation.seed, 42);
/// assert_eq!(valuation.paths.n_paths(), 1_000);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Prices a European call on the given market.
    ///
    /// # Errors
    ///
    /// [`PricingError::Model`] naming the invalid market field.
    pub fn price_european_call(&self, params: &MarketParams) -> Result<Valuation, PricingError> {
        params.validate()?;

        let seed = self.config.seed().unwrap_or_else(rand::random);
        let config = self.config.clone().with_seed(seed);

        info!(
            n_paths = config.n_paths(),
            n_steps = config.n_steps(),
            seed,
            "Running Monte Carlo valuation"
        );

        let paths = simulate_paths(params, &config)?;
        let statistics = evaluate_call(&paths.terminal_prices(), params)?;

        debug!(
            price = statistics.price,
            std_error = statistics.std_error,
            prob_profit = statistics.prob_profit,
            "Valuation complete"
        );

        Ok(Valuation {
            statistics,
            paths,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::analytical::black_scholes_call;

    fn pricer(n_paths: usize, n_steps: usize, seed: Option<u64>) -> MonteCarloPricer {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .maybe_seed(seed)
            .build()
            .unwrap();
        MonteCarloPricer::new(config).unwrap()
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let pricer = pricer(2_000, 10, Some(42));

        let a = pricer.price_european_call(&params).unwrap();
        let b = pricer.price_european_call(&params).unwrap();
        assert_eq!(a.statistics, b.statistics);
        assert_eq!(a.paths, b.paths);
    }

    #[test]
    fn test_unseeded_run_reports_seed_that_reproduces_it() {
        let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let first = pricer(500, 5, None).price_european_call(&params).unwrap();
        let replay = pricer(500, 5, Some(first.seed))
            .price_european_call(&params)
            .unwrap();

        assert_eq!(first.paths, replay.paths);
        assert_eq!(first.statistics, replay.statistics);
    }

    #[test]
    fn test_zero_volatility_price_is_discounted_forward_intrinsic() {
        let params = MarketParams::new(100.0, 95.0, 1.0, 0.05, 0.0).unwrap();
        let valuation = pricer(100, 12, Some(3))
            .price_european_call(&params)
            .unwrap();

        let expected = (params.forward() - params.strike).max(0.0) * params.discount_factor();
        assert!((valuation.statistics.price - expected).abs() < 1e-9);
        assert_eq!(valuation.statistics.prob_profit, 100.0);
        assert!(valuation.statistics.std_error < 1e-9);
    }

    #[test]
    fn test_price_close_to_black_scholes() {
        let params = MarketParams::new(100.0, 110.0, 1.0, 0.03, 0.25).unwrap();
        let stats = pricer(50_000, 4, Some(11))
            .price_european_call(&params)
            .unwrap()
            .statistics;

        let reference = black_scholes_call(&params);
        assert!(
            (stats.price - reference).abs() < 4.0 * stats.std_error,
            "MC={:.4} BS={:.4} se={:.4}",
            stats.price,
            reference,
            stats.std_error
        );
    }

    #[test]
    fn test_invalid_market_rejected_before_simulation() {
        let params = MarketParams {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: -0.3,
        };
        let err = pricer(10, 1, Some(1))
            .price_european_call(&params)
            .unwrap_err();
        assert_eq!(err.field(), "volatility");
    }
}
