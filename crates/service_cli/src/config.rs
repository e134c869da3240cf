//! Valuation configuration.
//!
//! The compiled-in scenario is a one-year AAPL call. A TOML file passed with
//! `--config` replaces any subset of it, and command-line flags are applied
//! last:
//!
//! ```toml
//! [market]
//! spot = 255.78
//! volatility = 0.30
//!
//! [simulation]
//! n_paths = 50000
//! seed = 7
//!
//! [chart]
//! valuation_date = "2026-02-17"
//! ```

use chrono::NaiveDate;
use pricer_models::MarketParams;
use pricer_pricing::mc::MonteCarloConfig;
use pricer_pricing::PricingError;
use serde::Deserialize;
use std::path::Path;

use crate::chart::{DEFAULT_HISTOGRAM_BINS, DEFAULT_SAMPLE_PATHS};

/// Market inputs.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Current stock price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Annualised volatility
    pub volatility: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 255.78,
            strike: 265.0,
            maturity: 1.0,
            rate: 0.041,
            volatility: 0.28,
        }
    }
}

/// Simulation controls.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of simulated paths
    pub n_paths: usize,
    /// Time steps per path (252 = daily over one year)
    pub n_steps: usize,
    /// Fixed seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_paths: 10_000,
            n_steps: 252,
            seed: None,
        }
    }
}

/// Chart data export settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// First date of the calendar axis; today when absent
    pub valuation_date: Option<NaiveDate>,
    /// Number of paths exported for plotting
    pub sample_paths: usize,
    /// Number of terminal-price histogram bins
    pub histogram_bins: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            valuation_date: None,
            sample_paths: DEFAULT_SAMPLE_PATHS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

/// Full valuation configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ValuationConfig {
    /// Market inputs
    pub market: MarketConfig,
    /// Simulation controls
    pub simulation: SimulationConfig,
    /// Chart export settings
    pub chart: ChartConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub maturity: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub n_paths: Option<usize>,
    pub n_steps: Option<usize>,
    pub seed: Option<u64>,
    pub valuation_date: Option<NaiveDate>,
}

impl ValuationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the settings the library does not check itself
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.chart.sample_paths == 0 {
            errors.push("chart.sample_paths must be greater than 0".to_string());
        }
        if self.chart.histogram_bins == 0 {
            errors.push("chart.histogram_bins must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Applies command-line overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        let market = &mut self.market;
        market.spot = overrides.spot.unwrap_or(market.spot);
        market.strike = overrides.strike.unwrap_or(market.strike);
        market.maturity = overrides.maturity.unwrap_or(market.maturity);
        market.rate = overrides.rate.unwrap_or(market.rate);
        market.volatility = overrides.volatility.unwrap_or(market.volatility);

        let simulation = &mut self.simulation;
        simulation.n_paths = overrides.n_paths.unwrap_or(simulation.n_paths);
        simulation.n_steps = overrides.n_steps.unwrap_or(simulation.n_steps);
        simulation.seed = overrides.seed.or(simulation.seed);

        self.chart.valuation_date = overrides.valuation_date.or(self.chart.valuation_date);
        self
    }

    /// Validated market parameters
    pub fn market_params(&self) -> Result<MarketParams, PricingError> {
        let m = &self.market;
        Ok(MarketParams::new(
            m.spot,
            m.strike,
            m.maturity,
            m.rate,
            m.volatility,
        )?)
    }

    /// Validated Monte Carlo configuration
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, PricingError> {
        Ok(MonteCarloConfig::builder()
            .n_paths(self.simulation.n_paths)
            .n_steps(self.simulation.n_steps)
            .maybe_seed(self.simulation.seed)
            .build()?)
    }
}

/// Configuration error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("Failed to read config file: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// Out-of-range settings
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_is_reference_scenario() {
        let config = ValuationConfig::default();
        let params = config.market_params().unwrap();
        assert_eq!(params.spot, 255.78);
        assert_eq!(params.strike, 265.0);
        assert_eq!(params.maturity, 1.0);
        assert_eq!(params.rate, 0.041);
        assert_eq!(params.volatility, 0.28);

        let mc = config.monte_carlo_config().unwrap();
        assert_eq!(mc.n_paths(), 10_000);
        assert_eq!(mc.n_steps(), 252);
        assert_eq!(mc.seed(), None);
        assert_eq!(config.chart.histogram_bins, 70);
        assert_eq!(config.chart.sample_paths, 50);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
            [market]
            volatility = 0.35

            [simulation]
            seed = 7

            [chart]
            valuation_date = "2026-02-17"
            "#,
        );

        let config = ValuationConfig::load(file.path()).unwrap();
        assert_eq!(config.market.volatility, 0.35);
        assert_eq!(config.market.spot, 255.78);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.n_paths, 10_000);
        assert_eq!(
            config.chart.valuation_date,
            NaiveDate::from_ymd_opt(2026, 2, 17)
        );
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Overrides {
            strike: Some(250.0),
            n_paths: Some(500),
            seed: Some(99),
            ..Overrides::default()
        };
        let config = ValuationConfig {
            simulation: SimulationConfig {
                seed: Some(1),
                ..SimulationConfig::default()
            },
            ..ValuationConfig::default()
        }
        .with_overrides(&overrides);

        assert_eq!(config.market.strike, 250.0);
        assert_eq!(config.market.spot, 255.78);
        assert_eq!(config.simulation.n_paths, 500);
        assert_eq!(config.simulation.n_steps, 252);
        assert_eq!(config.simulation.seed, Some(99));
    }

    #[test]
    fn test_invalid_values_name_field() {
        let config = ValuationConfig::default().with_overrides(&Overrides {
            maturity: Some(-1.0),
            ..Overrides::default()
        });
        assert_eq!(config.market_params().unwrap_err().field(), "maturity");

        let config = ValuationConfig::default().with_overrides(&Overrides {
            n_steps: Some(0),
            ..Overrides::default()
        });
        assert_eq!(config.monte_carlo_config().unwrap_err().field(), "n_steps");
    }

    #[test]
    fn test_default_validates() {
        assert!(ValuationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_chart_sizes_rejected() {
        let file = write_config("[chart]\nhistogram_bins = 0\nsample_paths = 0\n");
        let config = ValuationConfig::load(file.path()).unwrap();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("histogram_bins")));
                assert!(errors.iter().any(|e| e.contains("sample_paths")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("[market]\nsigma = 0.3\n");
        let err = ValuationConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ValuationConfig::load(Path::new("/nonexistent/mcval.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
