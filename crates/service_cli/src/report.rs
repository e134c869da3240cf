//! Text report for a finished valuation.

use pricer_models::MarketParams;
use pricer_pricing::{PayoffStatistics, Valuation};
use std::fmt;

const RULE: &str = "--------------------------------------------------";

/// Plain-text simulation results.
#[derive(Clone, Debug)]
pub struct ValuationReport {
    pub params: MarketParams,
    pub statistics: PayoffStatistics,
    pub n_steps: usize,
    pub seed: u64,
    /// Closed-form price, omitted for zero volatility
    pub black_scholes: Option<f64>,
}

impl ValuationReport {
    pub fn new(params: &MarketParams, valuation: &Valuation, black_scholes: Option<f64>) -> Self {
        Self {
            params: *params,
            statistics: valuation.statistics.clone(),
            n_steps: valuation.paths.n_steps(),
            seed: valuation.seed,
            black_scholes,
        }
    }
}

impl fmt::Display for ValuationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;
        writeln!(f, "SIMULATION RESULTS REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Current Stock Price:   ${:.2}", self.params.spot)?;
        writeln!(f, "Target Strike Price:   ${:.2}", self.params.strike)?;
        writeln!(f, "Fair Option Price:     ${:.2}", stats.price)?;
        writeln!(
            f,
            "Standard Error:        ${:.4} (95% CI ±${:.2})",
            stats.std_error,
            stats.confidence_95()
        )?;
        if let Some(reference) = self.black_scholes {
            writeln!(f, "Black-Scholes Price:   ${:.2}", reference)?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Probability of Profit: {:.1}%", stats.prob_profit)?;
        writeln!(f, "Probability of Loss:   {:.1}%", stats.prob_loss)?;
        writeln!(f, "Average Final Price:   ${:.0}", stats.mean_terminal)?;
        writeln!(f, "{RULE}")?;
        write!(
            f,
            "Paths: {} | Steps: {} | Seed: {}",
            stats.n_paths, self.n_steps, self.seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(black_scholes: Option<f64>) -> ValuationReport {
        ValuationReport {
            params: MarketParams::new(255.78, 265.0, 1.0, 0.041, 0.28).unwrap(),
            statistics: PayoffStatistics {
                price: 29.0461,
                std_error: 0.4437,
                prob_profit: 45.23,
                prob_loss: 54.77,
                mean_terminal: 266.41,
                n_paths: 10_000,
            },
            n_steps: 252,
            seed: 42,
            black_scholes,
        }
    }

    #[test]
    fn test_report_formatting() {
        let text = report(Some(29.1175)).to_string();

        assert!(text.contains("Current Stock Price:   $255.78"));
        assert!(text.contains("Target Strike Price:   $265.00"));
        assert!(text.contains("Fair Option Price:     $29.05"));
        assert!(text.contains("Probability of Profit: 45.2%"));
        assert!(text.contains("Probability of Loss:   54.8%"));
        assert!(text.contains("Black-Scholes Price:   $29.12"));
        assert!(text.contains("Average Final Price:   $266"));
        assert!(text.ends_with("Paths: 10000 | Steps: 252 | Seed: 42"));
    }

    #[test]
    fn test_reference_omitted_without_volatility() {
        let text = report(None).to_string();
        assert!(!text.contains("Black-Scholes"));
        assert!(text.contains("Standard Error:        $0.4437"));
    }
}
