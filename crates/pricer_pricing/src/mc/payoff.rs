//! European call payoff evaluation.
//!
//! Pure functions of the terminal-price vector and market parameters:
//!
//! ```text
//! payoff_i      = max(S_T,i - K, 0)
//! price         = mean(payoff) × exp(-rT)
//! P(profit) [%] = #{S_T,i > K} / N × 100
//! P(loss)   [%] = 100 - P(profit)
//! ```

use pricer_models::MarketParams;

use super::error::ConfigError;

/// Call payoff max(S_T - K, 0).
#[inline]
pub fn call_payoff(terminal: f64, strike: f64) -> f64 {
    (terminal - strike).max(0.0)
}

/// Aggregated Monte Carlo estimate for a European call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PayoffStatistics {
    /// Discounted mean payoff, the fair-value estimate.
    pub price: f64,
    /// Standard error of `price`.
    pub std_error: f64,
    /// Percentage of paths finishing strictly above the strike.
    pub prob_profit: f64,
    /// `100 - prob_profit`.
    pub prob_loss: f64,
    /// Mean terminal price across paths.
    pub mean_terminal: f64,
    /// Number of paths the estimate was computed from.
    pub n_paths: usize,
}

impl PayoffStatistics {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Evaluates call payoffs over terminal prices and discounts their mean.
///
/// The standard error uses the N-1 sample variance; it is zero for a single
/// path.
///
/// # Errors
///
/// `ConfigError::InvalidPathCount(0)` for an empty terminal vector.
///
/// # Examples
///
/// ```rust
/// use pricer_models::MarketParams;
/// use pricer_pricing::mc::evaluate_call;
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.0, 0.2).unwrap();
/// let stats = evaluate_call(&[90.0, 110.0, 130.0, 100.0], &params).unwrap();
///
/// assert_eq!(stats.price, 10.0);
/// assert_eq!(stats.prob_profit, 50.0);
/// assert_eq!(stats.prob_loss, 50.0);
/// ```
pub fn evaluate_call(
    terminal_prices: &[f64],
    params: &MarketParams,
) -> Result<PayoffStatistics, ConfigError> {
    let n_paths = terminal_prices.len();
    if n_paths == 0 {
        return Err(ConfigError::InvalidPathCount(0));
    }
    let n = n_paths as f64;
    let strike = params.strike;
    let discount_factor = params.discount_factor();

    let mut payoff_sum = 0.0;
    let mut terminal_sum = 0.0;
    let mut in_the_money = 0usize;
    for &terminal in terminal_prices {
        payoff_sum += call_payoff(terminal, strike);
        terminal_sum += terminal;
        if terminal > strike {
            in_the_money += 1;
        }
    }
    let mean_payoff = payoff_sum / n;

    let std_error = if n_paths > 1 {
        let variance = terminal_prices
            .iter()
            .map(|&terminal| (call_payoff(terminal, strike) - mean_payoff).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        variance.sqrt() / n.sqrt()
    } else {
        0.0
    };

    let prob_profit = in_the_money as f64 / n * 100.0;

    Ok(PayoffStatistics {
        price: mean_payoff * discount_factor,
        std_error: std_error * discount_factor,
        prob_profit,
        prob_loss: 100.0 - prob_profit,
        mean_terminal: terminal_sum / n,
        n_paths,
    })
}
