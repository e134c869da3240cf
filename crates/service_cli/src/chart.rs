//! Chart data for an external renderer.
//!
//! Nothing is drawn here. [`ChartData`] carries what a two-panel chart
//! needs: sample paths on a calendar axis with the strike line, and the
//! terminal-price histogram with each bin tagged as profit or loss.

use chrono::{Duration, NaiveDate};
use pricer_models::MarketParams;
use pricer_pricing::Valuation;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;

/// Paths exported for the path panel.
pub const DEFAULT_SAMPLE_PATHS: usize = 50;

/// Terminal-price histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 70;

/// Trading days mapped onto 365 calendar days.
const TRADING_DAYS_PER_YEAR: usize = 252;

/// Exact GBM step, for the formula annotation.
pub const GBM_STEP_FORMULA: &str =
    "S[t] = S[t-1] * exp((r - 0.5 * sigma^2) * dt + sigma * sqrt(dt) * Z)";

/// Side of the strike a histogram bin falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Left edge at or above the strike
    Profit,
    /// Left edge below the strike
    Loss,
}

/// One histogram bin over `[left, right)`; the last bin is closed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
    /// `count / (N * width)`
    pub density: f64,
    pub region: Region,
}

/// Density-normalised histogram of terminal prices.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins `values` into `n_bins` equal-width bins spanning `[min, max]`.
    ///
    /// When every value is equal the range is widened to `[v - 0.5, v + 0.5]`.
    pub fn build(values: &[f64], n_bins: usize, strike: f64) -> Self {
        if values.is_empty() || n_bins == 0 {
            return Self { bins: Vec::new() };
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let nb = n_bins as f64;
        let width = (hi - lo) / nb;
        let mut counts = vec![0usize; n_bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(n_bins - 1);
            counts[idx] += 1;
        }

        let n = values.len() as f64;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let left = lo + (hi - lo) * (i as f64 / nb);
                let right = lo + (hi - lo) * ((i + 1) as f64 / nb);
                HistogramBin {
                    left,
                    right,
                    count,
                    density: count as f64 / (n * width),
                    region: if left >= strike {
                        Region::Profit
                    } else {
                        Region::Loss
                    },
                }
            })
            .collect();

        Self { bins }
    }

    /// Bins in ascending order.
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Sum of density × width; 1 for a non-empty histogram.
    pub fn area(&self) -> f64 {
        self.bins
            .iter()
            .map(|b| b.density * (b.right - b.left))
            .sum()
    }
}

/// Calendar axis for `n_steps` trading-day steps: `n_steps + 1` dates.
pub fn calendar_axis(start: NaiveDate, n_steps: usize) -> Vec<NaiveDate> {
    (0..=n_steps)
        .map(|i| start + Duration::days((i * 365 / TRADING_DAYS_PER_YEAR) as i64))
        .collect()
}

/// Everything the renderer needs for one valuation.
#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub market: MarketParams,
    pub seed: u64,
    pub dates: Vec<NaiveDate>,
    pub sample_paths: Vec<Vec<f64>>,
    pub histogram: Histogram,
    pub mean_terminal: f64,
    pub formula: &'static str,
}

impl ChartData {
    /// Assembles chart data from a finished valuation.
    pub fn build(
        params: &MarketParams,
        valuation: &Valuation,
        start: NaiveDate,
        sample_paths: usize,
        histogram_bins: usize,
    ) -> Self {
        let paths = &valuation.paths;
        let terminals = paths.terminal_prices();

        Self {
            market: *params,
            seed: valuation.seed,
            dates: calendar_axis(start, paths.n_steps()),
            sample_paths: paths.paths().take(sample_paths).map(<[f64]>::to_vec).collect(),
            histogram: Histogram::build(&terminals, histogram_bins, params.strike),
            mean_terminal: valuation.statistics.mean_terminal,
            formula: GBM_STEP_FORMULA,
        }
    }

    /// Writes pretty-printed JSON to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
