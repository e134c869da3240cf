//! mcval - Monte Carlo valuation of a European call
//!
//! Simulates risk-neutral GBM paths for the underlying, prices the call as
//! the discounted mean payoff, and reports the chance of finishing in the
//! money. Runs with no arguments on a compiled-in one-year AAPL scenario.
//!
//! # Usage
//!
//! ```text
//! mcval
//! mcval --volatility 0.35 --paths 50000 --seed 7
//! mcval --config scenario.toml --chart-out chart.json
//! ```
//!
//! The report goes to stdout; logs go to stderr, filtered by `RUST_LOG`.

use chrono::{Local, NaiveDate};
use clap::Parser;
use pricer_models::analytical::black_scholes_call;
use pricer_pricing::mc::MonteCarloPricer;
use pricer_pricing::PricingError;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod chart;
mod config;
mod error;
mod report;

use error::Result;

use chart::ChartData;
use config::{Overrides, ValuationConfig};
use report::ValuationReport;

/// Monte Carlo European call valuation under Geometric Brownian Motion
#[derive(Parser, Debug)]
#[command(name = "mcval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current stock price
    #[arg(long, allow_negative_numbers = true)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long, allow_negative_numbers = true)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long, allow_negative_numbers = true)]
    maturity: Option<f64>,

    /// Risk-free rate (0.041 = 4.1%)
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Annualised volatility (0.28 = 28%)
    #[arg(long, allow_negative_numbers = true)]
    volatility: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    paths: Option<usize>,

    /// Time steps per path
    #[arg(short = 'm', long)]
    steps: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// First date of the chart calendar axis (YYYY-MM-DD)
    #[arg(long)]
    valuation_date: Option<NaiveDate>,

    /// Write chart data as JSON to this file
    #[arg(long)]
    chart_out: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            spot: self.spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility: self.volatility,
            n_paths: self.paths,
            n_steps: self.steps,
            seed: self.seed,
            valuation_date: self.valuation_date,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins unless --verbose is given
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            ValuationConfig::load(path)?
        }
        None => ValuationConfig::default(),
    }
    .with_overrides(&cli.overrides());
    config.validate()?;
    debug!(?config, "Effective configuration");

    let params = config.market_params()?;
    let pricer = MonteCarloPricer::new(config.monte_carlo_config()?).map_err(PricingError::from)?;
    let valuation = pricer.price_european_call(&params)?;

    let black_scholes = (params.volatility > 0.0).then(|| black_scholes_call(&params));
    println!("{}", ValuationReport::new(&params, &valuation, black_scholes));

    if let Some(path) = &cli.chart_out {
        let start = config
            .chart
            .valuation_date
            .unwrap_or_else(|| Local::now().date_naive());
        let chart = ChartData::build(
            &params,
            &valuation,
            start,
            config.chart.sample_paths,
            config.chart.histogram_bins,
        );
        debug!(
            bins = chart.histogram.bins().len(),
            area = chart.histogram.area(),
            "Terminal price histogram"
        );
        chart.write_json(path)?;
        info!(path = %path.display(), "Chart data written");
    }

    Ok(())
}
