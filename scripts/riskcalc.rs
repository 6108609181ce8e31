// scripts/riskcalc.rs
//! Command-line front end: price a European option or estimate historical VaR.
//!
//! ```text
//! riskcalc option --spot '$19' --strike 17 --days 168 --rate 0.5% --vol 30%
//! riskcalc var --prices ccyprices.csv --weights 153084.81,95891.51
//! ```

use anyhow::{Context, Result};
use bsm_hvar::data::load_price_table;
use bsm_hvar::math_utils::Timer;
use bsm_hvar::option::{OptionContract, OptionKind};
use bsm_hvar::output::{write_pnl_to_csv, write_summary_to_csv};
use bsm_hvar::var::{
    build_asset_pnl, build_pnl_vector, estimate_var, PortfolioWeights, RowOrder, VarCoefficients,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "riskcalc")]
#[command(about = "Black-Scholes-Merton option pricing and 1-day historical VaR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level, overridden by RUST_LOG
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put
    #[command(name = "option")]
    Price {
        /// Spot price of the underlying (a leading '$' is ignored)
        #[arg(long, value_parser = parse_amount)]
        spot: f64,

        /// Strike price (a leading '$' is ignored)
        #[arg(long, value_parser = parse_amount)]
        strike: f64,

        /// Calendar days to expiry
        #[arg(long, allow_negative_numbers = true)]
        days: i32,

        /// Risk-free rate in percent, e.g. 0.5 or 0.5%
        #[arg(long, value_parser = parse_percent, allow_negative_numbers = true)]
        rate: f64,

        /// Volatility in percent, e.g. 30 or 30%
        #[arg(long, value_parser = parse_percent)]
        vol: f64,
    },

    /// Estimate 1-day 99% historical VaR of a portfolio
    Var {
        /// CSV of daily prices, one column per asset
        #[arg(long)]
        prices: PathBuf,

        /// Position notionals, in the column order of the price file
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        weights: Vec<f64>,

        /// Weights on the three worst P&L days
        #[arg(long, env = "HVAR_COEFFICIENTS", default_value_t = VarCoefficients::default())]
        coefficients: VarCoefficients,

        /// Row direction of the price file
        #[arg(long, env = "HVAR_ROW_ORDER", default_value_t = RowOrder::default())]
        order: RowOrder,

        /// Write the portfolio P&L vector here
        #[arg(long)]
        pnl_out: Option<PathBuf>,

        /// Write a key,value summary here
        #[arg(long)]
        summary_out: Option<PathBuf>,
    },
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    raw.trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .map_err(|e| format!("'{}': {}", raw, e))
}

fn parse_percent(raw: &str) -> Result<f64, String> {
    raw.trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .map(|pct| pct / 100.0)
        .map_err(|e| format!("'{}': {}", raw, e))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Price {
            spot,
            strike,
            days,
            rate,
            vol,
        } => run_option(OptionContract::new(spot, strike, days, rate, vol)),
        Commands::Var {
            prices,
            weights,
            coefficients,
            order,
            pnl_out,
            summary_out,
        } => run_var(
            prices,
            weights,
            coefficients,
            order,
            pnl_out,
            summary_out,
        ),
    }
}

fn run_option(contract: OptionContract) -> Result<()> {
    tracing::info!(?contract, "pricing European option");

    for kind in [OptionKind::Call, OptionKind::Put] {
        let price = contract
            .price(kind)
            .with_context(|| format!("pricing {}", kind))?;
        println!("{} price: {:.4}", capitalize(kind), price);
    }
    println!("Call delta: {:.4}", contract.call_delta());
    println!("Put delta: {:.4}", contract.put_delta());
    Ok(())
}

fn run_var(
    prices: PathBuf,
    weights: Vec<f64>,
    coefficients: VarCoefficients,
    order: RowOrder,
    pnl_out: Option<PathBuf>,
    summary_out: Option<PathBuf>,
) -> Result<()> {
    let timer = Timer::new();

    let table = load_price_table(&prices, order)
        .with_context(|| format!("loading prices from {}", prices.display()))?;
    let weights = PortfolioWeights::new(weights)?;

    let pnl = build_pnl_vector(&table, &weights)?;
    let var = estimate_var(&pnl, &coefficients)?;

    println!(
        "1-day historical VaR of the portfolio with 99% confidence is estimated as: {:.2}",
        var
    );

    // Standalone figure per position, skipped quietly when history is too short
    let asset_pnl = build_asset_pnl(&table, &weights)?;
    for (name, column) in table.names().iter().zip(&asset_pnl) {
        match estimate_var(column, &coefficients) {
            Ok(asset_var) => println!("  {}: {:.2}", name, asset_var),
            Err(e) => tracing::debug!(asset = %name, "no standalone VaR: {e}"),
        }
    }

    if let Some(path) = pnl_out {
        write_pnl_to_csv(&path, &pnl)
            .with_context(|| format!("writing P&L vector to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote P&L vector");
    }

    if let Some(path) = summary_out {
        let summary = [
            ("prices", prices.display().to_string()),
            ("rows", table.rows().to_string()),
            ("assets", table.assets().to_string()),
            ("row_order", order.to_string()),
            ("gross_notional", weights.gross().to_string()),
            ("coefficients", coefficients.to_string()),
            ("var_1d_99", var.to_string()),
        ];
        write_summary_to_csv(&path, &summary)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote summary");
    }

    tracing::info!(elapsed_ms = timer.elapsed_ms(), "VaR run complete");
    Ok(())
}

fn capitalize(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::Call => "Call",
        OptionKind::Put => "Put",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert!((parse_percent("0.5%").unwrap() - 0.005).abs() < 1e-15);
        assert!((parse_percent("30").unwrap() - 0.3).abs() < 1e-15);
        assert!((parse_percent(" 30% ").unwrap() - 0.3).abs() < 1e-15);
        assert!(parse_percent("thirty%").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$19").unwrap(), 19.0);
        assert_eq!(parse_amount(" 17 ").unwrap(), 17.0);
        assert_eq!(parse_amount("$153084.81").unwrap(), 153084.81);
        assert!(parse_amount("19 USD").is_err());
        assert!(parse_amount("").is_err());
    }
}
