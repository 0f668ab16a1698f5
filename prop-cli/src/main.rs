use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use prop_core::{AnalysisError, AnalysisResult, Analyzer, Portfolio, PropertyInput};
use prop_core::calculations::common::format_amount;
use prop_data::{export, loader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Multi-property investment analyzer.
///
/// Loads a CSV of property records, computes financing cost, cash flow,
/// ROI, flip profit, a rent estimate and an investment recommendation per
/// property, and prints a comparison report. Properties that fail to
/// analyze are reported individually and never abort the run.
#[derive(Debug, Parser)]
#[command(name = "prop-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the CSV file containing property records.
    #[arg(short, long)]
    input: PathBuf,

    /// Optional path to write the analysis results as CSV.
    /// Only successfully analyzed properties are exported.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── report printing ─────────────────────────────────────────────────────────

fn print_report(result: &AnalysisResult) {
    println!("### {} ({})", result.name, result.zip_code);
    println!("Address: {}", result.address);
    if let Some(url) = &result.image_url {
        println!("Image: {url}");
    }
    println!(
        "Monthly Cost: ${} | Net Rent: ${} | Cash Flow: ${}",
        format_amount(result.monthly_cost),
        format_amount(result.net_monthly_rent),
        format_amount(result.monthly_cash_flow),
    );
    println!(
        "Annual Profit: ${} | ROI: {}% | Flip Profit: ${}",
        format_amount(result.annual_cash_flow),
        format_amount(result.roi_percent),
        format_amount(result.flip_profit),
    );
    println!(
        "Rent Range: ${} - ${}",
        format_amount(result.rent_range_low),
        format_amount(result.rent_range_high),
    );
    println!("Investment Type: {}", result.investment_type);
    println!("Summary: {}", result.summary);
    println!("---");
}

fn print_failure(property: &PropertyInput, error: &AnalysisError) {
    println!("### {} ({})", property.name, property.zip_code);
    println!("Failed to analyze: {error}");
    println!("---");
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let properties = loader::load_from_file(&cli.input)
        .with_context(|| format!("failed to load properties from {}", cli.input.display()))?;

    if properties.is_empty() {
        println!("No properties added yet. Add rows to the input CSV and run again.");
        return Ok(());
    }

    debug!(count = properties.len(), "loaded property records");

    let portfolio: Portfolio = properties.into_iter().collect();
    let outcomes = Analyzer::new().analyze_portfolio(&portfolio);

    println!("Property Comparison");
    println!("===================");
    for (property, outcome) in portfolio.iter().zip(&outcomes) {
        match outcome {
            Ok(result) => print_report(result),
            Err(error) => print_failure(property, error),
        }
    }

    if let Some(path) = &cli.output {
        let results: Vec<AnalysisResult> = outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().ok())
            .cloned()
            .collect();
        let skipped = outcomes.len() - results.len();
        if skipped > 0 {
            warn!(skipped, "properties that failed to analyze are not exported");
        }

        export::write_to_file(path, &results)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        println!("Wrote {} result row(s) to {}", results.len(), path.display());
    }

    Ok(())
}
