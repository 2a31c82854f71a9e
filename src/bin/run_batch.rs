//! Run a CSV of rent-vs-buy scenarios in parallel
//!
//! Usage: run_batch <scenarios.csv> [output.csv]
//!
//! Writes one summary row per scenario. Failed scenarios are reported on
//! stderr and skipped.

use anyhow::{Context, Result};
use mortgage_engine::inputs::load_scenarios;
use mortgage_engine::ScenarioRunner;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRow {
    scenario: usize,
    home_price: f64,
    monthly_rent: f64,
    buy_monthly_cost: f64,
    rent_monthly_cost: f64,
    five_year_savings: f64,
    ten_year_savings: f64,
    break_even_year: u32,
    decision: String,
    confidence: u8,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let input_path = args.get(1).map(String::as_str).unwrap_or("data/scenarios.csv");
    let output_path = args.get(2).map(String::as_str).unwrap_or("batch_results.csv");

    let start = Instant::now();
    let scenarios = load_scenarios(input_path)
        .with_context(|| format!("loading scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::from_csv().unwrap_or_else(|e| {
        log::warn!("using standard assumptions: {}", e);
        ScenarioRunner::new()
    });

    let run_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Ran {} scenarios in {:?}", results.len(), run_start.elapsed());

    let mut wtr = csv::Writer::from_path(Path::new(output_path))
        .with_context(|| format!("creating {}", output_path))?;
    let mut failed = 0;

    for (i, (input, result)) in scenarios.iter().zip(results).enumerate() {
        match result {
            Ok(result) => wtr.serialize(SummaryRow {
                scenario: i + 1,
                home_price: input.home_price,
                monthly_rent: input.monthly_rent,
                buy_monthly_cost: result.buying.total_monthly_cost,
                rent_monthly_cost: result.renting.total_monthly_cost,
                five_year_savings: result.comparison.five_year_savings,
                ten_year_savings: result.comparison.ten_year_savings,
                break_even_year: result.break_even_point,
                decision: result.recommendation.decision.to_string(),
                confidence: result.recommendation.confidence,
            })?,
            Err(e) => {
                failed += 1;
                eprintln!("scenario {}: {}", i + 1, e);
            }
        }
    }
    wtr.flush()?;

    println!(
        "Wrote {} rows to {} ({} failed)",
        scenarios.len() - failed,
        output_path,
        failed
    );
    Ok(())
}
