//! Sorting Complexity
//!
//! Compares two hand-written quadratic sorts against the standard library sort:
//! - **Naive Sort**: O(n²) - repeated minimum extraction into a new vector
//! - **Bubble Sort**: O(n²), O(n) on sorted input - in-place adjacent swaps
//!
//! Each sort is timed on random inputs of increasing size, model constants for
//! O(n²) and O(n log n) are fitted to the timings, and everything is drawn on a
//! log-log chart.

mod bubble_sort;
mod complexity;
mod harness;
mod naive_sort;
mod plot;
mod reference_sort;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use complexity::ComplexityModel;
use harness::BenchmarkConfig;
use report::BenchmarkReport;

const CHART_FILE: &str = "sorting_complexity.svg";
const REPORT_FILE: &str = "sorting_complexity.md";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Optional output directory, defaults to the working directory
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    harness::self_check();

    let config = BenchmarkConfig::default();
    info!(
        "Benchmarking {} sizes with values in {}..={}",
        config.scales.len(),
        config.value_range.start(),
        config.value_range.end()
    );

    let mut rng = rand::thread_rng();
    let measurements = harness::run(&config, &mut rng);

    println!();
    report::print_summary(&measurements);
    println!();

    let models = vec![
        ComplexityModel::Quadratic.fit(&measurements.scales, &measurements.naive),
        ComplexityModel::Linearithmic.fit(&measurements.scales, &measurements.reference),
    ];
    for fit in &models {
        info!("Fitted {} constant: {:.3e} s", fit.model.label(), fit.constant);
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let report = BenchmarkReport::new(measurements, models);
    let report_path = output_dir.join(REPORT_FILE);
    report
        .save_markdown(&report_path)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;
    info!("Report written to {}", report_path.display());

    plot::render(&output_dir.join(CHART_FILE), &report.measurements, &report.models)?;

    Ok(())
}
