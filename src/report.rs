//! Benchmark Report Generator
//!
//! Formats one benchmark run as a console summary table and as a Markdown
//! document saved next to the chart.

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use crate::complexity::FittedModel;
use crate::harness::{Algorithm, Measurements};

/// A complete benchmark run ready to be written out
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Timestamp of when the benchmark was run (ISO 8601 format)
    pub timestamp: String,
    pub measurements: Measurements,
    pub models: Vec<FittedModel>,
}

impl BenchmarkReport {
    pub fn new(measurements: Measurements, models: Vec<FittedModel>) -> Self {
        BenchmarkReport {
            timestamp: chrono_lite_timestamp(),
            measurements,
            models,
        }
    }

    /// Generate the report as Markdown
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Sorting Complexity Report").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", self.timestamp).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Measured Runtime").unwrap();
        writeln!(output).unwrap();
        write!(output, "| Size |").unwrap();
        for algorithm in Algorithm::ALL {
            write!(output, " {} (ms) |", algorithm.label()).unwrap();
        }
        writeln!(output).unwrap();
        writeln!(output, "|------|{}", "------|".repeat(Algorithm::ALL.len())).unwrap();

        for (index, &scale) in self.measurements.scales.iter().enumerate() {
            write!(output, "| {} |", format_size(scale)).unwrap();
            for algorithm in Algorithm::ALL {
                let cell = self
                    .measurements
                    .durations(algorithm)
                    .get(index)
                    .map(|seconds| format!("{:.3}", seconds * 1000.0))
                    .unwrap_or_else(|| "N/A".to_string());
                write!(output, " {} |", cell).unwrap();
            }
            writeln!(output).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## Fitted Model Constants").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Model | Constant (s) |").unwrap();
        writeln!(output, "|-------|--------------|").unwrap();
        for fit in &self.models {
            writeln!(output, "| {} | {:.3e} |", fit.model.label(), fit.constant).unwrap();
        }

        writeln!(output).unwrap();
        writeln!(output, "---").unwrap();
        writeln!(output, "*Report generated by sorting-complexity*").unwrap();

        output
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown())
    }
}

/// Print the per-scale results table to stdout
pub fn print_summary(measurements: &Measurements) {
    println!(
        "{:>8} | {:>15} | {:>15} | {:>15}",
        "Size", "Reference (ms)", "Naive (ms)", "Bubble (ms)"
    );
    println!("{:-<8}-+-{:-<15}-+-{:-<15}-+-{:-<15}", "", "", "", "");

    let rows = measurements
        .scales
        .iter()
        .zip(&measurements.reference)
        .zip(&measurements.naive)
        .zip(&measurements.bubble);
    for (((scale, reference), naive), bubble) in rows {
        println!(
            "{:>8} | {:>15.4} | {:>15.4} | {:>15.4}",
            scale,
            reference * 1000.0,
            naive * 1000.0,
            bubble * 1000.0
        );
    }
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

/// Generate a UTC timestamp without a date library
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let days_since_epoch = secs / 86400;
    let time_of_day = secs % 86400;
    let (year, month, day) = civil_from_days(days_since_epoch);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Convert days since 1970-01-01 into a (year, month, day) date
fn civil_from_days(days_since_epoch: u64) -> (u64, u64, u64) {
    let mut year = 1970;
    let mut remaining_days = days_since_epoch;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let february = if is_leap_year(year) { 29 } else { 28 };
    let days_in_months = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 1;
    for days in days_in_months {
        if remaining_days < days {
            break;
        }
        remaining_days -= days;
        month += 1;
    }

    (year, month, remaining_days + 1)
}

fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::ComplexityModel;

    fn sample_report() -> BenchmarkReport {
        let measurements = Measurements {
            scales: vec![10, 5000],
            reference: vec![0.000001, 0.0002],
            naive: vec![0.00001, 0.25],
            bubble: vec![0.00002, 0.5],
        };
        let models = vec![
            ComplexityModel::Quadratic.fit(&measurements.scales, &measurements.naive),
            ComplexityModel::Linearithmic.fit(&measurements.scales, &measurements.reference),
        ];
        BenchmarkReport::new(measurements, models)
    }

    #[test]
    fn test_report_to_markdown() {
        let markdown = sample_report().to_markdown();
        assert!(markdown.contains("# Sorting Complexity Report"));
        assert!(markdown.contains("| Size | Reference (ms) | Naive (ms) | Bubble (ms) |"));
        assert!(markdown.contains("| 5K | 0.200 | 250.000 | 500.000 |"));
        assert!(markdown.contains("| O(N^2) |"));
        assert!(markdown.contains("| O(N log N) |"));
    }

    #[test]
    fn test_report_missing_duration() {
        let mut report = sample_report();
        report.measurements.bubble.pop();
        assert!(report.to_markdown().contains("| 5K | 0.200 | 250.000 | N/A |"));
    }

    #[test]
    fn test_save_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        let report = sample_report();
        report.save_markdown(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), report.to_markdown());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(10), "10");
        assert_eq!(format_size(500), "500");
        assert_eq!(format_size(1000), "1K");
        assert_eq!(format_size(5000), "5K");
        assert_eq!(format_size(1024), "1024");
        assert_eq!(format_size(2_000_000), "2M");
    }

    #[test]
    fn test_civil_from_days() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(59), (1970, 3, 1));
        // 2000-02-29, a leap day in a century year
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
    }

    #[test]
    fn test_timestamp_format() {
        let timestamp = chrono_lite_timestamp();
        assert_eq!(timestamp.len(), 20);
        assert!(timestamp.ends_with('Z'));
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[10..11], "T");
    }
}
