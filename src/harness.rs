//! Benchmark Harness
//!
//! Generates random inputs at increasing sizes, times each sort on its own
//! freshly generated input, and collects the durations aligned to the scale list.

use std::ops::RangeInclusive;
use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::{bubble_sort, naive_sort, reference_sort};

/// Input sizes benchmarked by default
pub const SCALES: [usize; 8] = [10, 20, 50, 100, 200, 500, 1000, 5000];

/// Inclusive range random input values are drawn from
pub const VALUE_RANGE: RangeInclusive<i64> = 0..=1000;

/// Fixture checked before any benchmarking starts
const SELF_CHECK_INPUT: [i64; 10] = [5, 2, 1, 6, 2, 3, 9, 7, 8, 11];
const SELF_CHECK_EXPECTED: [i64; 10] = [1, 2, 2, 3, 5, 6, 7, 8, 9, 11];

/// A sorting algorithm under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Standard library stable sort
    Reference,
    Naive,
    Bubble,
}

impl Algorithm {
    /// All algorithms in measurement order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Reference, Algorithm::Naive, Algorithm::Bubble];

    /// Human-readable name used in charts and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Reference => "Reference",
            Algorithm::Naive => "Naive",
            Algorithm::Bubble => "Bubble",
        }
    }

    /// Sort `input` with this algorithm and return the sorted vector.
    pub fn sort(&self, mut input: Vec<i64>) -> Vec<i64> {
        match self {
            Algorithm::Reference => {
                reference_sort::sort(&mut input);
                input
            }
            Algorithm::Naive => naive_sort::sort(input),
            Algorithm::Bubble => {
                bubble_sort::sort(&mut input);
                input
            }
        }
    }
}

/// Benchmark settings.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub scales: Vec<usize>,
    pub value_range: RangeInclusive<i64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            scales: SCALES.to_vec(),
            value_range: VALUE_RANGE,
        }
    }
}

/// Durations in seconds, aligned by index with `scales`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    pub scales: Vec<usize>,
    pub reference: Vec<f64>,
    pub naive: Vec<f64>,
    pub bubble: Vec<f64>,
}

impl Measurements {
    pub fn durations(&self, algorithm: Algorithm) -> &[f64] {
        match algorithm {
            Algorithm::Reference => &self.reference,
            Algorithm::Naive => &self.naive,
            Algorithm::Bubble => &self.bubble,
        }
    }

    fn record(&mut self, algorithm: Algorithm, seconds: f64) {
        match algorithm {
            Algorithm::Reference => self.reference.push(seconds),
            Algorithm::Naive => self.naive.push(seconds),
            Algorithm::Bubble => self.bubble.push(seconds),
        }
    }
}

/// Verify both hand-written sorts against the fixture.
///
/// Panics on mismatch: a wrong answer is a logic defect, not a runtime condition.
pub fn self_check() {
    let naive = naive_sort::sort(SELF_CHECK_INPUT.to_vec());
    assert_eq!(naive, SELF_CHECK_EXPECTED, "naive sort failed self-check");

    let mut bubble = SELF_CHECK_INPUT.to_vec();
    bubble_sort::sort(&mut bubble);
    assert_eq!(bubble, SELF_CHECK_EXPECTED, "bubble sort failed self-check");

    info!("Self-check passed for naive and bubble sort");
}

/// Generate `len` values drawn uniformly from `range`.
pub fn generate_input<R: Rng>(rng: &mut R, len: usize, range: &RangeInclusive<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Time a single sort call, returning elapsed seconds and the sorted output.
pub fn time_sort(algorithm: Algorithm, input: Vec<i64>) -> (f64, Vec<i64>) {
    let start = Instant::now();
    let sorted = algorithm.sort(input);
    let elapsed = start.elapsed();
    (elapsed.as_secs_f64(), sorted)
}

/// Run every algorithm at every scale.
///
/// Each algorithm gets its own random input, so algorithms are compared on
/// inputs of equal size rather than identical data.
pub fn run<R: Rng>(config: &BenchmarkConfig, rng: &mut R) -> Measurements {
    let mut measurements = Measurements {
        scales: config.scales.clone(),
        ..Measurements::default()
    };

    for &scale in &config.scales {
        for algorithm in Algorithm::ALL {
            let input = generate_input(rng, scale, &config.value_range);
            let (seconds, sorted) = time_sort(algorithm, input);

            assert_eq!(sorted.len(), scale, "{} sort lost elements", algorithm.label());
            assert!(
                reference_sort::is_sorted(&sorted),
                "{} sort produced unsorted output at N={}",
                algorithm.label(),
                scale
            );

            debug!("{:>9} N={:<6} {:.6} s", algorithm.label(), scale, seconds);
            measurements.record(algorithm, seconds);
        }
        info!("Benchmarked N={}", scale);
    }

    measurements
}
