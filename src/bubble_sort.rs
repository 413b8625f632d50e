//! Bubble Sort Implementation
//!
//! Full left-to-right scans swap out-of-order neighbours until a scan makes
//! no swaps. Every swap removes exactly one inversion, so the loop terminates.
//!
//! Complexity: O(n²) worst and average case, O(n) on sorted input, O(1) extra space.

/// Counters collected while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Full scans over the slice, including the final clean one
    pub passes: usize,
    /// Adjacent swaps performed
    pub swaps: usize,
}

/// Sort a slice in-place and hand the same slice back.
pub fn sort(numbers: &mut [i64]) -> &mut [i64] {
    sort_with_stats(numbers);
    numbers
}

/// Sort a slice in-place, counting passes and swaps.
///
/// An empty, single-element or already sorted slice takes exactly one clean pass.
pub fn sort_with_stats(numbers: &mut [i64]) -> PassStats {
    let mut stats = PassStats::default();

    loop {
        stats.passes += 1;
        let mut swapped = false;

        for index in 0..numbers.len().saturating_sub(1) {
            if numbers[index] > numbers[index + 1] {
                numbers.swap(index, index + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            return stats;
        }
    }
}
