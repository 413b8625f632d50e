//! Reference Sorting Implementation
//!
//! The baseline every hand-written sort is measured against: Rust's standard
//! library stable sort, plus the order check used to verify all outputs.

/// Sort a slice in-place using the standard library stable sort.
///
/// This is a driftsort/TimSort-style merge sort, O(n log n) in the worst case.
#[inline]
pub fn sort(data: &mut [i64]) {
    data.sort();
}

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
