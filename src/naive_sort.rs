//! Naive Sort Implementation
//!
//! Repeatedly extracts the minimum of a shrinking input and appends it to a
//! new vector. Each pass scans the whole remaining input, so the sort is
//! O(n²) in time and needs O(n) extra space for the output.

/// Sort by repeated minimum extraction, consuming the input.
///
/// Performs `n - 1` passes over the remaining elements; each pass removes the
/// smallest element and appends it to the output. The last remaining element
/// is appended directly. Ties pick the last occurrence of the minimum, so the
/// sort is not stable.
///
/// # Example
///
/// ```ignore
/// let sorted = naive_sort::sort(vec![3, 1, 2]);
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn sort(mut numbers: Vec<i64>) -> Vec<i64> {
    let mut sorted = Vec::with_capacity(numbers.len());

    for _ in 0..numbers.len().saturating_sub(1) {
        let mut smallest_index = 0;
        for (index, &value) in numbers.iter().enumerate().skip(1) {
            if value <= numbers[smallest_index] {
                smallest_index = index;
            }
        }
        sorted.push(numbers.remove(smallest_index));
    }

    sorted.extend(numbers.pop());

    debug_assert!(numbers.is_empty());
    sorted
}
