//! Recursive search routines.
//!
//! Both searches recurse once per step. Binary search depth is logarithmic in
//! the list length; linear search depth is linear, so lists longer than
//! [`MAX_RECURSION_DEPTH`] are scanned iteratively instead, with identical
//! results.

use std::cmp::Ordering;

/// Longest list [`recursive_linear_search`] scans by recursion.
pub const MAX_RECURSION_DEPTH: usize = 4096;

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```
/// use colorstat_toolkit::search::recursive_linear_search;
///
/// assert_eq!(recursive_linear_search(&[3, 7, 2, 9, 11], &9), Some(3));
/// assert_eq!(recursive_linear_search(&[3, 7, 2, 9, 11], &4), None);
/// ```
#[must_use]
pub fn recursive_linear_search<T>(list: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    if list.len() > MAX_RECURSION_DEPTH {
        return list.iter().position(|item| item == target);
    }
    scan_from(list, target, 0)
}

fn scan_from<T>(list: &[T], target: &T, index: usize) -> Option<usize>
where
    T: PartialEq,
{
    let item = list.get(index)?;
    if item == target {
        Some(index)
    } else {
        scan_from(list, target, index + 1)
    }
}

/// Returns the index of an element equal to `target` in `sorted`.
///
/// `sorted` must be in ascending order. This is not checked; on unsorted input
/// the result is unspecified (it may miss elements that are present).
///
/// The midpoint of the inclusive bounds `left..=right` is `(left + right) / 2`,
/// rounding down, so duplicates of `target` resolve to the same index as the
/// classical algorithm started with `left = 0`, `right = len - 1`.
///
/// # Examples
///
/// ```
/// use colorstat_toolkit::search::recursive_binary_search;
///
/// assert_eq!(recursive_binary_search(&[2, 3, 7, 9, 11], &9), Some(3));
/// assert_eq!(recursive_binary_search(&[2, 3, 7, 9, 11], &10), None);
/// ```
#[must_use]
pub fn recursive_binary_search<T>(sorted: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    search_range(sorted, target, 0, sorted.len())
}

// Searches the half-open range `left..right`; `right - 1` is the inclusive
// upper bound, so `mid` is the lower middle.
fn search_range<T>(sorted: &[T], target: &T, left: usize, right: usize) -> Option<usize>
where
    T: Ord,
{
    if left >= right {
        return None;
    }
    let mid = left + (right - 1 - left) / 2;
    match sorted[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => search_range(sorted, target, left, mid),
        Ordering::Less => search_range(sorted, target, mid + 1, right),
    }
}
