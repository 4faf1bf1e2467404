//! In-place sorting and searching over slices.
//!
//! Every entry point takes the order explicitly as a comparator
//! `FnMut(&T, &T) -> Ordering`, so the element type's own `Ord` (if any) plays
//! no role unless one of the `*_ord` conveniences is used. Comparators must
//! encode a consistent total order; this is never checked, and an
//! inconsistent comparator only yields an unspecified order of elements.

use std::cmp::Ordering;
use tracing::instrument;

/// Sorts the slice in place with quicksort.
///
/// The first element of every subrange is the pivot. Two indices sweep
/// toward each other, stepping over elements already on the correct side of
/// the pivot and swapping only mismatched pairs. The pivot is then swapped
/// into its final place, and both sides are sorted without it.
///
/// This sort is not stable. With this pivot choice, already sorted input hits
/// the *O*(*n*²) worst case.
///
/// # Examples
///
/// ```
/// use linked_collections::array::quicksort;
///
/// let mut v = [5, 3, 4, 1, 2];
/// quicksort(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
#[instrument(level = "trace", skip_all, fields(len = slice.len()))]
pub fn quicksort<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_ranges(slice, &mut compare);
}

/// Like [`quicksort`], with the natural order of `T`.
pub fn quicksort_ord<T: Ord>(slice: &mut [T]) {
    quicksort(slice, T::cmp)
}

/// Partitions `slice` around its first element and returns the final index
/// of that pivot.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (1, slice.len() - 1);
    while i < j {
        if compare(&slice[i], &slice[0]) != Ordering::Greater {
            i += 1;
        } else if compare(&slice[j], &slice[0]) == Ordering::Greater {
            j -= 1;
        } else {
            slice.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
    if compare(&slice[i], &slice[0]) == Ordering::Greater {
        i -= 1;
    }
    slice.swap(0, i);
    i
}

#[cfg(not(feature = "explicit-stack"))]
fn sort_ranges<T, F>(slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if slice.len() <= 1 {
        return;
    }
    let pivot = partition(slice, compare);
    let (left, right) = slice.split_at_mut(pivot);
    sort_ranges(left, compare);
    sort_ranges(&mut right[1..], compare);
}

#[cfg(feature = "explicit-stack")]
fn sort_ranges<T, F>(slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Left range is pushed last so it is sorted first, as in the recursion.
    let mut ranges = vec![slice];
    while let Some(range) = ranges.pop() {
        if range.len() <= 1 {
            continue;
        }
        let pivot = partition(range, compare);
        let (left, right) = range.split_at_mut(pivot);
        ranges.push(&mut right[1..]);
        ranges.push(left);
    }
}

/// Sorts the slice in place with selection sort.
///
/// For each position `i`, the minimum of `i..` is swapped into `i`. Among
/// equal minimums the first one wins. This sort is not stable, and always
/// takes *O*(*n*²) comparisons.
///
/// # Examples
///
/// ```
/// use linked_collections::array::selection_sort;
///
/// let mut v = ["pear", "fig", "apple"];
/// selection_sort(&mut v, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(v, ["fig", "pear", "apple"]);
/// ```
pub fn selection_sort<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..slice.len() {
        let mut min = i;
        for j in i + 1..slice.len() {
            if compare(&slice[min], &slice[j]) == Ordering::Greater {
                min = j;
            }
        }
        slice.swap(min, i);
    }
}

/// Like [`selection_sort`], with the natural order of `T`.
pub fn selection_sort_ord<T: Ord>(slice: &mut [T]) {
    selection_sort(slice, T::cmp)
}

/// Binary searches a slice sorted ascending by `compare`, returning the index
/// of an element equal to `target`, or `None` if there is none.
///
/// The midpoint of the inclusive range `lo..=hi` is `(lo + hi) / 2`. When the
/// range has shrunk to a single element without a match the search gives up;
/// otherwise it continues in the half that agrees with the sign of
/// `compare(mid, target)`. An absent target (`None`) is rejected without
/// searching.
///
/// The slice must be sorted by `compare`. That is never checked; on an
/// unsorted slice the answer is unspecified.
///
/// # Examples
///
/// ```
/// use linked_collections::array::binary_search;
///
/// let v = [1, 2, 3, 4, 5];
/// assert_eq!(binary_search(&v, &4, |a, b| a.cmp(b)), Some(3));
/// assert_eq!(binary_search(&v, &6, |a, b| a.cmp(b)), None);
/// assert_eq!(binary_search(&v, None, |a, b| a.cmp(b)), None);
/// ```
pub fn binary_search<'q, T, F>(
    slice: &[T],
    target: impl Into<Option<&'q T>>,
    mut compare: F,
) -> Option<usize>
where
    T: 'q,
    F: FnMut(&T, &T) -> Ordering,
{
    let target = target.into()?;
    if slice.is_empty() {
        return None;
    }
    search_range(slice, 0, slice.len() - 1, target, &mut compare)
}

/// Like [`binary_search`], with the natural order of `T`.
pub fn binary_search_ord<'q, T: Ord + 'q>(
    slice: &[T],
    target: impl Into<Option<&'q T>>,
) -> Option<usize> {
    binary_search(slice, target, T::cmp)
}

#[cfg(not(feature = "explicit-stack"))]
fn search_range<T, F>(slice: &[T], lo: usize, hi: usize, target: &T, compare: &mut F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if hi < lo {
        return None;
    }
    let mid = (lo + hi) / 2;
    match compare(&slice[mid], target) {
        Ordering::Equal => Some(mid),
        _ if lo == hi => None,
        Ordering::Greater if mid == lo => None,
        Ordering::Greater => search_range(slice, lo, mid - 1, target, compare),
        Ordering::Less => search_range(slice, mid + 1, hi, target, compare),
    }
}

#[cfg(feature = "explicit-stack")]
fn search_range<T, F>(
    slice: &[T],
    mut lo: usize,
    mut hi: usize,
    target: &T,
    compare: &mut F,
) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    while lo <= hi {
        let mid = (lo + hi) / 2;
        match compare(&slice[mid], target) {
            Ordering::Equal => return Some(mid),
            _ if lo == hi => return None,
            // `mid == lo` here means the left half is empty.
            Ordering::Greater if mid == lo => return None,
            Ordering::Greater => hi = mid - 1,
            Ordering::Less => lo = mid + 1,
        }
    }
    None
}
