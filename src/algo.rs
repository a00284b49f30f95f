//! Range algorithms.
//!
//! Every function takes a half-open range through the [`RangeAccessor`] family of traits
//! plus caller-supplied callbacks:
//! - **Compare** `is_less(a, b)`: `a` strictly precedes `b`.
//! - **Predicate** `pred(x)`: `x` satisfies the condition.
//! - **Equal** `eq(a, b)`: `a` and `b` are equivalent.
//!
//! Positions are element indices. Searches return `len()` (the one-past-the-end index)
//! when nothing matches, and reordering algorithms return the boundary of their prefix,
//! so results compose directly with slicing: `&data[..partition(&mut data, pred)]`.

use crate::core::{CloneRange, RangeAccessor, RangeAccessorMut, RangeAssign};
use crate::error::{RangeError, Result};
use crate::sort::introsort;
use std::ops::Range;
use tracing::instrument;

/// Returns the index of the first minimal element, or `None` for an empty range.
///
/// An element replaces the current candidate only when it is strictly less, so ties
/// resolve to the leftmost occurrence.
///
/// # Examples
///
/// ```
/// let data = [1, 2, -3, 4, 0];
/// assert_eq!(graal::min(&data, |a, b| a < b), Some(2));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(graal::min(&empty, |a, b| a < b), None);
/// ```
pub fn min<R, F>(range: &R, mut is_less: F) -> Option<usize>
where
    R: RangeAccessor + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    if range.is_empty() {
        return None;
    }

    let mut best = 0;
    for index in 1..range.len() {
        if is_less(range.element(index), range.element(best)) {
            best = index;
        }
    }
    Some(best)
}

/// Returns the index of the first element satisfying `pred`, or `range.len()` if none does.
pub fn find_if<R, P>(range: &R, mut pred: P) -> usize
where
    R: RangeAccessor + ?Sized,
    P: FnMut(&R::Element) -> bool,
{
    (0..range.len())
        .find(|&index| pred(range.element(index)))
        .unwrap_or(range.len())
}

/// Returns the index of the first element equal to `value` under `eq`, or `range.len()`.
///
/// `value` need not share the element type; `eq` receives the element first.
pub fn find<R, V, E>(range: &R, value: &V, mut eq: E) -> usize
where
    R: RangeAccessor + ?Sized,
    V: ?Sized,
    E: FnMut(&R::Element, &V) -> bool,
{
    find_if(range, |element| eq(element, value))
}

/// Returns `true` if every element satisfies `pred`. Vacuously `true` for an empty range.
pub fn all_of<R, P>(range: &R, mut pred: P) -> bool
where
    R: RangeAccessor + ?Sized,
    P: FnMut(&R::Element) -> bool,
{
    find_if(range, |element| !pred(element)) == range.len()
}

/// Returns `true` if at least one element satisfies `pred`. `false` for an empty range.
pub fn any_of<R, P>(range: &R, pred: P) -> bool
where
    R: RangeAccessor + ?Sized,
    P: FnMut(&R::Element) -> bool,
{
    find_if(range, pred) != range.len()
}

/// Returns `true` if no element satisfies `pred`. Vacuously `true` for an empty range.
pub fn none_of<R, P>(range: &R, pred: P) -> bool
where
    R: RangeAccessor + ?Sized,
    P: FnMut(&R::Element) -> bool,
{
    !any_of(range, pred)
}

/// Compares two explicitly bounded ranges element-wise.
///
/// Ranges of different lengths are unequal. Stops at the first mismatch.
///
/// # Examples
///
/// ```
/// assert!(graal::equal(&[1, 2, 3], &vec![1, 2, 3], |a, b| a == b));
/// assert!(!graal::equal(&[1, 2, 3], &[1, 2], |a, b| a == b));
/// ```
pub fn equal<A, B, E>(first: &A, second: &B, mut eq: E) -> bool
where
    A: RangeAccessor + ?Sized,
    B: RangeAccessor + ?Sized,
    E: FnMut(&A::Element, &B::Element) -> bool,
{
    first.len() == second.len()
        && (0..first.len()).all(|index| eq(first.element(index), second.element(index)))
}

/// Compares `first` against the leading `first.len()` elements of `second`.
///
/// Elements of `second` past that length are ignored. If `second` is shorter than
/// `first` the ranges are reported unequal rather than read out of bounds.
pub fn equal_prefix<A, B, E>(first: &A, second: &B, mut eq: E) -> bool
where
    A: RangeAccessor + ?Sized,
    B: RangeAccessor + ?Sized,
    E: FnMut(&A::Element, &B::Element) -> bool,
{
    second.len() >= first.len()
        && (0..first.len()).all(|index| eq(first.element(index), second.element(index)))
}

/// Reverses the range in place by swapping from both ends toward the middle.
///
/// The middle element of an odd-length range is left untouched.
pub fn reverse<R>(range: &mut R)
where
    R: RangeAccessorMut + ?Sized,
{
    let len = range.len();
    for index in 0..len / 2 {
        range.swap(index, len - 1 - index);
    }
}

/// Copies every element of `source`, in order, to the front of `destination`.
///
/// Returns the index in `destination` one past the last element written. The borrow
/// rules keep the two ranges disjoint; use [`copy_within`] to copy inside one buffer.
///
/// # Errors
///
/// - [`RangeError::DestinationTooShort`] if `destination` holds fewer elements.
/// - [`RangeError::StrideMismatch`] if the element widths differ (byte-erased ranges).
pub fn copy<S, D>(source: &S, destination: &mut D) -> Result<usize>
where
    S: RangeAccessor + ?Sized,
    D: RangeAssign<Element = S::Element> + ?Sized,
{
    let needed = source.len();
    if destination.len() < needed {
        return Err(RangeError::DestinationTooShort {
            needed,
            available: destination.len(),
        });
    }
    if needed == 0 {
        return Ok(0);
    }

    let source_size = std::mem::size_of_val(source.element(0));
    let destination_size = std::mem::size_of_val(destination.element(0));
    if source_size != destination_size {
        return Err(RangeError::StrideMismatch {
            source_size,
            destination_size,
        });
    }

    for index in 0..needed {
        destination.assign(index, source.element(index));
    }
    Ok(needed)
}

/// Copies the elements in `src` so the first lands at `dest`, within a single range.
///
/// Overlapping spans are handled by choosing the copy direction: front-to-back when
/// moving toward the start, back-to-front when moving toward the end, so no element is
/// overwritten before it is read. Returns the index one past the last element written.
///
/// # Examples
///
/// ```
/// let mut data = vec![1, 2, 3, 4, 5];
/// let end = graal::copy_within(&mut data, 0..3, 2).unwrap();
/// assert_eq!(end, 5);
/// assert_eq!(data, vec![1, 2, 1, 2, 3]);
/// ```
pub fn copy_within<R>(range: &mut R, src: Range<usize>, dest: usize) -> Result<usize>
where
    R: RangeAssign + ?Sized,
{
    let len = range.len();
    if src.start > src.end {
        return Err(RangeError::Inverted {
            first: src.start,
            last: src.end,
        });
    }
    if src.end > len {
        return Err(RangeError::IndexOutOfRange { end: src.end, len });
    }

    let count = src.end - src.start;
    let end = match dest.checked_add(count) {
        Some(end) if end <= len => end,
        _ => {
            return Err(RangeError::DestinationTooShort {
                needed: count,
                available: len.saturating_sub(dest),
            });
        }
    };

    if dest <= src.start {
        for offset in 0..count {
            range.assign_within(src.start + offset, dest + offset);
        }
    } else {
        for offset in (0..count).rev() {
            range.assign_within(src.start + offset, dest + offset);
        }
    }
    Ok(end)
}

/// Duplicates the range into a new buffer owned by the caller.
///
/// The output holds exactly `range.len()` elements; an empty range yields a valid empty
/// buffer. Dropping the output releases it without touching `range`.
///
/// # Errors
///
/// [`RangeError::AllocationFailed`] if the allocator refuses the buffer.
pub fn clone<R>(range: &R) -> Result<R::Owned>
where
    R: CloneRange + ?Sized,
{
    range.try_clone_range()
}

/// Moves every element satisfying `pred` ahead of every element that does not.
///
/// Single forward pass: a write cursor starts at the front and each satisfying element
/// found by the read cursor is swapped into it. Relative order within the groups is not
/// preserved. Returns the partition point, the index of the first non-satisfying element.
///
/// # Examples
///
/// ```
/// let mut data = [1, 2, 3, 5, 1, 4];
/// let point = graal::partition(&mut data, |&x| x > 1);
/// assert_eq!(point, 4);
/// assert_eq!(&data[..point], &[2, 3, 5, 4]);
/// ```
pub fn partition<R, P>(range: &mut R, mut pred: P) -> usize
where
    R: RangeAccessorMut + ?Sized,
    P: FnMut(&R::Element) -> bool,
{
    let mut boundary = 0;
    for index in 0..range.len() {
        if pred(range.element(index)) {
            range.swap(boundary, index);
            boundary += 1;
        }
    }
    boundary
}

/// Keeps the first occurrence of every distinct element, in original order, at the front.
///
/// Duplicates need not be adjacent. Returns the new logical end; elements past it are the
/// displaced duplicates in unspecified order. Each element is checked against the kept
/// prefix, so the cost is O(n * distinct).
///
/// # Examples
///
/// ```
/// let mut data = [1, 2, 5, 4, 5, 3, 3];
/// let end = graal::unique(&mut data, |a, b| a == b);
/// assert_eq!(&data[..end], &[1, 2, 5, 4, 3]);
/// ```
#[instrument(name = "graal::unique", level = "trace", skip_all, fields(len = range.len()))]
pub fn unique<R, E>(range: &mut R, mut eq: E) -> usize
where
    R: RangeAccessorMut + ?Sized,
    E: FnMut(&R::Element, &R::Element) -> bool,
{
    let mut end = 0;
    for index in 0..range.len() {
        let seen = (0..end).any(|kept| eq(range.element(kept), range.element(index)));
        if !seen {
            range.swap(end, index);
            end += 1;
        }
    }
    end
}

/// Sorts the range in place so that no element is `is_less` than its predecessor.
///
/// Introsort: median-of-three quicksort over the same swap-based partition step as
/// [`partition`], insertion sort for short sub-ranges and heapsort once the recursion
/// budget is spent, so the worst case stays O(n log n). Not stable.
///
/// # Examples
///
/// ```
/// let mut data = vec![7, 6, 5, 4, 1, 1, 1];
/// graal::sort(&mut data, |a, b| a < b);
/// assert_eq!(data, vec![1, 1, 1, 4, 5, 6, 7]);
/// ```
#[instrument(name = "graal::sort", level = "trace", skip_all, fields(len = range.len()))]
pub fn sort<R, F>(range: &mut R, mut is_less: F)
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    introsort(range, &mut is_less);
}
