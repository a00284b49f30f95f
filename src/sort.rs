//! Introsort over index-addressed ranges.
//!
//! - **Quicksort**: median-of-three pivot, Lomuto partition by swaps.
//! - **Insertion Sort**: sub-ranges of at most [`INSERTION_SORT_THRESHOLD`] elements.
//! - **Heapsort**: taken over once the depth budget runs out, bounding the worst case.
//!
//! All routines work on `[lo, hi)` windows of one range so recursion never needs to
//! re-borrow sub-views.

use crate::core::RangeAccessorMut;

/// Sub-ranges at or below this length are finished by insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

pub(crate) fn introsort<R, F>(range: &mut R, is_less: &mut F)
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    let len = range.len();
    if len < 2 {
        return;
    }

    // 2 * floor(log2(len)) + 2 partitioning rounds before giving up on quicksort.
    let limit = 2 * (usize::BITS - 1 - len.leading_zeros()) + 2;
    quicksort(range, 0, len, is_less, limit);
}

fn quicksort<R, F>(range: &mut R, mut lo: usize, mut hi: usize, is_less: &mut F, mut limit: u32)
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    loop {
        let len = hi - lo;
        if len <= INSERTION_SORT_THRESHOLD {
            insertion_sort(range, lo, hi, is_less);
            return;
        }

        if limit == 0 {
            tracing::trace!(lo, hi, "recursion budget exhausted, falling back to heapsort");
            heapsort(range, lo, hi, is_less);
            return;
        }
        limit -= 1;

        let mid = partition_around_pivot(range, lo, hi, is_less);

        // Recurse into the smaller side, loop on the larger one.
        if mid - lo < hi - mid {
            quicksort(range, lo, mid, is_less, limit);
            lo = mid + 1;
        } else {
            quicksort(range, mid + 1, hi, is_less, limit);
            hi = mid;
        }
    }
}

/// Partitions `[lo, hi)` around a median-of-three pivot and returns the pivot's final index.
///
/// Everything before the returned index is less than the pivot; everything after is not.
fn partition_around_pivot<R, F>(range: &mut R, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    let last = hi - 1;
    let pivot = median_of_three(range, lo, lo + (hi - lo) / 2, last, is_less);
    range.swap(pivot, last);

    let mut store = lo;
    for index in lo..last {
        if is_less(range.element(index), range.element(last)) {
            range.swap(store, index);
            store += 1;
        }
    }
    range.swap(store, last);
    store
}

fn median_of_three<R, F>(range: &R, a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    let ab = is_less(range.element(a), range.element(b));
    let bc = is_less(range.element(b), range.element(c));
    let ac = is_less(range.element(a), range.element(c));

    if ab == bc {
        b
    } else if ab == ac {
        c
    } else {
        a
    }
}

fn insertion_sort<R, F>(range: &mut R, lo: usize, hi: usize, is_less: &mut F)
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    for start in lo + 1..hi {
        let mut index = start;
        while index > lo && is_less(range.element(index), range.element(index - 1)) {
            range.swap(index - 1, index);
            index -= 1;
        }
    }
}

fn heapsort<R, F>(range: &mut R, lo: usize, hi: usize, is_less: &mut F)
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    let len = hi - lo;

    // Build max heap
    for root in (0..len / 2).rev() {
        sift_down(range, lo, root, len, is_less);
    }

    // Extract elements from heap
    for end in (1..len).rev() {
        range.swap(lo, lo + end);
        sift_down(range, lo, 0, end, is_less);
    }
}

/// Restores the max-heap property below `root` for the heap stored at `[base, base + end)`.
fn sift_down<R, F>(range: &mut R, base: usize, mut root: usize, end: usize, is_less: &mut F)
where
    R: RangeAccessorMut + ?Sized,
    F: FnMut(&R::Element, &R::Element) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && is_less(range.element(base + child), range.element(base + child + 1))
        {
            child += 1;
        }
        if !is_less(range.element(base + root), range.element(base + child)) {
            return;
        }
        range.swap(base + root, base + child);
        root = child;
    }
}
