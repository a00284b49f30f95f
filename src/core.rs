//! Core traits for Graal.
//!
//! This module defines:
//! - [`RangeAccessor`]: read access to a half-open range of elements by index.
//! - [`RangeAccessorMut`]: in-place reordering via element swaps.
//! - [`RangeAssign`]: element overwrites, used by the copy family.
//! - [`CloneRange`]: fallible duplication of a range into an owned buffer.
//!
//! Every algorithm in [`crate::algo`] is written against these traits, so the same code
//! drives typed slices and the type-erased byte views in [`crate::strided`].

use crate::error::{RangeError, Result};
use std::collections::VecDeque;

/// Index-based read access to a range `[0, len)`.
///
/// Index `len()` is the one-past-the-end position; algorithms that search return it when
/// nothing matches.
///
/// # Examples
///
/// Implementing for a custom column type:
///
/// ```
/// use graal::core::RangeAccessor;
///
/// struct Column {
///     values: Vec<i64>,
/// }
///
/// impl RangeAccessor for Column {
///     type Element = i64;
///
///     fn element(&self, index: usize) -> &i64 {
///         &self.values[index]
///     }
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
/// }
///
/// let column = Column { values: vec![4, -2, 9] };
/// assert_eq!(graal::min(&column, |a, b| a < b), Some(1));
/// ```
pub trait RangeAccessor {
    /// The element type. Unsized for byte-erased ranges, where each element is a `[u8]`
    /// of the range's stride.
    type Element: ?Sized;

    /// Returns the element at `index`.
    ///
    /// Panics if `index >= len()`.
    fn element(&self, index: usize) -> &Self::Element;

    /// Returns the number of elements in the range.
    fn len(&self) -> usize;

    /// Returns `true` if the range holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A range whose elements can be reordered in place.
pub trait RangeAccessorMut: RangeAccessor {
    /// Exchanges the elements at `a` and `b`. Swapping an index with itself is a no-op.
    fn swap(&mut self, a: usize, b: usize);
}

/// A range whose elements can be overwritten.
pub trait RangeAssign: RangeAccessorMut {
    /// Overwrites the element at `index` with `value`.
    fn assign(&mut self, index: usize, value: &Self::Element);

    /// Overwrites the element at `to` with the element at `from`.
    fn assign_within(&mut self, from: usize, to: usize);
}

/// A range that can be duplicated into a freshly allocated, caller-owned buffer.
pub trait CloneRange {
    /// The owned output type. Dropping it releases the allocation.
    type Owned;

    /// Copies every element, in order, into a new buffer sized exactly to the range.
    fn try_clone_range(&self) -> Result<Self::Owned>;
}

fn clone_slice<T: Clone>(values: &[T]) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(values.len()).map_err(|_| {
        let bytes = std::mem::size_of_val(values);
        tracing::warn!(bytes, "allocation failed while cloning range");
        RangeError::AllocationFailed { bytes }
    })?;
    out.extend_from_slice(values);
    Ok(out)
}

// Slices.
impl<T> RangeAccessor for [T] {
    type Element = T;

    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> RangeAccessorMut for [T] {
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T: Clone> RangeAssign for [T] {
    fn assign(&mut self, index: usize, value: &T) {
        self[index].clone_from(value);
    }

    fn assign_within(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let value = self[from].clone();
        self[to] = value;
    }
}

impl<T: Clone> CloneRange for [T] {
    type Owned = Vec<T>;

    fn try_clone_range(&self) -> Result<Vec<T>> {
        clone_slice(self)
    }
}

// Fixed-size arrays, so `&mut [i32; 7]` can be passed without re-slicing.
impl<T, const N: usize> RangeAccessor for [T; N] {
    type Element = T;

    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> RangeAccessorMut for [T; N] {
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T: Clone, const N: usize> RangeAssign for [T; N] {
    fn assign(&mut self, index: usize, value: &T) {
        self.as_mut_slice().assign(index, value);
    }

    fn assign_within(&mut self, from: usize, to: usize) {
        self.as_mut_slice().assign_within(from, to);
    }
}

impl<T: Clone, const N: usize> CloneRange for [T; N] {
    type Owned = Vec<T>;

    fn try_clone_range(&self) -> Result<Vec<T>> {
        clone_slice(self.as_slice())
    }
}

// Explicit Vec impls to improve ergonomics (avoiding .as_slice()).
impl<T> RangeAccessor for Vec<T> {
    type Element = T;

    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> RangeAccessorMut for Vec<T> {
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T: Clone> RangeAssign for Vec<T> {
    fn assign(&mut self, index: usize, value: &T) {
        self.as_mut_slice().assign(index, value);
    }

    fn assign_within(&mut self, from: usize, to: usize) {
        self.as_mut_slice().assign_within(from, to);
    }
}

impl<T: Clone> CloneRange for Vec<T> {
    type Owned = Vec<T>;

    fn try_clone_range(&self) -> Result<Vec<T>> {
        clone_slice(self.as_slice())
    }
}

// VecDeque offers O(1) random access, so every algorithm applies unchanged.
impl<T> RangeAccessor for VecDeque<T> {
    type Element = T;

    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> RangeAccessorMut for VecDeque<T> {
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T: Clone> RangeAssign for VecDeque<T> {
    fn assign(&mut self, index: usize, value: &T) {
        self[index].clone_from(value);
    }

    fn assign_within(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let value = self[from].clone();
        self[to] = value;
    }
}
