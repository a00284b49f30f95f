//! Type-erased ranges over raw bytes.
//!
//! A strided range is a byte buffer split into equal-width elements. The library never
//! interprets element contents; comparison, predicates and equality arrive as callbacks
//! over `&[u8]`. Views validate their stride on construction, so every algorithm run on
//! them only touches whole elements inside the range.

use crate::core::{CloneRange, RangeAccessor, RangeAccessorMut, RangeAssign};
use crate::error::{RangeError, Result};
use std::ops::Range;

/// Checks that `[first, last)` is a well-formed range of `element_size`-byte elements
/// inside a buffer of `buffer_len` bytes.
fn validate(buffer_len: usize, first: usize, last: usize, element_size: usize) -> Result<()> {
    let rejected = if element_size == 0 {
        Some(RangeError::ZeroElementSize)
    } else if last < first {
        Some(RangeError::Inverted { first, last })
    } else if last > buffer_len {
        Some(RangeError::OutOfBounds {
            last,
            len: buffer_len,
        })
    } else if (last - first) % element_size != 0 {
        Some(RangeError::Misaligned {
            bytes: last - first,
            element_size,
        })
    } else {
        None
    };

    match rejected {
        Some(err) => {
            tracing::debug!(first, last, element_size, %err, "rejecting malformed range");
            Err(err)
        }
        None => Ok(()),
    }
}

/// Converts an element-index sub-range into a byte range.
fn byte_span(range: &Range<usize>, len: usize, element_size: usize) -> Result<Range<usize>> {
    if range.start > range.end {
        return Err(RangeError::Inverted {
            first: range.start,
            last: range.end,
        });
    }
    if range.end > len {
        return Err(RangeError::IndexOutOfRange {
            end: range.end,
            len,
        });
    }
    Ok(range.start * element_size..range.end * element_size)
}

/// Byte offset of the end of a `(first, count)` range, guarding against overflow.
fn count_end(buffer_len: usize, first: usize, count: usize, element_size: usize) -> Result<usize> {
    count
        .checked_mul(element_size)
        .and_then(|bytes| bytes.checked_add(first))
        .ok_or(RangeError::OutOfBounds {
            last: usize::MAX,
            len: buffer_len,
        })
}

/// Byte range of element `index`, or `None` if its offsets overflow.
fn element_span(index: usize, element_size: usize) -> Option<Range<usize>> {
    let start = index.checked_mul(element_size)?;
    let end = start.checked_add(element_size)?;
    Some(start..end)
}

/// A read-only view of `element_size`-byte elements.
///
/// # Examples
///
/// ```
/// use graal::StrideSlice;
///
/// let raw: Vec<u8> = [3i32, -1, 7].iter().flat_map(|v| v.to_ne_bytes()).collect();
/// let view = StrideSlice::new(&raw, 4).unwrap();
///
/// let as_i32 = |b: &[u8]| i32::from_ne_bytes(b.try_into().unwrap());
/// assert_eq!(graal::min(&view, |a, b| as_i32(a) < as_i32(b)), Some(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrideSlice<'a> {
    bytes: &'a [u8],
    element_size: usize,
}

impl<'a> StrideSlice<'a> {
    /// Views the whole of `bytes` as elements of `element_size` bytes.
    pub fn new(bytes: &'a [u8], element_size: usize) -> Result<Self> {
        Self::from_bounds(bytes, 0, bytes.len(), element_size)
    }

    /// Views the half-open byte range `[first, last)` of `buffer`.
    pub fn from_bounds(
        buffer: &'a [u8],
        first: usize,
        last: usize,
        element_size: usize,
    ) -> Result<Self> {
        validate(buffer.len(), first, last, element_size)?;
        Ok(Self {
            bytes: &buffer[first..last],
            element_size,
        })
    }

    /// Views `count` elements of `buffer` starting at byte offset `first`.
    pub fn from_count(
        buffer: &'a [u8],
        first: usize,
        count: usize,
        element_size: usize,
    ) -> Result<Self> {
        let last = count_end(buffer.len(), first, count, element_size)?;
        Self::from_bounds(buffer, first, last, element_size)
    }

    /// Width of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.element_size
    }

    /// Whether the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        self.bytes.get(element_span(index, self.element_size)?)
    }

    /// Iterates over elements in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'a, u8> {
        self.bytes.chunks_exact(self.element_size)
    }

    /// Narrows the view to the elements in `range` (element indices).
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        let span = byte_span(&range, self.len(), self.element_size)?;
        Ok(Self {
            bytes: &self.bytes[span],
            element_size: self.element_size,
        })
    }
}

impl RangeAccessor for StrideSlice<'_> {
    type Element = [u8];

    fn element(&self, index: usize) -> &[u8] {
        let start = index * self.element_size;
        &self.bytes[start..start + self.element_size]
    }

    fn len(&self) -> usize {
        StrideSlice::len(self)
    }
}

impl CloneRange for StrideSlice<'_> {
    type Owned = StrideBuf;

    fn try_clone_range(&self) -> Result<StrideBuf> {
        StrideBuf::try_from_slice(*self)
    }
}

/// A mutable view of `element_size`-byte elements.
#[derive(Debug, PartialEq, Eq)]
pub struct StrideSliceMut<'a> {
    bytes: &'a mut [u8],
    element_size: usize,
}

impl<'a> StrideSliceMut<'a> {
    /// Views the whole of `bytes` as elements of `element_size` bytes.
    pub fn new(bytes: &'a mut [u8], element_size: usize) -> Result<Self> {
        let last = bytes.len();
        Self::from_bounds(bytes, 0, last, element_size)
    }

    /// Views the half-open byte range `[first, last)` of `buffer`.
    pub fn from_bounds(
        buffer: &'a mut [u8],
        first: usize,
        last: usize,
        element_size: usize,
    ) -> Result<Self> {
        validate(buffer.len(), first, last, element_size)?;
        Ok(Self {
            bytes: &mut buffer[first..last],
            element_size,
        })
    }

    /// Views `count` elements of `buffer` starting at byte offset `first`.
    pub fn from_count(
        buffer: &'a mut [u8],
        first: usize,
        count: usize,
        element_size: usize,
    ) -> Result<Self> {
        let last = count_end(buffer.len(), first, count, element_size)?;
        Self::from_bounds(buffer, first, last, element_size)
    }

    /// Width of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.element_size
    }

    /// Whether the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    /// The underlying bytes, writable. Writes never change the stride.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }

    /// Reborrows as a read-only view.
    pub fn as_strided(&self) -> StrideSlice<'_> {
        StrideSlice {
            bytes: &*self.bytes,
            element_size: self.element_size,
        }
    }

    /// Returns the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.bytes.get(element_span(index, self.element_size)?)
    }

    /// Returns the element at `index` for writing, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        self.bytes.get_mut(element_span(index, self.element_size)?)
    }

    /// Narrows the view to the elements in `range` (element indices).
    pub fn slice_mut(&mut self, range: Range<usize>) -> Result<StrideSliceMut<'_>> {
        let span = byte_span(&range, self.len(), self.element_size)?;
        Ok(StrideSliceMut {
            bytes: &mut self.bytes[span],
            element_size: self.element_size,
        })
    }

    /// Copies the elements in `src` so they start at element `dest`, with `memmove`
    /// semantics. Returns the element index one past the last one written.
    pub fn copy_within(&mut self, src: Range<usize>, dest: usize) -> Result<usize> {
        let len = self.len();
        let span = byte_span(&src, len, self.element_size)?;
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
        self.bytes.copy_within(span, dest * self.element_size);
        Ok(end)
    }
}

impl RangeAccessor for StrideSliceMut<'_> {
    type Element = [u8];

    fn element(&self, index: usize) -> &[u8] {
        let start = index * self.element_size;
        &self.bytes[start..start + self.element_size]
    }

    fn len(&self) -> usize {
        StrideSliceMut::len(self)
    }
}

impl RangeAccessorMut for StrideSliceMut<'_> {
    fn swap(&mut self, a: usize, b: usize) {
        swap_elements(self.bytes, self.element_size, a, b);
    }
}

impl RangeAssign for StrideSliceMut<'_> {
    fn assign(&mut self, index: usize, value: &[u8]) {
        let start = index * self.element_size;
        self.bytes[start..start + self.element_size].copy_from_slice(value);
    }

    fn assign_within(&mut self, from: usize, to: usize) {
        let start = from * self.element_size;
        self.bytes
            .copy_within(start..start + self.element_size, to * self.element_size);
    }
}

impl CloneRange for StrideSliceMut<'_> {
    type Owned = StrideBuf;

    fn try_clone_range(&self) -> Result<StrideBuf> {
        StrideBuf::try_from_slice(self.as_strided())
    }
}

fn swap_elements(bytes: &mut [u8], element_size: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = bytes.split_at_mut(hi * element_size);
    let lo_start = lo * element_size;
    head[lo_start..lo_start + element_size].swap_with_slice(&mut tail[..element_size]);
}

/// An owned, heap-allocated strided buffer, produced by cloning a strided range.
///
/// The buffer is released when dropped; the source range is never affected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrideBuf {
    bytes: Vec<u8>,
    element_size: usize,
}

impl StrideBuf {
    /// Takes ownership of `bytes` as elements of `element_size` bytes.
    pub fn from_vec(bytes: Vec<u8>, element_size: usize) -> Result<Self> {
        validate(bytes.len(), 0, bytes.len(), element_size)?;
        Ok(Self {
            bytes,
            element_size,
        })
    }

    fn try_from_slice(source: StrideSlice<'_>) -> Result<Self> {
        let src = source.as_bytes();
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(src.len()).map_err(|_| {
            tracing::warn!(bytes = src.len(), "allocation failed while cloning range");
            RangeError::AllocationFailed { bytes: src.len() }
        })?;
        bytes.extend_from_slice(src);
        Ok(Self {
            bytes,
            element_size: source.element_size(),
        })
    }

    /// Width of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.element_size
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The owned bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrows the buffer as a read-only view.
    pub fn as_strided(&self) -> StrideSlice<'_> {
        StrideSlice {
            bytes: &self.bytes,
            element_size: self.element_size,
        }
    }

    /// Borrows the buffer as a mutable view.
    pub fn as_strided_mut(&mut self) -> StrideSliceMut<'_> {
        StrideSliceMut {
            bytes: &mut self.bytes,
            element_size: self.element_size,
        }
    }

    /// Releases the stride and returns the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl RangeAccessor for StrideBuf {
    type Element = [u8];

    fn element(&self, index: usize) -> &[u8] {
        let start = index * self.element_size;
        &self.bytes[start..start + self.element_size]
    }

    fn len(&self) -> usize {
        StrideBuf::len(self)
    }
}

impl RangeAccessorMut for StrideBuf {
    fn swap(&mut self, a: usize, b: usize) {
        swap_elements(&mut self.bytes, self.element_size, a, b);
    }
}

impl RangeAssign for StrideBuf {
    fn assign(&mut self, index: usize, value: &[u8]) {
        self.as_strided_mut().assign(index, value);
    }

    fn assign_within(&mut self, from: usize, to: usize) {
        self.as_strided_mut().assign_within(from, to);
    }
}

impl CloneRange for StrideBuf {
    type Owned = StrideBuf;

    fn try_clone_range(&self) -> Result<StrideBuf> {
        StrideBuf::try_from_slice(self.as_strided())
    }
}
