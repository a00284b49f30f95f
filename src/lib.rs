//! # Graal
//!
//! `graal` is a small generic-algorithms library: minimum search, reversal, copying,
//! cloning, searching, predicate quantifiers, equality, partitioning, deduplication and
//! sorting over half-open element ranges.
//!
//! Element meaning is never assumed. Ordering, predicates and equality are supplied by the
//! caller as closures, and ranges are reached through the [`RangeAccessor`] traits, so the
//! same algorithms run over typed slices and over raw byte buffers with a runtime stride.
//!
//! ## Key Features
//!
//! - **Typed ranges**: `[T]`, `[T; N]`, `Vec<T>` and `VecDeque<T>` work out of the box.
//! - **Type-erased ranges**: [`StrideSlice`] and [`StrideSliceMut`] view a byte buffer as
//!   `element_size`-byte elements. Malformed ranges (zero stride, inverted bounds, partial
//!   trailing element) are rejected with a [`RangeError`] before any algorithm runs.
//! - **Half-open results**: searches return the range length when nothing matches;
//!   [`partition`] and [`unique`] return the end of their kept prefix.
//! - **Bounded sorting**: [`sort`] is an introsort with a heapsort fallback.
//!
//! ## Usage
//!
//! ### Typed ranges
//!
//! ```rust
//! let mut data = vec![2, 5, 3, 6, 1, 30, 10];
//!
//! assert_eq!(graal::min(&data, |a, b| a < b), Some(4));
//! assert_eq!(graal::find_if(&data, |&x| x > 5), 3);
//!
//! graal::sort(&mut data, |a, b| a < b);
//! assert_eq!(data, vec![1, 2, 3, 5, 6, 10, 30]);
//! ```
//!
//! ### Byte-stride ranges
//!
//! ```rust
//! use graal::StrideSliceMut;
//!
//! let mut raw: Vec<u8> = [7i32, 6, 5, 4, 1, 1, 1]
//!     .iter()
//!     .flat_map(|v| v.to_ne_bytes())
//!     .collect();
//! let as_i32 = |b: &[u8]| i32::from_ne_bytes(b.try_into().unwrap());
//!
//! let mut view = StrideSliceMut::new(&mut raw, size_of::<i32>()).unwrap();
//! graal::sort(&mut view, |a, b| as_i32(a) < as_i32(b));
//!
//! let sorted: Vec<i32> = raw.chunks_exact(4).map(as_i32).collect();
//! assert_eq!(sorted, vec![1, 1, 1, 4, 5, 6, 7]);
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and works only on the ranges it is handed. The borrow
//! checker rules out concurrent mutation of overlapping ranges.

pub mod algo;
pub mod core;
pub mod error;
pub mod sort;
pub mod strided;

pub use algo::{
    all_of, any_of, clone, copy, copy_within, equal, equal_prefix, find, find_if, min, none_of,
    partition, reverse, sort, unique,
};
pub use crate::core::{CloneRange, RangeAccessor, RangeAccessorMut, RangeAssign};
pub use error::{RangeError, Result};
pub use strided::{StrideBuf, StrideSlice, StrideSliceMut};

pub mod prelude {
    pub use crate::algo::{
        all_of, any_of, clone, copy, copy_within, equal, equal_prefix, find, find_if, min,
        none_of, partition, reverse, sort, unique,
    };
    pub use crate::core::{CloneRange, RangeAccessor, RangeAccessorMut, RangeAssign};
    pub use crate::error::{RangeError, Result};
    pub use crate::strided::{StrideBuf, StrideSlice, StrideSliceMut};
}
