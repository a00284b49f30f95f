//! Error types for range construction, copying and cloning.

/// Errors raised when a range description is malformed or an output cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A stride of zero bytes cannot describe any element.
    #[error("element size must be non-zero")]
    ZeroElementSize,

    /// `last` lies before `first`.
    #[error("range end {last} precedes range start {first}")]
    Inverted { first: usize, last: usize },

    /// `last` lies past the end of the backing buffer.
    #[error("range end {last} exceeds buffer length {len}")]
    OutOfBounds { last: usize, len: usize },

    /// `last` is not reachable from `first` in whole strides.
    #[error("range of {bytes} bytes is not a whole number of {element_size}-byte elements")]
    Misaligned { bytes: usize, element_size: usize },

    /// An element-index sub-range reaches past the end of its parent range.
    #[error("element range end {end} exceeds range length {len}")]
    IndexOutOfRange { end: usize, len: usize },

    /// The destination of a copy holds fewer elements than the source.
    #[error("destination holds {available} elements but {needed} are required")]
    DestinationTooShort { needed: usize, available: usize },

    /// Source and destination elements differ in width.
    #[error("element size mismatch: source is {source_size} bytes, destination is {destination_size} bytes")]
    StrideMismatch {
        source_size: usize,
        destination_size: usize,
    },

    /// The allocator refused the output buffer.
    #[error("failed to allocate {bytes} bytes for cloned range")]
    AllocationFailed { bytes: usize },
}

/// Result type alias for range operations.
pub type Result<T> = std::result::Result<T, RangeError>;
