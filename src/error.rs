use thiserror::Error;

/// Failure modes shared by every operation in the crate.
///
/// Invalid arguments are rejected before any memory is touched, so a failed
/// operation leaves the buffer exactly as it was. Search operations report
/// absence as `Ok(None)`, not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("stride must be non-zero")]
    ZeroStride,

    #[error("length must be non-zero")]
    ZeroLength,

    #[error("buffer too small: need {needed} bytes, have {have}")]
    BufferTooSmall { needed: usize, have: usize },

    #[error("stride {stride} times length {length} overflows usize")]
    SizeOverflow { stride: usize, length: usize },

    #[error("position {pos} out of range for length {len}")]
    PosOutOfRange { pos: usize, len: usize },

    #[error("value must be exactly one stride ({expected} bytes), got {got}")]
    ValueSizeMismatch { expected: usize, got: usize },

    #[error("failed to allocate {bytes} bytes")]
    AllocFailed { bytes: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
