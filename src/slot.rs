//! Stride-addressed access to a byte buffer. Everything here is
//! bounds-checked slice indexing; the rest of the crate never does pointer
//! arithmetic of its own.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::Compare;

/// Validates the `(buffer, stride, length)` triple every operation receives.
///
/// The buffer may be longer than `stride * length`; operations then act on
/// the logical prefix. This is what lets a caller grow the logical length
/// one element at a time inside a fixed allocation.
pub(crate) fn check(array: &[u8], stride: usize, length: usize) -> Result<()> {
    if stride == 0 {
        return Err(Error::ZeroStride);
    }
    if length == 0 {
        return Err(Error::ZeroLength);
    }

    let needed = stride
        .checked_mul(length)
        .ok_or(Error::SizeOverflow { stride, length })?;
    if needed > array.len() {
        return Err(Error::BufferTooSmall {
            needed,
            have: array.len(),
        });
    }

    Ok(())
}

pub(crate) fn check_pos(pos: usize, len: usize) -> Result<()> {
    if pos >= len {
        return Err(Error::PosOutOfRange { pos, len });
    }

    Ok(())
}

/// A caller-supplied value or out-slot must be exactly one stride long.
pub(crate) fn check_value(value: &[u8], stride: usize) -> Result<()> {
    if value.len() != stride {
        return Err(Error::ValueSizeMismatch {
            expected: stride,
            got: value.len(),
        });
    }

    Ok(())
}

#[inline]
pub(crate) fn slot(array: &[u8], stride: usize, idx: usize) -> &[u8] {
    &array[idx * stride..(idx + 1) * stride]
}

#[inline]
pub(crate) fn slot_mut(array: &mut [u8], stride: usize, idx: usize) -> &mut [u8] {
    &mut array[idx * stride..(idx + 1) * stride]
}

/// Swaps the stride-sized blocks at `i` and `j`. No-op when `i == j`.
pub(crate) fn swap(array: &mut [u8], stride: usize, i: usize, j: usize) {
    if i == j {
        return;
    }

    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = array.split_at_mut(hi * stride);
    head[lo * stride..(lo + 1) * stride].swap_with_slice(&mut tail[..stride]);
}

#[inline]
pub(crate) fn compare_at<C: Compare>(
    array: &[u8],
    stride: usize,
    i: usize,
    j: usize,
    cmp: &mut C,
) -> Ordering {
    cmp.compare(slot(array, stride, i), slot(array, stride, j))
}
