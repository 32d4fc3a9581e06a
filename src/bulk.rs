//! Bulk byte operations over whole arrays: copy between buffers, overlap-safe
//! movement inside one buffer, zeroing and broadcast fill.

use crate::error::{Error, Result};
use crate::slot::{check, check_value, slot_mut};

/// Copies `length` elements from `src` into `dst`.
///
/// The regions cannot overlap; `&mut`/`&` exclusivity rules that out at the
/// type level, which is the whole non-overlap contract here.
pub fn copy(dst: &mut [u8], src: &[u8], stride: usize, length: usize) -> Result<()> {
    check(dst, stride, length)?;
    check(src, stride, length)?;

    let bytes = stride * length;
    dst[..bytes].copy_from_slice(&src[..bytes]);
    Ok(())
}

/// Moves `length` elements starting at element index `from` so they start at
/// `to`, within the same buffer. The two windows may overlap.
pub fn move_within(
    array: &mut [u8],
    stride: usize,
    length: usize,
    from: usize,
    to: usize,
) -> Result<()> {
    if stride == 0 {
        return Err(Error::ZeroStride);
    }
    if length == 0 {
        return Err(Error::ZeroLength);
    }

    let span = from.max(to).checked_add(length).and_then(|end| end.checked_mul(stride));
    match span {
        Some(needed) if needed <= array.len() => {}
        _ => {
            return Err(Error::BufferTooSmall {
                needed: span.unwrap_or(usize::MAX),
                have: array.len(),
            })
        }
    }

    array.copy_within(from * stride..(from + length) * stride, to * stride);
    Ok(())
}

/// Zero-fills `length` elements.
pub fn zero(array: &mut [u8], stride: usize, length: usize) -> Result<()> {
    check(array, stride, length)?;

    array[..stride * length].fill(0);
    Ok(())
}

/// Broadcasts one stride-sized `value` into every slot.
pub fn fill(array: &mut [u8], stride: usize, length: usize, value: &[u8]) -> Result<()> {
    check(array, stride, length)?;
    check_value(value, stride)?;

    for idx in 0..length {
        slot_mut(array, stride, idx).copy_from_slice(value);
    }
    Ok(())
}
