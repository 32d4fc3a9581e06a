//! Positional insertion under fixed-length semantics.
//!
//! The array never grows: inserting shifts `[pos, length - 1)` one slot to
//! the right and the element that occupied the last slot is overwritten by
//! the shift. It is not destructed; callers who need that must delete it
//! first.

use crate::error::Result;
use crate::slot::{check, check_pos, check_value, slot_mut};
use crate::{search, Compare};

/// Writes `value` at `pos` after shifting `[pos, length - 1)` right by one
/// slot (overlap-safe).
pub fn insert_at(
    array: &mut [u8],
    stride: usize,
    length: usize,
    pos: usize,
    value: &[u8],
) -> Result<()> {
    check(array, stride, length)?;
    check_pos(pos, length)?;
    check_value(value, stride)?;

    if pos + 1 < length {
        array.copy_within(pos * stride..(length - 1) * stride, (pos + 1) * stride);
    }
    slot_mut(array, stride, pos).copy_from_slice(value);
    Ok(())
}

/// Inserts at position 0.
pub fn insert_first(array: &mut [u8], stride: usize, length: usize, value: &[u8]) -> Result<()> {
    insert_at(array, stride, length, 0, value)
}

/// Inserts at position `length - 1`, overwriting the last slot.
pub fn insert_last(array: &mut [u8], stride: usize, length: usize, value: &[u8]) -> Result<()> {
    check(array, stride, length)?;
    insert_at(array, stride, length, length - 1, value)
}

/// Inserts `value` into an ascending-sorted array at its upper bound.
///
/// `length` counts the slot the new element will occupy, so the bound is
/// computed over the first `length - 1` elements, the data that predates
/// this insertion. Placing at the upper bound puts equal keys after the
/// equals already present, so repeated sorted insertion keeps duplicate
/// runs in insertion order.
pub fn sorted_insert<C: Compare>(
    array: &mut [u8],
    stride: usize,
    length: usize,
    value: &[u8],
    cmp: C,
) -> Result<()> {
    check(array, stride, length)?;
    check_value(value, stride)?;

    if length == 1 {
        return insert_at(array, stride, length, 0, value);
    }

    let pos = search::upper_bound(array, stride, length - 1, value, cmp)?;
    insert_at(array, stride, length, pos, value)
}
