//! Positional deletion. Deleting shifts `[pos + 1, length)` one slot to the
//! left and zero-fills the freed last slot, so the tail of the array stays
//! in the freshly-created state. The `_with_entry` variants run the
//! caller-supplied destructor on the removed element first.

use crate::error::Result;
use crate::slot::{check, check_pos, slot_mut};
use crate::{bulk, DestroyEntry};

/// Removes the element at `pos`: left-shift the tail, zero the last slot.
pub fn delete_at(array: &mut [u8], stride: usize, length: usize, pos: usize) -> Result<()> {
    check(array, stride, length)?;
    check_pos(pos, length)?;

    if pos + 1 < length {
        array.copy_within((pos + 1) * stride..length * stride, pos * stride);
    }
    slot_mut(array, stride, length - 1).fill(0);
    Ok(())
}

pub fn delete_first(array: &mut [u8], stride: usize, length: usize) -> Result<()> {
    delete_at(array, stride, length, 0)
}

pub fn delete_last(array: &mut [u8], stride: usize, length: usize) -> Result<()> {
    check(array, stride, length)?;
    delete_at(array, stride, length, length - 1)
}

/// Like [`delete_at`], but runs `dtor` on the element before it is removed.
pub fn delete_at_with_entry<D: DestroyEntry>(
    array: &mut [u8],
    stride: usize,
    length: usize,
    pos: usize,
    mut dtor: D,
) -> Result<()> {
    check(array, stride, length)?;
    check_pos(pos, length)?;

    dtor.destroy(slot_mut(array, stride, pos));
    delete_at(array, stride, length, pos)
}

pub fn delete_first_with_entry<D: DestroyEntry>(
    array: &mut [u8],
    stride: usize,
    length: usize,
    dtor: D,
) -> Result<()> {
    delete_at_with_entry(array, stride, length, 0, dtor)
}

pub fn delete_last_with_entry<D: DestroyEntry>(
    array: &mut [u8],
    stride: usize,
    length: usize,
    dtor: D,
) -> Result<()> {
    check(array, stride, length)?;
    delete_at_with_entry(array, stride, length, length - 1, dtor)
}

/// Zeroes every element.
pub fn delete_all(array: &mut [u8], stride: usize, length: usize) -> Result<()> {
    bulk::zero(array, stride, length)
}

/// Runs `dtor` on every element in ascending index order, then zeroes the
/// whole array.
pub fn delete_all_with_entries<D: DestroyEntry>(
    array: &mut [u8],
    stride: usize,
    length: usize,
    mut dtor: D,
) -> Result<()> {
    check(array, stride, length)?;

    for idx in 0..length {
        dtor.destroy(slot_mut(array, stride, idx));
    }
    bulk::zero(array, stride, length)
}
