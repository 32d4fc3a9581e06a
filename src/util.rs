//! Order utilities and predicates: shuffle, reverse, element-wise equality
//! and the two sortedness checks.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::Result;
use crate::slot::{check, compare_at, slot, swap};
use crate::Compare;

/// Fisher–Yates shuffle over stride-sized blocks.
///
/// The random source is the caller's collaborator; tests and benches seed a
/// `StdRng` so runs are reproducible.
pub fn shuffle<R: Rng>(array: &mut [u8], stride: usize, length: usize, rng: &mut R) -> Result<()> {
    check(array, stride, length)?;

    for i in (1..length).rev() {
        let j = rng.gen_range(0..=i);
        swap(array, stride, i, j);
    }
    Ok(())
}

/// Reverses the element order by swapping symmetric pairs inward.
pub fn reverse(array: &mut [u8], stride: usize, length: usize) -> Result<()> {
    check(array, stride, length)?;

    let mut i = 0;
    let mut j = length - 1;
    while i < j {
        swap(array, stride, i, j);
        i += 1;
        j -= 1;
    }
    Ok(())
}

/// Element-wise equality per `cmp` over both arrays.
pub fn equal<C: Compare>(
    a: &[u8],
    b: &[u8],
    stride: usize,
    length: usize,
    mut cmp: C,
) -> Result<bool> {
    check(a, stride, length)?;
    check(b, stride, length)?;

    for idx in 0..length {
        if cmp.compare(slot(a, stride, idx), slot(b, stride, idx)) != Ordering::Equal {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Non-decreasing order check via adjacent pairs.
pub fn is_sorted<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    mut cmp: C,
) -> Result<bool> {
    check(array, stride, length)?;

    for idx in 1..length {
        if compare_at(array, stride, idx - 1, idx, &mut cmp) == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Non-increasing order check via adjacent pairs.
pub fn is_reverse_sorted<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    mut cmp: C,
) -> Result<bool> {
    check(array, stride, length)?;

    for idx in 1..length {
        if compare_at(array, stride, idx - 1, idx, &mut cmp) == Ordering::Less {
            return Ok(false);
        }
    }
    Ok(true)
}
