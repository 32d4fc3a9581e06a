//! Bound and occurrence search.
//!
//! `lower_bound`/`upper_bound` and the `sorted_find_*` pair assume the array
//! is ascending per the comparator; the linear operations assume nothing.
//! Absence is `Ok(None)`; the bound functions always produce a position and
//! return `length` when the key belongs past the end.

use std::cmp::Ordering;

use crate::error::Result;
use crate::slot::{check, check_value, compare_at, slot};
use crate::Compare;

/// First index whose element is not less than `key`, i.e. the leftmost
/// position where `key` could be inserted keeping the array sorted.
pub fn lower_bound<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    mut cmp: C,
) -> Result<usize> {
    check(array, stride, length)?;
    check_value(key, stride)?;

    Ok(bound(array, stride, length, key, &mut cmp, true))
}

/// First index whose element is strictly greater than `key`, i.e. the
/// position just past every element equal to `key`.
pub fn upper_bound<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    mut cmp: C,
) -> Result<usize> {
    check(array, stride, length)?;
    check_value(key, stride)?;

    Ok(bound(array, stride, length, key, &mut cmp, false))
}

/// Binary search by halving a `[lo, hi)` index window over stride units.
/// With `allow_equal` the window closes on `key <= element` (lower bound),
/// without it on `key < element` (upper bound).
fn bound<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    cmp: &mut C,
    allow_equal: bool,
) -> usize {
    let mut lo = 0;
    let mut hi = length;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let ord = cmp.compare(key, slot(array, stride, mid));
        let key_before_mid = if allow_equal {
            ord != Ordering::Greater
        } else {
            ord == Ordering::Less
        };

        if key_before_mid {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}

/// Index of the leftmost minimal element. Copies it into `out` if supplied.
pub fn find_min<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    mut cmp: C,
    out: Option<&mut [u8]>,
) -> Result<usize> {
    check(array, stride, length)?;
    if let Some(out) = &out {
        check_value(out, stride)?;
    }

    let mut best = 0;
    for idx in 1..length {
        if compare_at(array, stride, idx, best, &mut cmp) == Ordering::Less {
            best = idx;
        }
    }

    if let Some(out) = out {
        out.copy_from_slice(slot(array, stride, best));
    }
    Ok(best)
}

/// Index of the leftmost maximal element. Copies it into `out` if supplied.
pub fn find_max<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    mut cmp: C,
    out: Option<&mut [u8]>,
) -> Result<usize> {
    check(array, stride, length)?;
    if let Some(out) = &out {
        check_value(out, stride)?;
    }

    let mut best = 0;
    for idx in 1..length {
        if compare_at(array, stride, idx, best, &mut cmp) == Ordering::Greater {
            best = idx;
        }
    }

    if let Some(out) = out {
        out.copy_from_slice(slot(array, stride, best));
    }
    Ok(best)
}

/// Front-to-back scan for the first element comparing equal to `key`.
/// No ordering assumed.
pub fn unsorted_find_first<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    mut cmp: C,
    out: Option<&mut [u8]>,
) -> Result<Option<usize>> {
    check(array, stride, length)?;
    check_value(key, stride)?;
    if let Some(out) = &out {
        check_value(out, stride)?;
    }

    for idx in 0..length {
        if cmp.compare(key, slot(array, stride, idx)) == Ordering::Equal {
            if let Some(out) = out {
                out.copy_from_slice(slot(array, stride, idx));
            }
            return Ok(Some(idx));
        }
    }

    Ok(None)
}

/// Back-to-front scan for the last element comparing equal to `key`.
/// No ordering assumed.
pub fn unsorted_find_last<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    mut cmp: C,
    out: Option<&mut [u8]>,
) -> Result<Option<usize>> {
    check(array, stride, length)?;
    check_value(key, stride)?;
    if let Some(out) = &out {
        check_value(out, stride)?;
    }

    for idx in (0..length).rev() {
        if cmp.compare(key, slot(array, stride, idx)) == Ordering::Equal {
            if let Some(out) = out {
                out.copy_from_slice(slot(array, stride, idx));
            }
            return Ok(Some(idx));
        }
    }

    Ok(None)
}

/// Leftmost occurrence of `key` in a sorted array: lower bound plus one
/// equality check.
pub fn sorted_find_first<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    mut cmp: C,
    out: Option<&mut [u8]>,
) -> Result<Option<usize>> {
    check(array, stride, length)?;
    check_value(key, stride)?;
    if let Some(out) = &out {
        check_value(out, stride)?;
    }

    let idx = bound(array, stride, length, key, &mut cmp, true);
    if idx < length && cmp.compare(key, slot(array, stride, idx)) == Ordering::Equal {
        if let Some(out) = out {
            out.copy_from_slice(slot(array, stride, idx));
        }
        return Ok(Some(idx));
    }

    Ok(None)
}

/// Rightmost occurrence of `key` in a sorted array: upper bound minus one
/// plus one equality check.
pub fn sorted_find_last<C: Compare>(
    array: &[u8],
    stride: usize,
    length: usize,
    key: &[u8],
    mut cmp: C,
    out: Option<&mut [u8]>,
) -> Result<Option<usize>> {
    check(array, stride, length)?;
    check_value(key, stride)?;
    if let Some(out) = &out {
        check_value(out, stride)?;
    }

    let idx = bound(array, stride, length, key, &mut cmp, false);
    if idx > 0 && cmp.compare(key, slot(array, stride, idx - 1)) == Ordering::Equal {
        if let Some(out) = out {
            out.copy_from_slice(slot(array, stride, idx - 1));
        }
        return Ok(Some(idx - 1));
    }

    Ok(None)
}
