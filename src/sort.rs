//! Hybrid in-place sort over stride-sized byte blocks.
//!
//! Short ranges use insertion sort, everything else a dual-pivot quicksort
//! in the style of Yaroslavskiy's three-way variant: two pivots picked from
//! a five-sample network, one left-to-right partition scan into the
//! less / between / greater bands, and an extra equal-element pass when the
//! middle band dominates. The partition works purely by index-pair swaps,
//! no element is ever duplicated outside the buffer, so the multiset of
//! elements is preserved at every step even if the comparator panics.

use std::cmp::Ordering;

use crate::error::Result;
use crate::slot::{check, compare_at, swap};
use crate::Compare;

/// Below this many elements insertion sort beats the quicksort machinery.
const INSERTION_SORT_THRESHOLD: usize = 17;

/// A middle band larger than `len - EQUAL_SPLIT_SLACK` means the range is
/// dominated by duplicates and triggers the equal-element split-out pass.
const EQUAL_SPLIT_SLACK: usize = 13;

/// Sorts `length` elements ascending per `cmp`, in place.
///
/// O(n log n) on average; not stable once the quicksort tier kicks in
/// (`length >= 17`).
pub fn sort<C: Compare>(array: &mut [u8], stride: usize, length: usize, mut cmp: C) -> Result<()> {
    check(array, stride, length)?;

    sort_range(array, stride, 0, length - 1, &mut cmp);
    Ok(())
}

/// Sorts the inclusive index range `[lo, hi]`.
fn sort_range<C: Compare>(array: &mut [u8], stride: usize, lo: usize, hi: usize, cmp: &mut C) {
    if hi <= lo {
        return;
    }

    if hi - lo + 1 < INSERTION_SORT_THRESHOLD {
        insertion_sort(array, stride, lo, hi, cmp);
    } else {
        dual_pivot_sort(array, stride, lo, hi, cmp);
    }
}

/// Classic insertion sort: walk each element left by adjacent stride-block
/// swaps while its predecessor compares greater. Stable.
fn insertion_sort<C: Compare>(array: &mut [u8], stride: usize, lo: usize, hi: usize, cmp: &mut C) {
    for i in (lo + 1)..=hi {
        let mut j = i;
        while j > lo && compare_at(array, stride, j - 1, j, cmp) == Ordering::Greater {
            swap(array, stride, j - 1, j);
            j -= 1;
        }
    }
}

/// Compare-and-swap of two slots, the building block of the sample network.
fn order2<C: Compare>(array: &mut [u8], stride: usize, a: usize, b: usize, cmp: &mut C) {
    if compare_at(array, stride, a, b, cmp) == Ordering::Greater {
        swap(array, stride, a, b);
    }
}

/// Dual-pivot quicksort over the inclusive range `[lo, hi]`, `hi - lo + 1 >= 17`.
fn dual_pivot_sort<C: Compare>(array: &mut [u8], stride: usize, lo: usize, hi: usize, cmp: &mut C) {
    let len = hi - lo + 1;
    let sixth = len / 6;

    // Five evenly spaced samples.
    let m1 = lo + sixth;
    let m2 = m1 + sixth;
    let m3 = m2 + sixth;
    let m4 = m3 + sixth;
    let m5 = m4 + sixth;

    // Fixed 9-exchange network sorts the samples; the 2nd and 4th become
    // the pivots, parked at the ends of the range for the partition scan.
    for (a, b) in [
        (m1, m2),
        (m4, m5),
        (m1, m3),
        (m2, m3),
        (m1, m4),
        (m3, m4),
        (m2, m5),
        (m2, m3),
        (m4, m5),
    ] {
        order2(array, stride, a, b, cmp);
    }

    swap(array, stride, m2, lo);
    swap(array, stride, m4, hi);

    let pivots_differ = compare_at(array, stride, lo, hi, cmp) != Ordering::Equal;

    // `less` and `great` are the moving band boundaries: everything left of
    // `less` is below pivot1, everything right of `great` above pivot2.
    let mut less = lo + 1;
    let mut great = hi - 1;

    if pivots_differ {
        let mut k = less;
        while k <= great {
            if compare_at(array, stride, k, lo, cmp) == Ordering::Less {
                swap(array, stride, k, less);
                less += 1;
            } else if compare_at(array, stride, k, hi, cmp) == Ordering::Greater {
                while k < great && compare_at(array, stride, great, hi, cmp) == Ordering::Greater {
                    great -= 1;
                }
                swap(array, stride, k, great);
                great -= 1;
                if compare_at(array, stride, k, lo, cmp) == Ordering::Less {
                    swap(array, stride, k, less);
                    less += 1;
                }
            }
            k += 1;
        }
    } else {
        // Equal pivots: two bands suffice, elements equal to the pivot stay
        // where they are.
        let mut k = less;
        while k <= great {
            match compare_at(array, stride, k, lo, cmp) {
                Ordering::Equal => {}
                Ordering::Less => {
                    swap(array, stride, k, less);
                    less += 1;
                }
                Ordering::Greater => {
                    while k < great
                        && compare_at(array, stride, great, lo, cmp) == Ordering::Greater
                    {
                        great -= 1;
                    }
                    swap(array, stride, k, great);
                    great -= 1;
                    if compare_at(array, stride, k, lo, cmp) == Ordering::Less {
                        swap(array, stride, k, less);
                        less += 1;
                    }
                }
            }
            k += 1;
        }
    }

    // Move the pivots from the ends into their final boundary slots. The
    // middle band is now `[less, great]` with pivot1 at `less - 1` and
    // pivot2 at `great + 1`.
    swap(array, stride, lo, less - 1);
    swap(array, stride, hi, great + 1);

    if less > lo + 1 {
        sort_range(array, stride, lo, less - 2, cmp);
    }
    if great + 1 < hi {
        sort_range(array, stride, great + 2, hi, cmp);
    }

    // A dominant middle band means many duplicate keys. Split out elements
    // equal to either pivot before sorting what is strictly between them;
    // the pivot copies at `less - 1` and `great + 1` keep working as the
    // comparison anchors while the boundaries move inward.
    if pivots_differ && great > less && great - less + 1 > len - EQUAL_SPLIT_SLACK {
        let mut k = less;
        while k <= great {
            if compare_at(array, stride, k, less - 1, cmp) == Ordering::Equal {
                swap(array, stride, k, less);
                less += 1;
            } else if compare_at(array, stride, k, great + 1, cmp) == Ordering::Equal {
                swap(array, stride, k, great);
                great -= 1;
                if compare_at(array, stride, k, less - 1, cmp) == Ordering::Equal {
                    swap(array, stride, k, less);
                    less += 1;
                }
            }
            k += 1;
        }
    }

    if pivots_differ && less < great {
        sort_range(array, stride, less, great, cmp);
    }
}
