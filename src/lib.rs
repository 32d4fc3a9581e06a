//! Type-erased fixed-length array engine.
//!
//! Every operation works on a `(&[u8], stride, length)` triple: a contiguous
//! byte buffer, the byte size of one element and the element count for this
//! call. Elements are opaque stride-sized blocks; the caller supplies the
//! ordering ([`Compare`]) and, where element contents own external resources,
//! a per-element destructor ([`DestroyEntry`]).
//!
//! The length is fixed. Inserting shifts the tail right and discards the
//! element that occupied the last slot, deleting shifts left and zero-fills
//! the freed slot. Nothing here grows, locks or retries; callers serialize
//! access themselves.
//!
//! ```
//! use darray_raw::{sort, RawBuf};
//!
//! let init: Vec<u8> = [3i32, 1, 2].iter().flat_map(|v| v.to_ne_bytes()).collect();
//! let mut buf = RawBuf::create_init(4, &init).unwrap();
//! sort(buf.as_mut_slice(), 4, 3, darray_raw::patterns::int_compare).unwrap();
//! ```

use std::cmp::Ordering;

pub mod buf;
pub mod bulk;
pub mod delete;
pub mod error;
pub mod insert;
pub mod patterns;
pub mod search;
pub mod sort;
pub mod util;

mod slot;

pub use buf::RawBuf;
pub use bulk::{copy, fill, move_within, zero};
pub use delete::{
    delete_all, delete_all_with_entries, delete_at, delete_at_with_entry, delete_first,
    delete_first_with_entry, delete_last, delete_last_with_entry,
};
pub use error::{Error, Result};
pub use insert::{insert_at, insert_first, insert_last, sorted_insert};
pub use search::{
    find_max, find_min, lower_bound, sorted_find_first, sorted_find_last, unsorted_find_first,
    unsorted_find_last, upper_bound,
};
pub use sort::sort;
pub use util::{equal, is_reverse_sorted, is_sorted, reverse, shuffle};

/// Three-way ordering over two elements viewed as raw bytes.
///
/// Both arguments are exactly one stride long. Any
/// `FnMut(&[u8], &[u8]) -> Ordering` closure works directly.
pub trait Compare {
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering;
}

impl<F> Compare for F
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering {
        self(a, b)
    }
}

/// Releases whatever one element's bytes own before the slot is discarded.
///
/// Invoked exactly once per affected element by the `_with_entry` /
/// `_with_entries` operation family; no other operation ever calls it. Any
/// `FnMut(&mut [u8])` closure works directly.
pub trait DestroyEntry {
    fn destroy(&mut self, entry: &mut [u8]);
}

impl<F> DestroyEntry for F
where
    F: FnMut(&mut [u8]),
{
    #[inline]
    fn destroy(&mut self, entry: &mut [u8]) {
        self(entry)
    }
}
