//! Owned element buffers. `RawBuf` covers the lifecycle end of the engine:
//! creation (always zero-filled), creation from initial values, cloning and
//! the two forms of destruction. All mutation goes through the free
//! functions in the other modules via [`RawBuf::as_mut_slice`].

use crate::error::{Error, Result};
use crate::{bulk, slot, DestroyEntry};

/// A heap-allocated buffer of `len` elements, each `stride` bytes.
///
/// The handle exclusively owns its memory for its whole lifetime. Dropping
/// (or [`destroy`](RawBuf::destroy)) releases the bytes without looking at
/// element contents; use [`destroy_with_entries`](RawBuf::destroy_with_entries)
/// when elements own external resources.
#[derive(Debug)]
pub struct RawBuf {
    bytes: Box<[u8]>,
    stride: usize,
}

impl RawBuf {
    /// Allocates a zero-filled buffer for `length` elements of `stride` bytes.
    pub fn create(stride: usize, length: usize) -> Result<Self> {
        if stride == 0 {
            return Err(Error::ZeroStride);
        }
        if length == 0 {
            return Err(Error::ZeroLength);
        }

        let needed = stride
            .checked_mul(length)
            .ok_or(Error::SizeOverflow { stride, length })?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(needed)
            .map_err(|_| Error::AllocFailed { bytes: needed })?;
        bytes.resize(needed, 0u8);

        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            stride,
        })
    }

    /// Allocates a buffer initialized from `init`, whose byte length must be
    /// a non-zero whole number of strides. The element count is inferred.
    pub fn create_init(stride: usize, init: &[u8]) -> Result<Self> {
        if stride == 0 {
            return Err(Error::ZeroStride);
        }
        if init.is_empty() {
            return Err(Error::ZeroLength);
        }
        if init.len() % stride != 0 {
            return Err(Error::ValueSizeMismatch {
                expected: stride,
                got: init.len() % stride,
            });
        }

        let mut buf = Self::create(stride, init.len() / stride)?;
        buf.bytes.copy_from_slice(init);
        Ok(buf)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Element count. Always at least 1.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Allocates an independent buffer with copied contents. Composes
    /// [`create`](RawBuf::create) and [`bulk::copy`]; a half-built clone is
    /// released by ownership if the copy step fails.
    pub fn try_clone(&self) -> Result<Self> {
        let mut clone = Self::create(self.stride, self.len())?;
        bulk::copy(clone.as_mut_slice(), self.as_slice(), self.stride, self.len())?;
        Ok(clone)
    }

    /// Releases the buffer without touching element contents.
    pub fn destroy(self) {}

    /// Invokes `dtor` on every element in ascending index order, then
    /// releases the buffer.
    pub fn destroy_with_entries<D: DestroyEntry>(mut self, mut dtor: D) {
        let stride = self.stride;
        let len = self.len();

        for idx in 0..len {
            dtor.destroy(slot::slot_mut(&mut self.bytes, stride, idx));
        }
    }
}
