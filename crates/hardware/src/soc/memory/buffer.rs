//! RAM Buffer Implementation.
//!
//! This module provides the backing store for emulated physical RAM. Every access
//! goes through a bounds-checked span: callers get `None` instead of touching memory
//! outside the buffer, and multi-byte values are composed explicitly as big-endian.

/// Owned, bounds-checked byte storage for a RAM device.
#[derive(Clone, Debug, Default)]
pub struct RamBuffer {
    bytes: Vec<u8>,
}

impl RamBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the `len`-byte span starting at `offset`, if it lies inside the buffer.
    pub fn span(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }

    /// Mutable counterpart of [`RamBuffer::span`].
    pub fn span_mut(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get_mut(offset..end)
    }

    /// Reads `N` bytes at `offset` and composes them most-significant byte first.
    pub fn read_be<const N: usize>(&self, offset: usize) -> Option<u64> {
        let span = self.span(offset, N)?;
        Some(span.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
    }

    /// Writes the low `N` bytes of `val` at `offset`, most-significant byte first.
    ///
    /// Returns `false` (and writes nothing) if the span is out of bounds.
    pub fn write_be<const N: usize>(&mut self, offset: usize, val: u64) -> bool {
        let Some(span) = self.span_mut(offset, N) else {
            return false;
        };
        for (i, slot) in span.iter_mut().enumerate() {
            let shift = 8 * (N - 1 - i);
            *slot = (val >> shift) as u8;
        }
        true
    }

    /// Copies `data` into the buffer at `offset`; returns `false` if it does not fit.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> bool {
        match self.span_mut(offset, data.len()) {
            Some(span) => {
                span.copy_from_slice(data);
                true
            }
            None => false,
        }
    }
}
