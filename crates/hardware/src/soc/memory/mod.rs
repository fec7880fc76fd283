//! Physical System Memory (RAM).
//!
//! This module implements the main system memory device. It provides:
//! 1. **Buffer:** Bounds-checked backing storage (`RamBuffer`) for RAM contents.
//! 2. **Memory:** Device implementation that maps the buffer at a physical base address.

/// Bounds-checked RAM backing store.
pub mod buffer;

use tracing::warn;

use self::buffer::RamBuffer;
use crate::soc::traits::Device;

/// System Memory device.
#[derive(Debug)]
pub struct Memory {
    buffer: RamBuffer,
    base_addr: u32,
    size: u32,
}

impl Memory {
    /// Creates a zero-filled RAM device of `size` bytes mapped at `base_addr`.
    pub fn new(base_addr: u32, size: u32) -> Self {
        Self {
            buffer: RamBuffer::new(size as usize),
            base_addr,
            size,
        }
    }

    /// Loads a byte slice into memory at a device-relative offset.
    ///
    /// Returns `false` if the slice does not fit.
    pub fn load(&mut self, data: &[u8], offset: u32) -> bool {
        self.buffer.write_slice(offset as usize, data)
    }

    fn read_be<const N: usize>(&self, offset: u32) -> u64 {
        self.buffer.read_be::<N>(offset as usize).unwrap_or_else(|| {
            warn!(
                "RAM read of {N} bytes at offset {offset:#x} out of range (base {:#010x})",
                self.base_addr
            );
            0
        })
    }

    fn write_be<const N: usize>(&mut self, offset: u32, val: u64) {
        if !self.buffer.write_be::<N>(offset as usize, val) {
            warn!(
                "RAM write of {N} bytes at offset {offset:#x} out of range (base {:#010x})",
                self.base_addr
            );
        }
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        "RAM"
    }

    fn address_range(&self) -> (u32, u32) {
        (self.base_addr, self.size)
    }

    fn read_u8(&mut self, offset: u32) -> u8 {
        self.read_be::<1>(offset) as u8
    }

    fn read_u16(&mut self, offset: u32) -> u16 {
        self.read_be::<2>(offset) as u16
    }

    fn read_u32(&mut self, offset: u32) -> u32 {
        self.read_be::<4>(offset) as u32
    }

    fn read_u64(&mut self, offset: u32) -> u64 {
        self.read_be::<8>(offset)
    }

    fn write_u8(&mut self, offset: u32, val: u8) {
        self.write_be::<1>(offset, u64::from(val));
    }

    fn write_u16(&mut self, offset: u32, val: u16) {
        self.write_be::<2>(offset, u64::from(val));
    }

    fn write_u32(&mut self, offset: u32, val: u32) {
        self.write_be::<4>(offset, u64::from(val));
    }

    fn write_u64(&mut self, offset: u32, val: u64) {
        self.write_be::<8>(offset, val);
    }

    fn write_bytes(&mut self, offset: u32, data: &[u8]) {
        if !self.load(data, offset) {
            warn!(
                "RAM image of {} bytes at offset {offset:#x} does not fit",
                data.len()
            );
        }
    }
}
