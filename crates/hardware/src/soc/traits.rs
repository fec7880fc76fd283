//! Device and physical-bus traits.
//!
//! This module defines the two seams between the MMU and the rest of the machine:
//! 1. **`Device`:** Implemented by bus-attached components (RAM, MMIO). Offsets are
//!    device-relative and multi-byte values are big-endian.
//! 2. **`PhysicalBus`:** The sized physical read/write primitives the access
//!    dispatcher and the page-table search consume. `Bus` is the stock
//!    implementation; tests substitute mocks.

/// Trait for memory-mapped devices attached to the system bus.
pub trait Device: Send + Sync {
    /// Returns a short name for this device (e.g., `"RAM"`).
    fn name(&self) -> &str;
    /// Returns (`base_address`, `size_in_bytes`) for this device's region.
    fn address_range(&self) -> (u32, u32);
    /// Reads one byte at the given device-relative offset.
    fn read_u8(&mut self, offset: u32) -> u8;
    /// Reads two bytes (big-endian) at the given offset.
    fn read_u16(&mut self, offset: u32) -> u16;
    /// Reads four bytes (big-endian) at the given offset.
    fn read_u32(&mut self, offset: u32) -> u32;
    /// Reads eight bytes (big-endian) at the given offset.
    fn read_u64(&mut self, offset: u32) -> u64;
    /// Writes one byte at the given offset.
    fn write_u8(&mut self, offset: u32, val: u8);
    /// Writes two bytes (big-endian) at the given offset.
    fn write_u16(&mut self, offset: u32, val: u16);
    /// Writes four bytes (big-endian) at the given offset.
    fn write_u32(&mut self, offset: u32, val: u32);
    /// Writes eight bytes (big-endian) at the given offset.
    fn write_u64(&mut self, offset: u32, val: u64);

    /// Writes a contiguous byte slice at the given offset (default: byte-by-byte).
    fn write_bytes(&mut self, offset: u32, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.write_u8(offset.wrapping_add(i as u32), *byte);
        }
    }
}

/// Sized physical-address access, as seen by the MMU.
///
/// All multi-byte values are big-endian. Implementations never fault: unbacked
/// reads return an open-bus value and unbacked writes are dropped.
pub trait PhysicalBus {
    /// Reads one byte at a physical address.
    fn read_u8(&mut self, paddr: u32) -> u8;
    /// Reads a naturally aligned halfword at a physical address.
    fn read_u16(&mut self, paddr: u32) -> u16;
    /// Reads a naturally aligned word at a physical address.
    fn read_u32(&mut self, paddr: u32) -> u32;
    /// Reads a naturally aligned doubleword at a physical address.
    fn read_u64(&mut self, paddr: u32) -> u64;
    /// Writes one byte at a physical address.
    fn write_u8(&mut self, paddr: u32, val: u8);
    /// Writes a naturally aligned halfword at a physical address.
    fn write_u16(&mut self, paddr: u32, val: u16);
    /// Writes a naturally aligned word at a physical address.
    fn write_u32(&mut self, paddr: u32, val: u32);
    /// Writes a naturally aligned doubleword at a physical address.
    fn write_u64(&mut self, paddr: u32, val: u64);
    /// Returns `true` if `len` bytes starting at `paddr` are backed by a single device.
    fn is_backed(&self, paddr: u32, len: u32) -> bool;
}
