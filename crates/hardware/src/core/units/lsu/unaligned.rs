//! Unaligned memory access handling.
//!
//! This module splits misaligned loads and stores into single-byte accesses.
//! Bytes are visited in increasing address order, which for a big-endian
//! machine is most-significant byte first. Composition is done with explicit
//! shifts so the result never depends on host byte order.

/// Checks whether a memory access at `addr` with `size` bytes is naturally aligned.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The access width in bytes (1, 2, 4, or 8).
///
/// # Returns
///
/// `true` if the access is naturally aligned.
pub const fn is_aligned(addr: u32, size: u32) -> bool {
    if size <= 1 {
        return true;
    }
    (addr & (size - 1)) == 0
}

/// Splits an unaligned load into byte reads and reassembles the big-endian result.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The number of bytes to read (1, 2, 4, or 8).
/// * `read_byte` - A closure that reads a single byte from the given address.
///
/// # Returns
///
/// The value composed as `(accum << 8) | byte` over increasing addresses.
pub fn split_load<F>(addr: u32, size: u32, mut read_byte: F) -> u64
where
    F: FnMut(u32) -> u8,
{
    (0..size).fold(0u64, |accum, i| {
        (accum << 8) | u64::from(read_byte(addr.wrapping_add(i)))
    })
}

/// Splits an unaligned store into byte writes, most-significant byte first.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The number of bytes to write (1, 2, 4, or 8).
/// * `val` - The value to store; only the low `size` bytes are written.
/// * `write_byte` - A closure that writes a single byte to the given address.
pub fn split_store<F>(addr: u32, size: u32, val: u64, mut write_byte: F)
where
    F: FnMut(u32, u8),
{
    for i in 0..size {
        let shift = 8 * (size - 1 - i);
        write_byte(addr.wrapping_add(i), (val >> shift) as u8);
    }
}
