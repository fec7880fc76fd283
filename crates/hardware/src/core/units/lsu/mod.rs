//! Load/Store Unit (LSU): the bus access dispatcher.
//!
//! This module performs sized accesses against the physical bus. It includes:
//! - [`unaligned`]: alignment checks and big-endian byte decomposition.
//! - [`reservation`]: the per-core load-reserve reservation.
//!
//! Naturally aligned accesses take a single bus call of the matching width.
//! Misaligned ones become `width / 8` byte accesses in increasing address order.
//! Every 32-bit store first clears a reservation held on its physical address.
//! Addresses here are always physical; translation happens upstream.

/// Load-reserve reservation tracking.
pub mod reservation;

/// Unaligned memory access handling.
pub mod unaligned;

use tracing::trace;

use self::reservation::Reservation;
use self::unaligned::{is_aligned, split_load, split_store};
use crate::common::PhysAddr;
use crate::soc::traits::PhysicalBus;

/// Reads one byte.
pub fn read_u8<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr) -> u8 {
    bus.read_u8(paddr.val())
}

/// Reads a big-endian halfword.
pub fn read_u16<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr) -> u16 {
    let addr = paddr.val();
    if is_aligned(addr, 2) {
        bus.read_u16(addr)
    } else {
        trace!("split read16 at {paddr}");
        split_load(addr, 2, |a| bus.read_u8(a)) as u16
    }
}

/// Reads a big-endian word.
pub fn read_u32<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr) -> u32 {
    let addr = paddr.val();
    if is_aligned(addr, 4) {
        bus.read_u32(addr)
    } else {
        trace!("split read32 at {paddr}");
        split_load(addr, 4, |a| bus.read_u8(a)) as u32
    }
}

/// Reads a big-endian doubleword.
pub fn read_u64<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr) -> u64 {
    let addr = paddr.val();
    if is_aligned(addr, 8) {
        bus.read_u64(addr)
    } else {
        trace!("split read64 at {paddr}");
        split_load(addr, 8, |a| bus.read_u8(a))
    }
}

/// Writes one byte.
pub fn write_u8<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr, val: u8) {
    bus.write_u8(paddr.val(), val);
}

/// Writes a big-endian halfword.
pub fn write_u16<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr, val: u16) {
    let addr = paddr.val();
    if is_aligned(addr, 2) {
        bus.write_u16(addr, val);
    } else {
        trace!("split write16 at {paddr}");
        split_store(addr, 2, u64::from(val), |a, b| bus.write_u8(a, b));
    }
}

/// Writes a big-endian word, clearing a reservation held on `paddr` first.
pub fn write_u32<B: PhysicalBus + ?Sized>(
    bus: &mut B,
    reservation: &mut Reservation,
    paddr: PhysAddr,
    val: u32,
) {
    reservation.clear_if(paddr);
    let addr = paddr.val();
    if is_aligned(addr, 4) {
        bus.write_u32(addr, val);
    } else {
        trace!("split write32 at {paddr}");
        split_store(addr, 4, u64::from(val), |a, b| bus.write_u8(a, b));
    }
}

/// Writes a big-endian doubleword.
pub fn write_u64<B: PhysicalBus + ?Sized>(bus: &mut B, paddr: PhysAddr, val: u64) {
    let addr = paddr.val();
    if is_aligned(addr, 8) {
        bus.write_u64(addr, val);
    } else {
        trace!("split write64 at {paddr}");
        split_store(addr, 8, val, |a, b| bus.write_u8(a, b));
    }
}
