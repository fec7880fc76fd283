//! Bus access dispatcher unit tests.
//!
//! Aligned accesses must be a single bus call of the access width; misaligned
//! ones must become single-byte calls in increasing address order. Word stores
//! clear a reservation on their exact physical address.

use mockall::Sequence;
use mockall::predicate::eq;
use ppcmmu_core::common::PhysAddr;
use ppcmmu_core::core::units::lsu::{self, reservation::Reservation};
use ppcmmu_core::soc::interconnect::Bus;
use ppcmmu_core::soc::memory::Memory;
use ppcmmu_core::soc::traits::PhysicalBus;
use proptest::prelude::*;

use crate::common::mocks::bus::MockPhysBus;

fn ram() -> Bus {
    let mut bus = Bus::new();
    bus.add_device(Box::new(Memory::new(0, 0x1000)));
    bus
}

// ══════════════════════════════════════════════════════════
// 1. Aligned fast path
// ══════════════════════════════════════════════════════════

#[test]
fn aligned_accesses_use_one_bus_call() {
    let mut bus = MockPhysBus::new();
    bus.expect_read_u16().with(eq(0x102)).times(1).return_const(0xBEEFu16);
    bus.expect_read_u32().with(eq(0x104)).times(1).return_const(0xDEAD_BEEFu32);
    bus.expect_read_u64().with(eq(0x108)).times(1).return_const(7u64);
    bus.expect_write_u64().with(eq(0x110), eq(9u64)).times(1).return_const(());
    bus.expect_read_u8().never();
    bus.expect_write_u8().never();

    assert_eq!(lsu::read_u16(&mut bus, PhysAddr::new(0x102)), 0xBEEF);
    assert_eq!(lsu::read_u32(&mut bus, PhysAddr::new(0x104)), 0xDEAD_BEEF);
    assert_eq!(lsu::read_u64(&mut bus, PhysAddr::new(0x108)), 7);
    lsu::write_u64(&mut bus, PhysAddr::new(0x110), 9);
}

// ══════════════════════════════════════════════════════════
// 2. Decomposition
// ══════════════════════════════════════════════════════════

#[test]
fn misaligned_word_read_is_four_ordered_byte_reads() {
    let mut bus = MockPhysBus::new();
    let mut seq = Sequence::new();
    for (addr, byte) in [(0x201, 0x12u8), (0x202, 0x34), (0x203, 0x56), (0x204, 0x78)] {
        bus.expect_read_u8()
            .with(eq(addr))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(byte);
    }
    bus.expect_read_u32().never();

    assert_eq!(lsu::read_u32(&mut bus, PhysAddr::new(0x201)), 0x1234_5678);
}

#[test]
fn misaligned_halfword_write_is_two_ordered_byte_writes() {
    let mut bus = MockPhysBus::new();
    let mut seq = Sequence::new();
    bus.expect_write_u8()
        .with(eq(0x301), eq(0xAB))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    bus.expect_write_u8()
        .with(eq(0x302), eq(0xCD))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    bus.expect_write_u16().never();

    lsu::write_u16(&mut bus, PhysAddr::new(0x301), 0xABCD);
}

#[test]
fn misaligned_write_does_not_touch_neighbours() {
    let mut bus = ram();
    for addr in 0x100..0x110 {
        bus.write_u8(addr, 0xEE);
    }
    lsu::write_u64(&mut bus, PhysAddr::new(0x103), 0x0102_0304_0506_0708);

    assert_eq!(bus.read_u8(0x102), 0xEE);
    assert_eq!(bus.read_u8(0x10B), 0xEE);
    assert_eq!(lsu::read_u64(&mut bus, PhysAddr::new(0x103)), 0x0102_0304_0506_0708);
}

proptest! {
    #[test]
    fn unaligned_word_read_equals_composed_bytes(offset in 0u32..0xF00, bytes in any::<[u8; 4]>()) {
        let mut bus = ram();
        for (i, b) in bytes.iter().enumerate() {
            bus.write_u8(offset + i as u32, *b);
        }
        let expected = bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b));
        prop_assert_eq!(lsu::read_u32(&mut bus, PhysAddr::new(offset)), expected);
    }

    #[test]
    fn word_store_is_big_endian(offset in 0u32..0xF00, val in any::<u32>()) {
        let mut bus = ram();
        let mut res = Reservation::new();
        lsu::write_u32(&mut bus, &mut res, PhysAddr::new(offset), val);
        for i in 0..4u32 {
            prop_assert_eq!(bus.read_u8(offset + i), (val >> (24 - 8 * i)) as u8);
        }
    }
}

// ══════════════════════════════════════════════════════════
// 3. Reservation clearing
// ══════════════════════════════════════════════════════════

#[test]
fn word_store_to_reserved_address_clears() {
    let mut bus = ram();
    let mut res = Reservation::new();
    res.reserve(PhysAddr::new(0x40));

    lsu::write_u32(&mut bus, &mut res, PhysAddr::new(0x44), 1);
    assert!(res.is_active());

    lsu::write_u32(&mut bus, &mut res, PhysAddr::new(0x40), 2);
    assert!(!res.is_active());
    assert_eq!(bus.read_u32(0x40), 2);
}

#[test]
fn misaligned_word_store_clears_on_start_address() {
    let mut bus = ram();
    let mut res = Reservation::new();
    res.reserve(PhysAddr::new(0x41));

    lsu::write_u32(&mut bus, &mut res, PhysAddr::new(0x41), 0xAABB_CCDD);
    assert!(!res.is_active());
}

#[test]
fn other_widths_leave_reservation() {
    let mut bus = ram();
    let mut res = Reservation::new();
    res.reserve(PhysAddr::new(0x40));

    lsu::write_u8(&mut bus, PhysAddr::new(0x40), 1);
    lsu::write_u16(&mut bus, PhysAddr::new(0x40), 1);
    lsu::write_u64(&mut bus, PhysAddr::new(0x40), 1);
    let _ = lsu::read_u32(&mut bus, PhysAddr::new(0x40));

    assert_eq!(res.address(), Some(PhysAddr::new(0x40)));
}
