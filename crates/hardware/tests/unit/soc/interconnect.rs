//! Interconnect unit tests.
//!
//! Verifies routing across several devices, open-bus behaviour for unclaimed
//! addresses, the `is_backed` range check and image loading.

use ppcmmu_core::soc::interconnect::Bus;
use ppcmmu_core::soc::memory::Memory;
use ppcmmu_core::soc::traits::PhysicalBus;

fn two_banks() -> Bus {
    let mut bus = Bus::new();
    bus.add_device(Box::new(Memory::new(0x8000, 0x1000)));
    bus.add_device(Box::new(Memory::new(0x0000, 0x1000)));
    bus
}

#[test]
fn routes_by_address() {
    let mut bus = two_banks();
    assert_eq!(bus.device_count(), 2);

    bus.write_u32(0x0010, 0x1111_1111);
    bus.write_u32(0x8010, 0x2222_2222);
    assert_eq!(bus.read_u32(0x0010), 0x1111_1111);
    assert_eq!(bus.read_u32(0x8010), 0x2222_2222);
}

#[test]
fn unclaimed_reads_are_zero_and_writes_dropped() {
    let mut bus = two_banks();
    bus.write_u32(0x4000, 0xFFFF_FFFF);
    assert_eq!(bus.read_u32(0x4000), 0);
    assert_eq!(bus.read_u64(0xFFFF_FFF0), 0);
    assert_eq!(bus.read_u8(0x1000), 0);
}

#[test]
fn backing_needs_one_device_for_whole_range() {
    let bus = two_banks();
    assert!(bus.is_backed(0x0000, 0x1000));
    assert!(bus.is_backed(0x8FC0, 64));
    assert!(!bus.is_backed(0x0FC1, 64));
    assert!(!bus.is_backed(0x4000, 1));
    assert!(!bus.is_backed(0xFFFF_FFF0, 64));
    assert!(bus.is_backed(0x4000, 0));
}

#[test]
fn image_loading() {
    let mut bus = two_banks();
    bus.load_binary_at(&[0xDE, 0xAD, 0xBE, 0xEF], 0x8100);
    assert_eq!(bus.read_u32(0x8100), 0xDEAD_BEEF);

    // Straddles the end of the low bank: the tail is dropped.
    bus.load_binary_at(&[1, 2, 3, 4], 0x0FFE);
    assert_eq!(bus.read_u16(0x0FFE), 0x0102);
    assert_eq!(bus.read_u8(0x1000), 0);
}
