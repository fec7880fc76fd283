//! Reservation tracker unit tests.

use ppcmmu_core::common::PhysAddr;
use ppcmmu_core::core::units::lsu::reservation::Reservation;

#[test]
fn starts_inactive() {
    let res = Reservation::new();
    assert!(!res.is_active());
    assert_eq!(res.address(), None);
}

#[test]
fn clear_if_matches_exact_address_only() {
    let mut res = Reservation::new();
    res.reserve(PhysAddr::new(0x1000));

    res.clear_if(PhysAddr::new(0x1004));
    assert_eq!(res.address(), Some(PhysAddr::new(0x1000)));

    res.clear_if(PhysAddr::new(0x1000));
    assert!(!res.is_active());
}

#[test]
fn clear_if_on_inactive_is_noop() {
    let mut res = Reservation::new();
    res.clear_if(PhysAddr::new(0));
    assert!(!res.is_active());
}

#[test]
fn reserve_replaces_previous() {
    let mut res = Reservation::new();
    res.reserve(PhysAddr::new(0x1000));
    res.reserve(PhysAddr::new(0x2000));
    res.clear_if(PhysAddr::new(0x1000));
    assert_eq!(res.address(), Some(PhysAddr::new(0x2000)));

    res.clear();
    assert_eq!(res.address(), None);
}
