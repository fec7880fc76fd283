//! Segment register unit tests.

use ppcmmu_core::core::arch::SegmentRegister;

#[test]
fn ordinary_segment() {
    let sr = SegmentRegister::with_vsid(0x0012_3456);
    assert_eq!(sr.vsid(), 0x12_3456);
    assert!(!sr.is_direct_store());
    assert!(!sr.is_no_execute());
}

#[test]
fn vsid_is_truncated_to_24_bits() {
    assert_eq!(SegmentRegister::with_vsid(0xFF12_3456).vsid(), 0x12_3456);
    assert!(!SegmentRegister::with_vsid(0xFF12_3456).is_direct_store());
}

#[test]
fn flag_bits() {
    let sr = SegmentRegister::new(0x8000_0000 | 0x4000_0000 | 0x2000_0000 | 0x10);
    assert!(sr.is_direct_store());
    assert!(sr.ks());
    assert!(sr.kp());
    assert!(!sr.is_no_execute());
    assert_eq!(sr.vsid(), 0x10);

    let nx = SegmentRegister::with_vsid(7).no_execute();
    assert!(nx.is_no_execute());
    assert_eq!(nx.raw(), 0x1000_0007);
}
