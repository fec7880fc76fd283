//! MSR decoding unit tests.

use ppcmmu_core::common::AccessType;
use ppcmmu_core::core::arch::{MachineState, PrivilegeMode};

#[test]
fn reset_value_is_supervisor_untranslated() {
    let msr = MachineState::default();
    assert_eq!(msr.privilege(), PrivilegeMode::Supervisor);
    assert!(!msr.translation_enabled(AccessType::Fetch));
    assert!(!msr.translation_enabled(AccessType::Read));
}

#[test]
fn translation_enables_are_per_access_kind() {
    let ir_only = MachineState::new(0x20);
    assert!(ir_only.translation_enabled(AccessType::Fetch));
    assert!(!ir_only.translation_enabled(AccessType::Write));

    let dr_only = MachineState::new(0x10);
    assert!(!dr_only.translation_enabled(AccessType::Fetch));
    assert!(dr_only.translation_enabled(AccessType::Read));
    assert!(dr_only.translation_enabled(AccessType::Write));
}

#[test]
fn builders_touch_only_their_bits() {
    let msr = MachineState::new(0x0000_9000)
        .with_translation(true)
        .with_privilege(PrivilegeMode::User);
    assert_eq!(msr.raw(), 0x0000_9000 | 0x4000 | 0x30);
    assert_eq!(msr.privilege(), PrivilegeMode::User);

    let back = msr
        .with_translation(false)
        .with_privilege(PrivilegeMode::Supervisor);
    assert_eq!(back.raw(), 0x0000_9000);
}

#[test]
fn privilege_names() {
    assert_eq!(PrivilegeMode::User.to_string(), "User");
    assert_eq!(PrivilegeMode::Supervisor.name(), "Supervisor");
}
