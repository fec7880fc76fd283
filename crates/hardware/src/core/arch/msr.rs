//! Machine State Register (MSR).
//!
//! Only the bits the MMU consumes are interpreted: the problem-state bit and the
//! two address-translation enables. The rest of the register is carried untouched.

use serde::Deserialize;

use super::mode::PrivilegeMode;
use crate::common::AccessType;
use crate::common::constants::{MSR_DR, MSR_IR, MSR_PR};

/// Raw Machine State Register value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct MachineState(pub u32);

impl MachineState {
    /// Wraps a raw MSR value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw register value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the current privilege level.
    pub const fn privilege(self) -> PrivilegeMode {
        if self.0 & MSR_PR != 0 {
            PrivilegeMode::User
        } else {
            PrivilegeMode::Supervisor
        }
    }

    /// Returns `true` if instruction address translation is enabled.
    pub const fn instruction_translation(self) -> bool {
        self.0 & MSR_IR != 0
    }

    /// Returns `true` if data address translation is enabled.
    pub const fn data_translation(self) -> bool {
        self.0 & MSR_DR != 0
    }

    /// Returns `true` if translation is enabled for the given access kind.
    pub const fn translation_enabled(self, access: AccessType) -> bool {
        if access.is_code() {
            self.instruction_translation()
        } else {
            self.data_translation()
        }
    }

    /// Returns a copy with the given privilege level.
    #[must_use]
    pub const fn with_privilege(self, mode: PrivilegeMode) -> Self {
        match mode {
            PrivilegeMode::User => Self(self.0 | MSR_PR),
            PrivilegeMode::Supervisor => Self(self.0 & !MSR_PR),
        }
    }

    /// Returns a copy with both instruction and data translation set to `enabled`.
    #[must_use]
    pub const fn with_translation(self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | MSR_IR | MSR_DR)
        } else {
            Self(self.0 & !(MSR_IR | MSR_DR))
        }
    }
}
