//! Segment registers.
//!
//! ```text
//! | T | Ks | Kp | N | 0000 | VSID (23..0) |
//! ```
//!
//! `T` selects a direct-store segment (not modelled), `N` forbids instruction
//! fetches, and VSID is the address-space identifier fed to the page-table hash.

use serde::Deserialize;

/// Direct-store segment bit.
const T_BIT: u32 = 0x8000_0000;

/// Supervisor-state protection key.
const KS_BIT: u32 = 0x4000_0000;

/// Problem-state protection key.
const KP_BIT: u32 = 0x2000_0000;

/// No-execute bit.
const N_BIT: u32 = 0x1000_0000;

/// Virtual segment ID field.
const VSID_MASK: u32 = 0x00FF_FFFF;

/// One segment register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct SegmentRegister(pub u32);

impl SegmentRegister {
    /// Wraps a raw segment register value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Builds an ordinary (page-translated) segment with the given VSID.
    pub const fn with_vsid(vsid: u32) -> Self {
        Self(vsid & VSID_MASK)
    }

    /// Returns a copy with the no-execute bit set.
    #[must_use]
    pub const fn no_execute(self) -> Self {
        Self(self.0 | N_BIT)
    }

    /// Returns the raw register value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the virtual segment ID (context id).
    pub const fn vsid(self) -> u32 {
        self.0 & VSID_MASK
    }

    /// Returns `true` for direct-store segments.
    pub const fn is_direct_store(self) -> bool {
        self.0 & T_BIT != 0
    }

    /// Returns `true` if instruction fetches from this segment are forbidden.
    pub const fn is_no_execute(self) -> bool {
        self.0 & N_BIT != 0
    }

    /// Returns the supervisor-state key bit.
    pub const fn ks(self) -> bool {
        self.0 & KS_BIT != 0
    }

    /// Returns the problem-state key bit.
    pub const fn kp(self) -> bool {
        self.0 & KP_BIT != 0
    }
}
