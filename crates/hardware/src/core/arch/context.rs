//! Per-core translation state.
//!
//! `TranslationContext` gathers every register the MMU reads: MSR, the instruction
//! and data BAT arrays, the sixteen segment registers and SDR1. It is owned by the
//! CPU core and only borrowed by the translator for the duration of one access.

use serde::Deserialize;

use super::bat::BatEntry;
use super::mode::PrivilegeMode;
use super::msr::MachineState;
use super::segment::SegmentRegister;
use crate::common::constants::{BAT_SLOTS, SEGMENT_COUNT};
use crate::common::{AccessType, EffectiveAddr};

/// Hashed page table origin field of SDR1.
const SDR1_HTABORG_MASK: u32 = 0xFFFF_0000;

/// Hashed page table mask field of SDR1.
const SDR1_HTABMASK_MASK: u32 = 0x0000_01FF;

/// MMU-visible register state of one CPU core.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TranslationContext {
    /// Machine state register.
    pub msr: MachineState,
    /// Instruction BAT slots, checked in index order.
    pub ibat: [BatEntry; BAT_SLOTS],
    /// Data BAT slots, checked in index order.
    pub dbat: [BatEntry; BAT_SLOTS],
    /// Segment registers, indexed by the top 4 bits of the effective address.
    pub sr: [SegmentRegister; SEGMENT_COUNT],
    /// Page table base/size register.
    pub sdr1: u32,
}

impl TranslationContext {
    /// Returns the current privilege level.
    pub const fn privilege(&self) -> PrivilegeMode {
        self.msr.privilege()
    }

    /// Returns `true` if translation is enabled for the given access kind.
    pub const fn translation_enabled(&self, access: AccessType) -> bool {
        self.msr.translation_enabled(access)
    }

    /// Returns the BAT array consulted for the given access kind.
    pub const fn bats(&self, access: AccessType) -> &[BatEntry; BAT_SLOTS] {
        if access.is_code() { &self.ibat } else { &self.dbat }
    }

    /// Returns the segment register covering `ea`.
    pub const fn segment(&self, ea: EffectiveAddr) -> SegmentRegister {
        self.sr[ea.segment_index()]
    }

    /// Returns the physical base of the hashed page table.
    pub const fn htab_origin(&self) -> u32 {
        self.sdr1 & SDR1_HTABORG_MASK
    }

    /// Returns the hashed page table mask.
    pub const fn htab_mask(&self) -> u32 {
        self.sdr1 & SDR1_HTABMASK_MASK
    }

    /// Returns the size of the hashed page table in bytes.
    pub const fn htab_size(&self) -> u32 {
        (self.htab_mask() + 1) << 16
    }
}
