//! Hashed page table builder.
//!
//! Plants PTEs directly into physical memory at the group selected by the
//! same hash functions the MMU uses, so tests describe mappings rather than
//! raw PTEG offsets.

use ppcmmu_core::common::{EffectiveAddr, PhysAddr};
use ppcmmu_core::core::arch::TranslationContext;
use ppcmmu_core::core::units::mmu::htab::{self, HashKind, PageTableEntry};
use ppcmmu_core::soc::traits::PhysicalBus;

/// Default physical origin of the page table (1 MiB, minimum 64 KiB table).
pub const HTAB_ORIGIN: u32 = 0x0010_0000;

/// A hashed page table located by an SDR1 value.
#[derive(Clone, Copy, Debug)]
pub struct PageTable {
    sdr1: u32,
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new(HTAB_ORIGIN, 0)
    }
}

impl PageTable {
    pub const fn new(origin: u32, mask: u32) -> Self {
        Self {
            sdr1: (origin & 0xFFFF_0000) | (mask & 0x1FF),
        }
    }

    pub const fn sdr1(&self) -> u32 {
        self.sdr1
    }

    fn context(&self) -> TranslationContext {
        TranslationContext {
            sdr1: self.sdr1,
            ..TranslationContext::default()
        }
    }

    /// Returns the physical address of the group `hash` selects for `ea` in `vsid`.
    pub fn group_for(&self, vsid: u32, ea: u32, hash: HashKind) -> PhysAddr {
        let primary = htab::primary_hash(vsid, EffectiveAddr::new(ea));
        let value = match hash {
            HashKind::Primary => primary,
            HashKind::Secondary => htab::secondary_hash(primary),
        };
        htab::pteg_address(&self.context(), value)
    }

    /// Writes a valid PTE mapping the page of `ea` to `rpn` into `slot` of the
    /// selected group. Returns the PTE's physical address.
    #[allow(clippy::too_many_arguments)]
    pub fn map<B: PhysicalBus + ?Sized>(
        &self,
        bus: &mut B,
        vsid: u32,
        ea: u32,
        rpn: u32,
        pp: u32,
        hash: HashKind,
        slot: u32,
    ) -> PhysAddr {
        let pte = PageTableEntry::mapping(vsid, EffectiveAddr::new(ea), hash, rpn, pp);
        let addr = self.group_for(vsid, ea, hash).offset(slot * 8);
        bus.write_u64(addr.val(), pte.0);
        addr
    }

    /// Writes an arbitrary 64-bit entry at `addr`.
    pub fn write_raw<B: PhysicalBus + ?Sized>(bus: &mut B, addr: PhysAddr, pte: PageTableEntry) {
        bus.write_u64(addr.val(), pte.0);
    }
}
