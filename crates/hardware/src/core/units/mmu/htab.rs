//! Hashed page table search.
//!
//! This module implements the page-table half of translation. Given the VSID of
//! the segment and the effective address it:
//! 1. **Hashes:** Computes the primary hash and its complement (secondary hash).
//! 2. **Locates:** Turns each hash into a PTE group (PTEG) address using SDR1.
//! 3. **Scans:** Reads the eight PTEs of the group through the physical access
//!    dispatcher and compares each against the expected tag.
//!
//! The primary group is always probed first, then the secondary one. PTEs are
//! only ever read here, never written back.

use tracing::{debug, trace};

use crate::common::constants::{PAGE_OFFSET_MASK, PTE_SIZE, PTEG_SIZE, PTES_PER_GROUP};
use crate::common::{EffectiveAddr, PhysAddr};
use crate::core::arch::TranslationContext;
use crate::core::units::lsu;
use crate::soc::traits::PhysicalBus;

/// Low 19 bits of the VSID participate in the hash.
const HASH_VSID_MASK: u32 = 0x0007_FFFF;

/// XOR mask turning a primary hash into the secondary one.
const SECONDARY_HASH_MASK: u32 = 0x0007_FFFF;

/// Hash bits selecting the PTEG within a 64 KiB table.
const HASH_LOW_MASK: u32 = 0x3FF;

/// Shift to the hash bits combined with HTABMASK.
const HASH_HIGH_SHIFT: u32 = 10;

/// PTE word 0 valid bit.
const PTE_VALID_BIT: u32 = 0x8000_0000;

/// PTE word 0 hash-function identifier bit.
const PTE_H_BIT: u32 = 0x40;

/// Shift of the VSID inside PTE word 0.
const PTE_VSID_SHIFT: u32 = 7;

/// PTE word 1 real page number field.
const PTE_RPN_MASK: u32 = 0xFFFF_F000;

/// PTE word 1 page protection field.
const PTE_PP_MASK: u32 = 0x3;

/// Which hash function located a PTE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// The primary hash.
    Primary,
    /// The complemented (secondary) hash.
    Secondary,
}

/// A raw 64-bit page table entry; word 0 is the upper half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PageTableEntry(pub u64);

impl PageTableEntry {
    /// Builds an entry from its two 32-bit words.
    pub const fn from_words(word0: u32, word1: u32) -> Self {
        Self(((word0 as u64) << 32) | word1 as u64)
    }

    /// Builds a valid entry mapping the page of `ea` in segment `vsid` to `rpn`.
    pub const fn mapping(vsid: u32, ea: EffectiveAddr, hash: HashKind, rpn: u32, pp: u32) -> Self {
        Self::from_words(
            expected_tag(vsid, ea, hash),
            (rpn & PTE_RPN_MASK) | (pp & PTE_PP_MASK),
        )
    }

    /// Returns word 0 (V, VSID, H, API).
    pub const fn tag(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Returns word 1 (RPN, R, C, WIMG, PP).
    pub const fn word1(self) -> u32 {
        self.0 as u32
    }

    /// Returns `true` if the valid bit is set.
    pub const fn is_valid(self) -> bool {
        self.tag() & PTE_VALID_BIT != 0
    }

    /// Returns the physical page base (RPN, left-aligned).
    pub const fn physical_page(self) -> u32 {
        self.word1() & PTE_RPN_MASK
    }

    /// Returns the 2-bit page protection code.
    pub const fn permission(self) -> u32 {
        self.word1() & PTE_PP_MASK
    }
}

/// Computes the primary page-table hash.
pub const fn primary_hash(vsid: u32, ea: EffectiveAddr) -> u32 {
    (vsid & HASH_VSID_MASK) ^ ea.page_index()
}

/// Computes the secondary hash from the primary one.
pub const fn secondary_hash(primary: u32) -> u32 {
    primary ^ SECONDARY_HASH_MASK
}

/// Builds the word-0 tag a matching PTE must carry.
pub const fn expected_tag(vsid: u32, ea: EffectiveAddr, hash: HashKind) -> u32 {
    let h = match hash {
        HashKind::Primary => 0,
        HashKind::Secondary => PTE_H_BIT,
    };
    PTE_VALID_BIT | (vsid << PTE_VSID_SHIFT) | h | ea.api()
}

/// Computes the physical address of the PTE group selected by `hash`.
pub const fn pteg_address(ctx: &TranslationContext, hash: u32) -> PhysAddr {
    let high = (ctx.htab_mask() & (hash >> HASH_HIGH_SHIFT)) << 16;
    let low = (hash & HASH_LOW_MASK) << 6;
    PhysAddr::new(ctx.htab_origin() | high | low)
}

/// A fetched PTE group: a bounds-checked view of eight entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PteGroup {
    base: PhysAddr,
    entries: [PageTableEntry; PTES_PER_GROUP],
}

impl PteGroup {
    /// Reads the group at `base` through the physical (untranslated) access path.
    ///
    /// Returns `None` if the 64 bytes of the group are not backed by a device.
    pub fn fetch<B: PhysicalBus + ?Sized>(bus: &mut B, base: PhysAddr) -> Option<Self> {
        if !bus.is_backed(base.val(), PTEG_SIZE) {
            return None;
        }
        let mut entries = [PageTableEntry::default(); PTES_PER_GROUP];
        let mut addr = base;
        for entry in &mut entries {
            *entry = PageTableEntry(lsu::read_u64(bus, addr));
            addr = addr.offset(PTE_SIZE);
        }
        Some(Self { base, entries })
    }

    /// Returns the physical address of the group.
    pub const fn base(&self) -> PhysAddr {
        self.base
    }

    /// Returns entry `index`, or `None` past the end of the group.
    pub fn entry(&self, index: usize) -> Option<PageTableEntry> {
        self.entries.get(index).copied()
    }

    /// Returns the first entry whose tag equals `tag`, with its index.
    pub fn find(&self, tag: u32) -> Option<(usize, PageTableEntry)> {
        self.entries
            .iter()
            .copied()
            .enumerate()
            .find(|(_, pte)| pte.tag() == tag)
    }
}

/// A PTE that matched an effective address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMatch {
    /// Translated physical address.
    pub paddr: PhysAddr,
    /// PP code of the entry.
    pub permission: u32,
    /// Hash function that located the entry.
    pub hash: HashKind,
    /// Physical address of the entry itself.
    pub pte_addr: PhysAddr,
}

/// Searches both PTE groups for a translation of `ea` in segment `vsid`.
pub fn search<B: PhysicalBus + ?Sized>(
    ctx: &TranslationContext,
    vsid: u32,
    ea: EffectiveAddr,
    bus: &mut B,
) -> Option<PageMatch> {
    let primary = primary_hash(vsid, ea);
    let probes = [
        (HashKind::Primary, primary),
        (HashKind::Secondary, secondary_hash(primary)),
    ];

    for (kind, hash) in probes {
        let base = pteg_address(ctx, hash);
        let Some(group) = PteGroup::fetch(bus, base) else {
            debug!("{kind:?} PTEG at {base} is not backed; skipping");
            continue;
        };
        let tag = expected_tag(vsid, ea, kind);
        trace!("probing {kind:?} PTEG {base} for tag {tag:#010x}");
        if let Some((index, pte)) = group.find(tag) {
            let paddr = PhysAddr::new(pte.physical_page() | (ea.val() & PAGE_OFFSET_MASK));
            return Some(PageMatch {
                paddr,
                permission: pte.permission(),
                hash: kind,
                pte_addr: base.offset(index as u32 * PTE_SIZE),
            });
        }
    }
    None
}
