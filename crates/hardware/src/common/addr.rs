//! Effective and Physical address types.
//!
//! This module defines strong types for the two address spaces the MMU deals with.
//! It provides the following:
//! 1. **Type Safety:** Distinguishes effective (instruction-visible) addresses from
//!    physical (bus-visible) addresses at compile time.
//! 2. **Field Extraction:** Segment index, page index, abbreviated page index and
//!    page offset, as used by the hashed page table.
//! 3. **Formatting:** Hex display used by tracing and fault reports.

use std::fmt;

use super::constants::{API_MASK, API_SHIFT, PAGE_INDEX_MASK, PAGE_OFFSET_MASK, PAGE_SHIFT};

/// An effective address, as generated by instruction execution.
///
/// Effective addresses must be translated by the MMU (unless translation is
/// disabled for the access kind) before they are presented to the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EffectiveAddr(pub u32);

/// A physical address, as presented to the system bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PhysAddr(pub u32);

impl EffectiveAddr {
    /// Creates a new effective address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the index of the segment register covering this address (top 4 bits).
    #[inline]
    pub const fn segment_index(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Returns the 16-bit page index within the segment.
    #[inline]
    pub const fn page_index(self) -> u32 {
        (self.0 >> PAGE_SHIFT) & PAGE_INDEX_MASK
    }

    /// Returns the abbreviated page index (upper 6 bits of the page index),
    /// which is the part of the page number stored in a PTE tag.
    #[inline]
    pub const fn api(self) -> u32 {
        (self.0 >> API_SHIFT) & API_MASK
    }

    /// Returns the byte offset within a 4 KiB page.
    #[inline]
    pub const fn page_offset(self) -> u32 {
        self.0 & PAGE_OFFSET_MASK
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the address `bytes` further on, wrapping at the top of the 32-bit space.
    #[inline]
    pub const fn offset(self, bytes: u32) -> Self {
        Self(self.0.wrapping_add(bytes))
    }
}

impl From<u32> for EffectiveAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl From<u32> for PhysAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl fmt::Display for EffectiveAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
