//! Architectural constants for the PowerPC 60x MMU.
//!
//! Field positions for the MSR, BAT, segment, SDR1 and PTE registers, plus the
//! fault status bits reported through DSISR/SRR1.

/// Page size shift (4 KiB pages).
pub const PAGE_SHIFT: u32 = 12;

/// Mask for the byte offset inside a 4 KiB page.
pub const PAGE_OFFSET_MASK: u32 = 0x0000_0FFF;

/// Mask for the 16-bit page index after shifting by [`PAGE_SHIFT`].
pub const PAGE_INDEX_MASK: u32 = 0xFFFF;

/// Shift of the abbreviated page index (API) within an effective address.
pub const API_SHIFT: u32 = 22;

/// Mask of the 6-bit abbreviated page index.
pub const API_MASK: u32 = 0x3F;

/// Number of BAT slots per access kind.
pub const BAT_SLOTS: usize = 4;

/// Number of segment registers.
pub const SEGMENT_COUNT: usize = 16;

/// Number of PTEs in one PTE group.
pub const PTES_PER_GROUP: usize = 8;

/// Size of a PTE in bytes.
pub const PTE_SIZE: u32 = 8;

/// Size of a PTE group in bytes.
pub const PTEG_SIZE: u32 = PTE_SIZE * PTES_PER_GROUP as u32;

/// MSR problem-state (user mode) bit.
pub const MSR_PR: u32 = 0x0000_4000;

/// MSR instruction address translation enable bit.
pub const MSR_IR: u32 = 0x0000_0020;

/// MSR data address translation enable bit.
pub const MSR_DR: u32 = 0x0000_0010;

/// DSISR/SRR1 bit: no translation found (page fault).
pub const FAULT_PAGE_BIT: u32 = 0x4000_0000;

/// DSISR/SRR1 bit: access denied by protection bits.
pub const FAULT_PROTECTION_BIT: u32 = 0x0800_0000;

/// DSISR bit: the faulting access was a store.
pub const FAULT_STORE_BIT: u32 = 0x0200_0000;
