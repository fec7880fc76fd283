//! Block Address Translation (BAT) registers.
//!
//! Each BAT slot is an upper/lower register pair:
//!
//! ```text
//! upper: | BEPI (31..17) | 0000 | BL (12..2) | Vs | Vp |
//! lower: | BRPN (31..17) | .... | WIMG (6..3) | 0 | PP |
//! ```
//!
//! A block covers `(BL + 1) * 128 KiB` bytes when BL is a contiguous run of ones
//! from bit 0, which is the only encoding software is allowed to use.

use serde::Deserialize;

use super::mode::PrivilegeMode;

/// Mask of the block effective page index (BEPI) and block real page number (BRPN).
const BLOCK_BASE_MASK: u32 = 0xFFFE_0000;

/// Mask of the block length field in the upper register.
const BL_MASK: u32 = 0x0000_1FFC;

/// Shift of the block length field in the upper register.
const BL_SHIFT: u32 = 2;

/// Shift that aligns the block length field with effective address bits 27..17.
const BL_ADDR_SHIFT: u32 = 17;

/// Byte offset mask within the smallest (128 KiB) block.
const MIN_BLOCK_OFFSET_MASK: u32 = 0x0001_FFFF;

/// Supervisor-mode valid bit.
const VS_BIT: u32 = 0x2;

/// User-mode valid bit.
const VP_BIT: u32 = 0x1;

/// Page protection bits in the lower register.
const PP_MASK: u32 = 0x3;

/// Storage-attribute bits (WIMG) in the lower register.
const WIMG_MASK: u32 = 0x78;

/// One BAT slot (upper and lower register).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct BatEntry {
    /// Raw BATU value.
    pub upper: u32,
    /// Raw BATL value.
    pub lower: u32,
}

impl BatEntry {
    /// Wraps a raw BATU/BATL pair.
    pub const fn new(upper: u32, lower: u32) -> Self {
        Self { upper, lower }
    }

    /// Builds a block mapping `size` bytes at `effective` onto `physical`.
    ///
    /// `size` must be a power of two between 128 KiB and 256 MiB, and both bases
    /// must be aligned to it; `pp` is the 2-bit permission code.
    pub const fn block(
        effective: u32,
        physical: u32,
        size: u32,
        pp: u32,
        valid_in_supervisor: bool,
        valid_in_user: bool,
    ) -> Self {
        let bl = ((size >> BL_ADDR_SHIFT).saturating_sub(1) << BL_SHIFT) & BL_MASK;
        let vs = if valid_in_supervisor { VS_BIT } else { 0 };
        let vp = if valid_in_user { VP_BIT } else { 0 };
        Self {
            upper: (effective & BLOCK_BASE_MASK) | bl | vs | vp,
            lower: (physical & BLOCK_BASE_MASK) | (pp & PP_MASK),
        }
    }

    /// Returns the block effective base (BEPI, left-aligned).
    pub const fn base_effective(self) -> u32 {
        self.upper & BLOCK_BASE_MASK
    }

    /// Returns the block physical base (BRPN, left-aligned).
    pub const fn base_physical(self) -> u32 {
        self.lower & BLOCK_BASE_MASK
    }

    /// Returns the raw 11-bit block length field.
    pub const fn length_field(self) -> u32 {
        (self.upper & BL_MASK) >> BL_SHIFT
    }

    /// Returns the length mask aligned to effective address bits 27..17.
    pub const fn length_mask(self) -> u32 {
        self.length_field() << BL_ADDR_SHIFT
    }

    /// Returns the mask of effective-address bits compared against BEPI.
    pub const fn compare_mask(self) -> u32 {
        !self.length_mask() & BLOCK_BASE_MASK
    }

    /// Returns the mask of effective-address bits passed through as the in-block offset.
    pub const fn offset_mask(self) -> u32 {
        self.length_mask() | MIN_BLOCK_OFFSET_MASK
    }

    /// Returns the size of the block in bytes.
    pub const fn size(self) -> u64 {
        self.offset_mask() as u64 + 1
    }

    /// Returns the 2-bit page protection code.
    pub const fn permission(self) -> u32 {
        self.lower & PP_MASK
    }

    /// Returns the WIMG storage attributes.
    pub const fn wimg(self) -> u32 {
        (self.lower & WIMG_MASK) >> 3
    }

    /// Returns `true` if the block is valid in supervisor state.
    pub const fn valid_in_supervisor(self) -> bool {
        self.upper & VS_BIT != 0
    }

    /// Returns `true` if the block is valid in problem (user) state.
    pub const fn valid_in_user(self) -> bool {
        self.upper & VP_BIT != 0
    }

    /// Returns `true` if the block is valid for the given privilege level.
    pub const fn valid_for(self, mode: PrivilegeMode) -> bool {
        match mode {
            PrivilegeMode::User => self.valid_in_user(),
            PrivilegeMode::Supervisor => self.valid_in_supervisor(),
        }
    }

    /// Returns `true` if `ea` lies inside this block (validity not considered).
    pub const fn covers(self, ea: u32) -> bool {
        let mask = self.compare_mask();
        (ea & mask) == (self.base_effective() & mask)
    }

    /// Maps an effective address inside this block to its physical address.
    pub const fn map(self, ea: u32) -> u32 {
        (self.base_physical() & self.compare_mask()) | (ea & self.offset_mask())
    }
}
