//! Block address translation lookup.
//!
//! Scans the four BAT slots of the requested access kind in slot order. The
//! first slot that is valid for the current privilege level and covers the
//! effective address wins; later slots are never consulted.

use tracing::trace;

use crate::common::constants::BAT_SLOTS;
use crate::common::{EffectiveAddr, PhysAddr};
use crate::core::arch::{BatEntry, PrivilegeMode};

/// A BAT slot that matched an effective address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockMatch {
    /// Index of the matching slot.
    pub slot: usize,
    /// Translated physical address.
    pub paddr: PhysAddr,
    /// PP code of the slot.
    pub permission: u32,
}

/// Finds the first BAT slot mapping `ea` at the given privilege level.
pub fn lookup(
    bats: &[BatEntry; BAT_SLOTS],
    privilege: PrivilegeMode,
    ea: EffectiveAddr,
) -> Option<BlockMatch> {
    bats.iter().enumerate().find_map(|(slot, bat)| {
        if !bat.valid_for(privilege) || !bat.covers(ea.val()) {
            return None;
        }
        let paddr = PhysAddr::new(bat.map(ea.val()));
        trace!(
            "BAT{slot} hit: ea={ea} pa={paddr} size={:#x} pp={}",
            bat.size(),
            bat.permission()
        );
        Some(BlockMatch {
            slot,
            paddr,
            permission: bat.permission(),
        })
    })
}
