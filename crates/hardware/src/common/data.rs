//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the MMU.
//! These types are used for the following:
//! 1. **BAT Selection:** Code accesses consult the instruction BATs, everything else the data BATs.
//! 2. **Permission Validation:** Stores (including code-space stores) need read-write
//!    permission, loads and fetches any access.
//! 3. **Fault Generation:** Selecting the instruction or data storage exception.

use super::addr::EffectiveAddr;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch access (code space).
    Fetch,

    /// Data read access.
    Read,

    /// Data write access.
    Write,

    /// Write into code space, e.g. a debugger planting a breakpoint.
    ///
    /// Translated through the instruction BATs and checked with store permission.
    CodeWrite,
}

impl AccessType {
    /// Builds an access type from the `is_code`/`is_write` flag pair.
    pub const fn from_flags(is_code: bool, is_write: bool) -> Self {
        match (is_code, is_write) {
            (true, true) => Self::CodeWrite,
            (true, false) => Self::Fetch,
            (false, true) => Self::Write,
            (false, false) => Self::Read,
        }
    }

    /// Returns `true` for accesses to code space.
    #[inline]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Fetch | Self::CodeWrite)
    }

    /// Returns `true` for stores, to data or code space.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::CodeWrite)
    }
}

/// A single translation request, constructed per access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Effective address to translate.
    pub address: EffectiveAddr,
    /// Kind of access being translated.
    pub access: AccessType,
    /// When set, faults are classified but never signalled to the exception unit.
    pub suppress_exception: bool,
}

impl TranslationRequest {
    /// Creates a request from the raw flag form used by instruction execution.
    pub const fn new(
        address: EffectiveAddr,
        is_code: bool,
        is_write: bool,
        suppress_exception: bool,
    ) -> Self {
        Self {
            address,
            access: AccessType::from_flags(is_code, is_write),
            suppress_exception,
        }
    }

    /// A faulting (exception-raising) request for the given access.
    pub const fn faulting(address: EffectiveAddr, access: AccessType) -> Self {
        Self {
            address,
            access,
            suppress_exception: false,
        }
    }

    /// A non-faulting probe, e.g. for fetch-ahead or debugger inspection.
    pub const fn probe(address: EffectiveAddr, access: AccessType) -> Self {
        Self {
            address,
            access,
            suppress_exception: true,
        }
    }
}
