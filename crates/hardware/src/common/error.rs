//! Fault and translation error definitions.
//!
//! This module defines the outcome types of a failed translation. It provides:
//! 1. **Fault Classification:** Protection faults vs. missing translations.
//! 2. **Fault Status:** The address/access/kind record handed to the exception unit.
//! 3. **Error Handling:** `MmuError`, integrated with `std::error::Error` via `thiserror`
//!    so unsupported modes can bubble up to session-level reporting.

use std::fmt;

use thiserror::Error;

use super::addr::EffectiveAddr;
use super::data::AccessType;

/// Classification of a translation fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// A BAT or PTE matched but its permission bits deny the access
    /// (also used for fetches from no-execute segments).
    Protection,

    /// Neither a BAT nor a PTE in either hash group matched.
    PageFault,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protection => write!(f, "protection fault"),
            Self::PageFault => write!(f, "page fault"),
        }
    }
}

/// Metadata describing a translation fault.
///
/// Code/data and read/write are carried by `access`, independent of `kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaultStatus {
    /// The effective address that failed to translate.
    pub faulting_address: EffectiveAddr,
    /// The access that was attempted.
    pub access: AccessType,
    /// Why translation failed.
    pub kind: FaultKind,
}

impl FaultStatus {
    /// Creates a new fault status record.
    pub const fn new(faulting_address: EffectiveAddr, access: AccessType, kind: FaultKind) -> Self {
        Self {
            faulting_address,
            access,
            kind,
        }
    }

    /// Returns `true` if the faulting access was a store.
    pub const fn is_write(&self) -> bool {
        self.access.is_write()
    }

    /// Returns `true` if the faulting access was an instruction fetch.
    pub const fn is_code(&self) -> bool {
        self.access.is_code()
    }
}

impl fmt::Display for FaultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {:?} at {}",
            self.kind, self.access, self.faulting_address
        )
    }
}

/// Reasons a translation (and therefore a translated access) can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MmuError {
    /// Permission bits of the matching BAT/PTE deny the access.
    #[error("{0}")]
    ProtectionFault(FaultStatus),

    /// No BAT and no PTE maps the address.
    #[error("{0}")]
    PageFault(FaultStatus),

    /// The address falls in a direct-store segment, which is not modelled.
    #[error("direct-store segment {segment} at {address} is not supported")]
    UnsupportedTranslationMode {
        /// The effective address that hit the direct-store segment.
        address: EffectiveAddr,
        /// Index of the segment register with the T bit set.
        segment: usize,
        /// Set when the request was a non-faulting probe.
        suppressed: bool,
    },
}

impl MmuError {
    /// Builds the error matching a fault status.
    pub const fn from_status(status: FaultStatus) -> Self {
        match status.kind {
            FaultKind::Protection => Self::ProtectionFault(status),
            FaultKind::PageFault => Self::PageFault(status),
        }
    }

    /// Returns the fault status for protection and page faults.
    pub const fn status(&self) -> Option<FaultStatus> {
        match self {
            Self::ProtectionFault(status) | Self::PageFault(status) => Some(*status),
            Self::UnsupportedTranslationMode { .. } => None,
        }
    }

    /// Returns `true` if the error must stop the emulation session.
    ///
    /// A suppressed probe hitting a direct-store segment is a plain failure.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedTranslationMode {
                suppressed: false,
                ..
            }
        )
    }
}
