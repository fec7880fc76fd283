//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the per-core container for everything
//! the memory path needs. It coordinates the following:
//! 1. **State Management:** Owns the core's `TranslationContext` (MSR, BATs, segments, SDR1).
//! 2. **Translation:** Owns the MMU and its statistics.
//! 3. **Fault Reporting:** Owns the exception unit that records DAR/DSISR/SRR1.
//! 4. **Atomics:** Owns the load-reserve reservation.
//!
//! The physical bus is not owned: it is passed to every access so that several
//! cores can share one bus under an external scheduler.

/// Translated load/store API.
pub mod memory;

/// Exception signal generation.
pub mod trap;

use crate::config::Config;
use crate::core::arch::TranslationContext;
use crate::core::units::lsu::reservation::Reservation;
use crate::core::units::mmu::Mmu;

use self::trap::ExceptionUnit;

/// One CPU core's memory-path state.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// MMU-visible register state.
    pub context: TranslationContext,
    /// Memory Management Unit.
    pub mmu: Mmu,
    /// Exception signal generator and fault status registers.
    pub exceptions: ExceptionUnit,
    /// Load-reserve reservation.
    pub reservation: Reservation,
}

impl Cpu {
    /// Creates a core whose registers start from the configured MMU state.
    pub fn new(config: &Config) -> Self {
        Self::with_context(config.mmu.clone())
    }

    /// Creates a core with the given register state.
    pub fn with_context(context: TranslationContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}
