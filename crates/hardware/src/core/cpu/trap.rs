//! Exception signal generation for translation faults.
//!
//! This module is the boundary between the MMU and the exception-delivery
//! collaborator. It performs the following:
//! 1. **Status Recording:** Writes DAR/DSISR for data faults and the SRR1 fault
//!    bits for instruction faults.
//! 2. **Exception Request:** Latches a pending instruction- or data-storage
//!    exception for the CPU core to deliver.
//!
//! Redirecting execution to the vector is not done here.

use tracing::debug;

use crate::common::constants::{FAULT_PAGE_BIT, FAULT_PROTECTION_BIT, FAULT_STORE_BIT};
use crate::common::{FaultKind, FaultStatus};

/// Receiver for translation faults that must become synchronous exceptions.
pub trait ExceptionSink {
    /// Records `status` and requests the matching storage exception.
    fn signal(&mut self, status: &FaultStatus);
}

/// Synchronous storage exceptions raised by the MMU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exception {
    /// Data storage interrupt (DSI).
    DataStorage,
    /// Instruction storage interrupt (ISI).
    InstructionStorage,
}

impl Exception {
    /// Returns the exception vector offset.
    pub const fn vector(self) -> u32 {
        match self {
            Self::DataStorage => 0x300,
            Self::InstructionStorage => 0x400,
        }
    }
}

/// CPU-visible fault status registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FaultRegisters {
    /// Data address register: effective address of the last data fault.
    pub dar: u32,
    /// Data storage interrupt status register.
    pub dsisr: u32,
    /// Fault bits destined for SRR1 on an instruction storage interrupt.
    pub srr1: u32,
}

/// Stock exception signal generator: fault registers plus one pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ExceptionUnit {
    /// Fault status registers.
    pub regs: FaultRegisters,
    pending: Option<Exception>,
}

impl ExceptionUnit {
    /// Creates a unit with cleared registers and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pending exception without clearing it.
    pub const fn pending(&self) -> Option<Exception> {
        self.pending
    }

    /// Hands the pending exception to the delivery collaborator.
    pub fn take_pending(&mut self) -> Option<Exception> {
        self.pending.take()
    }
}

/// Returns the DSISR/SRR1 cause bit for a fault kind.
const fn cause_bits(kind: FaultKind) -> u32 {
    match kind {
        FaultKind::PageFault => FAULT_PAGE_BIT,
        FaultKind::Protection => FAULT_PROTECTION_BIT,
    }
}

impl ExceptionSink for ExceptionUnit {
    fn signal(&mut self, status: &FaultStatus) {
        let exception = if status.is_code() {
            self.regs.srr1 = cause_bits(status.kind);
            Exception::InstructionStorage
        } else {
            self.regs.dar = status.faulting_address.val();
            self.regs.dsisr = cause_bits(status.kind)
                | if status.is_write() { FAULT_STORE_BIT } else { 0 };
            Exception::DataStorage
        };
        debug!(
            "{status}: requesting {exception:?} (vector {:#x})",
            exception.vector()
        );
        self.pending = Some(exception);
    }
}
