//! PowerPC architectural state consumed by the MMU.
//!
//! This module contains the register-level definitions the translator reads.
//! It includes the following modules:
//! 1. **BATs:** Block address translation register pairs.
//! 2. **Context:** The per-core `TranslationContext` bundling all MMU inputs.
//! 3. **Modes:** Privilege level definitions.
//! 4. **MSR:** Machine state register (privilege and translation enables).
//! 5. **Segments:** Segment registers (VSID, no-execute, direct-store).

/// Block address translation registers.
pub mod bat;

/// Per-core translation context.
pub mod context;

/// Privilege level definitions.
pub mod mode;

/// Machine state register.
pub mod msr;

/// Segment registers.
pub mod segment;

pub use bat::BatEntry;
pub use context::TranslationContext;
pub use mode::PrivilegeMode;
pub use msr::MachineState;
pub use segment::SegmentRegister;
