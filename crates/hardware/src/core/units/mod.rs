//! Functional units of the core's memory path.
//!
//! 1. **MMU:** Block and hashed-page-table address translation.
//! 2. **LSU:** Sized physical access dispatch and reservation tracking.

/// Load/Store Unit (bus access dispatcher).
pub mod lsu;

/// Memory Management Unit (address translation).
pub mod mmu;
