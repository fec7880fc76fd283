//! PowerPC 60x memory management unit.
//!
//! This crate implements the address translation path of a 32-bit PowerPC core:
//! 1. **Translation:** Block address translation, segment lookup and hashed page table search.
//! 2. **Protection:** Two-bit page protection codes and fault classification.
//! 3. **Exceptions:** DSI/ISI signalling with DAR, DSISR and SRR1 bookkeeping.
//! 4. **Access Dispatch:** Sized big-endian bus accesses with unaligned decomposition.
//! 5. **Reservations:** Load-reserve tracking cleared by matching word stores.
//! 6. **SoC:** A physical bus with RAM, assembled from JSON configuration.

/// Common types and constants (addresses, access types, fault status, errors).
pub mod common;
/// Machine configuration (defaults, sections, JSON loading).
pub mod config;
/// CPU core (architectural registers, MMU, LSU, exception unit).
pub mod core;
/// Physical side (builder, bus, RAM, traits).
pub mod soc;
/// Translation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_file`.
pub use crate::config::Config;
/// One core's memory path; holds registers, MMU, exception unit and reservation.
pub use crate::core::Cpu;
/// Top-level system (physical bus with RAM); construct with `System::new`.
pub use crate::soc::System;
