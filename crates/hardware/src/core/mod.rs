//! Core processor memory path.
//!
//! This module contains the per-core pieces of the memory subsystem: the
//! architectural registers the MMU reads, the CPU-facing access API, and the
//! translation and dispatch units behind it.

/// Architectural state consumed by the MMU (MSR, BATs, segments, SDR1).
pub mod arch;

/// CPU core memory API and exception signalling.
pub mod cpu;

/// Functional units (MMU, LSU).
pub mod units;

pub use self::cpu::Cpu;
