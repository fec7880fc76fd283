//! Common utilities and types used throughout the MMU crate.
//!
//! This module provides fundamental building blocks that are shared across all components.
//! It includes:
//! 1. **Address Types:** Strong types for effective and physical addresses.
//! 2. **Constants:** Register field positions and fault status bits.
//! 3. **Memory Access:** Access classification and the per-access translation request.
//! 4. **Error Handling:** Fault status records and the `MmuError` type.

/// Address type definitions (effective and physical addresses).
pub mod addr;

/// Architectural constants (register fields, page geometry, fault bits).
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Fault and error types.
pub mod error;

pub use addr::{EffectiveAddr, PhysAddr};
pub use constants::{PAGE_OFFSET_MASK, PAGE_SHIFT};
pub use data::{AccessType, TranslationRequest};
pub use error::{FaultKind, FaultStatus, MmuError};
