//! Physical side of the machine.
//!
//! This module organizes the components behind the MMU: the system bus, the
//! RAM device, the device traits, and the builder that assembles them.

/// System builder.
pub mod builder;

/// System bus interconnect and routing.
pub mod interconnect;

/// Main memory device.
pub mod memory;

/// Device and bus trait definitions.
pub mod traits;

pub use builder::System;
