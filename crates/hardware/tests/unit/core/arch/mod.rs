

/// MSR privilege and translation-enable bits.
pub mod msr;

/// Segment register fields.
pub mod segment;
