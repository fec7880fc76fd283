//! Page protection check.
//!
//! BATs and PTEs both carry a 2-bit PP code. The check is deliberately
//! asymmetric: stores need exactly the read-write code, loads and fetches are
//! refused only for the no-access code.

/// PP code: no access.
pub const PP_NO_ACCESS: u32 = 0b00;

/// PP code: read-only.
pub const PP_READ_ONLY: u32 = 0b01;

/// PP code: read-write.
pub const PP_READ_WRITE: u32 = 0b10;

/// PP code: read-only (second encoding).
pub const PP_READ_ONLY_ALT: u32 = 0b11;

/// Returns `true` if an access with the given permission code must be refused.
///
/// Only the low two bits of `permission` are significant.
///
/// ```
/// use ppcmmu_core::core::units::mmu::protection::{violates, PP_READ_ONLY, PP_READ_WRITE};
///
/// assert!(violates(PP_READ_ONLY, true));
/// assert!(!violates(PP_READ_WRITE, true));
/// assert!(!violates(PP_READ_ONLY, false));
/// ```
#[inline]
pub const fn violates(permission: u32, is_write: bool) -> bool {
    let pp = permission & 0b11;
    if is_write {
        pp != PP_READ_WRITE
    } else {
        pp == PP_NO_ACCESS
    }
}
