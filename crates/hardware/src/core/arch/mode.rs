//! PowerPC Privilege Levels.
//!
//! This module defines the two privilege levels the MMU distinguishes. It implements the following:
//! 1. **Mode Classification:** User (problem state) and Supervisor.
//! 2. **Observability:** Human-readable naming and display formatting for privilege states.

/// Processor privilege level, derived from `MSR[PR]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PrivilegeMode {
    /// Problem state (`MSR[PR] = 1`): application code.
    User,

    /// Supervisor state (`MSR[PR] = 0`): operating system code.
    #[default]
    Supervisor,
}

impl PrivilegeMode {
    /// Returns the human-readable name of the privilege mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Supervisor => "Supervisor",
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
