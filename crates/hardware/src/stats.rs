//! Translation statistics collection and reporting.
//!
//! This module tracks how translations were resolved. It provides:
//! 1. **Outcomes:** Identity mappings, BAT hits, primary/secondary page hits.
//! 2. **Faults:** Protection faults, page faults and unsupported segments.
//! 3. **Reporting:** A fixed-width text report in the style of simulator stat dumps.

use std::fmt;

/// Counters for every translation outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MmuStats {
    /// Translations requested.
    pub translations: u64,
    /// Translations resolved by identity mapping (translation disabled).
    pub identity: u64,
    /// Translations resolved by a BAT slot.
    pub bat_hits: u64,
    /// Translations resolved in the primary PTE group.
    pub primary_hits: u64,
    /// Translations resolved in the secondary PTE group.
    pub secondary_hits: u64,
    /// Protection faults (BAT, PTE or no-execute segment).
    pub protection_faults: u64,
    /// Page faults (no BAT and no PTE match).
    pub page_faults: u64,
    /// Accesses to direct-store segments.
    pub unsupported: u64,
}

impl MmuStats {
    /// Returns the number of translations that produced a physical address.
    pub const fn successes(&self) -> u64 {
        self.identity + self.bat_hits + self.primary_hits + self.secondary_hits
    }

    /// Returns the number of translations that failed.
    pub const fn failures(&self) -> u64 {
        self.protection_faults + self.page_faults + self.unsupported
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for MmuStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "MMU TRANSLATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "mmu.translations         {}", self.translations)?;
        writeln!(f, "mmu.identity             {}", self.identity)?;
        writeln!(f, "mmu.bat_hits             {}", self.bat_hits)?;
        writeln!(f, "mmu.primary_hits         {}", self.primary_hits)?;
        writeln!(f, "mmu.secondary_hits       {}", self.secondary_hits)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "mmu.protection_faults    {}", self.protection_faults)?;
        writeln!(f, "mmu.page_faults          {}", self.page_faults)?;
        write!(f, "mmu.unsupported          {}", self.unsupported)
    }
}
