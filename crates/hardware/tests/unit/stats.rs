//! MmuStats unit tests.

use ppcmmu_core::stats::MmuStats;

#[test]
fn default_stats_all_zero() {
    let stats = MmuStats::default();
    assert_eq!(stats.translations, 0);
    assert_eq!(stats.successes(), 0);
    assert_eq!(stats.failures(), 0);
}

#[test]
fn derived_totals() {
    let stats = MmuStats {
        translations: 10,
        identity: 1,
        bat_hits: 2,
        primary_hits: 3,
        secondary_hits: 1,
        protection_faults: 1,
        page_faults: 1,
        unsupported: 1,
    };
    assert_eq!(stats.successes(), 7);
    assert_eq!(stats.failures(), 3);
}

#[test]
fn reset_clears_everything() {
    let mut stats = MmuStats {
        translations: 4,
        page_faults: 4,
        ..MmuStats::default()
    };
    stats.reset();
    assert_eq!(stats, MmuStats::default());
}

#[test]
fn report_lists_every_counter() {
    let stats = MmuStats {
        secondary_hits: 42,
        ..MmuStats::default()
    };
    let report = stats.to_string();
    assert!(report.contains("MMU TRANSLATION STATISTICS"));
    assert!(report.contains("mmu.secondary_hits       42"));
    for key in ["translations", "identity", "bat_hits", "primary_hits", "protection_faults", "page_faults", "unsupported"] {
        assert!(report.contains(&format!("mmu.{key}")), "missing {key}");
    }
}
