//! Memory Management Unit (MMU).
//!
//! This module implements effective-to-physical address translation for the
//! PowerPC 60x: block address translation first, then the hashed page table.
//! Nothing is cached between calls; every translation re-walks the registers
//! and, if needed, the page table in physical memory.

/// Block address translation lookup.
pub mod bat;

/// Hashed page table search.
pub mod htab;

/// Page protection check.
pub mod protection;

use tracing::{debug, error, trace};

use crate::common::{FaultKind, FaultStatus, MmuError, PhysAddr, TranslationRequest};
use crate::core::arch::TranslationContext;
use crate::core::cpu::trap::ExceptionSink;
use crate::soc::traits::PhysicalBus;
use crate::stats::MmuStats;

use self::htab::HashKind;

/// Memory Management Unit for effective-to-physical address translation.
#[derive(Clone, Debug, Default)]
pub struct Mmu {
    /// Translation outcome counters.
    pub stats: MmuStats,
}

impl Mmu {
    /// Creates a new MMU with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates an effective address to a physical address.
    ///
    /// Translation proceeds as follows:
    /// 1. Translation disabled for the access kind: identity mapping.
    /// 2. The BATs of the access kind, in slot order; the first match decides.
    /// 3. The segment register: direct-store segments are rejected, fetches from
    ///    no-execute segments are protection faults.
    /// 4. The primary, then the secondary PTE group.
    ///
    /// Protection and page faults are reported to `sink` unless the request is
    /// suppressed; the returned error carries the classification either way.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Register state of the translating core
    /// * `req` - Address, access kind and suppression flag
    /// * `bus` - Physical bus used for PTEG reads (untranslated)
    /// * `sink` - Exception signal generator
    ///
    /// # Errors
    ///
    /// `ProtectionFault` or `PageFault` when the access cannot be translated,
    /// `UnsupportedTranslationMode` for direct-store segments.
    pub fn translate<B, S>(
        &mut self,
        ctx: &TranslationContext,
        req: TranslationRequest,
        bus: &mut B,
        sink: &mut S,
    ) -> Result<PhysAddr, MmuError>
    where
        B: PhysicalBus + ?Sized,
        S: ExceptionSink + ?Sized,
    {
        let ea = req.address;
        self.stats.translations += 1;

        if !ctx.translation_enabled(req.access) {
            self.stats.identity += 1;
            return Ok(PhysAddr::new(ea.val()));
        }

        if let Some(block) = bat::lookup(ctx.bats(req.access), ctx.privilege(), ea) {
            if protection::violates(block.permission, req.access.is_write()) {
                return Err(self.fault(req, FaultKind::Protection, sink));
            }
            self.stats.bat_hits += 1;
            return Ok(block.paddr);
        }

        let segment = ctx.segment(ea);
        if segment.is_direct_store() {
            self.stats.unsupported += 1;
            let err = MmuError::UnsupportedTranslationMode {
                address: ea,
                segment: ea.segment_index(),
                suppressed: req.suppress_exception,
            };
            if req.suppress_exception {
                debug!("{err} (suppressed probe)");
            } else {
                error!("{err}");
            }
            return Err(err);
        }

        if req.access.is_code() && segment.is_no_execute() {
            return Err(self.fault(req, FaultKind::Protection, sink));
        }

        if let Some(page) = htab::search(ctx, segment.vsid(), ea, bus) {
            if protection::violates(page.permission, req.access.is_write()) {
                return Err(self.fault(req, FaultKind::Protection, sink));
            }
            match page.hash {
                HashKind::Primary => self.stats.primary_hits += 1,
                HashKind::Secondary => self.stats.secondary_hits += 1,
            }
            trace!(
                "page hit: ea={ea} pa={} via {:?} PTE at {}",
                page.paddr, page.hash, page.pte_addr
            );
            return Ok(page.paddr);
        }

        Err(self.fault(req, FaultKind::PageFault, sink))
    }

    /// Classifies a fault, signals it unless suppressed, and builds the error.
    fn fault<S: ExceptionSink + ?Sized>(
        &mut self,
        req: TranslationRequest,
        kind: FaultKind,
        sink: &mut S,
    ) -> MmuError {
        match kind {
            FaultKind::Protection => self.stats.protection_faults += 1,
            FaultKind::PageFault => self.stats.page_faults += 1,
        }
        let status = FaultStatus::new(req.address, req.access, kind);
        if req.suppress_exception {
            trace!("{status} (suppressed)");
        } else {
            sink.signal(&status);
        }
        MmuError::from_status(status)
    }
}
