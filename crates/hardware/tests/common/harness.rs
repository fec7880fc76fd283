use ppcmmu_core::common::{AccessType, EffectiveAddr, MmuError, PhysAddr, TranslationRequest};
use ppcmmu_core::config::Config;
use ppcmmu_core::core::Cpu;
use ppcmmu_core::core::arch::{BatEntry, PrivilegeMode, SegmentRegister};
use ppcmmu_core::core::units::mmu::htab::HashKind;
use ppcmmu_core::soc::System;
use ppcmmu_core::soc::interconnect::Bus;
use tracing_subscriber::EnvFilter;

use crate::common::builder::page_table::PageTable;

/// A single core attached to a system with 16 MiB of RAM at physical 0.
pub struct TestContext {
    pub cpu: Cpu,
    pub system: System,
    pub table: PageTable,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes `tracing` output through the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

impl TestContext {
    pub fn new() -> Self {
        init_tracing();

        let config = Config::default();
        let system = System::new(&config).expect("default config builds a system");
        let cpu = Cpu::new(&config);

        Self {
            cpu,
            system,
            table: PageTable::default(),
        }
    }

    /// Turns on instruction and data translation.
    pub fn with_translation(mut self) -> Self {
        self.cpu.context.msr = self.cpu.context.msr.with_translation(true);
        self
    }

    /// Switches the core to problem state.
    pub fn in_user_mode(mut self) -> Self {
        self.cpu.context.msr = self.cpu.context.msr.with_privilege(PrivilegeMode::User);
        self
    }

    pub fn with_dbat(mut self, slot: usize, bat: BatEntry) -> Self {
        self.cpu.context.dbat[slot] = bat;
        self
    }

    pub fn with_ibat(mut self, slot: usize, bat: BatEntry) -> Self {
        self.cpu.context.ibat[slot] = bat;
        self
    }

    pub fn with_segment(mut self, index: usize, sr: SegmentRegister) -> Self {
        self.cpu.context.sr[index] = sr;
        self
    }

    /// Points SDR1 at the context's page table.
    pub fn with_page_table(mut self) -> Self {
        self.cpu.context.sdr1 = self.table.sdr1();
        self
    }

    /// Plants a PTE for `ea` in segment `vsid`; returns the PTE's address.
    pub fn map_page(&mut self, vsid: u32, ea: u32, rpn: u32, pp: u32, hash: HashKind) -> PhysAddr {
        self.table
            .map(&mut self.system.bus, vsid, ea, rpn, pp, hash, 0)
    }

    pub fn bus(&mut self) -> &mut Bus {
        &mut self.system.bus
    }

    /// Faulting translation of `addr`.
    pub fn translate(&mut self, addr: u32, access: AccessType) -> Result<PhysAddr, MmuError> {
        self.cpu.translate(
            &mut self.system.bus,
            TranslationRequest::faulting(EffectiveAddr::new(addr), access),
        )
    }

    /// Suppressed translation of `addr`.
    pub fn probe(&mut self, addr: u32, access: AccessType) -> Result<PhysAddr, MmuError> {
        self.cpu.translate(
            &mut self.system.bus,
            TranslationRequest::probe(EffectiveAddr::new(addr), access),
        )
    }
}
