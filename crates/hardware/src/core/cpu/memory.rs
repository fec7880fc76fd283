//! Memory Access Helpers.
//!
//! This module provides the interface between instruction execution and the memory subsystem.
//! It performs the following:
//! 1. **Address Translation:** Runs the MMU with this core's registers and exception unit.
//! 2. **Data Accesses:** Sized translated loads and stores through the access dispatcher.
//! 3. **Instruction Fetch:** Code-space translated word reads.
//! 4. **Probes:** Non-faulting reads for fetch-ahead and debugger inspection.
//!
//! A translated access that fails performs no bus access. Misaligned accesses
//! translate their first byte only and are decomposed on the physical side.

use super::Cpu;
use crate::common::{AccessType, EffectiveAddr, MmuError, PhysAddr, TranslationRequest};
use crate::core::units::lsu;
use crate::soc::traits::PhysicalBus;

impl Cpu {
    /// Translates an effective address with this core's registers.
    ///
    /// # Errors
    ///
    /// Returns the fault classification when translation fails; see [`crate::core::units::mmu::Mmu::translate`].
    pub fn translate<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        req: TranslationRequest,
    ) -> Result<PhysAddr, MmuError> {
        self.mmu
            .translate(&self.context, req, bus, &mut self.exceptions)
    }

    /// Translates a faulting data access.
    fn translate_data<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
        access: AccessType,
    ) -> Result<PhysAddr, MmuError> {
        self.translate(bus, TranslationRequest::faulting(ea, access))
    }

    /// Loads a byte from data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; the exception has already been signalled.
    pub fn read_u8<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
    ) -> Result<u8, MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Read)?;
        Ok(lsu::read_u8(bus, paddr))
    }

    /// Loads a big-endian halfword from data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; the exception has already been signalled.
    pub fn read_u16<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
    ) -> Result<u16, MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Read)?;
        Ok(lsu::read_u16(bus, paddr))
    }

    /// Loads a big-endian word from data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; the exception has already been signalled.
    pub fn read_u32<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
    ) -> Result<u32, MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Read)?;
        Ok(lsu::read_u32(bus, paddr))
    }

    /// Loads a big-endian doubleword from data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; the exception has already been signalled.
    pub fn read_u64<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
    ) -> Result<u64, MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Read)?;
        Ok(lsu::read_u64(bus, paddr))
    }

    /// Stores a byte to data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; nothing is written.
    pub fn write_u8<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
        val: u8,
    ) -> Result<(), MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Write)?;
        lsu::write_u8(bus, paddr, val);
        Ok(())
    }

    /// Stores a big-endian halfword to data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; nothing is written.
    pub fn write_u16<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
        val: u16,
    ) -> Result<(), MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Write)?;
        lsu::write_u16(bus, paddr, val);
        Ok(())
    }

    /// Stores a big-endian word to data space, clearing a matching reservation.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; nothing is written and the reservation is kept.
    pub fn write_u32<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
        val: u32,
    ) -> Result<(), MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Write)?;
        lsu::write_u32(bus, &mut self.reservation, paddr, val);
        Ok(())
    }

    /// Stores a big-endian doubleword to data space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; nothing is written.
    pub fn write_u64<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
        val: u64,
    ) -> Result<(), MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Write)?;
        lsu::write_u64(bus, paddr, val);
        Ok(())
    }

    /// Fetches an instruction word from code space.
    ///
    /// # Errors
    ///
    /// Returns the translation fault; an instruction storage exception has been requested.
    pub fn fetch_u32<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
    ) -> Result<u32, MmuError> {
        let paddr = self.translate(bus, TranslationRequest::faulting(ea, AccessType::Fetch))?;
        Ok(lsu::read_u32(bus, paddr))
    }

    /// Loads a word and reserves its physical address (load-reserve).
    ///
    /// # Errors
    ///
    /// Returns the translation fault; the reservation is left unchanged.
    pub fn load_reserve_u32<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
    ) -> Result<u32, MmuError> {
        let paddr = self.translate_data(bus, ea, AccessType::Read)?;
        self.reservation.reserve(paddr);
        Ok(lsu::read_u32(bus, paddr))
    }

    /// Reads a word without ever raising an exception, e.g. for a debugger.
    ///
    /// Returns `None` if the address does not translate.
    pub fn peek_u32<B: PhysicalBus + ?Sized>(
        &mut self,
        bus: &mut B,
        ea: EffectiveAddr,
        access: AccessType,
    ) -> Option<u32> {
        let paddr = self.translate(bus, TranslationRequest::probe(ea, access)).ok()?;
        Some(lsu::read_u32(bus, paddr))
    }
}
