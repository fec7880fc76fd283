//! System construction and top-level `System` type.
//!
//! This module builds the physical side of a machine from configuration: a bus
//! with a single RAM device at the configured base.

use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::soc::interconnect::Bus;
use crate::soc::memory::Memory;

/// Top-level system instance holding the physical bus.
#[derive(Debug)]
pub struct System {
    /// System interconnect; routes physical accesses to RAM.
    pub bus: Bus,
}

impl System {
    /// Builds a new system from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the memory layout does not validate.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut bus = Bus::new();
        let ram = Memory::new(config.memory.ram_base, config.memory.ram_size);
        debug!(
            "RAM at {:#010x}, {} KiB",
            config.memory.ram_base,
            config.memory.ram_size / 1024
        );
        bus.add_device(Box::new(ram));

        Ok(Self { bus })
    }

    /// Copies an image into physical memory at `addr`.
    pub fn load_image(&mut self, data: &[u8], addr: u32) {
        self.bus.load_binary_at(data, addr);
    }
}
