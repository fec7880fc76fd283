//! Machine configuration.
//!
//! This module defines the configuration structures used to build a system and
//! seed a core's MMU registers. It provides:
//! 1. **Defaults:** Baseline RAM placement and size.
//! 2. **Structures:** `general`, `memory` and `mmu` sections, all optional in JSON.
//! 3. **Loading:** `Config::from_json` and `Config::from_file`, both validated.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::arch::TranslationContext;

/// Default configuration constants.
mod defaults {
    /// Physical base address of RAM.
    pub const RAM_BASE: u32 = 0x0000_0000;

    /// RAM size (16 MiB).
    pub const RAM_SIZE: u32 = 16 * 1024 * 1024;

    /// Largest RAM a configuration may request (1 GiB).
    pub const MAX_RAM_SIZE: u32 = 1024 * 1024 * 1024;
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`Config`].
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes an impossible machine.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General options.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Physical memory layout.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Initial MMU register state for each core.
    #[serde(default)]
    pub mmu: TranslationContext,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the described memory is non-empty, bounded, and fits the
    /// 32-bit physical space.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mem = &self.memory;
        if mem.ram_size == 0 {
            return Err(ConfigError::Invalid("memory.ram_size must be non-zero".into()));
        }
        if mem.ram_size > defaults::MAX_RAM_SIZE {
            return Err(ConfigError::Invalid(format!(
                "memory.ram_size {:#x} exceeds the {:#x} byte limit",
                mem.ram_size,
                defaults::MAX_RAM_SIZE
            )));
        }
        let end = u64::from(mem.ram_base) + u64::from(mem.ram_size);
        if end > 1 << 32 {
            return Err(ConfigError::Invalid(format!(
                "RAM at {:#010x} with size {:#x} exceeds the 32-bit physical space",
                mem.ram_base, mem.ram_size
            )));
        }
        Ok(())
    }
}

/// General options.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Enables per-translation trace output in front ends.
    #[serde(default)]
    pub trace: bool,
}

/// Physical memory layout.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Physical base address of RAM.
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u32,

    /// RAM size in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: u32,
}

impl MemoryConfig {
    /// Returns the default RAM base address.
    const fn default_ram_base() -> u32 {
        defaults::RAM_BASE
    }

    /// Returns the default RAM size.
    const fn default_ram_size() -> u32 {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}
