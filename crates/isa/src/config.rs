//! Configuration for the Chef instruction set.
//!
//! This module defines all configuration structures and enums. It provides:
//! 1. **Defaults:** Baseline constants (reference memory map, host-call registers).
//! 2. **Structures:** Hierarchical config for general, arithmetic, session, memory and host-call.
//! 3. **Enums:** Arithmetic checking mode and the unset-slot policy of `present`.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_file`) or built
//! with `Config::default()`. Every field is optional in JSON. A config built in code is
//! checked by `Config::validate` when a `Core` is created from it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{ConfigError, ConfigLoadError};
use crate::isa::abi;

/// Default configuration constants.
mod defaults {
    use crate::isa::abi;

    /// Base address of the reference data memory (MIPS `.data` segment).
    pub const MEMORY_BASE: u32 = 0x1001_0000;

    /// Size of the reference data memory (64 KiB).
    pub const MEMORY_SIZE: u32 = 64 * 1024;

    /// Register holding the host-call selector (`$v0`).
    pub const SELECTOR_REGISTER: usize = abi::REG_V0;

    /// Register holding the host-call argument (`$a0`).
    pub const ARGUMENT_REGISTER: usize = abi::REG_A0;
}

/// How arithmetic actions treat signed overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticMode {
    /// Every arithmetic action raises `ArithmeticOverflow` on signed overflow.
    #[default]
    Strict,
    /// Only the add-immediate action checks overflow; the others wrap.
    Lenient,
}

/// What `present` does with an ingredient slot that was never collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsetSlotPolicy {
    /// Interpolate an empty string.
    #[default]
    Empty,
    /// Raise `Fault::UnsetSlot`.
    Fault,
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a debug event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Arithmetic settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArithmeticConfig {
    /// Overflow checking mode.
    #[serde(default)]
    pub mode: ArithmeticMode,
}

/// Auxiliary session-state settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Policy for slots that were never collected.
    #[serde(default)]
    pub unset_slot: UnsetSlotPolicy,
}

/// Reference memory map.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// First mapped byte address.
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u32,

    /// Number of mapped bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: u32,
}

impl MemoryConfig {
    fn default_base() -> u32 {
        defaults::MEMORY_BASE
    }

    fn default_size() -> u32 {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: defaults::MEMORY_BASE,
            size: defaults::MEMORY_SIZE,
        }
    }
}

/// Host-call register conventions.
#[derive(Debug, Clone, Deserialize)]
pub struct HostCallConfig {
    /// Register read as the selector.
    #[serde(default = "HostCallConfig::default_selector")]
    pub selector_register: usize,

    /// Register read as the argument.
    #[serde(default = "HostCallConfig::default_argument")]
    pub argument_register: usize,
}

impl HostCallConfig {
    fn default_selector() -> usize {
        defaults::SELECTOR_REGISTER
    }

    fn default_argument() -> usize {
        defaults::ARGUMENT_REGISTER
    }
}

impl Default for HostCallConfig {
    fn default() -> Self {
        Self {
            selector_register: defaults::SELECTOR_REGISTER,
            argument_register: defaults::ARGUMENT_REGISTER,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Arithmetic checking.
    #[serde(default)]
    pub arithmetic: ArithmeticConfig,
    /// Session state.
    #[serde(default)]
    pub session: SessionConfig,
    /// Reference memory.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Host-call registers.
    #[serde(default)]
    pub host_call: HostCallConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// The result has passed `validate`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON, unknown enum values, or
    /// host-call registers outside 0-31.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Checks the settings that cannot be expressed in the field types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HostCallRegister` if a host-call register is not 0-31.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (role, reg) in [
            ("selector", self.host_call.selector_register),
            ("argument", self.host_call.argument_register),
        ] {
            if abi::NAMES.get(reg).is_none() {
                return Err(ConfigError::HostCallRegister { role, reg });
            }
        }
        Ok(())
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Io` if the file cannot be read and
    /// `ConfigLoadError::Json` if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }
}
