//! Instruction Registry.
//!
//! The registry is the ordered catalogue of instruction specifications. It is
//! populated once at startup and then only read: the decoder walks it in
//! registration order, the host's assembler looks entries up by name.
//!
//! Registration rejects any template that overlaps an existing one, so every
//! word matches at most one entry and decode precedence never has to break a tie.

use crate::common::error::{ConfigError, DecodeError};
use crate::isa::decode::{self, Decoded};
use crate::isa::spec::InstructionSpec;

/// Ordered collection of registered instructions.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    specs: Vec<InstructionSpec>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one instruction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateMnemonic` if the name is taken and
    /// `ConfigError::Overlap` if some word would match both the new template and an
    /// existing one. The registry is unchanged on error.
    pub fn register(&mut self, spec: InstructionSpec) -> Result<(), ConfigError> {
        if self.find(spec.name()).is_some() {
            return Err(ConfigError::DuplicateMnemonic(spec.name().to_owned()));
        }
        if let Some(existing) = self
            .specs
            .iter()
            .find(|s| s.template().overlaps(spec.template()))
        {
            return Err(ConfigError::Overlap {
                mnemonic: spec.name().to_owned(),
                existing: existing.name().to_owned(),
            });
        }
        tracing::trace!(mnemonic = spec.name(), template = %spec.template(), "registered");
        self.specs.push(spec);
        Ok(())
    }

    /// Returns all registered instructions in registration order.
    pub fn all(&self) -> &[InstructionSpec] {
        &self.specs
    }

    /// Looks an instruction up by mnemonic name.
    pub fn find(&self, name: &str) -> Option<&InstructionSpec> {
        self.specs.iter().find(|s| s.name() == name)
    }

    /// Decodes a word against the registered templates.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::NoMatch` if no template matches.
    pub fn decode(&self, word: u32) -> Result<Decoded<'_>, DecodeError> {
        decode::decode(&self.specs, word)
    }

    /// Returns the number of registered instructions.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
