//! Instruction Specification.
//!
//! An `InstructionSpec` is the full contract the host needs for one instruction:
//! the mnemonic syntax (for the assembler), the encoding template (for the decoder
//! and disassembler), and the bound semantic action (for execution). A spec is
//! validated once on construction and immutable afterwards.

use serde::Serialize;

use crate::common::error::{ConfigError, EncodeError};
use crate::exec::action::Action;
use crate::isa::format::Format;
use crate::isa::template::Template;

/// One registered instruction.
#[derive(Clone, Debug, Serialize)]
pub struct InstructionSpec {
    syntax: String,
    description: String,
    format: Format,
    template: Template,
    action: Action,
}

impl InstructionSpec {
    /// Builds and validates an instruction specification.
    ///
    /// # Arguments
    ///
    /// * `syntax` - Example mnemonic syntax, e.g. `"mix $t0,$t1,$t2"`. The first word is the name.
    /// * `description` - Human-readable description.
    /// * `format` - Word layout the template must follow.
    /// * `pattern` - Template string (see `Template::parse`).
    /// * `action` - Semantic action bound to the instruction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the syntax is empty, the template is malformed or does
    /// not fit `format`, or the action expects a different format or operand count.
    pub fn new(
        syntax: impl Into<String>,
        description: impl Into<String>,
        format: Format,
        pattern: &str,
        action: Action,
    ) -> Result<Self, ConfigError> {
        let syntax = syntax.into();
        let mnemonic = syntax
            .split_whitespace()
            .next()
            .ok_or(ConfigError::EmptySyntax)?
            .to_owned();

        let template = Template::parse(pattern)
            .and_then(|t| format.validate(&t).map(|()| t))
            .map_err(|source| ConfigError::Template {
                mnemonic: mnemonic.clone(),
                source,
            })?;

        if action.format() != format || action.operand_count() != template.operand_count() {
            return Err(ConfigError::ActionMismatch {
                mnemonic,
                expected: action.operand_count(),
                format: action.format().name(),
            });
        }

        Ok(Self {
            syntax,
            description: description.into(),
            format,
            template,
            action,
        })
    }

    /// Returns the mnemonic name (the first word of the syntax).
    pub fn name(&self) -> &str {
        self.syntax.split_whitespace().next().unwrap_or_default()
    }

    /// Returns the example mnemonic syntax.
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the word layout.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Returns the encoding template.
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Returns the bound semantic action.
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Encodes operand values, in template order, into an instruction word.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError` if the operand count is wrong, a register is not 0-31, or
    /// the immediate does not fit 16 bits signed or unsigned.
    pub fn encode(&self, operands: &[i32]) -> Result<u32, EncodeError> {
        self.format.encode(&self.template, operands)
    }
}
