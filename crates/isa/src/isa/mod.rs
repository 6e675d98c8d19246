//! Instruction Set Definitions.
//!
//! Contains the encoding templates, instruction formats, decoding logic and the
//! instruction registry of the Chef custom assembly.
//!
//! # Structure
//!
//! * `template`: Bit-pattern templates with literal bits and operand fields.
//! * `format`: The three-register and register-immediate layouts.
//! * `spec`: One registered instruction (syntax, description, template, action).
//! * `registry`: The ordered catalogue and its overlap checks.
//! * `decode`: Matching a word and extracting its operands.
//! * `chef`: The Chef instruction table.

/// MIPS register name mappings.
pub mod abi;

/// The Chef instruction table.
pub mod chef;

/// Word matching and operand extraction.
pub mod decode;

/// Instruction formats and their field layouts.
pub mod format;

/// Raw MIPS field extraction helpers.
pub mod instruction;

/// Instruction registry.
pub mod registry;

/// Registered instruction specification.
pub mod spec;

/// Encoding templates.
pub mod template;

pub use decode::{Decoded, Operands};
pub use format::Format;
pub use registry::Registry;
pub use spec::InstructionSpec;
pub use template::Template;
