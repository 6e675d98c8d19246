//! Common utilities and types shared by the ISA, execution engine and host layers.
//!
//! This module provides:
//! 1. **Constants:** Word width, register count, and MIPS field positions.
//! 2. **Error Handling:** Configuration, encode, decode, address, fault and step errors.

/// Word layout and machine constants.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

pub use constants::{NUM_REGS, WORD_BITS, WORD_BYTES};
pub use error::{
    AddressError, ConfigError, ConfigLoadError, DecodeError, EncodeError, Fault, FaultKind,
    StepError, TemplateError,
};
