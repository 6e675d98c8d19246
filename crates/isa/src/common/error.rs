//! Error and Fault definitions.
//!
//! This module defines the error taxonomy of the instruction set. It provides:
//! 1. **Configuration Errors:** Malformed or overlapping templates and bad host-call
//!    registers, detected at startup.
//! 2. **Encode Errors:** Operand lists that do not fit a template.
//! 3. **Decode Errors:** Words that match no registered template.
//! 4. **Faults:** Exceptional conditions raised by semantic actions and surfaced to the host.
//! 5. **Step Errors:** The combined outcome of decoding and executing one word.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exec::session::Slot;

/// Structural problem with an encoding template string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template does not describe exactly 32 bit positions.
    #[error("template has {0} bit positions, expected 32")]
    Length(usize),

    /// The template contains a character other than `0`, `1`, `f`, `s`, `t` or whitespace.
    #[error("invalid template character {0:?}")]
    Char(char),

    /// The bits of one operand field are split into more than one run.
    #[error("operand field `{0}` is not contiguous")]
    NonContiguous(char),

    /// A later operand has a field while an earlier one does not.
    #[error("operand {0} has no field while a later operand does")]
    SparseOperands(usize),

    /// The field layout disagrees with the declared format.
    #[error("layout does not fit the {format} format: {reason}")]
    Format {
        /// Name of the declared format.
        format: &'static str,
        /// What the layout violates.
        reason: &'static str,
    },
}

/// Registry or session construction error. Fatal at startup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The mnemonic syntax string is empty.
    #[error("instruction has an empty mnemonic syntax")]
    EmptySyntax,

    /// The encoding template of an instruction is malformed.
    #[error("invalid template for `{mnemonic}`")]
    Template {
        /// Mnemonic name of the offending instruction.
        mnemonic: String,
        /// Underlying template problem.
        #[source]
        source: TemplateError,
    },

    /// The bound action expects a different format or operand count than the template provides.
    #[error("action of `{mnemonic}` expects {expected} operands in the {format} format")]
    ActionMismatch {
        /// Mnemonic name of the offending instruction.
        mnemonic: String,
        /// Operand count the action consumes.
        expected: usize,
        /// Format the action requires.
        format: &'static str,
    },

    /// Some instruction word would match both this template and an existing one.
    #[error("template for `{mnemonic}` overlaps the template for `{existing}`")]
    Overlap {
        /// Mnemonic name of the instruction being registered.
        mnemonic: String,
        /// Mnemonic name of the already registered instruction.
        existing: String,
    },

    /// The mnemonic name is already registered.
    #[error("mnemonic `{0}` is already registered")]
    DuplicateMnemonic(String),

    /// A host-call register setting names no general-purpose register.
    #[error("host-call {role} register {reg} is out of range (0-31)")]
    HostCallRegister {
        /// Which setting is wrong (`selector` or `argument`).
        role: &'static str,
        /// The configured register number.
        reg: usize,
    },
}

/// Instruction encoding error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The number of values differs from the number of operand fields.
    #[error("expected {expected} operands, got {got}")]
    OperandCount {
        /// Operand fields in the template.
        expected: usize,
        /// Values supplied.
        got: usize,
    },

    /// A value does not fit its operand field.
    #[error("operand {operand} value {value} does not fit its {width}-bit field")]
    OutOfRange {
        /// Operand index in template order.
        operand: usize,
        /// The rejected value.
        value: i32,
        /// Width of the field in bits.
        width: u32,
    },
}

/// Instruction decode error. Fatal for the affected fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No registered template matches the word.
    #[error("no instruction matches word {0:#010x}")]
    NoMatch(u32),
}

/// Memory address validity error reported by the host memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address is not aligned to a word boundary.
    #[error("address {0:#010x} is not word aligned")]
    Misaligned(u32),

    /// The address lies outside the mapped memory.
    #[error("address {0:#010x} is out of range")]
    OutOfRange(u32),
}

impl AddressError {
    /// Returns the faulting address.
    pub const fn addr(&self) -> u32 {
        match self {
            Self::Misaligned(addr) | Self::OutOfRange(addr) => *addr,
        }
    }
}

/// Exceptional condition raised by a semantic action.
///
/// Faults are reported to the host through its `ExceptionReporter`; the host decides
/// whether to trap or halt. They are never swallowed by the execution engine.
#[derive(Debug, Error)]
pub enum Fault {
    /// Signed 32-bit overflow in a checked arithmetic action.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// A load from an invalid address.
    #[error("load address error: {0}")]
    Load(#[source] AddressError),

    /// A store to an invalid address.
    #[error("store address error: {0}")]
    Store(#[source] AddressError),

    /// `present` found a slot that was never collected (fault policy only).
    #[error("no {0} was chosen for the dish")]
    UnsetSlot(Slot),

    /// The host console failed to read or write a line.
    #[error("console error: {0}")]
    Console(#[from] io::Error),
}

impl Fault {
    /// Returns the fieldless kind of this fault, as passed to `ExceptionReporter::raise`.
    pub const fn kind(&self) -> FaultKind {
        match self {
            Self::ArithmeticOverflow => FaultKind::ArithmeticOverflow,
            Self::DivideByZero => FaultKind::DivideByZero,
            Self::Load(_) => FaultKind::AddressLoad,
            Self::Store(_) => FaultKind::AddressStore,
            Self::UnsetSlot(_) => FaultKind::UnsetSlot,
            Self::Console(_) => FaultKind::Console,
        }
    }
}

/// Fault classification handed to the host's exception channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Signed overflow.
    ArithmeticOverflow,
    /// Zero divisor.
    DivideByZero,
    /// Invalid load address.
    AddressLoad,
    /// Invalid store address.
    AddressStore,
    /// Unset auxiliary slot.
    UnsetSlot,
    /// Console I/O failure.
    Console,
}

impl FaultKind {
    /// Returns the MIPS `Cause.ExcCode` the host should record for this fault, if any.
    ///
    /// Address errors map to AdEL/AdES, overflow to Ov, and divide-by-zero to Tr.
    /// Session and console faults have no architectural cause.
    pub const fn cause_code(self) -> Option<u32> {
        match self {
            Self::AddressLoad => Some(cause::ADDRESS_ERROR_LOAD),
            Self::AddressStore => Some(cause::ADDRESS_ERROR_STORE),
            Self::ArithmeticOverflow => Some(cause::ARITHMETIC_OVERFLOW),
            Self::DivideByZero => Some(cause::TRAP),
            Self::UnsetSlot | Self::Console => None,
        }
    }
}

/// MIPS exception codes (`Cause.ExcCode`).
pub mod cause {
    /// Address error on load or instruction fetch (4).
    pub const ADDRESS_ERROR_LOAD: u32 = 4;
    /// Address error on store (5).
    pub const ADDRESS_ERROR_STORE: u32 = 5;
    /// Arithmetic overflow (12).
    pub const ARITHMETIC_OVERFLOW: u32 = 12;
    /// Trap (13).
    pub const TRAP: u32 = 13;
}

/// Error returned by a single decode/execute step.
#[derive(Debug, Error)]
pub enum StepError {
    /// The word matched no instruction.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The matched instruction raised a fault.
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("cannot read config {path}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config JSON")]
    Json(#[from] serde_json::Error),
}
