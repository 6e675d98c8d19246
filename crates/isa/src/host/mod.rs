//! Host simulator interfaces.
//!
//! The instruction set consumes its machine state through these traits, so it can be
//! embedded in any MIPS simulator. It performs no program loading or fetch loop of its
//! own. The submodules provide reference implementations used by the CLI and tests:
//! 1. **Registers:** A 32-entry register file with `$zero` hardwired.
//! 2. **Memory:** A flat little-endian word memory over one mapped range.
//! 3. **Console:** Stdio and scripted (buffered) line consoles.
//! 4. **Recorders:** A branch controller and exception reporter that log what they receive.

use std::{fmt, io};

use crate::common::error::{AddressError, FaultKind};

/// Reference register file.
pub mod registers;

/// Reference flat memory.
pub mod memory;

/// Reference consoles.
pub mod console;

/// Recording branch controller and exception reporter.
pub mod recorder;

pub use console::{BufferConsole, StdConsole};
pub use memory::FlatMemory;
pub use recorder::{BranchLog, FaultLog, RecordedFault};
pub use registers::Registers;

/// Architectural register file of the host.
pub trait RegisterFile {
    /// Reads register `idx` (0-31).
    fn get(&self, idx: usize) -> i32;
    /// Writes register `idx` (0-31).
    fn set(&mut self, idx: usize, val: i32);
}

/// Byte-addressable data memory of the host.
pub trait Memory {
    /// Loads the aligned word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` for misaligned or unmapped addresses.
    fn load_word(&mut self, addr: u32) -> Result<i32, AddressError>;

    /// Stores `val` to the aligned word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` for misaligned or unmapped addresses.
    fn store_word(&mut self, addr: u32, val: i32) -> Result<(), AddressError>;
}

/// Program-counter controller of the host.
pub trait BranchController {
    /// Redirects the next fetch according to `target`, a label offset operand.
    fn transfer_to(&mut self, target: i32);
}

/// Information accompanying a fault raised to the host.
#[derive(Clone, Copy, Debug)]
pub struct FaultContext<'a> {
    /// Raw word of the faulting instruction.
    pub word: u32,
    /// Mnemonic name of the faulting instruction.
    pub mnemonic: &'a str,
    /// Human-readable fault description.
    pub message: &'a str,
}

/// Fault channel of the host's execution loop.
///
/// The host decides whether a reported fault traps or halts.
pub trait ExceptionReporter {
    /// Receives one fault.
    fn raise(&mut self, kind: FaultKind, context: &FaultContext<'_>);
}

/// Line-oriented text I/O used by the collect, host-call and present actions.
pub trait Console {
    /// Shows `prompt` and blocks until one line of input is available.
    ///
    /// The returned line excludes its terminator.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, or `UnexpectedEof` when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Handles to the host collaborators needed to execute one word.
pub struct Host<'a> {
    /// Register file.
    pub regs: &'a mut dyn RegisterFile,
    /// Data memory.
    pub mem: &'a mut dyn Memory,
    /// Program-counter controller.
    pub branch: &'a mut dyn BranchController,
    /// Text console.
    pub console: &'a mut dyn Console,
    /// Fault channel.
    pub reporter: &'a mut dyn ExceptionReporter,
}

impl fmt::Debug for Host<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
