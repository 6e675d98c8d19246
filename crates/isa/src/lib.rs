//! Chef Assembly instruction set library.
//!
//! This crate implements a custom instruction set layered onto the 32-bit MIPS word
//! format, for use inside a host MIPS simulator. It provides:
//! 1. **ISA:** Encoding templates, bit-pattern matching, operand extraction, and the
//!    instruction registry (mnemonic syntax, template, bound action).
//! 2. **Execution:** The dispatcher and one semantic action per instruction, with
//!    uniform overflow/divide-by-zero checking and per-session auxiliary state.
//! 3. **Host:** The traits the host simulator implements (registers, memory, branch
//!    control, fault reporting, console) plus reference implementations.
//! 4. **Core:** A single-word `step` facade tying decode, dispatch and fault reporting.

/// Common types and constants (word layout constants, error taxonomy).
pub mod common;
/// Configuration (arithmetic checking mode, unset-slot policy, reference memory).
pub mod config;
/// Execution engine (dispatcher, semantic actions, checked arithmetic, session state).
pub mod exec;
/// Host interfaces and reference host implementations.
pub mod host;
/// Instruction set (templates, formats, decode, registry, ABI names, Chef table).
pub mod isa;
/// Single-word decode/execute facade.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Execution outcome forwarded to the host's program-counter controller.
pub use crate::exec::Control;
/// Instruction catalogue; build the Chef set with `isa::chef::registry()`.
pub use crate::isa::registry::Registry;
/// Decode/dispatch facade owning the registry and the session state.
pub use crate::sim::Core;
