//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the conventional MIPS register names and the indices the host-call
//! instruction reads its selector and argument from.

use crate::common::constants::NUM_REGS;

/// Register $0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (first return value, v0). Host-call selector.
pub const REG_V0: usize = 2;
/// Register $4 (first argument, a0). Host-call argument.
pub const REG_A0: usize = 4;
/// Register $8 (temporary, t0).
pub const REG_T0: usize = 8;
/// Register $9 (temporary, t1).
pub const REG_T1: usize = 9;
/// Register $10 (temporary, t2).
pub const REG_T2: usize = 10;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $31 (return address, ra).
pub const REG_RA: usize = 31;

/// Conventional names of all 32 registers, indexed by register number.
pub const NAMES: [&str; NUM_REGS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// Returns the conventional name of register `idx`, or `"?"` when out of range.
pub fn name(idx: usize) -> &'static str {
    NAMES.get(idx).copied().unwrap_or("?")
}

/// Parses a register reference such as `$t0`, `t0`, `$8` or `8`.
///
/// Returns `None` for unknown names and indices outside 0-31.
pub fn parse(text: &str) -> Option<usize> {
    let text = text.strip_prefix('$').unwrap_or(text);
    if let Ok(idx) = text.parse::<usize>() {
        return (idx < NUM_REGS).then_some(idx);
    }
    if text == "s8" {
        return Some(30);
    }
    NAMES.iter().position(|n| *n == text)
}
