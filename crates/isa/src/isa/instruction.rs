//! Instruction encoding utilities.
//!
//! Provides bit extraction functions for the fixed MIPS fields of a 32-bit
//! instruction word. Template-driven operand extraction lives in `template`;
//! these helpers give the raw field view used for diagnostics and encoding.

use crate::common::constants::{OPCODE_SHIFT, RD_SHIFT, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT};

/// Bit mask for extracting the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for extracting a register field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the shift-amount field (5 bits).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for extracting the function field (6 bits).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for extracting the immediate field (16 bits).
pub const IMM_MASK: u32 = 0xFFFF;

/// Trait for extracting the fixed MIPS fields from an encoded instruction.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 21-25).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 16-20).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 11-15).
    ///
    /// Only meaningful in the three-register format.
    fn rd(&self) -> usize;

    /// Extracts the shift-amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the function field (bits 0-5).
    ///
    /// Distinguishes three-register instructions that share opcode zero.
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 0-15) without sign extension.
    fn imm16(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }
}
