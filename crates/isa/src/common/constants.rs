//! Global Machine Constants.
//!
//! This module defines constants shared across the crate. It includes:
//! 1. **Word Constants:** Instruction and data word width.
//! 2. **Field Constants:** Bit positions and widths of the MIPS word fields.
//! 3. **Register Constants:** Size of the architectural register file.

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 32;

/// Size of a data or instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Width of a register index field in bits.
pub const REG_FIELD_BITS: u32 = 5;

/// Width of the immediate/offset field of the register-immediate format.
pub const IMM_FIELD_BITS: u32 = 16;

/// Bit position of the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;

/// Bit position of the `shamt` field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;

/// Bit position of the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit position of the immediate field (bits 0-15).
pub const IMM_SHIFT: u32 = 0;

/// Maximum number of operands any instruction carries.
pub const MAX_OPERANDS: usize = 3;
