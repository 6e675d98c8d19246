//! Instruction Formats.
//!
//! Two layouts of the 32-bit word are supported:
//!
//! * Three-register: `opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)`
//! * Register-immediate: `opcode(6) | rs(5) | rt(5) | imm(16)`
//!
//! The format decides which template layouts are legal and how extracted field
//! values become operands. Register fields are returned unchanged (0-31); the
//! 16-bit field of the register-immediate form is sign-extended.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{
    IMM_FIELD_BITS, IMM_SHIFT, RD_SHIFT, REG_FIELD_BITS, RS_SHIFT, RT_SHIFT,
};
use crate::common::error::{EncodeError, TemplateError};
use crate::isa::decode::{Operands, sign_extend};
use crate::isa::template::{Field, Template};

/// Operand index of the immediate field in the register-immediate format.
pub const IMM_OPERAND: usize = 2;

/// Instruction word layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Up to three 5-bit register fields at `rs`, `rt` and `rd`.
    ThreeOp,
    /// Two 5-bit register fields at `rs`/`rt` followed by a signed 16-bit field.
    RegImm,
}

impl Format {
    /// Returns the lowercase name of the format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ThreeOp => "three_op",
            Self::RegImm => "reg_imm",
        }
    }

    /// Checks that the operand fields of `template` fit this format.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Format` describing the first violated rule.
    pub fn validate(self, template: &Template) -> Result<(), TemplateError> {
        let fields = template.fields();
        match self {
            Self::ThreeOp => {
                if fields.iter().all(|f| is_register_field(f, &[RS_SHIFT, RT_SHIFT, RD_SHIFT])) {
                    Ok(())
                } else {
                    Err(self.violation("register fields must be 5 bits wide at rs, rt or rd"))
                }
            }
            Self::RegImm => {
                let [first, second, imm] = fields else {
                    return Err(self.violation("needs two register fields and one immediate"));
                };
                if imm.operand != IMM_OPERAND
                    || imm.width != IMM_FIELD_BITS
                    || imm.lsb != IMM_SHIFT
                {
                    return Err(self.violation("the third operand must be the 16-bit immediate"));
                }
                let regs = [RS_SHIFT, RT_SHIFT];
                if !is_register_field(first, &regs) || !is_register_field(second, &regs) {
                    return Err(
                        self.violation("the first two operands must be rs/rt register fields")
                    );
                }
                Ok(())
            }
        }
    }

    /// Extracts the operands of `word` according to this format.
    ///
    /// The word is assumed to match `template`.
    pub fn extract(self, template: &Template, word: u32) -> Operands {
        let mut operands = Operands::default();
        for field in template.fields() {
            let raw = field.extract(word);
            let value = match self {
                Self::RegImm if field.operand == IMM_OPERAND => sign_extend(raw, field.width),
                _ => raw as i32,
            };
            operands.push(value);
        }
        operands
    }

    /// Encodes operands according to this format.
    ///
    /// Register operands must be 0-31. The immediate of the register-immediate form
    /// may be given signed (-32768..=-1) or unsigned (0..=65535).
    ///
    /// # Errors
    ///
    /// Returns the `EncodeError` of `Template::encode`.
    pub fn encode(self, template: &Template, operands: &[i32]) -> Result<u32, EncodeError> {
        let raw: Vec<i32> = operands
            .iter()
            .enumerate()
            .map(|(i, &value)| match self {
                Self::RegImm if i == IMM_OPERAND && (i32::from(i16::MIN)..0).contains(&value) => {
                    value & 0xFFFF
                }
                _ => value,
            })
            .collect();
        template.encode(&raw)
    }

    fn violation(self, reason: &'static str) -> TemplateError {
        TemplateError::Format {
            format: self.name(),
            reason,
        }
    }
}

fn is_register_field(field: &Field, positions: &[u32]) -> bool {
    field.width == REG_FIELD_BITS && positions.contains(&field.lsb)
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
