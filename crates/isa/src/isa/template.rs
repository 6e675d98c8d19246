//! Encoding Templates.
//!
//! A template describes the 32 bit positions of one instruction kind, most
//! significant bit first. Each position is a literal `0`/`1` or belongs to an
//! operand field: `f` is the first operand, `s` the second, `t` the third.
//! Whitespace is ignored, so templates may be grouped by field:
//!
//! ```text
//! 000000 sssss ttttt fffff 00000 100000
//! ```
//!
//! Literal positions become a `(mask, expected)` pair for matching; operand
//! positions become contiguous `Field`s for extraction and encoding.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::common::constants::{MAX_OPERANDS, WORD_BITS};
use crate::common::error::{EncodeError, TemplateError};

/// Template characters naming operand fields, in operand order.
pub const FIELD_CHARS: [char; MAX_OPERANDS] = ['f', 's', 't'];

/// Returns a mask of the low `width` bits.
const fn low_mask(width: u32) -> u32 {
    if width >= WORD_BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// One contiguous operand field of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Operand index (0 for `f`, 1 for `s`, 2 for `t`).
    pub operand: usize,
    /// Bit position of the least significant bit of the field.
    pub lsb: u32,
    /// Width of the field in bits.
    pub width: u32,
}

impl Field {
    /// Returns the in-word mask covering this field.
    pub const fn mask(&self) -> u32 {
        low_mask(self.width) << self.lsb
    }

    /// Extracts the field from `word` as an unsigned value.
    #[inline]
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.lsb) & low_mask(self.width)
    }

    /// Places `value` into the field position, truncated to the field width.
    #[inline]
    pub const fn place(&self, value: u32) -> u32 {
        (value & low_mask(self.width)) << self.lsb
    }
}

/// Parsed encoding template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pattern: String,
    mask: u32,
    expected: u32,
    fields: Vec<Field>,
}

impl Template {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError` when the string does not hold exactly 32 positions,
    /// contains an unknown character, splits an operand field into several runs, or
    /// leaves a gap in the operand numbering.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let bits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if bits.len() != WORD_BITS as usize {
            return Err(TemplateError::Length(bits.len()));
        }

        let mut mask = 0u32;
        let mut expected = 0u32;
        // (lsb, msb) of each operand field seen so far.
        let mut spans: [Option<(u32, u32)>; MAX_OPERANDS] = [None; MAX_OPERANDS];

        for (i, &ch) in bits.iter().enumerate() {
            let pos = WORD_BITS - 1 - i as u32;
            match ch {
                '0' => mask |= 1 << pos,
                '1' => {
                    mask |= 1 << pos;
                    expected |= 1 << pos;
                }
                _ => {
                    let operand = FIELD_CHARS
                        .iter()
                        .position(|&c| c == ch)
                        .ok_or(TemplateError::Char(ch))?;
                    let span = &mut spans[operand];
                    *span = match *span {
                        None => Some((pos, pos)),
                        Some((lsb, msb)) if lsb == pos + 1 => Some((pos, msb)),
                        Some(_) => return Err(TemplateError::NonContiguous(ch)),
                    };
                }
            }
        }

        let mut fields = Vec::with_capacity(MAX_OPERANDS);
        for (operand, span) in spans.iter().enumerate() {
            if let Some((lsb, msb)) = *span {
                if fields.len() != operand {
                    return Err(TemplateError::SparseOperands(fields.len()));
                }
                fields.push(Field {
                    operand,
                    lsb,
                    width: msb - lsb + 1,
                });
            }
        }

        Ok(Self {
            pattern: bits.into_iter().collect(),
            mask,
            expected,
            fields,
        })
    }

    /// Returns the normalized 32-character pattern (no whitespace).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the mask of literal bit positions.
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Returns the required values of the literal bit positions.
    pub const fn expected(&self) -> u32 {
        self.expected
    }

    /// Returns the operand fields in operand order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of operand fields.
    pub fn operand_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if every literal position of the template matches `word`.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.expected
    }

    /// Returns true if some word would match both templates.
    ///
    /// Two templates are disjoint only if they disagree on a bit that both fix.
    /// Identical templates are the degenerate overlapping case.
    pub const fn overlaps(&self, other: &Self) -> bool {
        let common = self.mask & other.mask;
        (self.expected ^ other.expected) & common == 0
    }

    /// Encodes operand values into a word matching this template.
    ///
    /// Each value is taken as unsigned and must fit its field.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::OperandCount` when the number of values differs from the
    /// number of operand fields, and `EncodeError::OutOfRange` when a value is negative
    /// or wider than its field.
    pub fn encode(&self, operands: &[i32]) -> Result<u32, EncodeError> {
        if operands.len() != self.fields.len() {
            return Err(EncodeError::OperandCount {
                expected: self.fields.len(),
                got: operands.len(),
            });
        }
        self.fields
            .iter()
            .zip(operands)
            .try_fold(self.expected, |word, (field, &value)| {
                let raw = u32::try_from(value)
                    .ok()
                    .filter(|&v| v <= low_mask(field.width))
                    .ok_or(EncodeError::OutOfRange {
                        operand: field.operand,
                        value,
                        width: field.width,
                    })?;
                Ok(word | field.place(raw))
            })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}
