//! Instruction Decoder.
//!
//! This module matches a 32-bit instruction word against the registered templates
//! and extracts its operands into a `Decoded` value. Matching walks the templates in
//! registration order and the first template whose literal bits all agree wins.

use std::fmt;
use std::ops::Deref;

use crate::common::constants::{MAX_OPERANDS, WORD_BITS};
use crate::common::error::DecodeError;
use crate::isa::abi;
use crate::isa::format::{Format, IMM_OPERAND};
use crate::isa::spec::InstructionSpec;

/// Ordered operand values of one decoded instruction.
///
/// Register operands hold indices 0-31; the immediate of the register-immediate
/// format holds its sign-extended value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    vals: [i32; MAX_OPERANDS],
    len: usize,
}

impl Operands {
    /// Builds an operand list from the first (at most three) values of `values`.
    pub fn from_slice(values: &[i32]) -> Self {
        let mut operands = Self::default();
        for &value in values.iter().take(MAX_OPERANDS) {
            operands.push(value);
        }
        operands
    }

    /// Appends a value; ignored once three values are held.
    pub(crate) fn push(&mut self, value: i32) {
        if let Some(slot) = self.vals.get_mut(self.len) {
            *slot = value;
            self.len += 1;
        }
    }

    /// Returns the operand values as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.vals[..self.len]
    }
}

impl Deref for Operands {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

/// A matched instruction word and its extracted operands.
///
/// Only produced by `decode`, so the operand count always matches the spec.
#[derive(Clone, Copy, Debug)]
pub struct Decoded<'r> {
    raw: u32,
    spec: &'r InstructionSpec,
    operands: Operands,
}

impl<'r> Decoded<'r> {
    /// Returns the raw 32-bit instruction encoding.
    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// Returns the registry entry the word matched.
    pub const fn spec(&self) -> &'r InstructionSpec {
        self.spec
    }

    /// Returns the operands in template order.
    pub const fn operands(&self) -> &Operands {
        &self.operands
    }
}

impl fmt::Display for Decoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec.name())?;
        for (i, value) in self.operands.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            if self.spec.format() == Format::RegImm && i == IMM_OPERAND {
                write!(f, "{sep}{value}")?;
            } else {
                write!(f, "{sep}${}", abi::name(*value as usize))?;
            }
        }
        Ok(())
    }
}

/// Decodes `word` against `specs` in order.
///
/// # Errors
///
/// Returns `DecodeError::NoMatch` if no template matches the word.
pub fn decode(specs: &[InstructionSpec], word: u32) -> Result<Decoded<'_>, DecodeError> {
    let spec = specs
        .iter()
        .find(|spec| spec.template().matches(word))
        .ok_or(DecodeError::NoMatch(word))?;
    let operands = spec.format().extract(spec.template(), word);
    tracing::trace!(
        word = format_args!("{word:#010x}"),
        mnemonic = spec.name(),
        ?operands,
        "decoded"
    );
    Ok(Decoded {
        raw: word,
        spec,
        operands,
    })
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`. Zero yields 0; 32 or more returns
///   `val` reinterpreted as signed.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    if bits == 0 {
        return 0;
    }
    if bits >= WORD_BITS {
        return val as i32;
    }
    let shift = WORD_BITS - bits;
    (val << shift) as i32 >> shift
}
