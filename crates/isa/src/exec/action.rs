//! Semantic actions.
//!
//! One `Action` case per instruction kind, bound to its spec at registration.
//! An action reads and writes machine state through the execution context and
//! returns either `Control::Next` or a branch request; it never moves the program
//! counter itself.
//!
//! Operand conventions (template order):
//! - Three-register: `[dest, src1, src2]`, fewer for the one- and two-operand forms.
//! - Register-immediate: `[reg, reg, imm]`, where `imm` is already sign-extended.

use serde::Serialize;

use crate::common::error::Fault;
use crate::config::ArithmeticMode;
use crate::exec::session::Slot;
use crate::exec::{Control, ExecContext, ExecPolicy, arith};
use crate::isa::format::Format;

/// Semantic action of one instruction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// `dest = src + imm`; overflow always faults.
    AddImmediate,
    /// `dest = src1 + src2`.
    Add,
    /// `dest = src1 / src2`.
    Divide,
    /// `dest = src1 - src2`.
    Subtract,
    /// `dest = src1 * src2`.
    Multiply,
    /// Request a transfer to `imm` when `reg0 == reg1`.
    BranchEqual,
    /// Host call selected by the selector register.
    HostCall,
    /// `memory[reg1 + imm] = reg0`.
    StoreWord,
    /// `reg0 = memory[reg1 + imm]`.
    LoadWord,
    /// `dest = src`.
    Move,
    /// Read one line of input into a session slot.
    Collect(Slot),
    /// Emit the dish message built from all session slots.
    Present,
    /// `dest = dest * 2`.
    Double,
    /// `dest = dest / 2`.
    Halve,
    /// `dest = (src1 + src2) / 2`.
    Average,
    /// `dest = 0`.
    Zero,
}

impl Action {
    /// Returns the format the action's operands are laid out in.
    pub const fn format(self) -> Format {
        match self {
            Self::AddImmediate | Self::BranchEqual | Self::StoreWord | Self::LoadWord => {
                Format::RegImm
            }
            _ => Format::ThreeOp,
        }
    }

    /// Returns the number of operands the action consumes.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::HostCall | Self::Collect(_) | Self::Present => 0,
            Self::Double | Self::Halve | Self::Zero => 1,
            Self::Move => 2,
            Self::AddImmediate
            | Self::Add
            | Self::Divide
            | Self::Subtract
            | Self::Multiply
            | Self::BranchEqual
            | Self::StoreWord
            | Self::LoadWord
            | Self::Average => 3,
        }
    }

    /// Executes the action.
    ///
    /// `ops` comes from a `Decoded`, so it holds `operand_count()` values and every
    /// register operand is 0-31.
    ///
    /// # Errors
    ///
    /// Returns the `Fault` raised by the action. Machine state is left untouched when
    /// an arithmetic or address fault is raised.
    pub(crate) fn run(
        self,
        ops: &[i32],
        ctx: &mut ExecContext<'_>,
        policy: &ExecPolicy,
    ) -> Result<Control, Fault> {
        let mode = policy.arithmetic;
        let reg = |i: usize| ops[i] as usize;

        match self {
            Self::AddImmediate => {
                // Always checked, whatever the mode.
                let value = arith::add(ArithmeticMode::Strict, ctx.regs.get(reg(1)), ops[2])?;
                ctx.regs.set(reg(0), value);
            }
            Self::Add => binary(ctx, ops, |a, b| arith::add(mode, a, b))?,
            Self::Subtract => binary(ctx, ops, |a, b| arith::sub(mode, a, b))?,
            Self::Multiply => binary(ctx, ops, |a, b| arith::mul(mode, a, b))?,
            Self::Divide => binary(ctx, ops, |a, b| arith::div(mode, a, b))?,
            Self::Average => binary(ctx, ops, |a, b| Ok(arith::average(mode, a, b)))?,
            Self::BranchEqual => {
                if ctx.regs.get(reg(0)) == ctx.regs.get(reg(1)) {
                    return Ok(Control::Branch(ops[2]));
                }
            }
            Self::HostCall => {
                let selector = ctx.regs.get(policy.selector_register);
                let arg = ctx.regs.get(policy.argument_register);
                match selector {
                    1 => ctx.console.write_line(&format!("Serving {arg} dishes"))?,
                    4 => ctx.console.write_line(&format!("Serving dish: {arg}"))?,
                    _ => tracing::trace!(selector, "host call ignored"),
                }
            }
            Self::StoreWord => {
                let addr = effective_address(ctx, ops);
                ctx.mem
                    .store_word(addr, ctx.regs.get(reg(0)))
                    .map_err(Fault::Store)?;
            }
            Self::LoadWord => {
                let addr = effective_address(ctx, ops);
                let value = ctx.mem.load_word(addr).map_err(Fault::Load)?;
                ctx.regs.set(reg(0), value);
            }
            Self::Move => {
                let value = ctx.regs.get(reg(1));
                ctx.regs.set(reg(0), value);
            }
            Self::Collect(slot) => {
                let line = ctx.console.read_line(slot.prompt())?;
                tracing::debug!(%slot, %line, "collected");
                ctx.session.set(slot, line);
            }
            Self::Present => {
                let message = ctx.session.dish(policy.unset_slot)?;
                ctx.console.write_line(&message)?;
            }
            Self::Double => {
                let value = arith::double(mode, ctx.regs.get(reg(0)))?;
                ctx.regs.set(reg(0), value);
            }
            Self::Halve => {
                let value = arith::halve(ctx.regs.get(reg(0)));
                ctx.regs.set(reg(0), value);
            }
            Self::Zero => ctx.regs.set(reg(0), 0),
        }
        Ok(Control::Next)
    }
}

/// `ops[0] = f(reg[ops[1]], reg[ops[2]])`.
fn binary(
    ctx: &mut ExecContext<'_>,
    ops: &[i32],
    f: impl FnOnce(i32, i32) -> Result<i32, Fault>,
) -> Result<(), Fault> {
    let value = f(ctx.regs.get(ops[1] as usize), ctx.regs.get(ops[2] as usize))?;
    ctx.regs.set(ops[0] as usize, value);
    Ok(())
}

/// `reg[ops[1]] + ops[2]`, wrapping in 32 bits.
fn effective_address(ctx: &ExecContext<'_>, ops: &[i32]) -> u32 {
    ctx.regs.get(ops[1] as usize).wrapping_add(ops[2]) as u32
}
