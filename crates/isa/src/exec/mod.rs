//! Execution engine.
//!
//! This module turns a decoded word into its effect on machine state:
//! 1. **Dispatcher:** Invokes the action bound to the matched spec and forwards
//!    branch requests to the host's program-counter controller.
//! 2. **Actions:** The semantic action of each instruction kind.
//! 3. **Arithmetic:** Overflow-checked integer helpers shared by all actions.
//! 4. **Session:** The auxiliary slot state read by the present action.

/// Semantic actions.
pub mod action;

/// Overflow-checked arithmetic.
pub mod arith;

/// Auxiliary session state.
pub mod session;

use std::fmt;

use crate::common::error::Fault;
use crate::config::{ArithmeticMode, Config, UnsetSlotPolicy};
use crate::host::{BranchController, Console, Memory, RegisterFile};
use crate::isa::decode::Decoded;

pub use self::action::Action;
pub use self::session::{SessionState, Slot};

/// Outcome of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Continue with the next sequential word.
    Next,
    /// Transfer requested to the given label offset.
    Branch(i32),
}

/// Machine state an action may read and write.
pub struct ExecContext<'a> {
    /// Register file.
    pub regs: &'a mut dyn RegisterFile,
    /// Data memory.
    pub mem: &'a mut dyn Memory,
    /// Session slots.
    pub session: &'a mut SessionState,
    /// Program-counter controller.
    pub branch: &'a mut dyn BranchController,
    /// Text console.
    pub console: &'a mut dyn Console,
}

impl fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Execution settings derived from `Config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecPolicy {
    /// Overflow checking for register arithmetic.
    pub arithmetic: ArithmeticMode,
    /// Treatment of uncollected slots by the present action.
    pub unset_slot: UnsetSlotPolicy,
    /// Register holding the host-call selector.
    pub selector_register: usize,
    /// Register holding the host-call argument.
    pub argument_register: usize,
}

impl ExecPolicy {
    /// Extracts the execution settings from `config`.
    pub const fn from_config(config: &Config) -> Self {
        Self {
            arithmetic: config.arithmetic.mode,
            unset_slot: config.session.unset_slot,
            selector_register: config.host_call.selector_register,
            argument_register: config.host_call.argument_register,
        }
    }
}

impl Default for ExecPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Dispatches decoded words to their actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dispatcher {
    policy: ExecPolicy,
    trace: bool,
}

impl Dispatcher {
    /// Creates a dispatcher configured by `config`.
    pub const fn new(config: &Config) -> Self {
        Self {
            policy: ExecPolicy::from_config(config),
            trace: config.general.trace_instructions,
        }
    }

    /// Returns the active execution settings.
    pub const fn policy(&self) -> &ExecPolicy {
        &self.policy
    }

    /// Executes one decoded word.
    ///
    /// A `Control::Branch` result has already been forwarded to `ctx.branch` when
    /// this returns; the caller must not forward it again.
    ///
    /// # Arguments
    ///
    /// * `decoded` - The matched spec and its extracted operands.
    /// * `ctx` - Machine state the action operates on.
    ///
    /// # Errors
    ///
    /// Returns the `Fault` raised by the action. The dispatcher does not report it;
    /// that is left to the caller.
    pub fn execute(
        &self,
        decoded: &Decoded<'_>,
        ctx: &mut ExecContext<'_>,
    ) -> Result<Control, Fault> {
        if self.trace {
            tracing::debug!(
                word = format_args!("{:#010x}", decoded.raw()),
                insn = %decoded,
                "execute"
            );
        }

        let control = decoded
            .spec()
            .action()
            .run(decoded.operands(), ctx, &self.policy)?;

        if let Control::Branch(target) = control {
            ctx.branch.transfer_to(target);
        }
        Ok(control)
    }
}
