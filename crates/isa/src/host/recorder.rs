//! Recording host collaborators.
//!
//! `BranchLog` records transfer requests instead of moving a program counter, and
//! `FaultLog` records raised faults and emits a `tracing` warning for each.

use crate::common::error::FaultKind;
use crate::host::{BranchController, ExceptionReporter, FaultContext};

/// Branch controller that records every requested target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchLog {
    targets: Vec<i32>,
}

impl BranchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the requested targets in order.
    pub fn targets(&self) -> &[i32] {
        &self.targets
    }
}

impl BranchController for BranchLog {
    fn transfer_to(&mut self, target: i32) {
        tracing::debug!(branch_target = target, "branch requested");
        self.targets.push(target);
    }
}

/// One recorded fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFault {
    /// Fault kind.
    pub kind: FaultKind,
    /// Faulting word.
    pub word: u32,
    /// Faulting mnemonic.
    pub mnemonic: String,
    /// Fault description.
    pub message: String,
}

/// Exception reporter that records every fault.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultLog {
    faults: Vec<RecordedFault>,
}

impl FaultLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded faults in order.
    pub fn faults(&self) -> &[RecordedFault] {
        &self.faults
    }
}

impl ExceptionReporter for FaultLog {
    fn raise(&mut self, kind: FaultKind, context: &FaultContext<'_>) {
        tracing::warn!(
            ?kind,
            cause = ?kind.cause_code(),
            word = format_args!("{:#010x}", context.word),
            mnemonic = context.mnemonic,
            "{}",
            context.message
        );
        self.faults.push(RecordedFault {
            kind,
            word: context.word,
            mnemonic: context.mnemonic.to_owned(),
            message: context.message.to_owned(),
        });
    }
}
