//! Single-Word Execution Facade.
//!
//! `Core` bundles what one simulator session needs to run Chef words:
//! 1. **Registry:** The immutable instruction catalogue used for decoding.
//! 2. **Dispatcher:** Action invocation under the configured policy.
//! 3. **Session:** The auxiliary slot state owned by this session.
//!
//! The host keeps its own fetch loop and calls `Core::step` once per word that is not
//! a native instruction. Faults are reported to the host's exception reporter and also
//! returned, so the host can decide whether to trap or halt.

use crate::common::error::{ConfigError, DecodeError, StepError};
use crate::config::Config;
use crate::exec::session::SessionState;
use crate::exec::{Control, Dispatcher, ExecContext};
use crate::host::{FaultContext, Host};
use crate::isa::chef;
use crate::isa::decode::Decoded;
use crate::isa::registry::Registry;

/// Decode and dispatch state for one simulator session.
#[derive(Clone, Debug)]
pub struct Core {
    registry: Registry,
    dispatcher: Dispatcher,
    session: SessionState,
}

impl Core {
    /// Creates a session running the Chef instruction set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails `Config::validate` or the Chef table
    /// fails to register.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_registry(chef::registry()?, config)
    }

    /// Creates a session running an arbitrary registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HostCallRegister` if `config` fails `Config::validate`.
    pub fn with_registry(registry: Registry, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry,
            dispatcher: Dispatcher::new(config),
            session: SessionState::new(),
        })
    }

    /// Returns the instruction registry.
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the session slots.
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Returns the dispatcher.
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Decodes `word` without executing it.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::NoMatch` if no registered template matches.
    pub fn decode(&self, word: u32) -> Result<Decoded<'_>, DecodeError> {
        self.registry.decode(word)
    }

    /// Decodes and executes one word.
    ///
    /// # Arguments
    ///
    /// * `word` - The raw instruction word.
    /// * `host` - The host collaborators the action operates on.
    ///
    /// # Returns
    ///
    /// `Control::Next`, or `Control::Branch` after the target has been handed to
    /// `host.branch`.
    ///
    /// # Errors
    ///
    /// Returns `StepError::Decode` when the word matches nothing (nothing is reported),
    /// or `StepError::Fault` after the fault has been raised on `host.reporter`.
    pub fn step(&mut self, word: u32, host: &mut Host<'_>) -> Result<Control, StepError> {
        let decoded = self.registry.decode(word)?;
        let mut ctx = ExecContext {
            regs: &mut *host.regs,
            mem: &mut *host.mem,
            session: &mut self.session,
            branch: &mut *host.branch,
            console: &mut *host.console,
        };

        match self.dispatcher.execute(&decoded, &mut ctx) {
            Ok(control) => Ok(control),
            Err(fault) => {
                let message = fault.to_string();
                host.reporter.raise(
                    fault.kind(),
                    &FaultContext {
                        word,
                        mnemonic: decoded.spec().name(),
                        message: &message,
                    },
                );
                Err(fault.into())
            }
        }
    }
}
