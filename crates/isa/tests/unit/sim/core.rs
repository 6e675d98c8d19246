//! # Core Step Tests
//!
//! `Core::step` decodes against the registry, dispatches, and reports faults
//! to the host before returning them. Unmatched words are decode errors and are
//! not reported as faults.

use chef_isa::common::{ConfigError, DecodeError, FaultKind, StepError};
use chef_isa::config::Config;
use chef_isa::exec::{Action, Control};
use chef_isa::isa::abi::{REG_T0, REG_T1, REG_T2};
use chef_isa::isa::{InstructionSpec, Registry};
use chef_isa::Core;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

const T0: i32 = REG_T0 as i32;
const T1: i32 = REG_T1 as i32;
const T2: i32 = REG_T2 as i32;

#[test]
fn step_executes_a_sequence() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_T1, 6);
    ctx.set_reg(REG_T2, 4);

    let program = [
        ctx.encode("mix", &[T0, T1, T2]),   // t0 = 10
        ctx.encode("salt", &[T0]),          // t0 = 20
        ctx.encode("spill", &[T0, T0, T1]), // t0 = 14
        ctx.encode("pepper", &[T0]),        // t0 = 7
    ];
    for word in program {
        assert_eq!(ctx.step(word).unwrap(), Control::Next);
    }

    assert_eq!(ctx.get_reg(REG_T0), 7);
    assert!(ctx.faults.faults().is_empty());
}

#[test]
fn unmatched_word_is_a_decode_error() {
    let mut ctx = TestContext::new();
    let err = ctx.step(0xFFFF_FFFF).unwrap_err();

    assert!(matches!(err, StepError::Decode(DecodeError::NoMatch(0xFFFF_FFFF))));
    assert!(ctx.faults.faults().is_empty());
}

#[test]
fn fault_is_reported_with_word_and_mnemonic() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_T1, 1);
    let word = ctx.encode("chop", &[T0, T1, T2]);

    let _ = ctx.step(word).unwrap_err();

    let faults = ctx.faults.faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].kind, FaultKind::DivideByZero);
    assert_eq!(faults[0].word, word);
    assert_eq!(faults[0].mnemonic, "chop");
    assert_eq!(faults[0].message, "division by zero");
    assert_eq!(faults[0].kind.cause_code(), Some(13));
}

#[test]
fn execution_continues_after_a_fault() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_T1, i32::MAX);
    assert!(ctx.run("season", &[T0, T1, 1]).is_err());

    ctx.set_reg(REG_T1, 1);
    let _ = ctx.run("season", &[T0, T1, 1]).unwrap();
    assert_eq!(ctx.get_reg(REG_T0), 2);
}

#[test]
fn core_refuses_out_of_range_host_call_register() {
    let mut config = Config::default();
    config.host_call.selector_register = 40;
    let expected = ConfigError::HostCallRegister {
        role: "selector",
        reg: 40,
    };

    assert_eq!(Core::new(&config).unwrap_err(), expected);
    assert_eq!(
        Core::with_registry(Registry::new(), &config).unwrap_err(),
        expected
    );
}

#[test]
fn decode_without_executing() {
    let ctx = TestContext::new();
    let decoded = ctx.core.decode(0x012A_4020).unwrap();
    assert_eq!(decoded.spec().action(), Action::Add);
    assert_eq!(decoded.operands().as_slice(), &[T0, T1, T2]);
    assert_eq!(ctx.get_reg(REG_T0), 0);
}

#[test]
fn core_accepts_a_custom_registry() {
    let mut registry = Registry::new();
    registry
        .register(
            InstructionSpec::new(
                "wipe $t0",
                "Zero a register",
                Action::Zero.format(),
                "111111 00000 00000 fffff 00000 000000",
                Action::Zero,
            )
            .unwrap(),
        )
        .unwrap();
    let core = Core::with_registry(registry, &Config::default()).unwrap();

    assert_eq!(core.registry().len(), 1);
    assert_eq!(core.decode(0xFC00_4000).unwrap().spec().name(), "wipe");
    assert!(core.decode(0x012A_4020).is_err());
}

#[test]
fn traced_dispatch_still_executes() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut ctx = TestContext::with_config(&config);
    ctx.set_reg(REG_T1, 3);

    let _ = ctx.run("plate", &[T0, T1]).unwrap();
    assert_eq!(ctx.get_reg(REG_T0), 3);
    assert_eq!(ctx.core.dispatcher().policy().arithmetic, config.arithmetic.mode);
}
