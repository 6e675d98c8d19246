//! # Host-Call Tests
//!
//! `serve` reads the selector and argument registers and writes one console line
//! for the supported selectors; other selectors do nothing.

use std::io;

use chef_isa::common::{Fault, FaultKind, StepError};
use chef_isa::config::Config;
use chef_isa::exec::Control;
use chef_isa::host::{BranchLog, FaultLog, FlatMemory, Host, RegisterFile, Registers};
use chef_isa::isa::abi::{REG_A0, REG_T0, REG_T1, REG_V0};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;
use crate::common::mocks::MockTerminal;

#[rstest]
#[case::count(1, 3, "Serving 3 dishes")]
#[case::count_negative(1, -2, "Serving -2 dishes")]
#[case::dish(4, 17, "Serving dish: 17")]
fn supported_selectors_write_one_line(#[case] selector: i32, #[case] arg: i32, #[case] line: &str) {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_V0, selector);
    ctx.set_reg(REG_A0, arg);

    assert_eq!(ctx.run("serve", &[]).unwrap(), Control::Next);
    assert_eq!(ctx.console.output(), &[line.to_owned()]);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(10)]
#[case(-1)]
fn other_selectors_are_ignored(#[case] selector: i32) {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_V0, selector);
    ctx.set_reg(REG_A0, 5);

    assert_eq!(ctx.run("serve", &[]).unwrap(), Control::Next);
    assert!(ctx.console.output().is_empty());
    assert_eq!(ctx.get_reg(REG_V0), selector);
}

#[test]
fn selector_and_argument_registers_are_configurable() {
    let config = Config::from_json(
        r#"{ "host_call": { "selector_register": 8, "argument_register": 9 } }"#,
    )
    .unwrap();
    let mut ctx = TestContext::with_config(&config);
    ctx.set_reg(REG_T0, 4);
    ctx.set_reg(REG_T1, 99);
    ctx.set_reg(REG_V0, 1);

    let _ = ctx.run("serve", &[]).unwrap();
    assert_eq!(ctx.console.output(), &["Serving dish: 99".to_owned()]);
}

#[test]
fn console_failure_becomes_console_fault() {
    let mut core = chef_isa::Core::new(&Config::default()).unwrap();
    let word = core.registry().find("serve").unwrap().encode(&[]).unwrap();

    let mut regs = Registers::new();
    regs.set(REG_V0, 1);
    let mut mem = FlatMemory::new(0, 0);
    let mut branch = BranchLog::new();
    let mut faults = FaultLog::new();
    let mut console = MockTerminal::new();
    let _ = console
        .expect_write_line()
        .times(1)
        .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));

    let mut host = Host {
        regs: &mut regs,
        mem: &mut mem,
        branch: &mut branch,
        console: &mut console,
        reporter: &mut faults,
    };
    let err = core.step(word, &mut host).unwrap_err();

    assert!(matches!(err, StepError::Fault(Fault::Console(_))));
    assert_eq!(faults.faults()[0].kind, FaultKind::Console);
    assert_eq!(faults.faults()[0].kind.cause_code(), None);
}
