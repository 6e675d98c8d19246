//! # Session Tests
//!
//! The five collect instructions, `present`, and the unset-slot policies.
//! Each `Core` owns its own slots.

use chef_isa::common::{Fault, FaultKind, StepError};
use chef_isa::config::{Config, UnsetSlotPolicy};
use chef_isa::exec::{SessionState, Slot};
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

fn dish(protein: &str, grains: &str, vegetable: &str, dairy: &str, fruit: &str) -> String {
    format!(
        "Tonight I have prepared for you all a world-class, gourmet, masterpiece of a dish \
         that will surely transform your night. This dish incorporates {protein}, with \
         {grains}, {vegetable}, and {dairy} for added flavor, as well as {fruit} as garnish, \
         all being of the highest quality. Enjoy!"
    )
}

#[test]
fn collect_prompts_and_stores_line() {
    let mut ctx = TestContext::new().with_input(["salmon"]);

    let _ = ctx.run("protein", &[]).unwrap();

    assert_eq!(ctx.core.session().get(Slot::Protein), Some("salmon"));
    assert_eq!(ctx.console.prompts(), &[Slot::Protein.prompt().to_owned()]);
}

#[test]
fn present_interpolates_every_slot() {
    let mut ctx = TestContext::new().with_input(["beef", "rice", "carrot", "apple", "cheese"]);
    for name in ["protein", "grains", "vegetable", "fruit", "dairy", "present"] {
        let _ = ctx.run(name, &[]).unwrap();
    }

    assert!(ctx.core.session().is_complete());
    assert_eq!(
        ctx.console.output(),
        &[dish("beef", "rice", "carrot", "cheese", "apple")]
    );
}

#[test]
fn later_collect_overwrites_slot() {
    let mut ctx = TestContext::new().with_input(["tofu", "chicken"]);
    let _ = ctx.run("protein", &[]).unwrap();
    let _ = ctx.run("protein", &[]).unwrap();
    assert_eq!(ctx.core.session().get(Slot::Protein), Some("chicken"));
}

#[test]
fn present_without_collect_uses_empty_text() {
    let mut ctx = TestContext::new();
    let _ = ctx.run("present", &[]).unwrap();
    assert_eq!(ctx.console.output(), &[dish("", "", "", "", "")]);
}

#[test]
fn present_with_fault_policy_names_first_unset_slot() {
    let mut config = Config::default();
    config.session.unset_slot = UnsetSlotPolicy::Fault;
    let mut ctx = TestContext::with_config(&config).with_input(["lamb", "barley"]);
    let _ = ctx.run("protein", &[]).unwrap();
    let _ = ctx.run("grains", &[]).unwrap();

    let err = ctx.run("present", &[]).unwrap_err();

    assert!(matches!(err, StepError::Fault(Fault::UnsetSlot(Slot::Vegetable))));
    assert!(ctx.console.output().is_empty());
    assert_eq!(ctx.faults.faults()[0].kind, FaultKind::UnsetSlot);
    assert_eq!(ctx.faults.faults()[0].message, "no vegetable was chosen for the dish");
}

#[test]
fn collect_at_end_of_input_is_console_fault() {
    let mut ctx = TestContext::new();
    let err = ctx.run("dairy", &[]).unwrap_err();
    assert!(matches!(err, StepError::Fault(Fault::Console(_))));
    assert_eq!(ctx.core.session().get(Slot::Dairy), None);
}

#[test]
fn sessions_are_independent() {
    let mut first = TestContext::new().with_input(["pork"]);
    let second = TestContext::new();
    let _ = first.run("protein", &[]).unwrap();

    assert_eq!(first.core.session().get(Slot::Protein), Some("pork"));
    assert_eq!(second.core.session().get(Slot::Protein), None);
}

#[test]
fn session_state_direct_use() {
    let mut session = SessionState::new();
    assert!(!session.is_complete());
    for slot in Slot::ALL {
        session.set(slot, slot.label());
    }
    assert!(session.is_complete());
    assert_eq!(
        session.dish(UnsetSlotPolicy::Fault).unwrap(),
        dish("protein", "grains", "vegetable", "dairy", "fruit")
    );
}
