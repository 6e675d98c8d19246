//! Instruction Decode Properties.
//!
//! Verifies that decoding recovers the operands an instruction was encoded with,
//! for every Chef instruction and arbitrary in-range operand values, and that
//! the 16-bit immediate is sign-extended.

use chef_isa::isa::decode::sign_extend;
use chef_isa::isa::instruction::InstructionBits;
use chef_isa::isa::{Format, chef};
use proptest::prelude::*;

// ──────────────────────────────────────────────────────────
// Operand strategies
// ──────────────────────────────────────────────────────────

fn reg() -> impl Strategy<Value = i32> {
    0..32i32
}

fn imm16() -> impl Strategy<Value = i32> {
    i32::from(i16::MIN)..=i32::from(i16::MAX)
}

fn mnemonic(format: Format) -> impl Strategy<Value = String> {
    let names: Vec<String> = chef::TABLE
        .iter()
        .filter(|(.., f, _, _)| *f == format)
        .map(|(syntax, ..)| syntax.split_whitespace().next().unwrap_or_default().to_owned())
        .collect();
    prop::sample::select(names)
}

proptest! {
    #[test]
    fn three_op_round_trip(name in mnemonic(Format::ThreeOp), a in reg(), b in reg(), c in reg()) {
        let registry = chef::registry().unwrap();
        let spec = registry.find(&name).unwrap();

        let ops = &[a, b, c][..spec.template().operand_count()];
        let word = spec.encode(ops).unwrap();
        let decoded = registry.decode(word).unwrap();

        prop_assert_eq!(decoded.spec().name(), spec.name());
        prop_assert_eq!(decoded.operands().as_slice(), ops);
    }

    #[test]
    fn reg_imm_round_trip(
        name in mnemonic(Format::RegImm),
        a in reg(),
        b in reg(),
        imm in imm16(),
    ) {
        let registry = chef::registry().unwrap();
        let spec = registry.find(&name).unwrap();

        let word = spec.encode(&[a, b, imm]).unwrap();
        let decoded = registry.decode(word).unwrap();

        prop_assert_eq!(decoded.spec().name(), spec.name());
        prop_assert_eq!(decoded.operands().as_slice(), &[a, b, imm][..]);
    }

    #[test]
    fn reg_imm_operands_follow_mips_fields(a in reg(), b in reg(), imm in imm16()) {
        let registry = chef::registry().unwrap();
        let word = registry.find("season").unwrap().encode(&[a, b, imm]).unwrap();

        prop_assert_eq!(word.rt() as i32, a);
        prop_assert_eq!(word.rs() as i32, b);
        prop_assert_eq!(sign_extend(word.imm16(), 16), imm);
    }

    #[test]
    fn sign_extend_matches_i16_cast(raw in 0u32..=0xFFFF) {
        prop_assert_eq!(sign_extend(raw, 16), i32::from(raw as u16 as i16));
    }
}

#[test]
fn immediate_all_ones_is_minus_one() {
    let registry = chef::registry().unwrap();
    // season $t0, $t1, 0xFFFF
    let decoded = registry.decode(0x2128_FFFF).unwrap();
    assert_eq!(decoded.operands().as_slice(), &[8, 9, -1]);
}

#[test]
fn immediate_sign_boundary() {
    assert_eq!(sign_extend(0x7FFF, 16), 32767);
    assert_eq!(sign_extend(0x8000, 16), -32768);
    assert_eq!(sign_extend(0x0000, 16), 0);
}

#[test]
fn sign_extend_handles_degenerate_widths() {
    assert_eq!(sign_extend(0x1234, 0), 0);
    assert_eq!(sign_extend(0xFFFF_FFFF, 32), -1);
    assert_eq!(sign_extend(0x8000_0000, 40), i32::MIN);
    assert_eq!(sign_extend(1, 1), -1);
}

#[test]
fn register_fields_are_never_sign_extended() {
    let registry = chef::registry().unwrap();
    let spec = registry.find("mix").unwrap();
    let decoded = registry.decode(spec.encode(&[31, 31, 31]).unwrap()).unwrap();
    assert_eq!(decoded.operands().as_slice(), &[31, 31, 31]);
}

#[test]
fn unregistered_words_do_not_decode() {
    let registry = chef::registry().unwrap();
    for word in [0x0000_0000, 0xFFFF_FFFF, 0x0000_0020 | 1 << 6] {
        assert!(registry.decode(word).is_err(), "{word:#010x}");
    }
}
