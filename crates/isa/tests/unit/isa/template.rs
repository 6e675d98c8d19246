//! # Template Tests
//!
//! Parsing rules (length, characters, contiguity, dense numbering), the
//! mask/expected pair, matching, overlap detection and encoding.

use chef_isa::common::{EncodeError, TemplateError};
use chef_isa::isa::template::{Field, Template};
use pretty_assertions::assert_eq;
use rstest::rstest;

const MIX: &str = "000000 sssss ttttt fffff 00000 100000";

// ══════════════════════════════════════════════════════════
// 1. Parsing
// ══════════════════════════════════════════════════════════

#[test]
fn parse_builds_mask_and_fields() {
    let t = Template::parse(MIX).unwrap();

    assert_eq!(t.pattern(), MIX.replace(' ', ""));
    assert_eq!(t.mask(), 0xFC00_07FF);
    assert_eq!(t.expected(), 0x0000_0020);
    assert_eq!(
        t.fields(),
        &[
            Field { operand: 0, lsb: 11, width: 5 },
            Field { operand: 1, lsb: 21, width: 5 },
            Field { operand: 2, lsb: 16, width: 5 },
        ]
    );
    assert_eq!(t.operand_count(), 3);
}

#[test]
fn parse_all_literal_template_has_no_operands() {
    let t = Template::parse("000000 00000 00000 00000 00000 111001").unwrap();
    assert_eq!(t.mask(), u32::MAX);
    assert_eq!(t.expected(), 0b111001);
    assert_eq!(t.operand_count(), 0);
}

#[test]
fn parse_ignores_whitespace_layout() {
    let grouped = Template::parse(MIX).unwrap();
    let packed = Template::parse(&MIX.replace(' ', "")).unwrap();
    assert_eq!(grouped, packed);
}

#[rstest]
#[case::short("000000 sssss ttttt fffff 00000 10000", TemplateError::Length(31))]
#[case::long("000000 sssss ttttt fffff 00000 1000000", TemplateError::Length(33))]
#[case::bad_char("000000 sssss ttttt fffff 00000 10000x", TemplateError::Char('x'))]
#[case::uppercase("000000 SSSSS ttttt fffff 00000 100000", TemplateError::Char('S'))]
#[case::split("000000 sssss fffff fffff sssss 100000", TemplateError::NonContiguous('s'))]
#[case::sparse("000000 sssss 00000 00000 00000 100000", TemplateError::SparseOperands(0))]
#[case::missing_second("000000 00000 ttttt fffff 00000 100000", TemplateError::SparseOperands(1))]
fn parse_rejects_malformed_templates(#[case] text: &str, #[case] expected: TemplateError) {
    assert_eq!(Template::parse(text), Err(expected));
}

#[test]
fn display_is_the_normalized_pattern() {
    let t = Template::parse(MIX).unwrap();
    assert_eq!(t.to_string(), t.pattern());
    assert_eq!(t.to_string().len(), 32);
}

// ══════════════════════════════════════════════════════════
// 2. Matching
// ══════════════════════════════════════════════════════════

#[test]
fn matches_ignores_operand_bits() {
    let t = Template::parse(MIX).unwrap();
    assert!(t.matches(0x0000_0020));
    assert!(t.matches(0x03FF_F820));
    assert!(!t.matches(0x0000_0021));
    assert!(!t.matches(0x0400_0020));
    // shamt is literal zero.
    assert!(!t.matches(0x0000_0060));
}

#[test]
fn overlaps_detects_shared_words() {
    let mix = Template::parse(MIX).unwrap();
    let same_funct = Template::parse("000000 00000 00000 fffff 00000 100000").unwrap();
    let other_funct = Template::parse("000000 sssss ttttt fffff 00000 100010").unwrap();
    let wide = Template::parse("000000 ffffffffffffffffffff 100000").unwrap();

    assert!(mix.overlaps(&mix));
    assert!(mix.overlaps(&same_funct));
    assert!(same_funct.overlaps(&mix));
    assert!(mix.overlaps(&wide));
    assert!(!mix.overlaps(&other_funct));
}

// ══════════════════════════════════════════════════════════
// 3. Encoding
// ══════════════════════════════════════════════════════════

#[test]
fn encode_places_operands_in_their_fields() {
    let t = Template::parse(MIX).unwrap();
    // mix $t0, $t1, $t2
    assert_eq!(t.encode(&[8, 9, 10]), Ok(0x012A_4020));
}

#[test]
fn encode_accepts_full_unsigned_field_range() {
    let t = Template::parse("001000 sssss fffff tttttttttttttttt").unwrap();
    assert_eq!(t.encode(&[31, 0, 0xFFFF]), Ok(0x201F_FFFF));
}

#[rstest]
#[case::register_too_wide(&[40, 9, 10], 0, 40, 5)]
#[case::negative_register(&[8, -1, 10], 1, -1, 5)]
#[case::last_register(&[8, 9, 32], 2, 32, 5)]
fn encode_rejects_values_outside_their_field(
    #[case] ops: &[i32],
    #[case] operand: usize,
    #[case] value: i32,
    #[case] width: u32,
) {
    let t = Template::parse(MIX).unwrap();
    assert_eq!(
        t.encode(ops),
        Err(EncodeError::OutOfRange {
            operand,
            value,
            width
        })
    );
}

#[test]
fn encode_rejects_wrong_operand_count() {
    let t = Template::parse(MIX).unwrap();
    assert_eq!(
        t.encode(&[8, 9]),
        Err(EncodeError::OperandCount {
            expected: 3,
            got: 2
        })
    );
    assert_eq!(
        t.encode(&[8, 9, 10, 11]),
        Err(EncodeError::OperandCount {
            expected: 3,
            got: 4
        })
    );
}

#[test]
fn encoded_words_match_their_template() {
    let t = Template::parse(MIX).unwrap();
    for ops in [[0, 0, 0], [31, 31, 31], [1, 2, 3]] {
        let word = t.encode(&ops).unwrap();
        assert!(t.matches(word), "{word:#010x}");
    }
}
