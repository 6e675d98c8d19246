//! Chef Assembly instruction table.
//!
//! Twenty instructions layered onto the MIPS word format: arithmetic, data
//! movement, memory access, a branch, a host call, and the five ingredient
//! collectors plus `present` that share the per-session dish state.
//!
//! Template operand letters: `f` is the first operand of the syntax, `s` the
//! second, `t` the third. Register-immediate templates always put the signed
//! 16-bit field last.

use crate::common::error::ConfigError;
use crate::exec::action::Action;
use crate::exec::session::Slot;
use crate::isa::format::Format;
use crate::isa::registry::Registry;
use crate::isa::spec::InstructionSpec;

/// Display name of the instruction set.
pub const NAME: &str = "Chef Assembly";

/// One-line summary of the instruction set.
pub const DESCRIPTION: &str = "Simulate cooking like a professional chef";

/// (syntax, description, format, template, action) for every Chef instruction,
/// in registration order.
pub const TABLE: [(&str, &str, Format, &str, Action); 20] = [
    (
        "season $t0,$t1,12",
        "Add immediate: set $t0 to $t1 plus a signed 16-bit immediate, trapping on overflow",
        Format::RegImm,
        "001000 sssss fffff tttttttttttttttt",
        Action::AddImmediate,
    ),
    (
        "mix $t0,$t1,$t2",
        "Add: $t0 = $t1 + $t2",
        Format::ThreeOp,
        "000000 sssss ttttt fffff 00000 100000",
        Action::Add,
    ),
    (
        "chop $t0,$t1,$t2",
        "Divide: $t0 = $t1 / $t2, truncating toward zero",
        Format::ThreeOp,
        "000000 sssss ttttt fffff 00000 011010",
        Action::Divide,
    ),
    (
        "spill $t0,$t1,$t2",
        "Subtract: $t0 = $t1 - $t2",
        Format::ThreeOp,
        "000000 sssss ttttt fffff 00000 100010",
        Action::Subtract,
    ),
    (
        "bake $t0,$t1,$t2",
        "Multiply: $t0 = $t1 * $t2",
        Format::ThreeOp,
        "000000 sssss ttttt fffff 00000 011000",
        Action::Multiply,
    ),
    (
        "taste $t0,$t1,label",
        "Branch if equal: branch to label if $t0 equals $t1",
        Format::RegImm,
        "000100 sssss fffff tttttttttttttttt",
        Action::BranchEqual,
    ),
    (
        "serve",
        "Host call: $v0 = 1 serves $a0 dishes, $v0 = 4 serves dish $a0",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 001100",
        Action::HostCall,
    ),
    (
        "to_fridge $t0,12($t1)",
        "Store word: memory[$t1 + offset] = $t0",
        Format::RegImm,
        "101011 sssss fffff tttttttttttttttt",
        Action::StoreWord,
    ),
    (
        "from_fridge $t0,12($t1)",
        "Load word: $t0 = memory[$t1 + offset]",
        Format::RegImm,
        "100011 sssss fffff tttttttttttttttt",
        Action::LoadWord,
    ),
    (
        "plate $t0,$t1",
        "Move: $t0 = $t1",
        Format::ThreeOp,
        "000000 sssss 00000 fffff 00000 100001",
        Action::Move,
    ),
    (
        "protein",
        "Choose the protein for the dish",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 111011",
        Action::Collect(Slot::Protein),
    ),
    (
        "grains",
        "Choose the grains for the dish",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 101011",
        Action::Collect(Slot::Grains),
    ),
    (
        "vegetable",
        "Choose the vegetable for the dish",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 011001",
        Action::Collect(Slot::Vegetable),
    ),
    (
        "fruit",
        "Choose the fruit for the dish",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 101000",
        Action::Collect(Slot::Fruit),
    ),
    (
        "dairy",
        "Choose the dairy for the dish",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 110011",
        Action::Collect(Slot::Dairy),
    ),
    (
        "present",
        "Present the dish to your guests",
        Format::ThreeOp,
        "000000 00000 00000 00000 00000 111001",
        Action::Present,
    ),
    (
        "salt $t0",
        "Double: $t0 = $t0 * 2",
        Format::ThreeOp,
        "000000 00000 00000 fffff 00000 001000",
        Action::Double,
    ),
    (
        "pepper $t0",
        "Halve: $t0 = $t0 / 2, truncating toward zero",
        Format::ThreeOp,
        "000000 00000 00000 fffff 00000 001111",
        Action::Halve,
    ),
    (
        "blend $t0,$t1,$t2",
        "Average: $t0 = ($t1 + $t2) / 2, truncating toward zero",
        Format::ThreeOp,
        "101111 sssss ttttt fffff 00000 000000",
        Action::Average,
    ),
    (
        "throw_out $t0",
        "Zero: $t0 = 0",
        Format::ThreeOp,
        "000000 00000 00000 fffff 00000 101101",
        Action::Zero,
    ),
];

/// Builds the registry holding every Chef instruction.
///
/// # Errors
///
/// Returns the first `ConfigError` raised while registering the table.
pub fn registry() -> Result<Registry, ConfigError> {
    let mut registry = Registry::new();
    for (syntax, description, format, pattern, action) in TABLE {
        registry.register(InstructionSpec::new(syntax, description, format, pattern, action)?)?;
    }
    tracing::info!(isa = NAME, instructions = registry.len(), "instruction registry built");
    Ok(registry)
}
