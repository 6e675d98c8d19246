//! Instruction set unit tests.


/// Decode properties over random operand values.
pub mod decode_properties;



/// Template parsing, matching and encoding.
pub mod template;
