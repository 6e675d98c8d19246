//! Checked arithmetic.
//!
//! Every arithmetic action goes through these helpers so exceptional conditions are
//! detected in one place. Division by zero always faults. Signed overflow faults in
//! `ArithmeticMode::Strict`; in `ArithmeticMode::Lenient` the result wraps to the low
//! 32 bits.

use crate::common::error::Fault;
use crate::config::ArithmeticMode;

/// Selects between the checked and wrapped result according to `mode`.
#[inline]
fn resolve(mode: ArithmeticMode, checked: Option<i32>, wrapped: i32) -> Result<i32, Fault> {
    match mode {
        ArithmeticMode::Strict => checked.ok_or(Fault::ArithmeticOverflow),
        ArithmeticMode::Lenient => Ok(wrapped),
    }
}

/// `a + b`.
pub fn add(mode: ArithmeticMode, a: i32, b: i32) -> Result<i32, Fault> {
    resolve(mode, a.checked_add(b), a.wrapping_add(b))
}

/// `a - b`.
pub fn sub(mode: ArithmeticMode, a: i32, b: i32) -> Result<i32, Fault> {
    resolve(mode, a.checked_sub(b), a.wrapping_sub(b))
}

/// `a * b`, low 32 bits when wrapping.
pub fn mul(mode: ArithmeticMode, a: i32, b: i32) -> Result<i32, Fault> {
    resolve(mode, a.checked_mul(b), a.wrapping_mul(b))
}

/// `a / b`, truncating toward zero.
///
/// `i32::MIN / -1` overflows; it faults in strict mode and yields `i32::MIN` otherwise.
pub fn div(mode: ArithmeticMode, a: i32, b: i32) -> Result<i32, Fault> {
    if b == 0 {
        return Err(Fault::DivideByZero);
    }
    resolve(mode, a.checked_div(b), a.wrapping_div(b))
}

/// `a * 2`.
pub fn double(mode: ArithmeticMode, a: i32) -> Result<i32, Fault> {
    mul(mode, a, 2)
}

/// `a / 2`, truncating toward zero. Cannot overflow.
pub const fn halve(a: i32) -> i32 {
    a / 2
}

/// `(a + b) / 2`, truncating toward zero.
///
/// Strict mode computes the sum in 64 bits, so the result is always exact and
/// representable. Lenient mode wraps the 32-bit sum before halving.
pub fn average(mode: ArithmeticMode, a: i32, b: i32) -> i32 {
    match mode {
        ArithmeticMode::Strict => ((i64::from(a) + i64::from(b)) / 2) as i32,
        ArithmeticMode::Lenient => a.wrapping_add(b) / 2,
    }
}
