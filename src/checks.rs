//! Smoke checks for primitive string and integer operations.
//!
//! Each routine builds its values fresh, performs one comparison against a
//! fixed expected literal, and reports a mismatch through [`Error::Mismatch`].
//! The checks share no state and can run in any order.

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Compare a computed value against its expected literal.
pub fn ensure_eq<T>(check: &'static str, expected: T, actual: T) -> Result<()>
where
    T: PartialEq + Debug,
{
    tracing::debug!("running check '{}'", check);

    if expected == actual {
        Ok(())
    } else {
        tracing::error!(
            "check '{}' failed: expected {:?}, got {:?}",
            check,
            expected,
            actual
        );
        Err(Error::Mismatch {
            check,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Concatenating "John" and "Walker" must produce "JohnWalker".
pub fn concat_names() -> Result<()> {
    let first_name = "John";
    let last_name = "Walker";
    let name = "JohnWalker";
    ensure_eq(
        "concat_names",
        name.to_string(),
        format!("{}{}", first_name, last_name),
    )
}

/// The fixed name literal must compare equal to itself.
pub fn name_equals_literal() -> Result<()> {
    let name = "JohnWalker";
    ensure_eq("name_equals_literal", name, "JohnWalker")
}

/// 8 * 2 must equal 16.
pub fn multiply() -> Result<()> {
    let number1 = 8;
    let number2 = 2;
    let result = 16;
    ensure_eq("multiply", result, number1 * number2)
}

/// 8 - 2 must equal 6.
pub fn subtract() -> Result<()> {
    let number1 = 8;
    let number2 = 2;
    let result = 6;
    ensure_eq("subtract", result, number1 - number2)
}

/// Integer division 8 / 2 must equal 4.
pub fn divide() -> Result<()> {
    let number1 = 8;
    let number2 = 2;
    let result = 4;
    ensure_eq("divide", result, number1 / number2)
}
