use crate::error::{FixtureError, Result};

/// Divide `a` by `b`.
///
/// # Errors
///
/// Returns [`FixtureError::DivisionByZero`] when `b` is zero. Callers decide
/// whether to recover.
#[allow(clippy::float_cmp)]
pub fn divide_numbers(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(FixtureError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}
