use std::io::Write;
use serde::Serialize;
use codereview_fixture_lib::divide::divide_numbers;
use codereview_fixture_lib::fibonacci::calculate_fibonacci;
use codereview_fixture_lib::user_data::{process_user_data_to, user_data, UserData};
use codereview_fixture_lib::Result;

/// Dividend of the guarded call, which always divides by zero
pub const ZERO_CHECK_DIVIDEND: f64 = 10.0;

/// Inputs of one demonstration run
#[derive(Debug, Clone)]
pub struct DemoInputs {
    pub fib_index: i64,
    pub user: UserData,
    pub dividend: f64,
    pub divisor: f64,
}

impl Default for DemoInputs {
    fn default() -> Self {
        DemoInputs {
            fib_index: 10,
            user: user_data("John Doe", "john@example.com"),
            dividend: 10.0,
            divisor: 2.0,
        }
    }
}

/// What happened to the division by zero inside the guarded block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "lowercase")]
pub enum ZeroDivisionOutcome {
    Caught,
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub fibonacci_index: i64,
    pub fibonacci: u64,
    pub user: String,
    pub division: f64,
    pub zero_division: ZeroDivisionOutcome,
}

/// Run the fixture functions in order, writing the user diagnostic to `diagnostics`.
///
/// Only a division by zero in the final, guarded call is recovered from.
///
/// # Errors
///
/// Propagates a missing user key, a zero `divisor`, or a diagnostic write failure.
pub fn run_demo<W: Write + ?Sized>(inputs: &DemoInputs, diagnostics: &mut W) -> Result<DemoReport> {
    log::debug!("computing Fibonacci({})", inputs.fib_index);
    let fibonacci = calculate_fibonacci(inputs.fib_index);
    let user = process_user_data_to(&inputs.user, diagnostics)?;
    let division = divide_numbers(inputs.dividend, inputs.divisor)?;

    let zero_division = match divide_numbers(ZERO_CHECK_DIVIDEND, 0.0) {
        Ok(value) => ZeroDivisionOutcome::Value(value),
        Err(err) if err.is_division_by_zero() => {
            log::info!("recovered from {err}");
            ZeroDivisionOutcome::Caught
        }
        Err(err) => return Err(err),
    };

    Ok(DemoReport {
        fibonacci_index: inputs.fib_index,
        fibonacci,
        user,
        division,
        zero_division,
    })
}
