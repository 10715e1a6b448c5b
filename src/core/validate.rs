//! Input validation for the token form.
//!
//! The error taxonomy has exactly one kind: rejected input produces
//! [`Error::InvalidInput`] carrying the fixed corrective notice from
//! [`INVALID_INPUT_NOTICE`]. The meter number is free text (no format check
//! beyond presence); the amount must parse as a finite number strictly
//! greater than zero.

use crate::errors::{Error, Result};

/// Fixed corrective notice shown in the message area on any validation failure.
pub const INVALID_INPUT_NOTICE: &str = "Please enter a valid meter number and amount.";

fn invalid_input() -> Error {
    Error::InvalidInput {
        message: INVALID_INPUT_NOTICE.to_string(),
    }
}

/// Validates the meter number: non-empty after trimming, otherwise free text.
pub fn meter_number(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid_input());
    }
    Ok(trimmed.to_string())
}

/// Validates the amount: must parse as a finite number strictly greater than zero.
///
/// # Returns
/// The parsed amount on success.
pub fn amount(value: &str) -> Result<f64> {
    let parsed: f64 = value.trim().parse().map_err(|_| invalid_input())?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(invalid_input());
    }
    Ok(parsed)
}

/// Validates a full submission, returning the trimmed meter number and parsed amount.
pub fn submission(meter_no: &str, amount_text: &str) -> Result<(String, f64)> {
    let meter = meter_number(meter_no)?;
    let value = amount(amount_text)?;
    Ok((meter, value))
}
