//! Money amount input rules
//!
//! Amounts are edited as free text. Two independent checks apply:
//! - the input mask (`accepts_amount_input`) decides whether a keystroke is
//!   stored at all;
//! - the validator (`validate_amount`) produces a hint for the UI and never
//!   blocks submission.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Largest amount the validator accepts
pub const MAX_AMOUNT: f64 = 100_000.0;

/// Optional digits, optional single decimal point, at most two digits after it
static AMOUNT_MASK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]{0,2}$").expect("amount mask is a valid regex"));

/// Validation hint for an amount field; `Display` is the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Amount exceeds maximum of 100,000")]
    ExceedsMaximum,
    #[error("Negative amounts are not allowed")]
    Negative,
    #[error("Amount must have exactly two decimal places")]
    DecimalPlaces,
}

/// Input mask for amount fields. The empty string is always accepted.
pub fn accepts_amount_input(raw: &str) -> bool {
    raw.is_empty() || AMOUNT_MASK.is_match(raw)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check an amount and report the first violated rule
///
/// Order: parse failure, maximum, sign, decimal places. The decimal check only
/// runs when the raw text contains a decimal point. Empty input is treated as
/// not yet entered.
pub fn validate_amount(raw: &str) -> Result<(), AmountError> {
    if raw.is_empty() {
        return Ok(());
    }

    let value = parse_finite(raw).ok_or(AmountError::NotANumber)?;

    if value > MAX_AMOUNT {
        return Err(AmountError::ExceedsMaximum);
    }
    if value < 0.0 {
        return Err(AmountError::Negative);
    }
    if let Some((_, fraction)) = raw.trim().split_once('.') {
        if fraction.len() != 2 {
            return Err(AmountError::DecimalPlaces);
        }
    }

    Ok(())
}

/// Numeric value sent to the host; anything unparsable becomes 0
pub fn parse_amount_or_zero(raw: &str) -> f64 {
    parse_finite(raw).unwrap_or(0.0)
}
