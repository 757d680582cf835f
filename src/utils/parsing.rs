//! Parsing utilities for console input.
//!
//! This module turns the text typed at a prompt into typed values, with
//! optional defaults for blank entries.

use crate::error::{Result, ThermistorError};

// =============================================================================
// Number Parsing
// =============================================================================

/// Parse a floating point number typed at a prompt.
///
/// Surrounding whitespace is ignored. Non-finite values (`inf`, `NaN`) are
/// rejected along with anything that is not a number.
///
/// # Example
/// ```
/// use ntc_thermistor::utils::parsing::parse_number;
///
/// assert_eq!(parse_number(" 3950 ").unwrap(), 3950.0);
/// assert!(parse_number("abc").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ThermistorError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(ThermistorError::InvalidInput(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }

    Ok(value)
}

/// Parse a floating point number, falling back to `default` on blank input.
pub fn parse_number_or(text: &str, default: f64) -> Result<f64> {
    if text.trim().is_empty() {
        return Ok(default);
    }
    parse_number(text)
}

/// Parse an unsigned integer, falling back to `default` on blank input.
///
/// # Example
/// ```
/// use ntc_thermistor::utils::parsing::parse_integer_or;
///
/// assert_eq!(parse_integer_or("", 10).unwrap(), 10);
/// assert_eq!(parse_integer_or("12", 10).unwrap(), 12);
/// ```
pub fn parse_integer_or(text: &str, default: u32) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|_| {
        ThermistorError::InvalidInput(format!("'{}' is not a whole number", trimmed))
    })
}

// =============================================================================
// Tests
// =============================================================================
