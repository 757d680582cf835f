//! Custom error types for thermistor calculations.
//!
//! This module provides fine-grained error handling for the Beta-model
//! formulas, the divider/ADC chain, and console input parsing.

use thiserror::Error;

/// Main error type for thermistor calculations and sessions.
#[derive(Error, Debug)]
pub enum ThermistorError {
    /// A scalar input is outside the domain of the formula.
    #[error("Invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Temperature at or below absolute zero.
    #[error("Temperature {0}°C is at or below absolute zero (-273.15°C)")]
    BelowAbsoluteZero(f64),

    /// The model produced a value with no physical meaning.
    #[error("Result is outside the physical range of the Beta model: {0}")]
    NonPhysical(String),

    /// Operating range is not strictly increasing.
    #[error("Invalid temperature range: minimum {t_min}°C must be below maximum {t_max}°C")]
    InvalidRange { t_min: f64, t_max: f64 },

    /// ADC resolution out of the supported range.
    #[error("Invalid ADC resolution {0} bits. Valid range: 1-32 bits")]
    InvalidResolution(u32),

    /// Console text that could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input stream ended before the session was closed.
    #[error("Input stream closed")]
    InputClosed,

    /// Console I/O error.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThermistorError {
    /// Whether the session loop can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ThermistorError::InputClosed | ThermistorError::Io(_))
    }
}

/// Result type alias for thermistor operations.
pub type Result<T> = std::result::Result<T, ThermistorError>;
