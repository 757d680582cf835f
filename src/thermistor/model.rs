//! Beta-parameter model for NTC thermistors.
//!
//! The model relates resistance to absolute temperature through a single
//! material constant `B`:
//!
//! `1/T = 1/T25 + (1/B)·ln(R/R25)`
//!
//! where `T25` is 298.15 K and `R25` the resistance at that temperature.

use crate::error::{Result, ThermistorError};

// =============================================================================
// Constants
// =============================================================================

/// Offset between Celsius and Kelvin scales.
pub const ZERO_CELSIUS_KELVIN: f64 = 273.15;

/// Reference temperature of the Beta model (25°C) in Kelvin.
pub const REFERENCE_TEMP_KELVIN: f64 = 298.15;

/// Reference temperature of the Beta model in Celsius.
pub const REFERENCE_TEMP_CELSIUS: f64 = 25.0;

// =============================================================================
// Domain Checks
// =============================================================================

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ThermistorError::InvalidParameter {
            name,
            value,
            reason: "must be a finite number",
        })
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ThermistorError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn require_nonzero(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value != 0.0 {
        Ok(value)
    } else {
        Err(ThermistorError::InvalidParameter {
            name,
            value,
            reason: "must not be zero",
        })
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Calculate temperature (°C) from a measured NTC resistance.
///
/// # Arguments
/// * `r_ntc` - Measured resistance in ohms (> 0)
/// * `beta` - Beta constant in Kelvin (≠ 0)
/// * `r25` - Resistance at 25°C in ohms (> 0)
///
/// # Errors
/// `InvalidParameter` when an input is outside its domain, `NonPhysical`
/// when the resistance maps to a non-positive absolute temperature.
///
/// # Example
/// ```
/// use ntc_thermistor::thermistor::temperature_from_resistance;
///
/// let t = temperature_from_resistance(10_000.0, 3950.0, 10_000.0).unwrap();
/// assert_eq!(t, 25.0);
/// ```
pub fn temperature_from_resistance(r_ntc: f64, beta: f64, r25: f64) -> Result<f64> {
    require_positive("NTC resistance", r_ntc)?;
    require_nonzero("Beta value", beta)?;
    require_positive("R25", r25)?;

    let inv_kelvin = 1.0 / REFERENCE_TEMP_KELVIN + (r_ntc / r25).ln() / beta;
    let kelvin = 1.0 / inv_kelvin;

    if !kelvin.is_finite() || kelvin <= 0.0 {
        return Err(ThermistorError::NonPhysical(format!(
            "{} Ω gives an absolute temperature of {} K",
            r_ntc, kelvin
        )));
    }

    Ok(kelvin - ZERO_CELSIUS_KELVIN)
}

/// Calculate NTC resistance (ohms) at a given temperature (°C).
///
/// # Arguments
/// * `t_celsius` - Temperature in Celsius (> -273.15)
/// * `beta` - Beta constant in Kelvin (≠ 0)
/// * `r25` - Resistance at 25°C in ohms (> 0)
///
/// # Example
/// ```
/// use ntc_thermistor::thermistor::resistance_from_temperature;
///
/// let r = resistance_from_temperature(25.0, 3950.0, 10_000.0).unwrap();
/// assert_eq!(r, 10_000.0);
/// ```
pub fn resistance_from_temperature(t_celsius: f64, beta: f64, r25: f64) -> Result<f64> {
    require_finite("temperature", t_celsius)?;
    require_nonzero("Beta value", beta)?;
    require_positive("R25", r25)?;

    let kelvin = t_celsius + ZERO_CELSIUS_KELVIN;
    if kelvin <= 0.0 {
        return Err(ThermistorError::BelowAbsoluteZero(t_celsius));
    }

    let r_ntc = r25 * (beta * (1.0 / kelvin - 1.0 / REFERENCE_TEMP_KELVIN)).exp();

    // exp() saturates to infinity close to absolute zero
    if !r_ntc.is_finite() || r_ntc <= 0.0 {
        return Err(ThermistorError::NonPhysical(format!(
            "{}°C gives a resistance of {} Ω",
            t_celsius, r_ntc
        )));
    }

    Ok(r_ntc)
}

// =============================================================================
// Tests
// =============================================================================
