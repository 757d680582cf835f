//! NTC thermistor module.
//!
//! Provides the Beta-model conversions between resistance and temperature.

mod model;

pub(crate) use model::{require_finite, require_positive};
pub use model::{
    REFERENCE_TEMP_CELSIUS, REFERENCE_TEMP_KELVIN, ZERO_CELSIUS_KELVIN,
    resistance_from_temperature, temperature_from_resistance,
};
