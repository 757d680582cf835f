//! Measurement chain module.
//!
//! Sizes the divider around the thermistor and models its ADC reading.

mod adc;
mod divider;

pub use adc::{MAX_ADC_BITS, adc_code, adc_levels};
pub use divider::{SeriesResistorDesign, divider_voltage, optimal_series_resistor};
