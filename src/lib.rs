//! NTC Thermistor Calculator Library
//!
//! Beta-model calculations for NTC thermistors and the voltage divider/ADC
//! chain used to read them.
//!
//! # Features
//!
//! - Convert between NTC resistance and temperature
//! - Size the series resistor of a divider for an operating range
//! - Compute divider output voltages and ADC codes
//! - Run the interactive menu calculator on any reader/writer pair
//!
//! # Example
//!
//! ```
//! use ntc_thermistor::config::{AdcConfig, ThermistorParams};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ntc = ThermistorParams::new(3950.0, 10_000.0)?;
//!
//!     // Convert both ways
//!     let r_cold = ntc.resistance_at(0.0)?;
//!     let t = ntc.temperature_at(r_cold)?;
//!     assert!(t.abs() < 1e-9);
//!
//!     // Size a divider for 0-50°C and read it with a 10-bit ADC
//!     let design = ntc.optimal_series_resistor(0.0, 50.0)?;
//!     let adc = AdcConfig::default();
//!     let v = adc.divider_voltage(r_cold, design.r1)?;
//!     println!("R1 = {:.0} Ω, Vout = {:.2} V, code = {}", design.r1, v, adc.code_for(v)?);
//!
//!     Ok(())
//! }
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod session;
pub mod thermistor;
pub mod utils;

// Re-exports for convenience
pub use config::{AdcConfig, SessionConfig, ThermistorParams, Variant};
pub use error::{Result, ThermistorError};
pub use session::{Session, SessionPresets};
