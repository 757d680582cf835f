//! Session configuration for the thermistor calculator.
//!
//! Provides validated thermistor and ADC parameters, common presets, and the
//! calculator variant.

use serde::Serialize;

use crate::circuit::{
    SeriesResistorDesign, adc_code, adc_levels, divider_voltage, optimal_series_resistor,
};
use crate::error::Result;
use crate::thermistor::{require_positive, resistance_from_temperature, temperature_from_resistance};

// =============================================================================
// Defaults
// =============================================================================

/// Supply/reference voltage used when none is entered.
pub const DEFAULT_SUPPLY_VOLTAGE: f64 = 5.0;

/// ADC resolution used when none is entered.
pub const DEFAULT_ADC_BITS: u32 = 10;

// =============================================================================
// Calculator Variant
// =============================================================================

/// Which calculator menu is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Resistance/temperature conversions only.
    Basic,
    /// Adds divider sizing and ADC codes.
    Extended,
}

impl Variant {
    /// Get variant name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Basic => "Basic",
            Variant::Extended => "Extended",
        }
    }

    /// Banner printed when the session starts.
    pub fn banner(&self) -> &'static str {
        match self {
            Variant::Basic => "=== NTC Thermistor Calculator ===",
            Variant::Extended => "=== NTC Thermistor Calculator with Voltage Divider and ADC ===",
        }
    }

    /// Whether the divider and ADC operations are available.
    pub fn has_divider(&self) -> bool {
        matches!(self, Variant::Extended)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Thermistor Parameters
// =============================================================================

/// Beta-model parameters of a thermistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermistorParams {
    /// Beta constant in Kelvin.
    pub beta: f64,
    /// Resistance at 25°C in ohms.
    pub r25: f64,
}

impl ThermistorParams {
    /// Common 10k thermistor, B25/50 = 3950 K.
    pub const NTC_10K_3950: Self = Self {
        beta: 3950.0,
        r25: 10_000.0,
    };

    /// 100k thermistor used on many 3D-printer hotends.
    pub const NTC_100K_4267: Self = Self {
        beta: 4267.0,
        r25: 100_000.0,
    };

    /// Create validated parameters. Both values must be finite and positive.
    pub fn new(beta: f64, r25: f64) -> Result<Self> {
        Ok(Self {
            beta: require_positive("Beta value", beta)?,
            r25: require_positive("R25", r25)?,
        })
    }

    /// Temperature (°C) for a measured resistance.
    pub fn temperature_at(&self, r_ntc: f64) -> Result<f64> {
        temperature_from_resistance(r_ntc, self.beta, self.r25)
    }

    /// Resistance (ohms) at a temperature (°C).
    pub fn resistance_at(&self, t_celsius: f64) -> Result<f64> {
        resistance_from_temperature(t_celsius, self.beta, self.r25)
    }

    /// Series resistor for the `[t_min, t_max]` operating range.
    pub fn optimal_series_resistor(&self, t_min: f64, t_max: f64) -> Result<SeriesResistorDesign> {
        optimal_series_resistor(t_min, t_max, self.beta, self.r25)
    }
}

// =============================================================================
// ADC Parameters
// =============================================================================

/// Divider supply and ADC resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdcConfig {
    /// Supply/reference voltage in volts.
    pub supply_voltage: f64,
    /// ADC resolution in bits.
    pub bits: u32,
}

impl AdcConfig {
    /// Create a validated ADC configuration.
    pub fn new(supply_voltage: f64, bits: u32) -> Result<Self> {
        adc_levels(bits)?;
        Ok(Self {
            supply_voltage: require_positive("supply voltage", supply_voltage)?,
            bits,
        })
    }

    /// Highest ADC code.
    pub fn levels(&self) -> Result<u32> {
        adc_levels(self.bits)
    }

    /// Divider output for an NTC resistance and series resistor.
    pub fn divider_voltage(&self, r_ntc: f64, r1: f64) -> Result<f64> {
        divider_voltage(r_ntc, r1, self.supply_voltage)
    }

    /// ADC code for a voltage.
    pub fn code_for(&self, v_out: f64) -> Result<u32> {
        adc_code(v_out, self.supply_voltage, self.bits)
    }
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            supply_voltage: DEFAULT_SUPPLY_VOLTAGE,
            bits: DEFAULT_ADC_BITS,
        }
    }
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Parameters fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionConfig {
    pub variant: Variant,
    pub thermistor: ThermistorParams,
    pub adc: AdcConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThermistorError;

    #[test]
    fn test_params_validation() {
        assert!(ThermistorParams::new(3950.0, 10_000.0).is_ok());
        assert!(matches!(
            ThermistorParams::new(0.0, 10_000.0),
            Err(ThermistorError::InvalidParameter { name: "Beta value", .. })
        ));
        assert!(ThermistorParams::new(3950.0, -5.0).is_err());
        assert!(ThermistorParams::new(f64::NAN, 10_000.0).is_err());
    }

    #[test]
    fn test_preset_reference_point() {
        let p = ThermistorParams::NTC_100K_4267;
        assert_eq!(p.resistance_at(25.0).unwrap(), 100_000.0);
        assert_eq!(p.temperature_at(100_000.0).unwrap(), 25.0);
    }

    #[test]
    fn test_adc_defaults() {
        let adc = AdcConfig::default();
        assert_eq!(adc.supply_voltage, 5.0);
        assert_eq!(adc.bits, 10);
        assert_eq!(adc.levels().unwrap(), 1023);
    }

    #[test]
    fn test_adc_validation() {
        assert!(AdcConfig::new(3.3, 12).is_ok());
        assert!(AdcConfig::new(0.0, 12).is_err());
        assert!(matches!(
            AdcConfig::new(3.3, 0),
            Err(ThermistorError::InvalidResolution(0))
        ));
    }

    #[test]
    fn test_adc_chain() {
        let adc = AdcConfig::default();
        let v = adc.divider_voltage(10_000.0, 10_000.0).unwrap();
        assert_eq!(adc.code_for(v).unwrap(), 512);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Basic.to_string(), "Basic");
        assert!(Variant::Extended.has_divider());
        assert!(!Variant::Basic.has_divider());
    }
}
