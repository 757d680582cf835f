//! Calculation results and their console formatting.
//!
//! Each report is computed from the session parameters, prints itself via
//! `Display` in the calculator's human-readable format, and serializes to
//! JSON for scripted use.

use serde::Serialize;

use crate::circuit::SeriesResistorDesign;
use crate::config::{AdcConfig, ThermistorParams};
use crate::error::Result;

// =============================================================================
// Conversions
// =============================================================================

/// Resistance → temperature result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureReport {
    pub resistance: f64,
    pub temperature: f64,
}

impl TemperatureReport {
    pub fn compute(params: &ThermistorParams, resistance: f64) -> Result<Self> {
        Ok(Self {
            resistance,
            temperature: params.temperature_at(resistance)?,
        })
    }
}

impl std::fmt::Display for TemperatureReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Calculated Temperature: {:.2} °C", self.temperature)
    }
}

/// Temperature → resistance result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResistanceReport {
    pub temperature: f64,
    pub resistance: f64,
}

impl ResistanceReport {
    pub fn compute(params: &ThermistorParams, temperature: f64) -> Result<Self> {
        Ok(Self {
            temperature,
            resistance: params.resistance_at(temperature)?,
        })
    }
}

impl std::fmt::Display for ResistanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Calculated Resistance: {:.2} Ω", self.resistance)
    }
}

// =============================================================================
// Divider Readings
// =============================================================================

/// Divider output and ADC code for one NTC resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DividerReport {
    /// Temperature the resistance was derived from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    pub resistance: f64,
    pub r1: f64,
    pub v_out: f64,
    pub adc_code: u32,
}

impl DividerReport {
    /// Reading for a known NTC resistance.
    pub fn at_resistance(adc: &AdcConfig, r1: f64, resistance: f64) -> Result<Self> {
        let v_out = adc.divider_voltage(resistance, r1)?;
        Ok(Self {
            temperature: None,
            resistance,
            r1,
            v_out,
            adc_code: adc.code_for(v_out)?,
        })
    }

    /// Reading for the NTC at a given temperature.
    pub fn at_temperature(
        params: &ThermistorParams,
        adc: &AdcConfig,
        r1: f64,
        temperature: f64,
    ) -> Result<Self> {
        let resistance = params.resistance_at(temperature)?;
        Ok(Self {
            temperature: Some(temperature),
            ..Self::at_resistance(adc, r1, resistance)?
        })
    }
}

impl std::fmt::Display for DividerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(t) = self.temperature {
            write!(f, "At {:.2} °C → R_NTC = {:.2} Ω → ", t, self.resistance)?;
        }
        write!(f, "Vout = {:.2} V → ADC = {}", self.v_out, self.adc_code)
    }
}

// =============================================================================
// Divider Design
// =============================================================================

/// Series resistor recommendation with readings at both ends of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignReport {
    pub t_min: f64,
    pub t_max: f64,
    pub design: SeriesResistorDesign,
    /// Reading at `t_min`, where the NTC resistance is `r_max`.
    pub cold: DividerReport,
    /// Reading at `t_max`, where the NTC resistance is `r_min`.
    pub hot: DividerReport,
}

impl DesignReport {
    pub fn compute(
        params: &ThermistorParams,
        adc: &AdcConfig,
        t_min: f64,
        t_max: f64,
    ) -> Result<Self> {
        let design = params.optimal_series_resistor(t_min, t_max)?;
        let cold = DividerReport {
            temperature: Some(t_min),
            ..DividerReport::at_resistance(adc, design.r1, design.r_max)?
        };
        let hot = DividerReport {
            temperature: Some(t_max),
            ..DividerReport::at_resistance(adc, design.r1, design.r_min)?
        };

        Ok(Self {
            t_min,
            t_max,
            design,
            cold,
            hot,
        })
    }
}

impl std::fmt::Display for DesignReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "At Tmin = {:.2}°C → R_NTC = {:.2} Ω → Vout = {:.2} V → ADC = {}",
            self.t_min, self.cold.resistance, self.cold.v_out, self.cold.adc_code
        )?;
        writeln!(
            f,
            "At Tmax = {:.2}°C → R_NTC = {:.2} Ω → Vout = {:.2} V → ADC = {}",
            self.t_max, self.hot.resistance, self.hot.v_out, self.hot.adc_code
        )?;
        write!(f, "Recommended Series Resistor R1 = {:.2} Ω", self.design.r1)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: ThermistorParams = ThermistorParams::NTC_10K_3950;

    #[test]
    fn test_temperature_line() {
        let report = TemperatureReport::compute(&PARAMS, 10_000.0).unwrap();
        assert_eq!(report.to_string(), "Calculated Temperature: 25.00 °C");
    }

    #[test]
    fn test_resistance_line() {
        let report = ResistanceReport::compute(&PARAMS, 25.0).unwrap();
        assert_eq!(report.to_string(), "Calculated Resistance: 10000.00 Ω");
    }

    #[test]
    fn test_divider_at_resistance_line() {
        let report = DividerReport::at_resistance(&AdcConfig::default(), 10_000.0, 10_000.0).unwrap();
        assert_eq!(report.to_string(), "Vout = 2.50 V → ADC = 512");
    }

    #[test]
    fn test_divider_at_temperature_line() {
        let report =
            DividerReport::at_temperature(&PARAMS, &AdcConfig::default(), 10_000.0, 25.0).unwrap();
        assert_eq!(
            report.to_string(),
            "At 25.00 °C → R_NTC = 10000.00 Ω → Vout = 2.50 V → ADC = 512"
        );
    }

    #[test]
    fn test_design_report_readings() {
        let report = DesignReport::compute(&PARAMS, &AdcConfig::default(), 0.0, 50.0).unwrap();
        // Cold end sits above mid-supply, hot end below
        assert!(report.cold.v_out > 2.5);
        assert!(report.hot.v_out < 2.5);
        assert!(report.cold.adc_code > report.hot.adc_code);
        assert_eq!(report.cold.resistance, report.design.r_max);
        assert_eq!(report.hot.resistance, report.design.r_min);

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("At Tmin = 0.00°C → R_NTC = 33620.60 Ω"));
        assert!(lines[1].starts_with("At Tmax = 50.00°C → R_NTC = "));
        assert!(lines[2].starts_with("Recommended Series Resistor R1 = "));
    }

    #[test]
    fn test_symmetric_divider_readings() {
        // With R1 = sqrt(Rmin·Rmax) the two readings mirror around Vs/2
        let report = DesignReport::compute(&PARAMS, &AdcConfig::default(), 0.0, 50.0).unwrap();
        let sum = report.cold.v_out + report.hot.v_out;
        assert!((sum - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_omits_missing_temperature() {
        let report = DividerReport::at_resistance(&AdcConfig::default(), 10_000.0, 10_000.0).unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["adc_code"], 512);
    }

    #[test]
    fn test_json_design_report() {
        let report = DesignReport::compute(&PARAMS, &AdcConfig::default(), 0.0, 25.0).unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["design"]["r_min"], 10_000.0);
        assert_eq!(json["hot"]["temperature"], 25.0);
    }
}
