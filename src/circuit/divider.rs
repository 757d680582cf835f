//! Resistive voltage divider with the NTC as the lower leg.
//!
//! ```text
//!   Vs ── R1 ──┬── Vout
//!              │
//!             NTC
//!              │
//!   GND ───────┘
//! ```

use serde::Serialize;

use crate::error::{Result, ThermistorError};
use crate::thermistor::{require_finite, require_positive, resistance_from_temperature};

// =============================================================================
// Series Resistor Sizing
// =============================================================================

/// Series resistor chosen for an operating temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesResistorDesign {
    /// Recommended series resistor in ohms.
    pub r1: f64,
    /// NTC resistance at the hottest point of the range.
    pub r_min: f64,
    /// NTC resistance at the coldest point of the range.
    pub r_max: f64,
}

/// Calculate the series resistor that maximizes divider sensitivity over
/// `[t_min, t_max]`.
///
/// The result is the geometric mean of the NTC resistance at both ends of
/// the range. The caller must pass `t_min < t_max`; anything else is
/// rejected with `InvalidRange`.
///
/// # Example
/// ```
/// use ntc_thermistor::circuit::optimal_series_resistor;
///
/// let design = optimal_series_resistor(0.0, 50.0, 3950.0, 10_000.0).unwrap();
/// assert!(design.r_min < design.r1 && design.r1 < design.r_max);
/// ```
pub fn optimal_series_resistor(
    t_min: f64,
    t_max: f64,
    beta: f64,
    r25: f64,
) -> Result<SeriesResistorDesign> {
    require_finite("minimum temperature", t_min)?;
    require_finite("maximum temperature", t_max)?;
    if t_min >= t_max {
        return Err(ThermistorError::InvalidRange { t_min, t_max });
    }

    // NTC: hottest point has the lowest resistance
    let r_min = resistance_from_temperature(t_max, beta, r25)?;
    let r_max = resistance_from_temperature(t_min, beta, r25)?;

    // sqrt before multiplying: r_min * r_max overflows near absolute zero
    Ok(SeriesResistorDesign {
        r1: r_min.sqrt() * r_max.sqrt(),
        r_min,
        r_max,
    })
}

// =============================================================================
// Divider Output
// =============================================================================

/// Calculate the voltage across the NTC in the divider.
///
/// # Arguments
/// * `r_ntc` - NTC resistance in ohms (> 0)
/// * `r1` - Series resistor in ohms (> 0)
/// * `supply_voltage` - Divider supply in volts (> 0)
pub fn divider_voltage(r_ntc: f64, r1: f64, supply_voltage: f64) -> Result<f64> {
    require_positive("NTC resistance", r_ntc)?;
    require_positive("series resistor R1", r1)?;
    require_positive("supply voltage", supply_voltage)?;

    Ok(supply_voltage * (r_ntc / (r1 + r_ntc)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_balanced_divider_is_half_supply() {
        let v = divider_voltage(10_000.0, 10_000.0, 5.0).unwrap();
        assert!((v - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_divider_rejects_non_positive() {
        assert!(divider_voltage(0.0, 10_000.0, 5.0).is_err());
        assert!(divider_voltage(10_000.0, -1.0, 5.0).is_err());
        assert!(divider_voltage(10_000.0, 10_000.0, 0.0).is_err());
    }

    #[test]
    fn test_series_resistor_is_geometric_mean() {
        let design = optimal_series_resistor(0.0, 50.0, 3950.0, 10_000.0).unwrap();
        let expected = (design.r_min * design.r_max).sqrt();
        assert!((design.r1 - expected).abs() <= 1e-9 * expected);
        assert!(design.r_min <= design.r1 && design.r1 <= design.r_max);
    }

    #[test]
    fn test_series_resistor_range_endpoints() {
        let design = optimal_series_resistor(0.0, 25.0, 3950.0, 10_000.0).unwrap();
        assert_eq!(design.r_min, 10_000.0);
        assert!((design.r_max - 33_620.60).abs() < 1.0);
    }

    #[test]
    fn test_series_resistor_finite_for_huge_cold_resistance() {
        let design = optimal_series_resistor(-267.56, 0.0, 3950.0, 10_000.0).unwrap();
        assert!(design.r_max > 1e300);
        assert!(design.r1.is_finite());
        assert!(design.r_min < design.r1 && design.r1 < design.r_max);
    }

    #[test]
    fn test_series_resistor_rejects_reversed_range() {
        assert!(matches!(
            optimal_series_resistor(80.0, 20.0, 3950.0, 10_000.0),
            Err(ThermistorError::InvalidRange { .. })
        ));
        assert!(optimal_series_resistor(20.0, 20.0, 3950.0, 10_000.0).is_err());
    }

    #[test]
    fn test_series_resistor_propagates_domain_errors() {
        assert!(matches!(
            optimal_series_resistor(-300.0, 20.0, 3950.0, 10_000.0),
            Err(ThermistorError::BelowAbsoluteZero(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_divider_output_within_supply(
            r_ntc in 1.0f64..1e7,
            r1 in 1.0f64..1e7,
            vs in 0.1f64..50.0,
        ) {
            let v = divider_voltage(r_ntc, r1, vs).unwrap();
            prop_assert!(v > 0.0 && v < vs, "v = {}", v);
        }

        #[test]
        fn prop_series_resistor_between_extremes(
            t_min in -50.0f64..100.0,
            span in 1.0f64..150.0,
            beta in 1000.0f64..6000.0,
        ) {
            let d = optimal_series_resistor(t_min, t_min + span, beta, 10_000.0).unwrap();
            prop_assert!(d.r_min <= d.r1 && d.r1 <= d.r_max);
        }
    }
}
