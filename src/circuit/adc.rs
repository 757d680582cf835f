//! ADC quantization of the divider output.

use crate::error::{Result, ThermistorError};
use crate::thermistor::{require_finite, require_positive};

/// Widest ADC resolution the quantizer accepts.
pub const MAX_ADC_BITS: u32 = 32;

/// Highest code of an ADC with the given resolution (`2^bits - 1`).
pub fn adc_levels(bits: u32) -> Result<u32> {
    if bits == 0 || bits > MAX_ADC_BITS {
        return Err(ThermistorError::InvalidResolution(bits));
    }
    Ok(((1u64 << bits) - 1) as u32)
}

/// Convert a voltage into an ADC code.
///
/// Rounds to the nearest code with ties away from zero, then clamps to
/// `[0, 2^bits - 1]` so voltages outside `[0, Vs]` saturate like a real
/// converter.
///
/// # Example
/// ```
/// use ntc_thermistor::circuit::adc_code;
///
/// assert_eq!(adc_code(2.5, 5.0, 10).unwrap(), 512);
/// ```
pub fn adc_code(v_out: f64, supply_voltage: f64, bits: u32) -> Result<u32> {
    require_finite("output voltage", v_out)?;
    require_positive("supply voltage", supply_voltage)?;
    let levels = adc_levels(bits)?;

    let code = ((v_out / supply_voltage) * levels as f64).round();
    Ok(code.clamp(0.0, levels as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midscale_code() {
        assert_eq!(adc_code(2.5, 5.0, 10).unwrap(), 512);
    }

    #[test]
    fn test_full_scale_codes() {
        assert_eq!(adc_code(0.0, 3.3, 12).unwrap(), 0);
        assert_eq!(adc_code(3.3, 3.3, 12).unwrap(), 4095);
        assert_eq!(adc_code(5.0, 5.0, 32).unwrap(), u32::MAX);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // 0.5 of an 8-bit range is 127.5 codes
        assert_eq!(adc_code(0.5, 1.0, 8).unwrap(), 128);
        // 1.5 codes on a 2-bit converter
        assert_eq!(adc_code(0.5, 1.0, 2).unwrap(), 2);
    }

    #[test]
    fn test_out_of_range_voltage_is_clamped() {
        assert_eq!(adc_code(6.0, 5.0, 10).unwrap(), 1023);
        assert_eq!(adc_code(-1.0, 5.0, 10).unwrap(), 0);
    }

    #[test]
    fn test_invalid_resolution() {
        assert!(matches!(
            adc_code(1.0, 5.0, 0),
            Err(ThermistorError::InvalidResolution(0))
        ));
        assert!(adc_code(1.0, 5.0, 33).is_err());
    }

    #[test]
    fn test_invalid_supply() {
        assert!(adc_code(1.0, 0.0, 10).is_err());
        assert!(adc_code(f64::NAN, 5.0, 10).is_err());
    }

    #[test]
    fn test_levels() {
        assert_eq!(adc_levels(1).unwrap(), 1);
        assert_eq!(adc_levels(10).unwrap(), 1023);
        assert_eq!(adc_levels(16).unwrap(), 65_535);
    }

    proptest! {
        #[test]
        fn prop_code_within_range(
            fraction in 0.0f64..=1.0,
            vs in 0.1f64..50.0,
            bits in 1u32..=32,
        ) {
            let code = adc_code(fraction * vs, vs, bits).unwrap();
            prop_assert!(u64::from(code) <= (1u64 << bits) - 1);
        }
    }
}
