//! NTC Thermistor Calculator CLI
//!
//! Interactive menu calculator for NTC thermistors, with one-shot
//! subcommands for scripted use.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::io;

use ntc_thermistor::config::{
    AdcConfig, DEFAULT_ADC_BITS, DEFAULT_SUPPLY_VOLTAGE, ThermistorParams, Variant,
};
use ntc_thermistor::session::report::{
    DesignReport, DividerReport, ResistanceReport, TemperatureReport,
};
use ntc_thermistor::session::{Session, SessionPresets};

// =============================================================================
// CLI Arguments
// =============================================================================

/// NTC Thermistor Calculator
#[derive(Parser, Debug)]
#[command(name = "ntc-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Beta value (B) in Kelvin
    #[arg(short, long, global = true)]
    beta: Option<f64>,

    /// Resistance at 25°C in ohms
    #[arg(long, global = true)]
    r25: Option<f64>,

    /// ADC supply/reference voltage in volts (default 5.0)
    #[arg(short, long, global = true)]
    supply: Option<f64>,

    /// ADC resolution in bits (default 10)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=32))]
    bits: Option<u32>,

    /// Interactive mode: only offer resistance/temperature conversions
    #[arg(long)]
    basic: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate temperature from a measured NTC resistance
    Temperature {
        /// NTC resistance in ohms
        resistance: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate NTC resistance at a temperature
    Resistance {
        /// Temperature in °C
        #[arg(allow_negative_numbers = true)]
        temperature: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend a series resistor for an operating range
    Design {
        /// Minimum operating temperature in °C
        #[arg(allow_negative_numbers = true)]
        t_min: f64,

        /// Maximum operating temperature in °C
        #[arg(allow_negative_numbers = true)]
        t_max: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Divider output and ADC code for a resistance or temperature
    Divider {
        /// Series resistor R1 in ohms
        #[arg(long)]
        r1: f64,

        /// NTC resistance in ohms
        #[arg(long, conflicts_with = "temperature", required_unless_present = "temperature")]
        resistance: Option<f64>,

        /// Temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let mut args = Args::parse();

    let Some(command) = args.command.take() else {
        return cmd_interactive(&args.presets(), args.variant());
    };

    match command {
        Command::Temperature { resistance, json } => {
            let report = TemperatureReport::compute(&args.thermistor()?, resistance)
                .context("Failed to calculate temperature")?;
            print_report(&report, json)
        }
        Command::Resistance { temperature, json } => {
            let report = ResistanceReport::compute(&args.thermistor()?, temperature)
                .context("Failed to calculate resistance")?;
            print_report(&report, json)
        }
        Command::Design { t_min, t_max, json } => {
            let report = DesignReport::compute(&args.thermistor()?, &args.adc()?, t_min, t_max)
                .context("Failed to size series resistor")?;
            print_report(&report, json)
        }
        Command::Divider {
            r1,
            resistance,
            temperature,
            json,
        } => {
            let adc = args.adc()?;
            let report = match (resistance, temperature) {
                (Some(r_ntc), _) => DividerReport::at_resistance(&adc, r1, r_ntc),
                (None, Some(t)) => DividerReport::at_temperature(&args.thermistor()?, &adc, r1, t),
                (None, None) => anyhow::bail!("Either --resistance or --temperature is required"),
            }
            .context("Failed to calculate divider output")?;
            print_report(&report, json)
        }
    }
}

impl Args {
    fn variant(&self) -> Variant {
        if self.basic {
            Variant::Basic
        } else {
            Variant::Extended
        }
    }

    fn presets(&self) -> SessionPresets {
        SessionPresets {
            beta: self.beta,
            r25: self.r25,
            supply_voltage: self.supply,
            bits: self.bits,
        }
    }

    fn thermistor(&self) -> Result<ThermistorParams> {
        let beta = self.beta.context("--beta is required for this command")?;
        let r25 = self.r25.context("--r25 is required for this command")?;
        ThermistorParams::new(beta, r25).context("Invalid thermistor parameters")
    }

    fn adc(&self) -> Result<AdcConfig> {
        AdcConfig::new(
            self.supply.unwrap_or(DEFAULT_SUPPLY_VOLTAGE),
            self.bits.unwrap_or(DEFAULT_ADC_BITS),
        )
        .context("Invalid ADC parameters")
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_interactive(presets: &SessionPresets, variant: Variant) -> Result<()> {
    // Ctrl-C behaves like 'q'
    ctrlc::set_handler(|| {
        println!("\nExiting...");
        std::process::exit(0);
    })
    .context("Failed to set Ctrl-C handler")?;

    // stdout stays unlocked so the Ctrl-C handler can still print
    let mut session = Session::new(io::stdin().lock(), io::stdout());
    session
        .run(variant, presets)
        .context("Calculator session ended unexpectedly")
}

fn print_report<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to serialize result")?;
        println!("{}", text);
    } else {
        println!("{}", report);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let args = Args::try_parse_from(["ntc-calc", "--basic", "--beta", "3950"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.variant(), Variant::Basic);
        assert_eq!(args.presets().beta, Some(3950.0));
        assert_eq!(args.presets().r25, None);
    }

    #[test]
    fn test_design_accepts_negative_temperatures() {
        let args = Args::try_parse_from([
            "ntc-calc", "--beta", "3950", "--r25", "10000", "design", "-20", "80",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Design { t_min, t_max, json: false }) if t_min == -20.0 && t_max == 80.0
        ));
        assert_eq!(args.thermistor().unwrap(), ThermistorParams::NTC_10K_3950);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "ntc-calc", "resistance", "-40", "--beta", "3950", "--r25", "10000", "--json",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Resistance { temperature, json: true }) if temperature == -40.0
        ));
        assert_eq!(args.beta, Some(3950.0));
    }

    #[test]
    fn test_divider_needs_exactly_one_input() {
        let both = Args::try_parse_from([
            "ntc-calc", "divider", "--r1", "10000", "--resistance", "10000", "--temperature", "25",
        ]);
        assert!(both.is_err());

        let neither = Args::try_parse_from(["ntc-calc", "divider", "--r1", "10000"]);
        assert!(neither.is_err());

        let cold = Args::try_parse_from([
            "ntc-calc", "divider", "--r1", "10000", "--temperature", "-10",
        ])
        .unwrap();
        assert!(matches!(
            cold.command,
            Some(Command::Divider { resistance: None, temperature: Some(t), .. }) if t == -10.0
        ));
    }

    #[test]
    fn test_bits_range_enforced() {
        assert!(Args::try_parse_from(["ntc-calc", "--bits", "0"]).is_err());
        assert!(Args::try_parse_from(["ntc-calc", "--bits", "33"]).is_err());
        let args = Args::try_parse_from(["ntc-calc", "--bits", "12"]).unwrap();
        assert_eq!(args.adc().unwrap().bits, 12);
    }

    #[test]
    fn test_one_shot_requires_thermistor() {
        let args = Args::try_parse_from(["ntc-calc", "temperature", "10000"]).unwrap();
        assert!(args.thermistor().is_err());
    }
}
