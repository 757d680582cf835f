//! Interactive calculator session.
//!
//! Collects the thermistor (and ADC) parameters once, then loops over the
//! menu until the user quits. The session is generic over its input and
//! output so it can run on the console or on in-memory buffers.

mod menu;
pub mod report;

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::circuit::adc_levels;
use crate::config::{
    AdcConfig, DEFAULT_ADC_BITS, DEFAULT_SUPPLY_VOLTAGE, SessionConfig, ThermistorParams, Variant,
};
use crate::error::{Result, ThermistorError};
use crate::thermistor::require_positive;
use crate::utils::parsing::{parse_integer_or, parse_number, parse_number_or};

pub use menu::{MenuChoice, invalid_choice_message, menu_lines};
use report::{DesignReport, DividerReport, ResistanceReport, TemperatureReport};

// =============================================================================
// Prompts
// =============================================================================

const PROMPT_BETA: &str = "Enter Beta value (B) in Kelvin: ";
const PROMPT_R25: &str = "Enter resistance at 25°C (ohms): ";
const PROMPT_SUPPLY: &str = "Enter ADC supply/reference voltage (V): ";
const PROMPT_BITS: &str = "Enter ADC resolution in bits (default 10): ";
const PROMPT_CHOICE: &str = "Enter choice: ";
const PROMPT_MEASURED_RESISTANCE: &str = "Enter measured NTC resistance (ohms): ";
const PROMPT_NTC_RESISTANCE: &str = "Enter NTC resistance (ohms): ";
const PROMPT_TEMPERATURE: &str = "Enter temperature (°C): ";
const PROMPT_T_MIN: &str = "Enter minimum operating temperature (°C): ";
const PROMPT_T_MAX: &str = "Enter maximum operating temperature (°C): ";
const PROMPT_R1: &str = "Enter series resistor R1 (ohms): ";

const INVALID_INPUT: &str = "Invalid input.";

// =============================================================================
// Presets
// =============================================================================

/// Startup values supplied ahead of time (e.g. on the command line).
///
/// Each value that is set skips its prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionPresets {
    pub beta: Option<f64>,
    pub r25: Option<f64>,
    pub supply_voltage: Option<f64>,
    pub bits: Option<u32>,
}

// =============================================================================
// Session
// =============================================================================

/// Menu-driven calculator over a line-based input and a text output.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the session and return its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the session until the user quits.
    ///
    /// Returns `InputClosed` if the input ends first, or `Io` on a console
    /// failure. Calculation and parse errors are reported and the menu is
    /// shown again.
    pub fn run(&mut self, variant: Variant, presets: &SessionPresets) -> Result<()> {
        writeln!(self.output, "{}", variant.banner())?;
        let config = self.configure(variant, presets)?;

        loop {
            self.print_menu(config.variant)?;
            let token = self.prompt(PROMPT_CHOICE)?;

            let Some(choice) = MenuChoice::parse(&token, config.variant) else {
                writeln!(self.output, "{}", invalid_choice_message(config.variant))?;
                continue;
            };

            match self.dispatch(choice, &config) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => return Ok(()),
                Err(e) => self.report_error(e)?,
            }
        }
    }

    /// Collect the session parameters, skipping prompts for presets.
    pub fn configure(&mut self, variant: Variant, presets: &SessionPresets) -> Result<SessionConfig> {
        let beta = match presets.beta {
            Some(beta) => beta,
            None => self.prompt_until(PROMPT_BETA, |text| {
                require_positive("Beta value", parse_number(text)?)
            })?,
        };
        let r25 = match presets.r25 {
            Some(r25) => r25,
            None => self.prompt_until(PROMPT_R25, |text| require_positive("R25", parse_number(text)?))?,
        };
        let thermistor = ThermistorParams::new(beta, r25)?;

        let adc = if variant.has_divider() {
            let supply_voltage = match presets.supply_voltage {
                Some(v) => v,
                None => self.prompt_until(PROMPT_SUPPLY, |text| {
                    require_positive(
                        "supply voltage",
                        parse_number_or(text, DEFAULT_SUPPLY_VOLTAGE)?,
                    )
                })?,
            };
            let bits = match presets.bits {
                Some(bits) => bits,
                None => self.prompt_until(PROMPT_BITS, |text| {
                    let bits = parse_integer_or(text, DEFAULT_ADC_BITS)?;
                    adc_levels(bits)?;
                    Ok(bits)
                })?,
            };
            AdcConfig::new(supply_voltage, bits)?
        } else {
            AdcConfig::default()
        };

        Ok(SessionConfig {
            variant,
            thermistor,
            adc,
        })
    }

    fn dispatch(&mut self, choice: MenuChoice, config: &SessionConfig) -> Result<ControlFlow<()>> {
        let params = &config.thermistor;
        let adc = &config.adc;

        match choice {
            MenuChoice::ResistanceToTemperature => {
                let r_ntc = self.read_number(PROMPT_MEASURED_RESISTANCE)?;
                let report = TemperatureReport::compute(params, r_ntc)?;
                writeln!(self.output, "{}", report)?;
            }
            MenuChoice::TemperatureToResistance => {
                let t = self.read_number(PROMPT_TEMPERATURE)?;
                let report = ResistanceReport::compute(params, t)?;
                writeln!(self.output, "{}", report)?;
            }
            MenuChoice::SeriesResistor => {
                let t_min = self.read_number(PROMPT_T_MIN)?;
                let t_max = self.read_number(PROMPT_T_MAX)?;
                let report = DesignReport::compute(params, adc, t_min, t_max)?;
                writeln!(self.output, "\n{}", report)?;
            }
            MenuChoice::DividerAtResistance => {
                let r1 = self.read_number(PROMPT_R1)?;
                let r_ntc = self.read_number(PROMPT_NTC_RESISTANCE)?;
                let report = DividerReport::at_resistance(adc, r1, r_ntc)?;
                writeln!(self.output, "{}", report)?;
            }
            MenuChoice::DividerAtTemperature => {
                let r1 = self.read_number(PROMPT_R1)?;
                let t = self.read_number(PROMPT_TEMPERATURE)?;
                let report = DividerReport::at_temperature(params, adc, r1, t)?;
                writeln!(self.output, "{}", report)?;
            }
            MenuChoice::Quit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self, variant: Variant) -> Result<()> {
        writeln!(self.output, "\nChoose an option:")?;
        for line in menu_lines(variant) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Print a recoverable error, or hand back one that ends the session.
    fn report_error(&mut self, error: ThermistorError) -> Result<()> {
        match error {
            ThermistorError::InvalidInput(_) => writeln!(self.output, "{}", INVALID_INPUT)?,
            e if e.is_recoverable() => writeln!(self.output, "Error: {}", e)?,
            e => return Err(e),
        }
        Ok(())
    }

    /// Ask the same question until `parse` accepts the answer.
    fn prompt_until<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            let text = self.prompt(prompt)?;
            match parse(&text) {
                Ok(value) => return Ok(value),
                Err(e) => self.report_error(e)?,
            }
        }
    }

    fn read_number(&mut self, prompt: &str) -> Result<f64> {
        let text = self.prompt(prompt)?;
        parse_number(&text)
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ThermistorError::InputClosed);
        }
        Ok(line)
    }
}

// =============================================================================
// Tests
// =============================================================================
