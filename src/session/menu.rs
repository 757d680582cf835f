//! Menu choices of the interactive calculator.

use crate::config::Variant;

/// Operation selected at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ResistanceToTemperature,
    TemperatureToResistance,
    SeriesResistor,
    DividerAtResistance,
    DividerAtTemperature,
    Quit,
}

impl MenuChoice {
    /// Parse a menu token. Divider choices only exist in the extended variant.
    pub fn parse(token: &str, variant: Variant) -> Option<Self> {
        let choice = match token.trim().to_lowercase().as_str() {
            "1" => MenuChoice::ResistanceToTemperature,
            "2" => MenuChoice::TemperatureToResistance,
            "3" => MenuChoice::SeriesResistor,
            "4" => MenuChoice::DividerAtResistance,
            "5" => MenuChoice::DividerAtTemperature,
            "q" => MenuChoice::Quit,
            _ => return None,
        };

        if choice.needs_divider() && !variant.has_divider() {
            return None;
        }
        Some(choice)
    }

    fn needs_divider(&self) -> bool {
        matches!(
            self,
            MenuChoice::SeriesResistor
                | MenuChoice::DividerAtResistance
                | MenuChoice::DividerAtTemperature
        )
    }
}

/// Menu lines shown before each choice prompt.
pub fn menu_lines(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Basic => &[
            "1. Resistance → Temperature",
            "2. Temperature → Resistance",
            "q. Quit",
        ],
        Variant::Extended => &[
            "1. Resistance → Temperature",
            "2. Temperature → Resistance",
            "3. Optimal series resistor (R1), ADC voltages & codes",
            "4. Divider output at given resistance",
            "5. Divider output at given temperature",
            "q. Quit",
        ],
    }
}

/// Message printed for an unrecognized choice.
pub fn invalid_choice_message(variant: Variant) -> &'static str {
    match variant {
        Variant::Basic => "Invalid choice, please select 1, 2, or q.",
        Variant::Extended => "Invalid choice, please select 1–5 or q.",
    }
}
