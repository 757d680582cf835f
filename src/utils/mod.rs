pub mod parsing;

// Re-export commonly used items
pub use parsing::{parse_integer_or, parse_number, parse_number_or};
