//! Parse failures.
//!
//! Every variant is fatal to the parse. The engine returns them instead of
//! exiting so callers (and tests) stay in-process; the binary maps any
//! error to exit status 1.

use thiserror::Error;

/// A failed parse. `option` fields carry the alias spelling the user
/// actually typed, not the canonical name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Expected value for option '{option}' but no value was provided")]
    MissingValue { option: String },

    #[error("Value '{value}' of option '{option}' out of range for {type_name} type")]
    OutOfRange {
        option: String,
        value: String,
        type_name: &'static str,
    },

    #[error("Value '{value}' of option '{option}' is not a valid integer")]
    InvalidInteger { option: String, value: String },

    #[error("Value '{value}' of option '{option}' is not a valid float")]
    InvalidFloat { option: String, value: String },

    /// All missing mandatory fields, collected before failing — the report
    /// never stops at the first one. One line per field.
    #[error("{}", format_missing(.fields))]
    MissingMandatory { fields: Vec<&'static str> },
}

fn format_missing(fields: &[&'static str]) -> String {
    fields
        .iter()
        .map(|name| format!("--{name} was required but it was not provided"))
        .collect::<Vec<_>>()
        .join("\n")
}
