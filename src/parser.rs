//! The parse engine: one left-to-right pass over the token stream.
//!
//! Help spellings are handled before anything else and short-circuit the
//! whole parse. Every other token must select an entry in the option
//! table; value-taking options consume the following token, decode it and
//! write the field. After the stream is exhausted, every mandatory option
//! must have been seen at least once.

use crate::error::ParseError;
use crate::spec::{self, OptionKind, HELP_ALIASES, OPTIONS};
use std::num::IntErrorKind;

/// The output record. Default-initialized, then written field-by-field as
/// matching tokens are consumed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub flag_some: bool,
    pub flag_verbose: bool,
    pub param: i16,
    pub float_value: f32,
    pub text: String,
    /// Insertion order preserved, duplicates allowed.
    pub many_values: Vec<u32>,
}

/// Successful parse outcome. Help is a terminal short-circuit, not an
/// error: the caller prints usage and exits 0.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Config(Config),
    Help,
}

/// Parse `argv[1..]` into a validated [`Config`].
///
/// Never touches the process: all failures come back as [`ParseError`]
/// and the caller owns termination.
pub fn parse(args: &[String]) -> Result<Parsed, ParseError> {
    // Help anywhere wins, even amid otherwise invalid arguments.
    if args.iter().any(|t| HELP_ALIASES.contains(&t.as_str())) {
        return Ok(Parsed::Help);
    }

    let mut config = Config::default();
    let mut matched: Vec<&'static str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let token = args[i].as_str();
        let option = spec::find(token)
            .ok_or_else(|| ParseError::UnknownOption(token.to_string()))?;

        match option.kind {
            OptionKind::Flag => {
                set_flag(&mut config, option.name);
                i += 1;
            }
            OptionKind::Int16 => {
                let value = take_value(args, i, token, option.kind)?;
                config.param = decode_i16(token, value)?;
                i += 2;
            }
            OptionKind::Float32 => {
                let value = take_value(args, i, token, option.kind)?;
                config.float_value = decode_f32(token, value)?;
                i += 2;
            }
            OptionKind::Str => {
                let value = take_value(args, i, token, option.kind)?;
                config.text = value.to_string();
                i += 2;
            }
            OptionKind::ManyU32 => {
                let value = take_value(args, i, token, option.kind)?;
                config.many_values.push(decode_u32(token, value)?);
                i += 2;
            }
        }

        // First occurrence marks the field seen; later ones just overwrite
        // (or append, for the repeatable option).
        if !matched.contains(&option.name) {
            matched.push(option.name);
        }
    }

    // Collect every missing mandatory field before failing, in table order.
    let missing: Vec<&'static str> = OPTIONS
        .iter()
        .filter(|o| o.mandatory && !matched.contains(&o.name))
        .map(|o| o.name)
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingMandatory { fields: missing });
    }

    Ok(Parsed::Config(config))
}

fn set_flag(config: &mut Config, name: &str) {
    match name {
        "some" => config.flag_some = true,
        "verbose" => config.flag_verbose = true,
        _ => {}
    }
}

/// Fetch the value token following a value-taking option at `i`.
///
/// A missing next token is a [`ParseError::MissingValue`]. For numeric and
/// repeated options, a next token that spells a known option is refused
/// the same way; the string option accepts any next token verbatim.
fn take_value<'a>(
    args: &'a [String],
    i: usize,
    option: &str,
    kind: OptionKind,
) -> Result<&'a str, ParseError> {
    match args.get(i + 1).map(String::as_str) {
        Some(next) if !(kind.refuses_option_lookalike() && spec::is_option_token(next)) => {
            Ok(next)
        }
        _ => Err(ParseError::MissingValue {
            option: option.to_string(),
        }),
    }
}

// Decoding keeps the reference rule: a decoded zero whose literal token is
// not exactly "0" is invalid. This catches non-numeric garbage and also
// rejects spellings like "00" or "+0".

fn decode_i16(option: &str, value: &str) -> Result<i16, ParseError> {
    match value.parse::<i16>() {
        Ok(0) if value != "0" => Err(invalid_integer(option, value)),
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(out_of_range(option, value, "integer"))
            }
            _ => Err(invalid_integer(option, value)),
        },
    }
}

fn decode_u32(option: &str, value: &str) -> Result<u32, ParseError> {
    match value.parse::<u32>() {
        Ok(0) if value != "0" => Err(invalid_integer(option, value)),
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(out_of_range(option, value, "integer"))
            }
            // A well-formed negative integer is a range problem for an
            // unsigned field, not a syntax one.
            _ if value.parse::<i64>().is_ok() => Err(out_of_range(option, value, "integer")),
            _ => Err(invalid_integer(option, value)),
        },
    }
}

fn decode_f32(option: &str, value: &str) -> Result<f32, ParseError> {
    match value.parse::<f32>() {
        Ok(v) if v == 0.0 && value != "0" => Err(ParseError::InvalidFloat {
            option: option.to_string(),
            value: value.to_string(),
        }),
        // Finite-looking literals that saturate to infinity overflowed the
        // 32-bit width; an explicit "inf" spelling is taken at face value.
        Ok(v) if v.is_infinite() && !spells_infinity(value) => {
            Err(out_of_range(option, value, "float"))
        }
        Ok(v) => Ok(v),
        Err(_) => Err(ParseError::InvalidFloat {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}

fn spells_infinity(value: &str) -> bool {
    let bare = value.strip_prefix(['+', '-']).unwrap_or(value);
    bare.eq_ignore_ascii_case("inf") || bare.eq_ignore_ascii_case("infinity")
}

fn invalid_integer(option: &str, value: &str) -> ParseError {
    ParseError::InvalidInteger {
        option: option.to_string(),
        value: value.to_string(),
    }
}

fn out_of_range(option: &str, value: &str, type_name: &'static str) -> ParseError {
    ParseError::OutOfRange {
        option: option.to_string(),
        value: value.to_string(),
        type_name,
    }
}
