use crate::error::CpfError;
use regex::Regex;
use std::sync::OnceLock;

/// `DDD.DDD.DDD-DD`, ASCII digits only.
pub const FORMATTED_PATTERN: &str = r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$";
/// Eleven bare ASCII digits.
pub const RAW_PATTERN: &str = r"^[0-9]{11}$";

static FORMATTED: OnceLock<Regex> = OnceLock::new();
static RAW: OnceLock<Regex> = OnceLock::new();

/// The two textual layouts a CPF is accepted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    Formatted,
    Raw,
}

/// Base and verifier digits split out of an accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDigits {
    pub base: u32,
    pub check_digits: u8,
}

pub fn classify(input: &str) -> Option<InputShape> {
    if formatted_regex().is_match(input) {
        Some(InputShape::Formatted)
    } else if raw_regex().is_match(input) {
        Some(InputShape::Raw)
    } else {
        None
    }
}

/// Splits `input` into base and check digits.
///
/// Anything other than the two accepted shapes, including surrounding
/// whitespace, is reported as [`CpfError::MalformedInput`].
pub fn parse(input: &str) -> Result<ParsedDigits, CpfError> {
    let Some(shape) = classify(input) else {
        return Err(CpfError::MalformedInput {
            input: input.to_string(),
        });
    };

    // The patterns pin every byte position, so these slices are all ASCII digits.
    let (base, check_digits) = match shape {
        InputShape::Formatted => {
            let base = [&input[0..3], &input[4..7], &input[8..11]]
                .into_iter()
                .fold(0, |acc, group| acc * 1_000 + decimal(group));
            (base, decimal(&input[12..14]))
        }
        InputShape::Raw => (decimal(&input[..9]), decimal(&input[9..])),
    };

    Ok(ParsedDigits {
        base,
        check_digits: check_digits as u8,
    })
}

fn decimal(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, byte| acc * 10 + u32::from(byte - b'0'))
}

/// Renders an integer candidate as the raw shape, left-padded to eleven digits.
pub fn pad_numeric(value: u64) -> String {
    format!("{value:011}")
}

fn formatted_regex() -> &'static Regex {
    FORMATTED.get_or_init(|| {
        Regex::new(FORMATTED_PATTERN).expect("formatted CPF pattern compiles")
    })
}

fn raw_regex() -> &'static Regex {
    RAW.get_or_init(|| Regex::new(RAW_PATTERN).expect("raw CPF pattern compiles"))
}
