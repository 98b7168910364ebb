//! Validation of single console lines into typed values.

use std::fmt;

/// Why a console line was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotAnInteger,
    NotABoolean,
    EmptyTitle,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnInteger => write!(f, "Invalid input. Enter a whole number."),
            InputError::NotABoolean => write!(f, "Invalid input. Enter 'true' or 'false'."),
            InputError::EmptyTitle => write!(f, "Invalid input. The title cannot be empty."),
        }
    }
}

impl std::error::Error for InputError {}

/// Signed integer, surrounding whitespace ignored.
pub fn parse_int(line: &str) -> Result<i64, InputError> {
    line.trim().parse().map_err(|_| InputError::NotAnInteger)
}

/// `true` or `false` in any letter case; nothing else.
pub fn parse_bool(line: &str) -> Result<bool, InputError> {
    let word = line.trim();
    if word.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if word.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(InputError::NotABoolean)
    }
}

/// The line as typed, minus its line ending.
pub fn parse_title(line: &str) -> Result<String, InputError> {
    let title = line.trim_end_matches(['\r', '\n']);
    if title.is_empty() {
        return Err(InputError::EmptyTitle);
    }
    Ok(title.to_string())
}
