//! Argument predicates and assertions shared by every processor.
//!
//! The `is_*` functions are plain predicates; the `validate_*` functions
//! return a [`WordsmithError`] naming the offending parameter.

use regex::Regex;

use crate::error::{Result, WordsmithError};

/// Default maximum length of a bound document text, in characters.
pub const MAX_TEXT_LENGTH: usize = 100_000;

/// Default maximum length of a search substring, in characters.
pub const MAX_SUBSTRING_LENGTH: usize = 1_000;

/// Default maximum length of a regex source, in characters.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Whether the string has content after trimming.
pub fn is_non_empty_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether the string is empty or contains only whitespace.
pub fn is_empty_or_whitespace(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with `EmptyValue` unless `value` has content after trimming.
pub fn validate_non_empty_string(value: &str, param: &str) -> Result<()> {
    if is_empty_or_whitespace(value) {
        log::debug!("validation failed: {param} is empty");
        return Err(WordsmithError::empty_value(param));
    }
    Ok(())
}

/// Fail with `TooLong` if `value` has more than `max` characters.
pub fn validate_max_length(value: &str, max: usize, param: &str) -> Result<()> {
    // Byte length bounds the char count from above.
    if value.len() > max && value.chars().count() > max {
        log::debug!("validation failed: {param} exceeds {max} characters");
        return Err(WordsmithError::too_long(param, max));
    }
    Ok(())
}

/// Fail with `InvalidType` unless `value` is at least 1.
pub fn validate_positive_integer(value: i64, param: &str) -> Result<usize> {
    if value < 1 {
        return Err(WordsmithError::invalid_type(
            param,
            "an integer greater than 0",
        ));
    }
    usize::try_from(value)
        .map_err(|_| WordsmithError::invalid_type(param, "an integer greater than 0"))
}

/// Parse a boolean flag given as text ("true"/"false").
pub fn validate_bool(value: &str, param: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(WordsmithError::invalid_type(param, "a boolean")),
    }
}

/// Check a regex source and compile it.
///
/// An empty source or a compile failure is `InvalidPattern`; a source longer
/// than `max` characters is `TooLong`.
pub fn validate_pattern(source: &str, max: usize, param: &str) -> Result<Regex> {
    if source.is_empty() {
        return Err(WordsmithError::invalid_pattern(param, "pattern is empty"));
    }
    validate_max_length(source, max, param)?;
    Regex::new(source).map_err(|e| {
        log::debug!("validation failed: {param} does not compile: {e}");
        WordsmithError::invalid_pattern(param, e.to_string())
    })
}
