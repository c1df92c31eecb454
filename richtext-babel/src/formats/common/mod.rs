//! Common utilities for formats
//!
//! Formats receive their options as a flat string map (the CLI forwards
//! `--extra-<key> <value>` pairs verbatim). These helpers read typed values
//! out of that map with uniform error reporting.

use crate::error::FormatError;
use std::collections::HashMap;

/// Read a boolean option. Accepts `true/false`, `1/0`, `yes/no`, `y/n`.
pub fn bool_param(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<bool>, FormatError> {
    params.get(key).map(|raw| parse_bool(key, raw)).transpose()
}

/// Read a non-negative integer option.
pub fn usize_param(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<usize>, FormatError> {
    params.get(key).map(|raw| parse_usize(key, raw)).transpose()
}

/// Parse the value of boolean option `key`, with the spellings of [`bool_param`].
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}

/// Parse the value of integer option `key`. Surrounding whitespace is ignored.
pub fn parse_usize(key: &str, raw: &str) -> Result<usize, FormatError> {
    raw.trim().parse::<usize>().map_err(|_| invalid(key, raw))
}

fn invalid(key: &str, raw: &str) -> FormatError {
    FormatError::InvalidOption {
        key: key.to_string(),
        value: raw.to_string(),
    }
}
