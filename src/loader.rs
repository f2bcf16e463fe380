//! Report loading: parse-or-none, never parse-or-crash.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, RuffsightError};
use crate::types::Message;

/// Parses raw text as a ruff JSON report.
///
/// The shape check is deliberately minimal: the document must be an array,
/// and every element must be an object with a non-empty string `code`.
/// Anything else yields `None`; elements that pass deserialize with
/// defaults for whatever fields they lack.
#[must_use]
pub fn parse_report(raw: &str) -> Option<Vec<Message>> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let items = value.as_array()?;
    let mut messages = Vec::with_capacity(items.len());
    for item in items {
        let has_code = item
            .get("code")
            .and_then(Value::as_str)
            .is_some_and(|code| !code.is_empty());
        if !has_code {
            return None;
        }
        messages.push(serde_json::from_value(item.clone()).ok()?);
    }
    Some(messages)
}

/// Loads and parses a report file.
///
/// # Errors
/// Returns `Io` if the file cannot be read and `InvalidReport` if the
/// contents fail the shape check.
pub fn from_file(path: &Path) -> Result<Vec<Message>> {
    let raw = fs::read_to_string(path).map_err(|source| RuffsightError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_report(&raw).ok_or(RuffsightError::InvalidReport)
}

/// Reads a report from stdin.
///
/// # Errors
/// Returns `Io` if stdin cannot be read and `InvalidReport` if the
/// contents fail the shape check.
pub fn from_stdin() -> Result<Vec<Message>> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    parse_report(&raw).ok_or(RuffsightError::InvalidReport)
}
