//! JSON input sources and decoding

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult, ScanError, ScanErrorKind, ScanResult};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Source of a JSON document
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Raw JSON text
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Get the size of the source in bytes, when it is known before reading
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Stdin => None,
        }
    }

    /// Read the raw text of this source without decoding it.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so such
    /// input still reaches the decoder.
    pub fn read_content(&self) -> ScanResult<String> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    ScanError::scan_with_source(
                        ScanErrorKind::io(e.to_string(), Some(path.clone())),
                        e.into(),
                    )
                })?;
                Ok(text_from_bytes(bytes, &self.description()))
            }
            JsonSource::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin().read_to_end(&mut buffer).map_err(|e| {
                    ScanError::scan_with_source(
                        ScanErrorKind::io(format!("Failed to read stdin: {}", e), None),
                        e.into(),
                    )
                })?;
                Ok(text_from_bytes(buffer, &self.description()))
            }
        }
    }
}

fn text_from_bytes(bytes: Vec<u8>, origin: &str) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        debug!("Replacing invalid UTF-8 in {}", origin);
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

/// Decode JSON text into a value, at any nesting depth
pub fn decode(content: &str) -> ParseResult<Value> {
    if content.trim().is_empty() {
        return Err(ParseError::new("Empty JSON document".to_string(), None));
    }

    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();
    // Nested containers grow the stack on the heap instead of overflowing it
    let decoded = Value::deserialize(serde_stacker::Deserializer::new(&mut json));
    decoded
        .and_then(|value| json.end().map(|()| value))
        .map_err(|e| decode_error(content, &e))
}

fn decode_error(content: &str, e: &serde_json::Error) -> ParseError {
    let location = error_location(e);
    let error = ParseError::new(format!("Invalid JSON: {}", describe(e)), location);
    match location.and_then(|loc| error_preview(content, loc)) {
        Some(preview) => error.with_preview(preview),
        None => error,
    }
}

/// Error text without the trailing location, which `ParseError` reports itself
fn describe(error: &serde_json::Error) -> String {
    let text = error.to_string();
    match text.find(" at line ") {
        Some(end) => text[..end].to_string(),
        None => text,
    }
}

/// Line and column reported by serde_json, if it has one
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, column) => Some((line, column)),
    }
}

/// Offending line with a caret under the reported column
fn error_preview(content: &str, (line, column): (usize, usize)) -> Option<String> {
    let error_line = content.lines().nth(line.checked_sub(1)?)?;
    let caret_offset = column
        .saturating_sub(1)
        .min(error_line.chars().count());
    Some(format!("{}\n{}^", error_line, " ".repeat(caret_offset)))
}
