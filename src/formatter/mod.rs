//! Turning raw findings into displayable records
//!
//! Error findings are stored unchanged and only filtered when a report is
//! built. Timezone findings are formatted right away by appending the host
//! time zone name to the raw value.

pub mod report;
pub mod timezone;

pub use report::{Report, SectionGate};
pub use timezone::{FixedTimeZone, HostTimeZone, SystemTimeZone};

use crate::error::ParseError;
use crate::scanner::{Finding, KeyPath};
use serde::Serialize;
use serde_json::Value;

/// Name given to decode failures when they are made visible
pub const DECODE_FAILURE_NAME: &str = "SyntaxError";

/// A value found under an `error` key
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorFinding {
    pub value: Value,
    pub path: KeyPath,
}

/// Entry of the stored error list
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorEntry {
    /// An `error` key found in the document
    Found(ErrorFinding),
    /// The document could not be decoded at all
    DecodeFailure(ParseError),
}

/// A `timezone` key with its annotated value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneFinding {
    pub key: String,
    pub value: String,
}

/// Error ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedError {
    pub path: String,
    pub name: String,
    pub message: String,
}

/// Timezone ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedTimezone {
    pub value: String,
}

/// Presentation settings shared by the filters and the report
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Separator placed between path keys
    pub path_separator: String,
    /// Whether a section shows up based on the raw or the filtered list
    pub section_gate: SectionGate,
    /// Show decode failures as a `SyntaxError` entry instead of hiding them
    pub synthesize_decode_errors: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            path_separator: crate::scanner::path::DEFAULT_SEPARATOR.to_string(),
            section_gate: SectionGate::PreFilter,
            synthesize_decode_errors: false,
        }
    }
}

/// Keep an error finding as-is, detached from the document
pub fn format_error(finding: &Finding<'_>) -> ErrorEntry {
    ErrorEntry::Found(ErrorFinding {
        value: finding.value.clone(),
        path: finding.path.clone(),
    })
}

/// Annotate a timezone finding with the host zone: `"<raw> (<host>)"`
pub fn format_timezone(finding: &Finding<'_>, host_zone: &str) -> TimezoneFinding {
    let raw = match finding.value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    TimezoneFinding {
        key: finding.key.to_string(),
        value: format!("{} ({})", raw, host_zone),
    }
}

/// Project the error entries that carry a usable name and message
pub fn displayed_errors(entries: &[ErrorEntry], options: &DisplayOptions) -> Vec<DisplayedError> {
    entries
        .iter()
        .filter_map(|entry| displayed_error(entry, options))
        .collect()
}

fn displayed_error(entry: &ErrorEntry, options: &DisplayOptions) -> Option<DisplayedError> {
    match entry {
        ErrorEntry::Found(finding) => {
            let object = finding.value.as_object()?;
            let name = non_blank(object.get("name"))?;
            let message = non_blank(object.get("message"))?;
            Some(DisplayedError {
                path: finding.path.join(&options.path_separator),
                name: name.to_string(),
                message: message.to_string(),
            })
        }
        ErrorEntry::DecodeFailure(error) if options.synthesize_decode_errors => {
            Some(DisplayedError {
                path: String::new(),
                name: DECODE_FAILURE_NAME.to_string(),
                message: error.to_string(),
            })
        }
        ErrorEntry::DecodeFailure(_) => None,
    }
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Project the timezone findings whose formatted value is not blank
pub fn displayed_timezones(findings: &[TimezoneFinding]) -> Vec<DisplayedTimezone> {
    findings
        .iter()
        .filter(|finding| !finding.key.is_empty() && !finding.value.trim().is_empty())
        .map(|finding| DisplayedTimezone {
            value: finding.value.clone(),
        })
        .collect()
}
