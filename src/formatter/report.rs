//! Rendering stored findings as the two report sections

use super::{
    displayed_errors, displayed_timezones, DisplayOptions, DisplayedError, DisplayedTimezone,
    ErrorEntry, TimezoneFinding,
};
use console::style;
use serde::Serialize;

pub const ERRORS_HEADER: &str = "Errors:";
pub const TIMEZONES_HEADER: &str = "Timezones:";

/// Decides when a report section is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionGate {
    /// Show the section when any raw finding exists, even if none survive filtering
    #[default]
    PreFilter,
    /// Show the section only when at least one finding survives filtering
    PostFilter,
}

/// The rendered view of one load: each section is absent or a list of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub errors: Option<Vec<DisplayedError>>,
    pub timezones: Option<Vec<DisplayedTimezone>>,
}

impl Report {
    /// Report with no sections, shown while nothing is loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the report for stored error and timezone lists
    pub fn build(
        errors: &[ErrorEntry],
        timezones: &[TimezoneFinding],
        options: &DisplayOptions,
    ) -> Self {
        Self {
            errors: gate(errors.len(), displayed_errors(errors, options), options.section_gate),
            timezones: gate(
                timezones.len(),
                displayed_timezones(timezones),
                options.section_gate,
            ),
        }
    }

    /// True when neither section is present
    pub fn is_empty(&self) -> bool {
        self.errors.is_none() && self.timezones.is_none()
    }

    /// Number of items across both sections
    pub fn item_count(&self) -> usize {
        self.errors.as_ref().map_or(0, Vec::len) + self.timezones.as_ref().map_or(0, Vec::len)
    }

    /// Plain-text rendering; `color` bolds the section headers
    pub fn render_text(&self, color: bool) -> String {
        let header = |text: &str| {
            if color {
                style(text).bold().to_string()
            } else {
                text.to_string()
            }
        };

        let mut lines = Vec::new();
        if let Some(errors) = &self.errors {
            lines.push(header(ERRORS_HEADER));
            for error in errors {
                lines.push(format!(
                    "  - Path: {} / Name: {} / Message: {}",
                    error.path, error.name, error.message
                ));
            }
        }
        if let Some(timezones) = &self.timezones {
            lines.push(header(TIMEZONES_HEADER));
            for timezone in timezones {
                lines.push(format!("  - {}", timezone.value));
            }
        }
        lines.join("\n")
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn gate<T>(raw_len: usize, shown: Vec<T>, section_gate: SectionGate) -> Option<Vec<T>> {
    let present = match section_gate {
        SectionGate::PreFilter => raw_len > 0,
        SectionGate::PostFilter => !shown.is_empty(),
    };
    present.then_some(shown)
}
