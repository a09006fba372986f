//! Configuration options for inspecting JSON documents

use crate::formatter::{DisplayOptions, FixedTimeZone, HostTimeZone, SectionGate, SystemTimeZone};
use crate::scanner::path::DEFAULT_SEPARATOR;
use crate::scanner::DEFAULT_MAX_DEPTH;

/// Inspection configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Separator placed between keys of a displayed path
    pub path_separator: String,
    /// Whether a report section depends on raw or filtered findings
    pub section_gate: SectionGate,
    /// Render decode failures as a visible `SyntaxError` entry
    pub synthesize_decode_errors: bool,
    /// Maximum input size in bytes
    pub memory_limit: usize,
    /// Deepest container level scanned; `None` removes the bound
    pub max_depth: Option<usize>,
    /// Host time zone name to use instead of the system one
    pub timezone_override: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            path_separator: DEFAULT_SEPARATOR.to_string(),
            section_gate: SectionGate::PreFilter,
            synthesize_decode_errors: false,
            memory_limit: 100 * 1024 * 1024, // 100MB
            max_depth: Some(DEFAULT_MAX_DEPTH),
            timezone_override: None,
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path separator
    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Set the section gate
    pub fn with_section_gate(mut self, gate: SectionGate) -> Self {
        self.section_gate = gate;
        self
    }

    /// Show or hide decode failures in reports
    pub fn with_decode_errors(mut self, enabled: bool) -> Self {
        self.synthesize_decode_errors = enabled;
        self
    }

    /// Set memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Set maximum scan depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Pin the host time zone name
    pub fn with_timezone(mut self, name: impl Into<String>) -> Self {
        self.timezone_override = Some(name.into());
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_limit < 1024 {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        if self.max_depth == Some(0) {
            return Err("Max depth must be at least 1".to_string());
        }

        if let Some(name) = &self.timezone_override {
            if name.trim().is_empty() {
                return Err("Time zone name must not be blank".to_string());
            }
        }

        Ok(())
    }

    /// Presentation settings derived from this configuration
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            path_separator: self.path_separator.clone(),
            section_gate: self.section_gate,
            synthesize_decode_errors: self.synthesize_decode_errors,
        }
    }

    /// Time zone provider honoring the override
    pub fn host_time_zone(&self) -> Box<dyn HostTimeZone> {
        match &self.timezone_override {
            Some(name) => Box::new(FixedTimeZone::new(name.clone())),
            None => Box::new(SystemTimeZone),
        }
    }
}
