//! Runs both scans over a document and keeps the formatted results

use crate::error::{ParseError, ScanResult};
use crate::formatter::{
    format_error, format_timezone, DisplayOptions, ErrorEntry, HostTimeZone, Report,
    TimezoneFinding,
};
use crate::inspection::config::ScanConfig;
use crate::inspection::limits;
use crate::parser::{decode, JsonSource};
use crate::scanner::{scan_with_max_depth, KeyPath, ERROR_KEY, TIMEZONE_KEY};
use log::{debug, warn};
use serde_json::Value;

/// Findings of one loaded document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inspection {
    pub errors: Vec<ErrorEntry>,
    pub timezones: Vec<TimezoneFinding>,
}

impl Inspection {
    /// State stored when the document could not be decoded
    pub fn decode_failure(error: ParseError) -> Self {
        Self {
            errors: vec![ErrorEntry::DecodeFailure(error)],
            timezones: Vec::new(),
        }
    }

    /// True when this inspection records a decode failure
    pub fn is_decode_failure(&self) -> bool {
        self.errors
            .iter()
            .any(|entry| matches!(entry, ErrorEntry::DecodeFailure(_)))
    }

    /// Render the stored lists
    pub fn report(&self, options: &DisplayOptions) -> Report {
        Report::build(&self.errors, &self.timezones, options)
    }
}

/// Main inspection engine
pub struct InspectionEngine {
    config: ScanConfig,
    host_zone: Box<dyn HostTimeZone>,
}

impl InspectionEngine {
    /// Create an engine whose host zone follows the configuration
    pub fn new(config: ScanConfig) -> Self {
        let host_zone = config.host_time_zone();
        Self { config, host_zone }
    }

    /// Create an engine with an explicit host zone provider
    pub fn with_host_zone(config: ScanConfig, host_zone: impl HostTimeZone + 'static) -> Self {
        Self {
            config,
            host_zone: Box::new(host_zone),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan a decoded document for errors and timezones
    pub fn inspect(&self, document: &Value) -> ScanResult<Inspection> {
        let root = KeyPath::root();
        let max_depth = self.config.max_depth;

        let errors: Vec<ErrorEntry> = scan_with_max_depth(document, &root, ERROR_KEY, max_depth)?
            .iter()
            .map(format_error)
            .collect();

        let timezone_findings = scan_with_max_depth(document, &root, TIMEZONE_KEY, max_depth)?;
        let timezones = if timezone_findings.is_empty() {
            Vec::new()
        } else {
            // One lookup per document so every entry names the same zone
            let host = self.host_zone.name();
            timezone_findings
                .iter()
                .map(|finding| format_timezone(finding, &host))
                .collect()
        };

        debug!(
            "Found {} error and {} timezone entries",
            errors.len(),
            timezones.len()
        );
        Ok(Inspection { errors, timezones })
    }

    /// Decode and scan JSON text; a decode failure becomes part of the result
    pub fn inspect_text(&self, content: &str) -> ScanResult<Inspection> {
        match decode(content) {
            Ok(document) => self.inspect(&document),
            Err(error) => {
                warn!("Could not decode document: {}", error.detailed());
                Ok(Inspection::decode_failure(error))
            }
        }
    }

    /// Read the text of a source within the configured size limit
    pub fn read_source(&self, source: &JsonSource) -> ScanResult<String> {
        limits::check_source_size_before_read(source, &self.config)?;
        let content = source.read_content()?;
        limits::check_content_size(&content, &self.config)?;

        debug!("Read {} bytes from {}", content.len(), source.description());
        Ok(content)
    }

    /// Render an inspection with this engine's display settings
    pub fn report(&self, inspection: &Inspection) -> Report {
        inspection.report(&self.config.display_options())
    }
}
