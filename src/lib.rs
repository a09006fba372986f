//! JSON error and timezone finder
//!
//! Scans arbitrary JSON documents for `error` objects and `timezone` values
//! and renders what it finds as two report sections.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod inspection;
pub mod parser;
pub mod scanner;
pub mod session;

// Re-export commonly used types
pub use error::{ParseError, ScanError, ScanErrorKind, ScanResult};
pub use formatter::{FixedTimeZone, HostTimeZone, Report, SectionGate, SystemTimeZone};
pub use inspection::{Inspection, InspectionEngine, ScanConfig};
pub use parser::JsonSource;
pub use scanner::{scan, KeyPath};
pub use session::{LoadOutcome, LoadTicket, Session};
