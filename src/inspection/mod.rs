//! Document inspection module
//!
//! This module contains the inspection engine, its configuration, and input limits.

pub mod config;
pub mod engine;
pub mod limits;

pub use config::ScanConfig;
pub use engine::{Inspection, InspectionEngine};
