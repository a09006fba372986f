//! Host time zone lookup

use chrono::Local;

/// Supplies the name of the time zone the viewer is running in.
///
/// The result describes the host, never the scanned document.
pub trait HostTimeZone {
    fn name(&self) -> String;
}

/// Resolves the zone configured on this machine.
///
/// Falls back to the current local UTC offset (e.g. `+02:00`) when no IANA
/// name can be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeZone;

impl HostTimeZone for SystemTimeZone {
    fn name(&self) -> String {
        match iana_time_zone::get_timezone() {
            Ok(name) => name,
            Err(e) => {
                log::debug!("Falling back to local UTC offset: {}", e);
                Local::now().offset().to_string()
            }
        }
    }
}

/// Always reports the same zone name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimeZone(String);

impl FixedTimeZone {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostTimeZone for FixedTimeZone {
    fn name(&self) -> String {
        self.0.clone()
    }
}
