//! Load state of the viewer
//!
//! A session is either idle or holds the inspection of the most recently
//! started load. Each load gets a ticket carrying a generation number; a
//! completion whose ticket is no longer current is discarded, so a slow
//! earlier load can never overwrite a newer one.

use crate::error::ScanResult;
use crate::formatter::Report;
use crate::inspection::{Inspection, InspectionEngine};
use log::debug;

/// Handle for one started load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result replaced the session state
    Applied,
    /// A newer load or a clear happened first; the result was dropped
    Stale,
}

/// Holds the findings of the current selection
pub struct Session {
    engine: InspectionEngine,
    generation: u64,
    current: Option<Inspection>,
}

impl Session {
    pub fn new(engine: InspectionEngine) -> Self {
        Self {
            engine,
            generation: 0,
            current: None,
        }
    }

    pub fn engine(&self) -> &InspectionEngine {
        &self.engine
    }

    /// Start a new load, superseding any load still in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Finish a load with the text that was read for it
    pub fn complete_load(&mut self, ticket: LoadTicket, content: &str) -> ScanResult<LoadOutcome> {
        if ticket.generation != self.generation {
            debug!(
                "Discarding load {} superseded by {}",
                ticket.generation, self.generation
            );
            return Ok(LoadOutcome::Stale);
        }

        self.apply(content)?;
        Ok(LoadOutcome::Applied)
    }

    /// Load text that is already in hand, superseding any load in flight
    pub fn load(&mut self, content: &str) -> ScanResult<()> {
        self.begin_load();
        self.apply(content)
    }

    /// A document that cannot be scanned leaves nothing selected
    fn apply(&mut self, content: &str) -> ScanResult<()> {
        match self.engine.inspect_text(content) {
            Ok(inspection) => {
                self.current = Some(inspection);
                Ok(())
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    /// Drop the selection and return to the idle state
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn inspection(&self) -> Option<&Inspection> {
        self.current.as_ref()
    }

    /// Render the current state; idle sessions have no sections
    pub fn report(&self) -> Report {
        match &self.current {
            Some(inspection) => self.engine.report(inspection),
            None => Report::empty(),
        }
    }
}
