//! Storage layer for the finance tracker
//!
//! The whole ledger lives in one JSON document. `document` converts between
//! that document and a `Ledger`; `file_io` does the reading and writing.

pub mod document;
pub mod file_io;

pub use document::LedgerDocument;
pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::ledger::Ledger;

/// Binds a ledger document location to load and save calls
pub struct Storage {
    paths: TrackerPaths,
    data_file: PathBuf,
}

impl Storage {
    /// Create a Storage instance for the document named in `settings`
    pub fn new(paths: TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            data_file: settings.data_file(&paths),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the ledger, empty if the document doesn't exist yet
    pub fn load_ledger(&self) -> TrackerResult<Ledger> {
        let mut ledger = Ledger::new();
        ledger.load_from_file(&self.data_file)?;
        Ok(ledger)
    }

    pub fn save_ledger(&self, ledger: &Ledger) -> TrackerResult<()> {
        ledger.save_to_file(&self.data_file)
    }
}
