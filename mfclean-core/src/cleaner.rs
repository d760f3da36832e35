// mfclean-core/src/cleaner.rs
//! The read → clean → compare → write shell around the pure pipeline.
//!
//! File access goes through `SourceStore` so callers (and tests) can observe
//! whether a write happened without relying on timestamps.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RuleSummaryItem;
use crate::engine::CleaningEngine;
use crate::errors::CleanError;
use crate::headless::clean_with;

/// Whole-file text access.
pub trait SourceStore {
    /// Reads the entire file as UTF-8.
    fn read(&self, path: &Path) -> Result<String, CleanError>;

    /// Replaces the entire file with `content`, UTF-8 encoded.
    fn write(&self, path: &Path, content: &str) -> Result<(), CleanError>;
}

/// `SourceStore` backed by `std::fs`. Writes are in place, not atomic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceStore;

impl SourceStore for FsSourceStore {
    fn read(&self, path: &Path) -> Result<String, CleanError> {
        fs::read_to_string(path).map_err(|source| CleanError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), CleanError> {
        fs::write(path, content.as_bytes()).map_err(|source| CleanError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Whether a changed result is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanMode {
    /// Overwrite the file when the text changed.
    #[default]
    Write,
    /// Never write; only report whether a write would happen.
    Check,
}

/// What a single run did to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub path: PathBuf,
    /// The cleaned text differs from the file content.
    pub changed: bool,
    /// The file was overwritten.
    pub written: bool,
    pub original: String,
    pub cleaned: String,
    pub summary: Vec<RuleSummaryItem>,
}

/// Binds an engine to a store.
pub struct Cleaner<'a, S: SourceStore> {
    engine: &'a dyn CleaningEngine,
    store: S,
}

impl<'a> Cleaner<'a, FsSourceStore> {
    /// A cleaner working directly on the filesystem.
    pub fn on_disk(engine: &'a dyn CleaningEngine) -> Self {
        Self::new(engine, FsSourceStore)
    }
}

impl<'a, S: SourceStore> Cleaner<'a, S> {
    pub fn new(engine: &'a dyn CleaningEngine, store: S) -> Self {
        Self { engine, store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cleans the file at `path`, writing it back only if it changed and
    /// `mode` is `CleanMode::Write`.
    pub fn clean_path(&self, path: &Path, mode: CleanMode) -> Result<CleanReport> {
        debug!("Reading {}", path.display());
        let original = self.store.read(path)?;
        let source_id = path.display().to_string();
        let outcome = clean_with(self.engine, &original, &source_id)?;

        let written = if outcome.changed && mode == CleanMode::Write {
            self.store.write(path, &outcome.text)?;
            info!("Wrote cleaned content to {}", path.display());
            true
        } else {
            debug!(
                "No write for {} (changed: {}, mode: {:?})",
                path.display(),
                outcome.changed,
                mode
            );
            false
        };

        Ok(CleanReport {
            path: path.to_path_buf(),
            changed: outcome.changed,
            written,
            original,
            cleaned: outcome.text,
            summary: outcome.summary,
        })
    }
}
