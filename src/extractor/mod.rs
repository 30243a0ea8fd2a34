//! Template extraction
//!
//! Materializes every decodable resource of a [`ResourceStore`] under a target
//! folder as `<target>/<category>/<file_name>`. The target is normally the
//! staging directory of a [`crate::transaction::Transaction`], never the live
//! `.agent` folder.

use std::fs;
use std::path::Path;

use crate::error::{Result, file_write_failed};
use crate::resource::{CategoryCounts, DecodedPath, KeyError, ResourceStore, decode_key};
use crate::ui::ProgressReporter;

/// A resource that was not extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedResource {
    pub key: String,
    pub reason: KeyError,
}

/// Outcome of one extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Files written per category
    pub counts: CategoryCounts,
    /// Template-looking keys that could not be decoded
    pub skipped: Vec<SkippedResource>,
    /// Set when the store or the file system failed; extraction stopped there
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Writes a resource store to disk
pub struct Extractor<'a> {
    store: &'a dyn ResourceStore,
}

impl<'a> Extractor<'a> {
    pub fn new(store: &'a dyn ResourceStore) -> Self {
        Self { store }
    }

    /// Extract every template under `target`
    ///
    /// Skipped keys never fail the run. I/O failures are reported through
    /// [`ExtractionResult::error`]; files written before the failure stay on disk.
    pub fn extract(&self, target: &Path, reporter: &mut dyn ProgressReporter) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        let planned = self.plan(&mut result, reporter);

        reporter.init(planned.len() as u64);
        match self.write_all(target, &planned, &mut result, reporter) {
            Ok(()) => reporter.finish(),
            Err(e) => {
                reporter.abandon();
                result.error = Some(e.to_string());
            }
        }
        result
    }

    /// Decode every key, recording skips
    fn plan<'k>(
        &'k self,
        result: &mut ExtractionResult,
        reporter: &mut dyn ProgressReporter,
    ) -> Vec<(&'k str, DecodedPath)> {
        let mut planned = Vec::new();
        for key in self.store.keys() {
            match decode_key(key) {
                Ok(decoded) => planned.push((key, decoded)),
                // Not ours: other resources may share the store
                Err(KeyError::NotTemplate) => {}
                Err(reason) => {
                    reporter.skipped(key, &reason.to_string());
                    result.skipped.push(SkippedResource {
                        key: key.to_string(),
                        reason,
                    });
                }
            }
        }
        planned
    }

    fn write_all(
        &self,
        target: &Path,
        planned: &[(&str, DecodedPath)],
        result: &mut ExtractionResult,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<()> {
        for (key, decoded) in planned {
            let bytes = self.store.read(key)?;
            let relative = decoded.relative_path();
            write_file(&target.join(&relative), bytes)?;

            result.counts.increment(decoded.category);
            reporter.file_written(&relative.display().to_string());
        }
        Ok(())
    }
}

fn write_file(destination: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| file_write_failed(parent.display().to_string(), e.to_string()))?;
    }
    fs::write(destination, bytes)
        .map_err(|e| file_write_failed(destination.display().to_string(), e.to_string()))
}
