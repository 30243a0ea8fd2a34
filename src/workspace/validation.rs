//! On-disk checks behind `agentkit validate`
//!
//! Findings are collected, never raised: a broken `.agent` folder produces a
//! report with issues, not an error.

use std::fs;

use walkdir::WalkDir;

use super::AgentDir;
use crate::error::{Result, file_read_failed};
use crate::resource::{Category, CategoryCounts};

/// Result of inspecting a `.agent` folder
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// `.md` files found directly inside each category folder
    pub counts: CategoryCounts,

    /// Minimum number of files expected per category
    pub expected: CategoryCounts,

    /// Human-readable findings, in discovery order
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl AgentDir {
    /// Inspect the folder against the expected minimum counts
    ///
    /// Checks that every category folder exists, that it holds at least the
    /// expected number of `.md` files and that none of them is empty.
    pub fn validate(&self, expected: CategoryCounts) -> Result<ValidationReport> {
        let mut report = ValidationReport {
            expected,
            ..ValidationReport::default()
        };

        if !self.path.is_dir() {
            report
                .issues
                .push(format!(".agent folder not found at {}", self.path.display()));
            return Ok(report);
        }

        for category in Category::ALL {
            self.validate_category(category, &mut report)?;
        }

        Ok(report)
    }

    fn validate_category(&self, category: Category, report: &mut ValidationReport) -> Result<()> {
        let dir = self.path.join(category.dir_name());
        if !dir.is_dir() {
            report
                .issues
                .push(format!("Missing {}/ folder", category.dir_name()));
            return Ok(());
        }

        let mut count = 0;
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }

            count += 1;
            let len = fs::metadata(path)
                .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?
                .len();
            if len == 0 {
                report.issues.push(format!(
                    "Empty file: {}/{}",
                    category.dir_name(),
                    entry.file_name().to_string_lossy()
                ));
            }
        }

        report.counts.set(category, count);
        let expected = report.expected.get(category);
        if count < expected {
            report.issues.push(format!(
                "{}: found {count} .md files, expected at least {expected}",
                category.label()
            ));
        }

        Ok(())
    }
}
