//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::error::{AgentKitError, Result, io_error};
use crate::extractor::{ExtractionResult, Extractor};
use crate::resource::{Category, CategoryCounts, ResourceStore};
use crate::transaction::Transaction;
use crate::ui;
use crate::workspace::AgentDir;

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Extract `store` into a staging folder and swap it in as `.agent`
///
/// On failure the previous `.agent` (if any) is left untouched.
pub fn replace_with_templates(
    agent_dir: &AgentDir,
    store: &dyn ResourceStore,
    verbose: bool,
) -> Result<ExtractionResult> {
    let transaction = Transaction::begin(&agent_dir.path)?;
    if verbose {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "Staging templates in {}",
                transaction.staging_path().display()
            ))
        );
    }

    let mut reporter = ui::reporter_for(verbose);
    let result = Extractor::new(store).extract(transaction.staging_path(), reporter.as_mut());
    if let Some(ref message) = result.error {
        return Err(AgentKitError::ExtractionFailed {
            message: message.clone(),
        });
    }

    transaction.commit()?;
    Ok(result)
}

/// Print per-category counts
pub fn print_counts(counts: &CategoryCounts) {
    for category in Category::ALL {
        let count = counts.get(category);
        let files_label = if count == 1 { "file" } else { "files" };
        println!(
            "  {:<10} {:>3} {files_label}",
            Style::new().bold().apply_to(category.dir_name()),
            count
        );
    }
}

/// Print the outcome of a successful extraction
pub fn print_extraction_summary(result: &ExtractionResult, verbose: bool) {
    print_counts(&result.counts);

    if !result.skipped.is_empty() {
        let skipped = result.skipped.len();
        let templates_label = if skipped == 1 { "template" } else { "templates" };
        eprintln!(
            "{} {skipped} {templates_label} skipped{}",
            Style::new().yellow().bold().apply_to("Warning:"),
            if verbose { ":" } else { " (run with --verbose for details)" }
        );
        if verbose {
            for skip in &result.skipped {
                eprintln!("  {} ({})", skip.key, skip.reason);
            }
        }
    }
}
