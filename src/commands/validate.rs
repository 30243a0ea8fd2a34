//! Validate command implementation
//!
//! Inspects `.agent` on disk and reports findings. Findings never change the
//! exit code; only an I/O error while reading the folder does.

use std::path::PathBuf;

use console::Style;

use crate::commands::helpers::{print_counts, resolve_project_path};
use crate::error::Result;
use crate::resource::{CategoryCounts, EmbeddedStore};
use crate::workspace::{AgentDir, ValidationReport};

/// Run validate command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let agent_dir = AgentDir::new(&resolve_project_path(project)?);
    let expected = CategoryCounts::from_store(&EmbeddedStore::new());

    println!("Validating {}", agent_dir.path.display());
    let report = agent_dir.validate(expected)?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &ValidationReport) {
    print_counts(&report.counts);
    println!();

    if report.is_valid() {
        println!(
            "{} .agent folder is valid",
            Style::new().green().bold().apply_to("✓")
        );
        return;
    }

    let issues_label = if report.issues.len() == 1 { "issue" } else { "issues" };
    println!(
        "{} Found {} {issues_label}:",
        Style::new().red().bold().apply_to("✗"),
        report.issues.len()
    );
    for issue in &report.issues {
        println!("  - {issue}");
    }
}
