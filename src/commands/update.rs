//! Update command implementation
//!
//! Replaces an existing `.agent` with the embedded templates, optionally
//! keeping a timestamped copy of the previous content.

use std::path::PathBuf;

use console::Style;

use crate::cli::UpdateArgs;
use crate::commands::helpers::{
    print_extraction_summary, replace_with_templates, resolve_project_path,
};
use crate::error::{Result, agent_dir_missing};
use crate::extractor::ExtractionResult;
use crate::resource::{EmbeddedStore, ResourceStore};
use crate::workspace::AgentDir;

/// What an update did
#[derive(Debug)]
pub struct UpdateOutcome {
    pub result: ExtractionResult,
    /// Backup folder and number of files copied into it
    pub backup: Option<(PathBuf, usize)>,
}

/// Run update command
pub fn run(project: Option<PathBuf>, args: UpdateArgs, verbose: bool) -> Result<()> {
    let agent_dir = AgentDir::new(&resolve_project_path(project)?);

    let outcome = update(&agent_dir, &EmbeddedStore::new(), args.backup, verbose)?;

    if let Some((ref backup, copied)) = outcome.backup {
        let files_label = if copied == 1 { "file" } else { "files" };
        println!(
            "{} Backed up {copied} {files_label} to {}",
            Style::new().green().bold().apply_to("✓"),
            backup.display()
        );
    }
    println!(
        "{} Updated {}",
        Style::new().green().bold().apply_to("✓"),
        agent_dir.path.display()
    );
    print_extraction_summary(&outcome.result, verbose);

    Ok(())
}

/// Replace `.agent` with `store`, which must already exist
pub fn update(
    agent_dir: &AgentDir,
    store: &dyn ResourceStore,
    backup: bool,
    verbose: bool,
) -> Result<UpdateOutcome> {
    if !agent_dir.exists() {
        return Err(agent_dir_missing(agent_dir.path.display().to_string()));
    }

    let backup = if backup {
        Some(agent_dir.backup()?)
    } else {
        None
    };

    let result = replace_with_templates(agent_dir, store, verbose)?;
    Ok(UpdateOutcome { result, backup })
}
