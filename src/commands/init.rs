//! Init command implementation
//!
//! Creates `.agent` in the project directory from the embedded templates.
//! An existing folder is only replaced with `--force`.

use std::path::PathBuf;

use console::Style;

use crate::cli::InitArgs;
use crate::commands::helpers::{
    print_extraction_summary, replace_with_templates, resolve_project_path,
};
use crate::error::{Result, agent_dir_exists};
use crate::extractor::ExtractionResult;
use crate::resource::{EmbeddedStore, ResourceStore};
use crate::workspace::AgentDir;

/// Run init command
pub fn run(project: Option<PathBuf>, args: InitArgs, verbose: bool) -> Result<()> {
    let agent_dir = AgentDir::new(&resolve_project_path(project)?);
    let replaced = agent_dir.exists();

    let result = init(&agent_dir, &EmbeddedStore::new(), args.force, verbose)?;

    let action = if replaced { "Recreated" } else { "Created" };
    println!(
        "{} {action} {}",
        Style::new().green().bold().apply_to("✓"),
        agent_dir.path.display()
    );
    print_extraction_summary(&result, verbose);

    Ok(())
}

/// Create `.agent` from `store`
pub fn init(
    agent_dir: &AgentDir,
    store: &dyn ResourceStore,
    force: bool,
    verbose: bool,
) -> Result<ExtractionResult> {
    if agent_dir.exists() && !force {
        return Err(agent_dir_exists(agent_dir.path.display().to_string()));
    }

    replace_with_templates(agent_dir, store, verbose)
}
