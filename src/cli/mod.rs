//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command arguments
//! - update: Update command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod list;
pub mod update;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use list::ListArgs;
pub use update::UpdateArgs;

/// agentkit - AI assistant guidance for your project
///
/// Extracts coding rules, generation skills and workflow guides into `.agent/`.
#[derive(Parser, Debug)]
#[command(
    name = "agentkit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract AI coding assistant rules, skills and workflows into .agent/",
    long_about = "agentkit writes a curated set of coding rules, code-generation skills and \
                  workflow guides into the .agent folder of a project, where AI coding \
                  assistants pick them up.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  agentkit init                 \x1b[90m# Create .agent in the current directory\x1b[0m\n   \
                  agentkit init --force         \x1b[90m# Recreate an existing .agent\x1b[0m\n   \
                  agentkit update --backup      \x1b[90m# Refresh .agent, keeping a backup\x1b[0m\n   \
                  agentkit list --skills        \x1b[90m# Show available skills\x1b[0m\n   \
                  agentkit validate             \x1b[90m# Check .agent for missing files\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory containing .agent (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the .agent folder
    Init(InitArgs),

    /// Replace the .agent folder with the current templates
    Update(UpdateArgs),

    /// List available rules, skills and workflows
    List(ListArgs),

    /// Check the .agent folder for missing or empty files
    Validate,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
