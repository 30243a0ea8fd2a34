//! Error types and handling for agentkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`resource`]: Embedded template errors
//! - [`workspace`]: `.agent` folder errors

pub mod fs;
pub mod resource;
pub mod workspace;

pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use resource::not_found as resource_not_found;
pub use workspace::{already_exists as agent_dir_exists, missing as agent_dir_missing};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for agentkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgentKitError {
    // Agent folder errors
    #[error("The .agent folder already exists at: {path}")]
    #[diagnostic(
        code(agentkit::agent_dir::exists),
        help("Use 'agentkit init --force' to overwrite it, or 'agentkit update' to refresh it")
    )]
    AgentDirExists { path: String },

    #[error("No .agent folder found at: {path}")]
    #[diagnostic(
        code(agentkit::agent_dir::missing),
        help("Run 'agentkit init' to create it first")
    )]
    AgentDirMissing { path: String },

    #[error("Failed to back up {path}: {reason}")]
    #[diagnostic(code(agentkit::agent_dir::backup_failed))]
    BackupFailed { path: String, reason: String },

    #[error("Failed to replace {path}: {reason}")]
    #[diagnostic(
        code(agentkit::agent_dir::swap_failed),
        help("The previous .agent folder was left in place")
    )]
    SwapFailed { path: String, reason: String },

    // Extraction errors
    #[error("Template extraction failed: {message}")]
    #[diagnostic(
        code(agentkit::extract::failed),
        help("Check that the project directory is writable and has free space")
    )]
    ExtractionFailed { message: String },

    #[error("Embedded template not found: {key}")]
    #[diagnostic(code(agentkit::resource::not_found))]
    ResourceNotFound { key: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(agentkit::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(agentkit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(agentkit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agentkit::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AgentKitError {
    fn from(err: std::io::Error) -> Self {
        AgentKitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for AgentKitError {
    fn from(err: walkdir::Error) -> Self {
        AgentKitError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgentKitError>;
