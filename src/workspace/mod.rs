//! The `.agent` folder inside a project
//!
//! ## Structure
//!
//! ```text
//! <project>/
//! ├── .agent/
//! │   ├── rules/        # Coding rules
//! │   ├── skills/       # Code-generation prompts
//! │   └── workflows/    # Step-by-step guides
//! └── .agent.backup.20260118093000/   # Created by `update --backup`
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::common::fs::copy_dir_recursive;
use crate::error::{AgentKitError, Result};

pub mod validation;

pub use validation::ValidationReport;

/// Agent folder name
pub const AGENT_DIR: &str = ".agent";

/// Prefix of backup folders, followed by a `yyyyMMddHHmmss` timestamp
pub const BACKUP_PREFIX: &str = ".agent.backup.";

/// Location of a project's `.agent` folder
#[derive(Debug, Clone)]
pub struct AgentDir {
    /// Project directory containing `.agent`
    pub project_root: PathBuf,

    /// Path to the `.agent` folder
    pub path: PathBuf,
}

impl AgentDir {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            path: project_root.join(AGENT_DIR),
        }
    }

    /// Whether anything exists at the `.agent` path
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Backup folder name for a given moment, without collision handling
    pub fn backup_path_at(&self, now: DateTime<Local>) -> PathBuf {
        self.project_root
            .join(format!("{BACKUP_PREFIX}{}", now.format("%Y%m%d%H%M%S")))
    }

    /// Copy `.agent` to a timestamped sibling folder
    ///
    /// Returns the backup path and the number of files copied. Two backups in
    /// the same second get a numeric suffix instead of being merged.
    pub fn backup(&self) -> Result<(PathBuf, usize)> {
        let base = self.backup_path_at(Local::now());
        let mut backup = base.clone();
        let mut n = 1;
        while backup.exists() {
            backup = PathBuf::from(format!("{}-{n}", base.display()));
            n += 1;
        }

        let copied = copy_dir_recursive(&self.path, &backup).map_err(|e| {
            AgentKitError::BackupFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok((backup, copied))
    }
}
