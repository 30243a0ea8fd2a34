//! Transaction support for replacing the `.agent` folder
//!
//! New content is extracted into a staging directory next to the target and
//! only swapped into place on [`Transaction::commit`]. A transaction that is
//! dropped without committing removes its staging directory and leaves the
//! existing folder untouched.
//!
//! ## Usage
//!
//! ```ignore
//! let transaction = Transaction::begin(&agent_dir.path)?;
//! let result = extractor.extract(transaction.staging_path(), reporter);
//! if result.success() {
//!     transaction.commit()?;
//! }
//! // On early return: staging directory is removed on drop
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use console::Style;
use tempfile::TempDir;

use crate::error::{AgentKitError, Result};

/// A pending replacement of a directory
#[derive(Debug)]
pub struct Transaction {
    /// Directory being replaced
    target: PathBuf,

    /// Fresh content, removed on drop unless committed
    staging: TempDir,
}

impl Transaction {
    /// Create the staging directory next to `target`
    pub fn begin(target: &Path) -> Result<Self> {
        let parent = parent_dir(target);
        fs::create_dir_all(&parent)?;

        let staging = tempfile::Builder::new()
            .prefix(&format!("{}.staging-", dir_name(target)))
            .tempdir_in(&parent)
            .map_err(|e| AgentKitError::SwapFailed {
                path: target.display().to_string(),
                reason: format!("cannot create staging directory: {e}"),
            })?;

        Ok(Self {
            target: target.to_path_buf(),
            staging,
        })
    }

    /// Where new content should be written
    pub fn staging_path(&self) -> &Path {
        self.staging.path()
    }

    /// Swap the staging directory into place
    ///
    /// The previous target is renamed aside first and only deleted once the
    /// new content is in place. If the swap fails it is renamed back.
    pub fn commit(self) -> Result<()> {
        let swap_failed = |reason: String| AgentKitError::SwapFailed {
            path: self.target.display().to_string(),
            reason,
        };

        let retired = if self.target.exists() {
            let retired = retired_path(&self.target);
            fs::rename(&self.target, &retired)
                .map_err(|e| swap_failed(format!("cannot move old folder aside: {e}")))?;
            Some(retired)
        } else {
            None
        };

        let staging = self.staging.keep();
        if let Err(e) = fs::rename(&staging, &self.target) {
            if let Some(ref retired) = retired {
                let _ = fs::rename(retired, &self.target);
            }
            let _ = fs::remove_dir_all(&staging);
            return Err(swap_failed(format!("cannot move new folder into place: {e}")));
        }

        if let Some(retired) = retired {
            if let Err(e) = remove_entry(&retired) {
                eprintln!(
                    "{} Failed to remove {}: {}",
                    Style::new().yellow().apply_to("Warning:"),
                    retired.display(),
                    e
                );
            }
        }

        Ok(())
    }
}

/// Remove a directory tree, or a single file or symlink
fn remove_entry(path: &Path) -> std::io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

fn parent_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn dir_name(target: &Path) -> String {
    target
        .file_name()
        .map_or_else(|| "dir".to_string(), |n| n.to_string_lossy().into_owned())
}

/// Unused sibling name for the folder being replaced
fn retired_path(target: &Path) -> PathBuf {
    let parent = parent_dir(target);
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S%f");
    let base = format!("{}.retired-{}-{stamp}", dir_name(target), std::process::id());

    let mut candidate = parent.join(&base);
    let mut n = 1;
    while candidate.exists() {
        candidate = parent.join(format!("{base}-{n}"));
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_staging_is_sibling_of_target() {
        let temp = create_temp_dir();
        let target = temp.path().join(".agent");

        let transaction = Transaction::begin(&target).unwrap();

        assert_eq!(transaction.staging_path().parent(), Some(temp.path()));
        assert!(transaction.staging_path().is_dir());
        assert!(
            transaction
                .staging_path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(".agent.staging-")
        );
        assert!(!target.exists());
    }

    #[test]
    fn test_commit_creates_missing_target() {
        let temp = create_temp_dir();
        let target = temp.path().join(".agent");

        let transaction = Transaction::begin(&target).unwrap();
        fs::create_dir_all(transaction.staging_path().join("rules")).unwrap();
        fs::write(transaction.staging_path().join("rules/testing.md"), "new").unwrap();
        transaction.commit().unwrap();

        assert_eq!(
            fs::read_to_string(target.join("rules/testing.md")).unwrap(),
            "new"
        );
        assert_eq!(entries(temp.path()), vec![".agent"]);
    }

    #[test]
    fn test_commit_replaces_existing_target_completely() {
        let temp = create_temp_dir();
        let target = temp.path().join(".agent");
        fs::create_dir_all(target.join("rules")).unwrap();
        fs::write(target.join("rules/obsolete.md"), "old").unwrap();
        fs::write(target.join("notes.txt"), "user file").unwrap();

        let transaction = Transaction::begin(&target).unwrap();
        fs::create_dir_all(transaction.staging_path().join("rules")).unwrap();
        fs::write(transaction.staging_path().join("rules/testing.md"), "new").unwrap();
        transaction.commit().unwrap();

        assert_eq!(entries(&target), vec!["rules"]);
        assert_eq!(entries(&target.join("rules")), vec!["testing.md"]);
        // No staging or retired folders left behind
        assert_eq!(entries(temp.path()), vec![".agent"]);
    }

    #[test]
    fn test_commit_replaces_file_at_target() {
        let temp = create_temp_dir();
        let target = temp.path().join(".agent");
        fs::write(&target, "not a folder").unwrap();

        let transaction = Transaction::begin(&target).unwrap();
        fs::write(transaction.staging_path().join("x.md"), "new").unwrap();
        transaction.commit().unwrap();

        assert!(target.is_dir());
        assert_eq!(entries(&target), vec!["x.md"]);
        assert_eq!(entries(temp.path()), vec![".agent"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_commit_replaces_symlink_without_touching_its_target() {
        let temp = create_temp_dir();
        let shared = temp.path().join("shared");
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("team.md"), "team").unwrap();
        let target = temp.path().join(".agent");
        std::os::unix::fs::symlink(&shared, &target).unwrap();

        let transaction = Transaction::begin(&target).unwrap();
        fs::write(transaction.staging_path().join("x.md"), "new").unwrap();
        transaction.commit().unwrap();

        assert!(
            !fs::symlink_metadata(&target)
                .unwrap()
                .file_type()
                .is_symlink()
        );
        assert_eq!(entries(&target), vec!["x.md"]);
        assert_eq!(entries(&shared), vec!["team.md"]);
        assert_eq!(entries(temp.path()), vec![".agent", "shared"]);
    }

    #[test]
    fn test_drop_without_commit_keeps_existing_target() {
        let temp = create_temp_dir();
        let target = temp.path().join(".agent");
        fs::create_dir_all(target.join("rules")).unwrap();
        fs::write(target.join("rules/testing.md"), "old").unwrap();

        {
            let transaction = Transaction::begin(&target).unwrap();
            fs::write(transaction.staging_path().join("partial.md"), "half").unwrap();
            // Don't commit - staging is removed on drop
        }

        assert_eq!(
            fs::read_to_string(target.join("rules/testing.md")).unwrap(),
            "old"
        );
        assert_eq!(entries(temp.path()), vec![".agent"]);
    }

    #[test]
    fn test_begin_creates_missing_parent() {
        let temp = create_temp_dir();
        let target = temp.path().join("nested/project/.agent");

        let transaction = Transaction::begin(&target).unwrap();
        transaction.commit().unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn test_retired_path_is_unique() {
        let temp = create_temp_dir();
        let target = temp.path().join(".agent");

        let first = retired_path(&target);
        fs::create_dir_all(&first).unwrap();
        let second = retired_path(&target);

        assert_ne!(first, second);
        assert!(!second.exists());
    }
}
