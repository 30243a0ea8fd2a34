//! `.agent` folder errors

use super::AgentKitError;

/// Creates an "already exists" error for `init` without `--force`
pub fn already_exists(path: impl Into<String>) -> AgentKitError {
    AgentKitError::AgentDirExists { path: path.into() }
}

/// Creates a "missing" error for `update` on a project without `.agent`
pub fn missing(path: impl Into<String>) -> AgentKitError {
    AgentKitError::AgentDirMissing { path: path.into() }
}
