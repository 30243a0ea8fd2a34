//! Embedded template errors

use super::AgentKitError;

/// Creates a resource not found error
pub fn not_found(key: impl Into<String>) -> AgentKitError {
    AgentKitError::ResourceNotFound { key: key.into() }
}
