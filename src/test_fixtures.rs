//! Test fixtures shared by unit tests.
//!
//! [`MemoryStore`] stands in for the embedded templates so extraction, catalog and
//! validation can be exercised against small, hand-picked template sets.
//!
//! ```ignore
//! let store = MemoryStore::new()
//!     .with_template(Category::Skills, "generate_entity.md", "# Skill\n");
//! let temp = create_temp_dir();
//! ```

use std::collections::{BTreeMap, BTreeSet};

use tempfile::TempDir;

use crate::error::{Result, io_error, resource_not_found};
use crate::resource::key::RESOURCE_PREFIX;
use crate::resource::{Category, ResourceStore};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Key the embedded store would produce for `.agent/<category>/<file_name>`
pub fn template_key(category: Category, file_name: &str) -> String {
    format!("{RESOURCE_PREFIX}.agent.{}.{file_name}", category.dir_name())
}

/// In-memory [`ResourceStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, Vec<u8>>,
    unreadable: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template under the key for `.agent/<category>/<file_name>`
    #[must_use]
    pub fn with_template(self, category: Category, file_name: &str, content: &str) -> Self {
        self.with_key(&template_key(category, file_name), content)
    }

    /// Add a resource under an arbitrary key
    #[must_use]
    pub fn with_key(mut self, key: &str, content: &str) -> Self {
        self.files
            .insert(key.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Add a key that is listed but fails to read
    #[must_use]
    pub fn with_unreadable(mut self, key: &str) -> Self {
        self.files.insert(key.to_string(), Vec::new());
        self.unreadable.insert(key.to_string());
        self
    }
}

impl ResourceStore for MemoryStore {
    fn keys(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    fn read(&self, key: &str) -> Result<&[u8]> {
        if self.unreadable.contains(key) {
            return Err(io_error(format!("resource stream unavailable: {key}")));
        }
        self.files
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| resource_not_found(key))
    }
}
