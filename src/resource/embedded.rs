//! Templates compiled into the binary

use std::collections::BTreeMap;
use std::path::Path;

use include_dir::{Dir, include_dir};

use super::ResourceStore;
use super::key::RESOURCE_PREFIX;
use crate::error::{Result, resource_not_found};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The template set shipped with this build
#[derive(Debug)]
pub struct EmbeddedStore {
    files: BTreeMap<String, &'static [u8]>,
}

impl EmbeddedStore {
    pub fn new() -> Self {
        let mut files = BTreeMap::new();
        collect(&TEMPLATES, &mut files);
        Self { files }
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceStore for EmbeddedStore {
    fn keys(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    fn read(&self, key: &str) -> Result<&[u8]> {
        self.files
            .get(key)
            .copied()
            .ok_or_else(|| resource_not_found(key))
    }
}

fn collect(dir: &'static Dir<'static>, files: &mut BTreeMap<String, &'static [u8]>) {
    for file in dir.files() {
        files.insert(resource_key(file.path()), file.contents());
    }
    for sub in dir.dirs() {
        collect(sub, files);
    }
}

/// Mangle a path relative to `templates/` into a resource key
pub fn resource_key(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    format!("{RESOURCE_PREFIX}{}", parts.join("."))
}
