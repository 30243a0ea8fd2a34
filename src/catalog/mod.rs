//! Template catalog for `agentkit list`
//!
//! The catalog is built from the resource store itself, so every listed entry
//! corresponds to a file that extraction writes, and vice versa.

use crate::resource::{Category, ResourceStore, decode_key};

pub mod frontmatter;

use frontmatter::{first_heading, parse_frontmatter};

/// One listed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// File name without `.md`
    pub name: String,
    /// One-line description
    pub description: String,
}

/// Entries grouped by category, each group sorted by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub rules: Vec<CatalogEntry>,
    pub skills: Vec<CatalogEntry>,
    pub workflows: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the catalog from every decodable template in `store`
    ///
    /// Templates that cannot be read are listed without a description.
    pub fn from_store(store: &dyn ResourceStore) -> Self {
        let mut catalog = Self::default();

        for key in store.keys() {
            let Ok(decoded) = decode_key(key) else {
                continue;
            };
            let description = store
                .read(key)
                .map(|bytes| describe(&String::from_utf8_lossy(bytes)))
                .unwrap_or_default();

            catalog.entries_mut(decoded.category).push(CatalogEntry {
                name: decoded.stem().to_string(),
                description,
            });
        }

        for category in Category::ALL {
            catalog
                .entries_mut(category)
                .sort_by(|a, b| a.name.cmp(&b.name));
        }
        catalog
    }

    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        match category {
            Category::Rules => &self.rules,
            Category::Skills => &self.skills,
            Category::Workflows => &self.workflows,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<CatalogEntry> {
        match category {
            Category::Rules => &mut self.rules,
            Category::Skills => &mut self.skills,
            Category::Workflows => &mut self.workflows,
        }
    }
}

/// Frontmatter description, else the first heading, else nothing
fn describe(content: &str) -> String {
    let description = match parse_frontmatter(content) {
        Some((frontmatter, body)) => frontmatter
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .or_else(|| first_heading(&body).map(str::to_string)),
        None => first_heading(content).map(str::to_string),
    };
    description.unwrap_or_default()
}
