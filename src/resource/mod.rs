//! Embedded template resources
//!
//! A **template** is one markdown document shipped inside the binary. Templates are
//! addressed by a flat **resource key** produced at build time from their path under
//! `templates/` (see [`key`] for the format and the decoder that reverses it).
//!
//! ```text
//! templates/.agent/skills/generate_entity.md
//!   -> agentkit.templates..agent.skills.generate_entity.md
//!   -> .agent/skills/generate_entity.md
//! ```

use std::fmt;

use crate::error::Result;

pub mod embedded;
pub mod key;

pub use embedded::EmbeddedStore;
pub use key::{DecodedPath, KeyError, decode_key};

/// Top-level subfolder of `.agent` a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Coding rules (rules/*.md)
    Rules,
    /// Code-generation prompts (skills/*.md)
    Skills,
    /// Step-by-step guides (workflows/*.md)
    Workflows,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 3] = [Category::Rules, Category::Skills, Category::Workflows];

    /// Directory name under `.agent`
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Rules => "rules",
            Category::Skills => "skills",
            Category::Workflows => "workflows",
        }
    }

    /// Parse a directory name. Matching is exact and case-sensitive.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dir_name() == name)
    }

    /// Capitalized label for console headers
    pub fn label(self) -> &'static str {
        match self {
            Category::Rules => "Rules",
            Category::Skills => "Skills",
            Category::Workflows => "Workflows",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// File counts per category. All three categories are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    rules: usize,
    skills: usize,
    workflows: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Rules => self.rules,
            Category::Skills => self.skills,
            Category::Workflows => self.workflows,
        }
    }

    pub fn set(&mut self, category: Category, count: usize) {
        match category {
            Category::Rules => self.rules = count,
            Category::Skills => self.skills = count,
            Category::Workflows => self.workflows = count,
        }
    }

    pub fn increment(&mut self, category: Category) {
        self.set(category, self.get(category) + 1);
    }

    pub fn total(&self) -> usize {
        self.rules + self.skills + self.workflows
    }

    /// Counts of keys in `store` that decode to each category
    ///
    /// Used as the expected minimum for `validate` and the summary for `version`.
    pub fn from_store(store: &dyn ResourceStore) -> Self {
        let mut counts = Self::default();
        for key in store.keys() {
            if let Ok(decoded) = decode_key(key) {
                counts.increment(decoded.category);
            }
        }
        counts
    }
}

/// A read-only, fully enumerable collection of templates addressed by key
pub trait ResourceStore {
    /// All resource keys, in a stable order
    fn keys(&self) -> Vec<&str>;

    /// Full content of the resource stored under `key`
    fn read(&self, key: &str) -> Result<&[u8]>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::MemoryStore;

    #[test]
    fn test_category_dir_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_dir_name(category.dir_name()), Some(category));
        }
    }

    #[test]
    fn test_category_from_dir_name_is_case_sensitive() {
        assert_eq!(Category::from_dir_name("Rules"), None);
        assert_eq!(Category::from_dir_name("commands"), None);
    }

    #[test]
    fn test_category_counts_increment_and_total() {
        let mut counts = CategoryCounts::default();
        counts.increment(Category::Skills);
        counts.increment(Category::Skills);
        counts.increment(Category::Workflows);

        assert_eq!(counts.get(Category::Rules), 0);
        assert_eq!(counts.get(Category::Skills), 2);
        assert_eq!(counts.get(Category::Workflows), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_category_counts_from_store_ignores_undecodable_keys() {
        let store = MemoryStore::new()
            .with_template(Category::Rules, "testing.md", "# Testing\n")
            .with_template(Category::Skills, "generate_entity.md", "# Skill\n")
            .with_key("agentkit.templates..agent.commands.debug.md", "# Debug\n")
            .with_key("other.assembly.resource.txt", "noise");

        let counts = CategoryCounts::from_store(&store);
        assert_eq!(counts.get(Category::Rules), 1);
        assert_eq!(counts.get(Category::Skills), 1);
        assert_eq!(counts.get(Category::Workflows), 0);
    }
}
