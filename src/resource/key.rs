//! Resource key decoding
//!
//! Keys are built by appending a template's path under `templates/` to
//! [`RESOURCE_PREFIX`], with every path separator replaced by `.`:
//!
//! ```text
//! agentkit.templates..agent.rules.naming_conventions.md
//! \_________________/|\___/\____/\____________________/
//!        prefix      |  root category      file name
//!            empty token (leading dot of `.agent`)
//! ```
//!
//! Dots are both separators and literal characters (the extension, versioned
//! names like `v1.2_entity.md`), so only the first three tokens are structural.
//! Everything after the category is rejoined with `.` to rebuild the file name.

use std::path::PathBuf;

use thiserror::Error;

use super::Category;

/// Prefix every template key starts with
pub const RESOURCE_PREFIX: &str = "agentkit.templates.";

/// Empty token, root folder, category and at least one file name fragment
const MIN_TOKENS: usize = 4;

/// Where a template lands under `.agent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPath {
    pub category: Category,
    pub file_name: String,
}

impl DecodedPath {
    /// `<category>/<file_name>`, relative to the `.agent` folder
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.category.dir_name()).join(&self.file_name)
    }

    /// File name without its `.md` extension
    pub fn stem(&self) -> &str {
        self.file_name.strip_suffix(".md").unwrap_or(&self.file_name)
    }
}

/// Why a key could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("not a template resource")]
    NotTemplate,

    #[error(
        "expected at least {min} dot-separated segments after the prefix, found {found}",
        min = MIN_TOKENS
    )]
    Malformed { found: usize },

    #[error("unknown category '{category}'")]
    UnknownCategory { category: String },

    #[error("invalid file name '{file_name}'")]
    InvalidFileName { file_name: String },
}

/// Decode a resource key into its category and file name
///
/// The root folder token is not checked, but the category token must name one
/// of [`Category::ALL`]. An unrecognized category is rejected with
/// [`KeyError::UnknownCategory`] rather than passed through as a folder name,
/// and so is a file name that would leave its category folder.
pub fn decode_key(key: &str) -> Result<DecodedPath, KeyError> {
    let remainder = key
        .strip_prefix(RESOURCE_PREFIX)
        .ok_or(KeyError::NotTemplate)?;

    let tokens: Vec<&str> = remainder.split('.').collect();
    if tokens.len() < MIN_TOKENS {
        return Err(KeyError::Malformed {
            found: tokens.len(),
        });
    }

    // tokens[0] is the empty artifact of the leading dot, tokens[1] the root folder
    let category =
        Category::from_dir_name(tokens[2]).ok_or_else(|| KeyError::UnknownCategory {
            category: tokens[2].to_string(),
        })?;

    let file_name = tokens[3..].join(".");
    if !is_plain_file_name(&file_name) {
        return Err(KeyError::InvalidFileName { file_name });
    }

    Ok(DecodedPath {
        category,
        file_name,
    })
}

/// A single path component that stays inside its category folder
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
