//! List command implementation
//!
//! Prints the template catalog grouped by category. Reads only the embedded
//! templates; the project directory is never touched.

use std::fmt::Write;

use console::Style;

use crate::catalog::{Catalog, CatalogEntry};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::resource::{Category, EmbeddedStore};

/// Run list command
pub fn run(args: &ListArgs) -> Result<()> {
    let catalog = Catalog::from_store(&EmbeddedStore::new());
    print!("{}", format_catalog(&catalog, &selected_categories(args)));
    Ok(())
}

/// Categories requested by the flags; none means all
pub fn selected_categories(args: &ListArgs) -> Vec<Category> {
    let selected: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|category| match category {
            Category::Rules => args.rules,
            Category::Skills => args.skills,
            Category::Workflows => args.workflows,
        })
        .collect();

    if selected.is_empty() {
        Category::ALL.to_vec()
    } else {
        selected
    }
}

/// Render the selected catalog groups
pub fn format_catalog(catalog: &Catalog, categories: &[Category]) -> String {
    let mut out = String::new();

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let entries = catalog.entries(*category);
        let _ = writeln!(
            out,
            "{} ({})",
            Style::new().bold().green().apply_to(category.label()),
            entries.len()
        );
        format_entries(&mut out, entries);
    }

    out
}

fn format_entries(out: &mut String, entries: &[CatalogEntry]) {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        if entry.description.is_empty() {
            let _ = writeln!(out, "  {}", Style::new().yellow().apply_to(&entry.name));
        } else {
            let padding = " ".repeat(width - entry.name.len());
            let _ = writeln!(
                out,
                "  {}{padding}  {}",
                Style::new().yellow().apply_to(&entry.name),
                entry.description
            );
        }
    }
}
