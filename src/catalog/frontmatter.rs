//! YAML frontmatter of template files

use serde::Deserialize;

/// Fields read from a template's frontmatter. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateFrontmatter {
    #[serde(default)]
    pub description: Option<String>,
}

/// Split content into YAML frontmatter (between the first `---` and the
/// second `---`) and body. Returns `None` if the delimiters are missing.
pub fn split_frontmatter(content: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let frontmatter = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    Some((frontmatter, body))
}

/// Parse frontmatter and body. Invalid YAML yields `None`.
pub fn parse_frontmatter(content: &str) -> Option<(TemplateFrontmatter, String)> {
    let (yaml, body) = split_frontmatter(content)?;
    if yaml.trim().is_empty() {
        return Some((TemplateFrontmatter::default(), body));
    }
    let frontmatter = serde_yaml::from_str(&yaml).ok()?;
    Some((frontmatter, body))
}

/// Text of the first level-one heading
pub fn first_heading(body: &str) -> Option<&str> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|heading| !heading.is_empty())
}
