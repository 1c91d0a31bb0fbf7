//! Node and feed data shared between the host and the wiring hooks.
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A unit of source content tracked by the host data graph.
///
/// Nodes are created by the host's source-loading phase and annotated exactly
/// once by [`fields::on_create_node`](crate::fields::on_create_node).
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    pub id: String,
    pub parent: Option<String>,
    pub kind: NodeKind,
    pub source_path: PathBuf,
    pub frontmatter: FrontMatter,
    pub fields: DerivedFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A raw file picked up by the host's source loader.
    File,
    /// A markdown document parsed out of a file node.
    Markdown,
}

/// Fields derived from a node's location and front-matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedFields {
    pub slug: Option<String>,
    pub tag_slugs: Vec<String>,
    pub category_slug: Option<String>,
}

/// Front-matter of a markdown document.
///
/// Every field is optional: absence means the feature does not apply to the
/// node, never a fault.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub layout: Option<Layout>,
    pub path: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub draft: bool,
}

/// The `layout` front-matter value, deciding which template a node gets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Layout {
    Page,
    Post,
    /// Any other value. The planner emits no page for it.
    Other(String),
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        match value.as_str() {
            "page" => Layout::Page,
            "post" => Layout::Post,
            _ => Layout::Other(value),
        }
    }
}

/// Extract and deserialize the YAML front-matter block of a markdown
/// document.
///
/// Documents without a leading `---` fence get the default (all-absent)
/// front-matter.
pub fn parse_front_matter(raw: &str) -> Result<FrontMatter, serde_yaml::Error> {
    match front_matter_block(raw) {
        Some(block) => serde_yaml::from_str(block),
        None => Ok(FrontMatter::default()),
    }
}

fn front_matter_block(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

/// One podcast episode sourced from the feed. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: String,
    pub guid: String,
    pub title: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_deserializes_every_field() {
        let doc = "---\nlayout: post\npath: /custom/\ntags:\n  - Rust\n  - Tooling\ncategory: Engineering\ndraft: true\n---\nBody text.\n";
        let fm = parse_front_matter(doc).unwrap();

        assert_eq!(fm.layout, Some(Layout::Post));
        assert_eq!(fm.path.as_deref(), Some("/custom/"));
        assert_eq!(
            fm.tags,
            Some(vec!["Rust".to_string(), "Tooling".to_string()])
        );
        assert_eq!(fm.category.as_deref(), Some("Engineering"));
        assert!(fm.draft);
    }

    #[test]
    fn missing_fence_means_empty_front_matter() {
        let fm = parse_front_matter("Just a paragraph.").unwrap();

        assert_eq!(fm, FrontMatter::default());
        assert!(!fm.draft);
    }

    #[test]
    fn unknown_layouts_map_to_other() {
        let fm = parse_front_matter("---\nlayout: gallery\n---\n").unwrap();

        assert_eq!(fm.layout, Some(Layout::Other("gallery".to_string())));
    }
}
