//! Indexed document types.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tree::{Node, TreeOptions};

/// One indexed markdown file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Slug of the path relative to the document root; unique within a load.
    pub doc_id: String,
    /// Path relative to the document root, `/`-separated.
    pub file_path: String,
    /// Frontmatter `title`, else the first H1, else the file stem.
    pub title: String,
    pub description: Option<String>,
    /// Frontmatter tags in source order.
    pub tags: Vec<String>,
    /// Frontmatter `category`.
    pub category: Option<String>,
    /// Frontmatter `type`.
    pub doc_type: Option<String>,
    /// Number of nodes.
    pub heading_count: usize,
    /// Words across all nodes plus the preamble.
    pub word_count: usize,
    /// Text before the first heading (the whole body when there are no headings).
    pub preamble: String,
    /// File modification time, when available.
    pub modified: Option<DateTime<Utc>>,
    /// All frontmatter fields.
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// Sections in document (pre-order) order.
    pub nodes: Vec<Node>,
}

impl Document {
    /// Category for display: `category`, falling back to `type`.
    pub fn kind(&self) -> Option<&str> {
        self.category.as_deref().or(self.doc_type.as_deref())
    }

    /// Case-insensitive exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Inputs for one indexing run.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Directory to index.
    pub root: PathBuf,
    /// Pattern matched against paths relative to `root`.
    pub glob: String,
    /// Deepest heading level kept as-is (1-6).
    pub max_depth: u8,
    /// Maximum number of characters in node summaries.
    pub summary_length: usize,
    /// Folders to skip, relative to `root` (absolute paths are accepted).
    pub excluded_folders: Vec<PathBuf>,
}

impl IndexConfig {
    /// Default settings for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Default::default() }
    }

    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions { max_depth: self.max_depth, summary_length: self.summary_length }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./docs"),
            glob: "**/*.md".to_string(),
            max_depth: 6,
            summary_length: 200,
            excluded_folders: Vec::new(),
        }
    }
}
