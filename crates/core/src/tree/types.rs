use serde::{Deserialize, Serialize};

/// One markdown heading and the text directly under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within the document, stable for one load.
    pub node_id: String,
    /// Heading depth after clamping to the configured maximum.
    pub level: u8,
    /// Number of `#` in the source heading.
    pub source_level: u8,
    /// Heading text without markup.
    pub title: String,
    /// Text between this heading and the next heading of any level.
    pub content: String,
    /// Words in `content` only.
    pub word_count: usize,
    /// Whitespace-collapsed, truncated preview of `content`.
    pub summary: String,
}
