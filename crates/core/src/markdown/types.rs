use crate::frontmatter::Frontmatter;

/// A heading line and the text directly under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSpan {
    /// Number of `#` characters in the heading line (1-6).
    pub level: u8,
    /// Heading text with inline markup removed.
    pub title: String,
    /// Lines after the heading up to the next heading of any level,
    /// with leading blank lines and trailing whitespace removed.
    pub content: String,
}

/// Structural view of one markdown file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMarkdown {
    /// Frontmatter fields; empty when absent or malformed.
    pub frontmatter: Frontmatter,
    /// Text between the frontmatter and the first heading.
    pub preamble: String,
    /// Headings in document order.
    pub headings: Vec<HeadingSpan>,
}
