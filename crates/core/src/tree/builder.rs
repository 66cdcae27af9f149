//! Heading spans to nodes.

use super::types::Node;
use crate::ids;
use crate::markdown::HeadingSpan;

/// Settings applied while building a document's node sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Deepest heading level kept as-is (1-6). Deeper headings are clamped.
    pub max_depth: u8,
    /// Maximum number of characters in a node summary.
    pub summary_length: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self { max_depth: 6, summary_length: 200 }
    }
}

/// Build the ordered node sequence for one document.
///
/// Headings deeper than `max_depth` are not discarded: they are recorded at
/// `max_depth`, which makes them leaves under the nearest shallower heading.
/// Node ids combine the 1-based position with a title slug, so the same
/// content always yields the same ids.
pub fn build_nodes(headings: Vec<HeadingSpan>, options: &TreeOptions) -> Vec<Node> {
    let max_depth = options.max_depth.clamp(1, 6);

    headings
        .into_iter()
        .enumerate()
        .map(|(i, heading)| Node {
            node_id: ids::node_id(i + 1, &heading.title),
            level: heading.level.min(max_depth),
            source_level: heading.level,
            word_count: word_count(&heading.content),
            summary: summarize(&heading.content, options.summary_length),
            title: heading.title,
            content: heading.content,
        })
        .collect()
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collapse whitespace and cut to at most `max_chars` characters.
///
/// A truncated summary ends at a word boundary where one is available and
/// carries a trailing `…`, which counts towards `max_chars`.
pub fn summarize(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = collapsed.chars().take(max_chars - 1).collect();
    if let Some(space) = cut.rfind(' ')
        && space > 0
    {
        cut.truncate(space);
    }
    let mut summary = cut.trim_end().to_string();
    summary.push('…');
    summary
}
