//! Document extraction: frontmatter fields, title, section tree.

use std::path::{Component, Path};

use super::types::Document;
use crate::frontmatter::Frontmatter;
use crate::ids;
use crate::markdown;
use crate::tree::{self, TreeOptions};

/// Build a [`Document`] from file content.
///
/// Pure and infallible: data-quality problems such as missing frontmatter,
/// empty sections or zero headings produce a sparse but valid document.
/// `modified` is left unset; the caller knows the file metadata.
pub fn extract_document(content: &str, relative_path: &Path, options: &TreeOptions) -> Document {
    let parsed = markdown::parse(content);
    let fm = &parsed.frontmatter;

    let title = extract_title(fm, &parsed.headings, relative_path);
    let nodes = tree::build_nodes(parsed.headings, options);

    let word_count =
        tree::word_count(&parsed.preamble) + nodes.iter().map(|n| n.word_count).sum::<usize>();

    Document {
        doc_id: ids::doc_id(relative_path),
        file_path: display_path(relative_path),
        title,
        description: fm.get_string("description"),
        tags: fm.get_list("tags"),
        category: fm.get_string("category"),
        doc_type: fm.get_string("type"),
        heading_count: nodes.len(),
        word_count,
        preamble: parsed.preamble,
        modified: None,
        metadata: fm.to_json(),
        nodes,
    }
}

fn extract_title(
    fm: &Frontmatter,
    headings: &[markdown::HeadingSpan],
    relative_path: &Path,
) -> String {
    // Try frontmatter title
    if let Some(title) = fm.get_string("title") {
        return title;
    }

    // Try first H1
    if let Some(heading) = headings.iter().find(|h| h.level == 1 && !h.title.is_empty()) {
        return heading.title.clone();
    }

    // Fall back to filename without extension
    relative_path.file_stem().and_then(|s| s.to_str()).unwrap_or("Untitled").to_string()
}

/// Relative path with `/` separators regardless of platform.
fn display_path(relative_path: &Path) -> String {
    relative_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
