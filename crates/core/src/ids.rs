//! Identifier generation for documents and nodes.
//!
//! Documents are identified by a slug of their path relative to the document
//! root (`guides/auth-middleware`). Nodes get their 1-based pre-order position
//! plus a slug of the heading title (`n3-token-refresh-flow`), which keeps ids
//! readable and unique within the document even when headings repeat.

use std::collections::HashSet;
use std::path::{Component, Path};

/// Reduce text to a lowercase, dash-separated slug.
///
/// Alphanumeric characters are kept (lowercased); every other run of
/// characters becomes a single `-`. Leading and trailing dashes are dropped.
///
/// # Examples
/// ```
/// use doctree_core::ids::slugify;
///
/// assert_eq!(slugify("Token Refresh Flow"), "token-refresh-flow");
/// assert_eq!(slugify("  POST /auth/refresh  "), "post-auth-refresh");
/// assert_eq!(slugify("C++ & Rust!"), "c-rust");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Build a node id from its pre-order position (1-based) and heading title.
///
/// # Examples
/// ```
/// use doctree_core::ids::node_id;
///
/// assert_eq!(node_id(1, "Auth Middleware Guide"), "n1-auth-middleware-guide");
/// assert_eq!(node_id(7, "???"), "n7");
/// ```
pub fn node_id(position: usize, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() { format!("n{position}") } else { format!("n{position}-{slug}") }
}

/// Build a document id from a path relative to the document root.
///
/// The extension is dropped and every path segment is slugified.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use doctree_core::ids::doc_id;
///
/// assert_eq!(doc_id(Path::new("guides/Auth Middleware.md")), "guides/auth-middleware");
/// assert_eq!(doc_id(Path::new("README.md")), "readme");
/// assert_eq!(doc_id(Path::new("notes.v2.md")), "notes-v2");
/// ```
pub fn doc_id(relative_path: &Path) -> String {
    let without_ext = relative_path.with_extension("");
    let segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(slugify(&s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() { "document".to_string() } else { segments.join("/") }
}

/// Return `base`, or `base-2`, `base-3`, ... if already taken, and record it.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use doctree_core::ids::unique_id;
///
/// let mut taken = HashSet::new();
/// assert_eq!(unique_id("guide", &mut taken), "guide");
/// assert_eq!(unique_id("guide", &mut taken), "guide-2");
/// assert_eq!(unique_id("guide", &mut taken), "guide-3");
/// ```
pub fn unique_id(base: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(base.to_string()) {
        return base.to_string();
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{base}-{counter}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}
