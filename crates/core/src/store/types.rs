//! Query and result types for the document store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indexer::Document;
use crate::tree::Node;

/// Default and maximum page size for [`ListQuery`].
pub const DEFAULT_LIST_LIMIT: usize = 30;
pub const MAX_LIST_LIMIT: usize = 100;

/// Default and maximum number of hits for [`SearchOptions`].
pub const DEFAULT_SEARCH_LIMIT: usize = 15;
pub const MAX_SEARCH_LIMIT: usize = 50;

/// A lookup named something the store does not hold.
///
/// Distinct from an empty result: a query that runs and matches nothing
/// returns `Ok` with an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("node '{node_id}' not found in document '{doc_id}'")]
    NodeNotFound { doc_id: String, node_id: String },
}

/// Catalog listing filters and pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring of title, description or path.
    pub query: Option<String>,
    /// Case-insensitive exact tag.
    pub tag: Option<String>,
    /// Page size, clamped to `1..=100`.
    pub limit: usize,
    pub offset: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { query: None, tag: None, limit: DEFAULT_LIST_LIMIT, offset: 0 }
    }
}

/// One page of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPage<'a> {
    pub documents: Vec<&'a Document>,
    /// Number of documents matching the filters, before pagination.
    pub total: usize,
}

/// Search restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only search this document.
    pub doc_id: Option<String>,
    /// Maximum hits, clamped to `1..=50`.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { doc_id: None, limit: DEFAULT_SEARCH_LIMIT }
    }
}

/// A matching node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub doc_title: String,
    pub node_id: String,
    pub node_title: String,
    pub score: f64,
    /// Excerpt of the node content around the first match.
    pub snippet: String,
}

/// Nodes returned by a content lookup, in request order.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSelection<'a> {
    pub nodes: Vec<&'a Node>,
}

/// A node followed by its descendants, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct Subtree<'a> {
    pub nodes: &'a [Node],
}

impl<'a> Subtree<'a> {
    /// The node the subtree was requested for.
    pub fn root(&self) -> &'a Node {
        &self.nodes[0]
    }

    pub fn word_count(&self) -> usize {
        self.nodes.iter().map(|n| n.word_count).sum()
    }
}

/// Aggregate counts over the loaded catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub document_count: usize,
    pub total_nodes: usize,
    pub indexed_terms: usize,
}

/// Search tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Multiplier for matches in a node title.
    pub title_boost: f64,
    /// Maximum characters of node content in a snippet, markers excluded.
    pub snippet_length: usize,
    /// Abbreviation to expansions, e.g. `SSE` to `server-sent events`.
    pub glossary: BTreeMap<String, Vec<String>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { title_boost: 3.0, snippet_length: 200, glossary: BTreeMap::new() }
    }
}
