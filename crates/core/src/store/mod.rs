//! In-memory document catalog and keyword search.
//!
//! A [`DocumentStore`] is built once from indexed documents and then only
//! read. It answers:
//! - catalog listing with tag and keyword filters and pagination
//! - ranked keyword search over node titles and content
//! - outline, node content and subtree lookups by id
//!
//! # Example
//!
//! ```
//! use doctree_core::indexer::extract_document;
//! use doctree_core::store::{DocumentStore, SearchOptions};
//! use doctree_core::tree::TreeOptions;
//! use std::path::Path;
//!
//! let doc = extract_document(
//!     "# A\n\nfoo\n\n## B\n\nbar\n\n## C\n\nbaz",
//!     Path::new("abc.md"),
//!     &TreeOptions::default(),
//! );
//! let mut store = DocumentStore::new();
//! store.load(vec![doc]);
//!
//! let hits = store.search_documents("bar", &SearchOptions::default()).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].node_title, "B");
//! ```

pub mod catalog;
pub mod search;
pub mod terms;
pub mod types;

pub use catalog::DocumentStore;
pub use search::{QueryTerm, expand_query, snippet};
pub use terms::{Posting, TermIndex, token_spans, tokenize};
pub use types::{
    DocumentPage, ListQuery, LookupError, NodeSelection, SearchConfig, SearchHit, SearchOptions,
    StoreStats, Subtree,
};
