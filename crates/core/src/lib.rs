//! Core library for doctree.
//!
//! Indexes a directory of markdown documents into per-document section trees
//! and a cross-document keyword index, then answers read-only navigation
//! queries against it:
//!
//! - [`indexer`] walks the document root and builds [`Document`] records.
//! - [`markdown`] and [`tree`] turn one file into an ordered node sequence.
//! - [`store`] holds the catalog and serves list, search, tree and subtree
//!   lookups.
//!
//! # Example
//!
//! ```no_run
//! use doctree_core::indexer::{IndexConfig, index_directory};
//! use doctree_core::store::{DocumentStore, SearchOptions};
//!
//! let outcome = index_directory(&IndexConfig::new("./docs")).unwrap();
//! let mut store = DocumentStore::new();
//! store.load(outcome.documents);
//!
//! for hit in store.search_documents("token refresh", &SearchOptions::default()).unwrap() {
//!     println!("{} {} {:.1}", hit.doc_id, hit.node_id, hit.score);
//! }
//! ```

pub mod config;
pub mod frontmatter;
pub mod ids;
pub mod indexer;
pub mod markdown;
pub mod store;
pub mod tree;

pub use indexer::{Document, IndexConfig, IndexOutcome, IndexStats, index_directory};
pub use store::{DocumentStore, LookupError};
pub use tree::Node;
