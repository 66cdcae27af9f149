//! Document discovery and indexing.
//!
//! This module walks a document root, matches files against a glob pattern,
//! and turns each file into a [`Document`] with its section tree. Files that
//! cannot be read are skipped and counted; only a missing root or an invalid
//! pattern stops a run.

pub mod builder;
pub mod extractor;
pub mod types;
pub mod walker;

pub use builder::{IndexOutcome, IndexStats, Indexer, IndexerError, ProgressCallback, index_directory};
pub use extractor::extract_document;
pub use types::{Document, IndexConfig};
pub use walker::{DocumentWalker, WalkOutcome, WalkedFile, WalkerError};
