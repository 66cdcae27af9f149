//! Index building orchestration.

use std::collections::HashSet;
use std::string::FromUtf8Error;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use thiserror::Error;

use super::extractor::extract_document;
use super::types::{Document, IndexConfig};
use super::walker::{DocumentWalker, WalkedFile, WalkerError};
use crate::ids;
use crate::tree::TreeOptions;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Document walker error: {0}")]
    Walker(#[from] WalkerError),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Statistics from an indexing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of files matching the pattern.
    pub files_found: usize,
    /// Number of documents produced.
    pub documents_indexed: usize,
    /// Number of files or entries skipped because they could not be read.
    pub files_skipped: usize,
    /// Indexing duration in milliseconds.
    pub duration_ms: u64,
}

/// Documents from an indexing run, in path order, with run statistics.
#[derive(Debug, Clone, Default)]
pub struct IndexOutcome {
    pub documents: Vec<Document>,
    pub stats: IndexStats,
}

/// Progress callback for indexing operations.
/// Parameters: (completed, total, current_path)
///
/// Files are parsed in parallel, so calls may arrive from any worker thread
/// and paths are not reported in order.
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str) + Send + Sync>;

/// Walks a document root and builds a [`Document`] per matching file.
pub struct Indexer {
    config: IndexConfig,
    progress: Option<ProgressCallback>,
}

impl Indexer {
    pub fn new(config: IndexConfig) -> Self {
        Self { config, progress: None }
    }

    /// Report per-file progress while indexing.
    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Index every matching file under the root.
    ///
    /// Fails only when the root is unusable or the pattern is invalid.
    /// Unreadable files are logged, counted in `files_skipped`, and left out.
    pub fn run(&self) -> Result<IndexOutcome, IndexerError> {
        let start = std::time::Instant::now();
        let mut stats = IndexStats::default();

        let walker = DocumentWalker::with_exclusions(
            &self.config.root,
            &self.config.glob,
            self.config.excluded_folders.clone(),
        )?;
        let walked = walker.walk();
        stats.files_found = walked.files.len();
        stats.files_skipped = walked.unreadable;

        let options = self.config.tree_options();
        let total = walked.files.len();
        let completed = AtomicUsize::new(0);

        // Parse in parallel; collect keeps path order.
        let results: Vec<(&WalkedFile, Result<Document, IndexerError>)> = walked
            .files
            .par_iter()
            .map(|file| {
                let result = index_file(file, &options);
                if let Some(ref cb) = self.progress {
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    cb(done, total, &file.relative_path.to_string_lossy());
                }
                (file, result)
            })
            .collect();

        let mut taken = HashSet::new();
        let mut documents = Vec::with_capacity(results.len());
        for (file, result) in results {
            match result {
                Ok(mut doc) => {
                    let id = ids::unique_id(&doc.doc_id, &mut taken);
                    if id != doc.doc_id {
                        tracing::debug!(
                            "doc id {} already taken, using {} for {}",
                            doc.doc_id,
                            id,
                            doc.file_path
                        );
                        doc.doc_id = id;
                    }
                    documents.push(doc);
                }
                Err(e) => {
                    // Log error but continue indexing
                    tracing::warn!("Failed to index {}: {}", file.relative_path.display(), e);
                    stats.files_skipped += 1;
                }
            }
        }

        stats.documents_indexed = documents.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            root = %walker.root().display(),
            found = stats.files_found,
            indexed = stats.documents_indexed,
            skipped = stats.files_skipped,
            duration_ms = stats.duration_ms,
            "indexing complete"
        );

        Ok(IndexOutcome { documents, stats })
    }
}

/// Index a document root with the given configuration.
pub fn index_directory(config: &IndexConfig) -> Result<IndexOutcome, IndexerError> {
    Indexer::new(config.clone()).run()
}

/// Read and extract a single file.
fn index_file(file: &WalkedFile, options: &TreeOptions) -> Result<Document, IndexerError> {
    let bytes = std::fs::read(&file.absolute_path).map_err(|e| IndexerError::FileRead {
        path: file.absolute_path.display().to_string(),
        source: e,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| IndexerError::Encoding {
        path: file.absolute_path.display().to_string(),
        source: e,
    })?;

    let mut doc = extract_document(&content, &file.relative_path, options);
    doc.modified = file.modified.map(DateTime::<Utc>::from);
    Ok(doc)
}
