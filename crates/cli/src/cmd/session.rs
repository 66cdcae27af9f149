//! Config loading and index building shared by the query commands.

use doctree_core::config::{ConfigLoader, ResolvedConfig};
use doctree_core::indexer::{IndexStats, Indexer, ProgressCallback};
use doctree_core::store::DocumentStore;

use super::GlobalOpts;
use crate::logging;

/// A freshly indexed catalog.
pub struct Session {
    pub config: ResolvedConfig,
    pub store: DocumentStore,
    pub stats: IndexStats,
}

/// Load configuration, apply `--root`, and start logging.
///
/// Exits with status 1 when the configuration cannot be loaded.
pub fn load_config(global: &GlobalOpts) -> ResolvedConfig {
    let mut rc = match ConfigLoader::load(global.config, global.profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            logging::exit(1);
        }
    };

    if let Some(root) = global.root {
        rc.docs_root = root.to_path_buf();
    }

    logging::init(&rc);
    rc
}

/// Load configuration and index the document root.
pub fn open(global: &GlobalOpts) -> Session {
    open_with_progress(global, None)
}

pub fn open_with_progress(global: &GlobalOpts, progress: Option<ProgressCallback>) -> Session {
    let config = load_config(global);

    let mut indexer = Indexer::new(config.index_config());
    if let Some(progress) = progress {
        indexer = indexer.with_progress(progress);
    }

    let outcome = match indexer.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error indexing documents: {}", e);
            logging::exit(1);
        }
    };

    let mut store = DocumentStore::with_config(config.search_config());
    store.load(outcome.documents);

    Session { config, store, stats: outcome.stats }
}
