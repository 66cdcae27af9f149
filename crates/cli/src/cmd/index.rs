//! Index command implementation.

use std::io::Write;

use doctree_core::indexer::ProgressCallback;

use super::GlobalOpts;
use super::session;

/// Build the index and report what was found. Nothing is written to disk.
pub fn run(global: &GlobalOpts, verbose: bool) {
    let progress: ProgressCallback = if verbose {
        Box::new(|current, total, path| {
            println!("[{}/{}] {}", current, total, path);
        })
    } else {
        Box::new(|current, total, _path| {
            if current % 50 == 0 || current == total {
                eprint!("\rIndexing... {}/{}", current, total);
                std::io::stderr().flush().ok();
            }
        })
    };

    let session = session::open_with_progress(global, Some(progress));
    if !verbose && session.stats.files_found > 0 {
        eprintln!();
    }

    let stats = &session.stats;
    let store_stats = session.store.get_stats();
    println!("Indexed: {}", session.config.docs_root.display());
    println!("  Files found:       {}", stats.files_found);
    println!("  Documents indexed: {}", stats.documents_indexed);
    if stats.files_skipped > 0 {
        println!("  Files skipped:     {}", stats.files_skipped);
    }
    println!("  Sections:          {}", store_stats.total_nodes);
    println!("  Terms:             {}", store_stats.indexed_terms);
    println!("  Duration:          {}ms", stats.duration_ms);
}
