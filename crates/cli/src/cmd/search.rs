//! Search command implementation.

use doctree_core::store::{LookupError, SearchHit, SearchOptions};

use super::output::{print_json, resolve_format};
use super::session;
use super::GlobalOpts;
use crate::{logging, OutputFormat, SearchArgs};

pub fn run(global: &GlobalOpts, args: SearchArgs) {
    let session = session::open(global);

    let options = SearchOptions { doc_id: args.doc_id, limit: args.limit };
    let hits = match session.store.search_documents(&args.query, &options) {
        Ok(hits) => hits,
        Err(LookupError::DocumentNotFound(id)) => {
            eprintln!("Document \"{}\" not found. Use 'doctree list' to see available documents.", id);
            logging::exit(1);
        }
        Err(e) => {
            eprintln!("Error searching: {}", e);
            logging::exit(1);
        }
    };

    match resolve_format(&args.format) {
        OutputFormat::Json => print_json(&hits),
        OutputFormat::Quiet => {
            for hit in &hits {
                println!("{} {}", hit.doc_id, hit.node_id);
            }
        }
        OutputFormat::Table => print_results(&args.query, &hits),
    }
}

fn print_results(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No results found for \"{}\". Try broader terms or browse with 'doctree list'.", query);
        return;
    }

    println!("Search results for \"{}\" ({} matches):", query, hits.len());
    for (i, hit) in hits.iter().enumerate() {
        println!();
        println!("{}. [{}] {}", i + 1, hit.doc_id, hit.doc_title);
        println!("   Section: {} ({})", hit.node_title, hit.node_id);
        println!("   Score: {:.1}", hit.score);
        if !hit.snippet.is_empty() {
            println!("   Snippet: {}", hit.snippet);
        }
    }
}
