//! Stats command implementation.

use serde::Serialize;

use super::output::print_json;
use super::session;
use super::GlobalOpts;
use crate::StatsArgs;

#[derive(Serialize)]
struct StatsOutput {
    document_count: usize,
    total_nodes: usize,
    indexed_terms: usize,
    files_found: usize,
    files_skipped: usize,
    duration_ms: u64,
}

pub fn run(global: &GlobalOpts, args: StatsArgs) {
    let session = session::open(global);
    let store = session.store.get_stats();

    let output = StatsOutput {
        document_count: store.document_count,
        total_nodes: store.total_nodes,
        indexed_terms: store.indexed_terms,
        files_found: session.stats.files_found,
        files_skipped: session.stats.files_skipped,
        duration_ms: session.stats.duration_ms,
    };

    if args.json {
        print_json(&output);
        return;
    }

    println!("Documents:     {}", output.document_count);
    println!("Sections:      {}", output.total_nodes);
    println!("Indexed terms: {}", output.indexed_terms);
    println!("Files found:   {}", output.files_found);
    if output.files_skipped > 0 {
        println!("Files skipped: {}", output.files_skipped);
    }
    println!("Index time:    {}ms", output.duration_ms);
}
