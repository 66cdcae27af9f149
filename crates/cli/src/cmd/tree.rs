//! Tree command implementation.

use doctree_core::tree::word_count;

use super::output::{print_json, truncate};
use super::session;
use super::GlobalOpts;
use crate::{logging, TreeArgs};

pub fn run(global: &GlobalOpts, args: TreeArgs) {
    let session = session::open(global);

    let doc = match session.store.get_tree(&args.doc_id) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}. Use 'doctree list' to see available documents.");
            logging::exit(1);
        }
    };

    if args.json {
        print_json(doc);
        return;
    }

    println!("Document: {}", doc.title);
    println!("Doc ID: {}", doc.doc_id);
    println!("Path: {}", doc.file_path);
    println!("Sections: {}", doc.nodes.len());
    if !doc.preamble.is_empty() {
        println!("Preamble: {} words", word_count(&doc.preamble));
    }
    println!();

    for node in &doc.nodes {
        let indent = "  ".repeat(usize::from(node.level.saturating_sub(1)));
        println!(
            "{}[{}] {} {} ({} words)",
            indent,
            node.node_id,
            "#".repeat(usize::from(node.level)),
            node.title,
            node.word_count
        );
        if !node.summary.is_empty() {
            println!("{}  Summary: {}", indent, truncate(&node.summary, 120));
        }
    }
}
