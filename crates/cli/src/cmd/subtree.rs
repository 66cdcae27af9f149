//! Subtree command implementation.

use super::output::print_json;
use super::session;
use super::GlobalOpts;
use crate::{logging, SubtreeArgs};

pub fn run(global: &GlobalOpts, args: SubtreeArgs) {
    let session = session::open(global);

    let subtree = match session.store.get_subtree(&args.doc_id, &args.node_id) {
        Ok(subtree) => subtree,
        Err(e) => {
            eprintln!("{e}");
            logging::exit(1);
        }
    };

    if args.json {
        print_json(&subtree);
        return;
    }

    let root = subtree.root();
    println!(
        "Subtree: {} ({} sections, {} words)",
        root.title,
        subtree.nodes.len(),
        subtree.word_count()
    );

    for node in subtree.nodes {
        let indent = "  ".repeat(usize::from(node.level - root.level));
        println!();
        println!("{}{} {} [{}]", indent, "#".repeat(usize::from(node.level)), node.title, node.node_id);
        if node.content.is_empty() {
            println!("{indent}(empty)");
        } else {
            for line in node.content.lines() {
                println!("{indent}{line}");
            }
        }
    }
}
