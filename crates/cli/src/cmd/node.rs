//! Node content command implementation.

use super::output::print_json;
use super::session;
use super::GlobalOpts;
use crate::{logging, NodeArgs};

pub fn run(global: &GlobalOpts, args: NodeArgs) {
    let session = session::open(global);

    let selection = match session.store.get_node_content(&args.doc_id, args.node_ids.as_slice()) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("{e}");
            logging::exit(1);
        }
    };

    if args.json {
        print_json(&selection);
        return;
    }

    if selection.nodes.is_empty() {
        println!(
            "No matching nodes found for IDs: {}. Use 'doctree tree {}' to see available node IDs.",
            args.node_ids.join(", "),
            args.doc_id
        );
        return;
    }

    for (i, node) in selection.nodes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("━━━ {} [{}] (H{}) ━━━", node.title, node.node_id, node.level);
        println!();
        if node.content.is_empty() {
            println!("(empty section)");
        } else {
            println!("{}", node.content);
        }
    }
}
