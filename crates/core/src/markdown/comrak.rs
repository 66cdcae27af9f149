//! Heading text extraction backed by comrak.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

/// Render the plain text of an ATX heading line.
///
/// The whole line is handed to comrak so that emphasis, code spans, links,
/// escapes and closing `#` sequences are resolved the way a markdown renderer
/// would, while text such as `1. Intro` is not mistaken for a list.
pub fn heading_text(line: &str) -> String {
    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, line, &options);

    for node in root.descendants() {
        if let NodeValue::Heading(_) = node.data.borrow().value {
            return collect_text(node).trim().to_string();
        }
    }

    // Not reachable for lines the structural parser accepts, but stay total.
    line.trim_start_matches('#').trim().to_string()
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.parse.smart = false;
    options
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants() {
        match child.data.borrow().value {
            NodeValue::Text(ref t) => text.push_str(t),
            NodeValue::Code(ref c) => text.push_str(&c.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}
