//! Shared output formatting for query commands.

use chrono::{DateTime, Utc};
use doctree_core::Document;
use serde::Serialize;

use crate::{logging, OutputArgs, OutputFormat};

/// Document metadata for JSON output, without section content.
#[derive(Debug, Serialize)]
pub struct DocumentOutput<'a> {
    pub doc_id: &'a str,
    pub file_path: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<&'a str>,
    pub heading_count: usize,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl<'a> From<&'a Document> for DocumentOutput<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            doc_id: &doc.doc_id,
            file_path: &doc.file_path,
            title: &doc.title,
            description: doc.description.as_deref(),
            tags: &doc.tags,
            category: doc.category.as_deref(),
            doc_type: doc.doc_type.as_deref(),
            heading_count: doc.heading_count,
            word_count: doc.word_count,
            modified: doc.modified.map(format_time),
        }
    }
}

/// Resolve the output format from flags.
pub fn resolve_format(args: &OutputArgs) -> OutputFormat {
    if args.json {
        OutputFormat::Json
    } else if args.quiet {
        OutputFormat::Quiet
    } else {
        args.output
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding JSON: {e}");
            logging::exit(1);
        }
    }
}

pub fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// Truncate to `max_len` characters with a trailing ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
