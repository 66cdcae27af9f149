//! List command implementation.

use doctree_core::Document;
use doctree_core::store::ListQuery;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::output::{print_json, resolve_format, truncate, DocumentOutput};
use super::session;
use super::GlobalOpts;
use crate::{ListArgs, OutputFormat};

/// Row for the document table.
#[derive(Tabled)]
struct DocumentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Sections")]
    sections: usize,
    #[tabled(rename = "Words")]
    words: usize,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Document> for DocumentRow {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.doc_id.clone(),
            title: truncate(&doc.title, 40),
            kind: doc.kind().unwrap_or("-").to_string(),
            sections: doc.heading_count,
            words: doc.word_count,
            tags: truncate(&doc.tags.join(", "), 30),
        }
    }
}

#[derive(Serialize)]
struct ListOutput<'a> {
    total: usize,
    offset: usize,
    documents: Vec<DocumentOutput<'a>>,
}

pub fn run(global: &GlobalOpts, args: ListArgs) {
    let session = session::open(global);

    let query = ListQuery {
        query: args.query,
        tag: args.tag,
        limit: args.limit,
        offset: args.offset,
    };
    let page = session.store.list_documents(&query);

    match resolve_format(&args.format) {
        OutputFormat::Json => print_json(&ListOutput {
            total: page.total,
            offset: query.offset,
            documents: page.documents.iter().map(|d| DocumentOutput::from(*d)).collect(),
        }),
        OutputFormat::Quiet => {
            for doc in &page.documents {
                println!("{}", doc.doc_id);
            }
        }
        OutputFormat::Table => {
            if page.documents.is_empty() {
                println!("(no documents found, {} total)", page.total);
                return;
            }

            let rows: Vec<DocumentRow> =
                page.documents.iter().map(|d| DocumentRow::from(*d)).collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");

            let first = query.offset + 1;
            let last = query.offset + page.documents.len();
            println!();
            println!("-- showing {}-{} of {} documents --", first, last, page.total);
        }
    }
}
