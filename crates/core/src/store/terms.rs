//! Tokenization and the inverted term index.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::indexer::Document;

// Runs of letters and digits; everything else separates terms.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+").unwrap());

/// Split text into lowercase terms.
///
/// ```
/// use doctree_core::store::tokenize;
///
/// assert_eq!(tokenize("POST /auth/refresh!"), vec!["post", "auth", "refresh"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// Terms with their byte ranges in `text`.
pub fn token_spans(text: &str) -> impl Iterator<Item = (Range<usize>, String)> + '_ {
    TOKEN_RE.find_iter(text).map(|m| (m.range(), m.as_str().to_lowercase()))
}

/// Where a term occurs, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Index of the document in load order.
    pub doc: usize,
    /// Index of the node within the document.
    pub node: usize,
    pub title_tf: u32,
    pub content_tf: u32,
}

/// Term to postings, covering node titles and content.
///
/// Postings for a term are ordered by document, then node.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    postings: HashMap<String, Vec<Posting>>,
}

impl TermIndex {
    pub fn build(documents: &[Document]) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();

        for (doc, document) in documents.iter().enumerate() {
            for (node, n) in document.nodes.iter().enumerate() {
                let mut counts: HashMap<String, (u32, u32)> = HashMap::new();
                for term in tokenize(&n.title) {
                    counts.entry(term).or_default().0 += 1;
                }
                for term in tokenize(&n.content) {
                    counts.entry(term).or_default().1 += 1;
                }

                for (term, (title_tf, content_tf)) in counts {
                    postings.entry(term).or_default().push(Posting {
                        doc,
                        node,
                        title_tf,
                        content_tf,
                    });
                }
            }
        }

        Self { postings }
    }

    pub fn get(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
