//! Query expansion, scoring and snippets.
//!
//! A node's score is the weighted term frequency over its title and content:
//!
//! ```text
//! score = Σ weight(t) · (content_tf(t) + title_boost · title_tf(t))
//! ```
//!
//! Terms typed by the caller weigh 1.0. Terms added by glossary expansion
//! weigh 0.5, so an abbreviation match never outranks the literal one.

use std::collections::{BTreeMap, HashSet};

use super::terms::{TermIndex, token_spans, tokenize};
use super::types::SearchConfig;

/// Weight of a term added by glossary expansion.
pub const EXPANSION_WEIGHT: f64 = 0.5;

const ELLIPSIS: &str = "...";

/// A normalized query term and its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTerm {
    pub term: String,
    pub weight: f64,
}

/// Tokenize a query and add glossary expansions.
///
/// An abbreviation typed in the query adds the terms of its expansions; a
/// query containing every term of an expansion adds the abbreviation.
/// Each term appears once, at its highest weight, in first-seen order.
pub fn expand_query(query: &str, glossary: &BTreeMap<String, Vec<String>>) -> Vec<QueryTerm> {
    let mut terms: Vec<QueryTerm> = Vec::new();
    for term in tokenize(query) {
        push_term(&mut terms, term, 1.0);
    }

    let typed: HashSet<String> = terms.iter().map(|t| t.term.clone()).collect();
    for (abbreviation, expansions) in glossary {
        let abbreviation_terms = tokenize(abbreviation);
        if abbreviation_terms.is_empty() {
            continue;
        }
        let abbreviation_typed = abbreviation_terms.iter().all(|t| typed.contains(t));

        for expansion in expansions {
            let expansion_terms = tokenize(expansion);
            if expansion_terms.is_empty() {
                continue;
            }

            if abbreviation_typed {
                for term in &expansion_terms {
                    push_term(&mut terms, term.clone(), EXPANSION_WEIGHT);
                }
            }
            if expansion_terms.iter().all(|t| typed.contains(t)) {
                for term in &abbreviation_terms {
                    push_term(&mut terms, term.clone(), EXPANSION_WEIGHT);
                }
            }
        }
    }

    terms
}

fn push_term(terms: &mut Vec<QueryTerm>, term: String, weight: f64) {
    match terms.iter_mut().find(|t| t.term == term) {
        Some(existing) => existing.weight = existing.weight.max(weight),
        None => terms.push(QueryTerm { term, weight }),
    }
}

/// Score every node containing at least one term.
///
/// Returns `((doc, node), score)` pairs ordered by score descending, then by
/// document and node position. `only_doc` restricts candidates to one
/// document before scoring.
pub fn score_nodes(
    index: &TermIndex,
    terms: &[QueryTerm],
    config: &SearchConfig,
    only_doc: Option<usize>,
) -> Vec<((usize, usize), f64)> {
    let mut scores: BTreeMap<(usize, usize), f64> = BTreeMap::new();

    for query_term in terms {
        for posting in index.get(&query_term.term) {
            if only_doc.is_some_and(|doc| doc != posting.doc) {
                continue;
            }
            let tf = f64::from(posting.content_tf) + config.title_boost * f64::from(posting.title_tf);
            *scores.entry((posting.doc, posting.node)).or_default() += query_term.weight * tf;
        }
    }

    let mut ranked: Vec<_> = scores.into_iter().filter(|(_, score)| *score > 0.0).collect();
    // Stable sort keeps (doc, node) order among equal scores.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Excerpt of `content` around the first occurrence of any term.
///
/// Whitespace is collapsed first. The window holds at most `max_chars`
/// characters and starts a quarter-window before the match, so the match
/// sits near the front with some leading context. `...` marks cut ends.
/// Content without a match is excerpted from the start.
pub fn snippet(content: &str, terms: &[QueryTerm], max_chars: usize) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = collapsed.chars().collect();
    if chars.len() <= max_chars {
        return collapsed;
    }

    let first_match = token_spans(&collapsed)
        .find(|(_, token)| terms.iter().any(|t| &t.term == token))
        .map(|(range, _)| collapsed[..range.start].chars().count())
        .unwrap_or(0);

    let mut start = first_match.saturating_sub(max_chars / 4);
    let end = (start + max_chars).min(chars.len());
    start = start.min(end.saturating_sub(max_chars));

    let excerpt: String = chars[start..end].iter().collect();
    let mut out = String::with_capacity(excerpt.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(excerpt.trim());
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary() -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([
            ("SSE".to_string(), vec!["server-sent events".to_string()]),
            ("K8s".to_string(), vec!["kubernetes".to_string()]),
        ])
    }

    fn words(terms: &[QueryTerm]) -> Vec<(&str, f64)> {
        terms.iter().map(|t| (t.term.as_str(), t.weight)).collect()
    }

    #[test]
    fn query_terms_are_deduplicated() {
        let terms = expand_query("Token token TOKEN refresh", &BTreeMap::new());
        assert_eq!(words(&terms), vec![("token", 1.0), ("refresh", 1.0)]);
    }

    #[test]
    fn abbreviation_expands_to_terms() {
        let terms = expand_query("sse alerts", &glossary());
        assert_eq!(
            words(&terms),
            vec![("sse", 1.0), ("alerts", 1.0), ("server", 0.5), ("sent", 0.5), ("events", 0.5)]
        );
    }

    #[test]
    fn expansion_adds_abbreviation() {
        let terms = expand_query("server-sent events", &glossary());
        assert_eq!(
            words(&terms),
            vec![("server", 1.0), ("sent", 1.0), ("events", 1.0), ("sse", 0.5)]
        );
    }

    #[test]
    fn partial_expansion_does_not_match() {
        let terms = expand_query("events", &glossary());
        assert_eq!(words(&terms), vec![("events", 1.0)]);
    }

    #[test]
    fn typed_term_keeps_full_weight() {
        let terms = expand_query("k8s kubernetes", &glossary());
        assert_eq!(words(&terms), vec![("k8s", 1.0), ("kubernetes", 1.0)]);
    }

    fn term(t: &str) -> Vec<QueryTerm> {
        vec![QueryTerm { term: t.to_string(), weight: 1.0 }]
    }

    #[test]
    fn short_content_is_returned_whole() {
        assert_eq!(snippet("bar\n\n  baz", &term("bar"), 200), "bar baz");
    }

    #[test]
    fn long_content_is_windowed_around_match() {
        let content = format!("{} needle {}", "lead ".repeat(100), "tail ".repeat(100));
        let s = snippet(&content, &term("needle"), 40);

        assert!(s.starts_with("..."));
        assert!(s.ends_with("..."));
        assert!(s.contains("needle"));
        assert!(s.chars().count() <= 40 + 6);
    }

    #[test]
    fn match_near_start_has_no_leading_marker() {
        let content = format!("needle {}", "tail ".repeat(100));
        let s = snippet(&content, &term("needle"), 30);
        assert!(s.starts_with("needle"));
        assert!(s.ends_with("..."));
    }

    #[test]
    fn match_near_end_fills_window_backwards() {
        let content = format!("{}needle", "lead ".repeat(100));
        let s = snippet(&content, &term("needle"), 30);
        assert!(s.starts_with("..."));
        assert!(s.ends_with("needle"));
    }

    #[test]
    fn no_match_excerpts_from_start() {
        let content = "word ".repeat(100);
        let s = snippet(&content, &term("absent"), 20);
        assert!(s.starts_with("word"));
        assert!(s.ends_with("..."));
    }

    #[test]
    fn match_is_whole_token() {
        let content = format!("{} refreshes refresh", "x ".repeat(200));
        let s = snippet(&content, &term("refresh"), 20);
        assert!(s.contains("refresh"));
        assert!(s.ends_with("refresh"));
    }
}
