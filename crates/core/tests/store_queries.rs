use doctree_core::indexer::{IndexConfig, index_directory};
use doctree_core::store::{
    DocumentStore, ListQuery, LookupError, SearchConfig, SearchOptions, StoreStats,
};
use doctree_core::tree::{build_outline, flatten_outline, parent_index};
use rstest::rstest;
use std::collections::BTreeMap;
use std::path::Path;

fn fixtures_store(config: SearchConfig) -> DocumentStore {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/docs");
    let outcome = index_directory(&IndexConfig::new(root)).unwrap();
    let mut store = DocumentStore::with_config(config);
    store.load(outcome.documents);
    store
}

fn store() -> DocumentStore {
    fixtures_store(SearchConfig::default())
}

fn glossary_store() -> DocumentStore {
    let glossary = BTreeMap::from([
        ("SSE".to_string(), vec!["server-sent events".to_string()]),
        ("DB".to_string(), vec!["database".to_string()]),
    ]);
    fixtures_store(SearchConfig { glossary, ..SearchConfig::default() })
}

fn ids<'a>(docs: impl IntoIterator<Item = &'a doctree_core::Document>) -> Vec<&'a str> {
    docs.into_iter().map(|d| d.doc_id.as_str()).collect()
}

#[test]
fn stats_cover_the_whole_catalog() {
    let stats = store().get_stats();
    assert_eq!(stats.document_count, 9);
    assert_eq!(stats.total_nodes, 27);
    assert!(stats.indexed_terms > 0);
}

#[test]
fn empty_store_has_zero_stats() {
    assert_eq!(DocumentStore::new().get_stats(), StoreStats::default());
}

#[rstest]
#[case(ListQuery { tag: Some("OPS".into()), ..Default::default() }, vec!["ops/database-runbook"])]
#[case(ListQuery { query: Some("runbook".into()), ..Default::default() }, vec!["ops/database-runbook"])]
#[case(ListQuery { query: Some("ops/".into()), ..Default::default() }, vec!["ops/database-runbook", "ops/sse-alerts"])]
#[case(ListQuery { query: Some("TOKEN REFRESH".into()), ..Default::default() }, vec!["guides/auth-middleware"])]
#[case(
    ListQuery { tag: Some("architecture".into()), query: Some("nested".into()), ..Default::default() },
    vec!["architecture/deep-nesting"]
)]
#[case(ListQuery { tag: Some("architecture".into()), query: Some("api".into()), ..Default::default() }, vec![])]
#[case(ListQuery { tag: Some("sec".into()), ..Default::default() }, vec![])]
fn list_filters(#[case] query: ListQuery, #[case] expected: Vec<&str>) {
    let store = store();
    let page = store.list_documents(&query);
    assert_eq!(ids(page.documents), expected);
    assert_eq!(page.total, expected.len());
}

#[test]
fn pages_concatenate_to_the_full_listing() {
    let store = store();
    let all = ids(store.list_documents(&ListQuery::default()).documents);
    assert_eq!(all.len(), 9);

    let mut paged = Vec::new();
    for offset in (0..9).step_by(4) {
        let page = store.list_documents(&ListQuery { limit: 4, offset, ..Default::default() });
        assert_eq!(page.total, 9);
        paged.extend(ids(page.documents));
    }
    assert_eq!(paged, all);
}

#[rstest]
#[case(9)]
#[case(10)]
#[case(1_000)]
fn offset_past_end_is_empty_page(#[case] offset: usize) {
    let store = store();
    let page = store.list_documents(&ListQuery { offset, ..Default::default() });
    assert!(page.documents.is_empty());
    assert_eq!(page.total, 9);
}

#[test]
fn search_ranks_title_matches_first() {
    let store = store();
    let hits = store.search_documents("token refresh", &SearchOptions::default()).unwrap();

    assert_eq!(hits[0].doc_id, "guides/auth-middleware");
    assert_eq!(hits[0].node_id, "n2-token-refresh-flow");
    assert_eq!(hits[0].doc_title, "Auth Middleware Guide");
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(hits.iter().all(|h| h.score > 0.0));
    assert!(hits.iter().any(|h| h.doc_id == "reference/api"));
}

#[test]
fn search_is_idempotent() {
    let store = store();
    let first = store.search_documents("token endpoint", &SearchOptions::default()).unwrap();
    let second = store.search_documents("token endpoint", &SearchOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn search_respects_doc_filter_and_limit() {
    let store = store();
    let options =
        SearchOptions { doc_id: Some("reference/api".to_string()), ..Default::default() };
    let hits = store.search_documents("token", &options).unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.doc_id == "reference/api"));

    let limited =
        store.search_documents("token", &SearchOptions { limit: 2, ..Default::default() }).unwrap();
    assert_eq!(limited.len(), 2);
}

#[test]
fn search_without_matches_is_empty() {
    let store = store();
    assert!(store.search_documents("zzz", &SearchOptions::default()).unwrap().is_empty());
}

#[test]
fn search_ignores_code_fence_markers_but_not_code() {
    let store = store();
    let hits = store.search_documents("console", &SearchOptions::default()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].node_title, "Section Two");
}

#[test]
fn glossary_expands_abbreviations() {
    let plain = store().search_documents("sse", &SearchOptions::default()).unwrap();
    assert!(plain.iter().all(|h| h.node_title != "Metrics Dashboard"));

    let expanded = glossary_store().search_documents("sse", &SearchOptions::default()).unwrap();
    let titles: Vec<_> = expanded.iter().map(|h| h.node_title.as_str()).collect();
    assert_eq!(titles, vec!["Alert Configuration", "Metrics Dashboard", "PagerDuty Integration"]);
}

#[test]
fn glossary_matches_abbreviation_from_expansion() {
    let hits = glossary_store()
        .search_documents("server-sent events", &SearchOptions::default())
        .unwrap();
    let titles: Vec<_> = hits.iter().map(|h| h.node_title.as_str()).collect();
    assert_eq!(titles, vec!["Alert Configuration", "Metrics Dashboard", "PagerDuty Integration"]);
}

#[test]
fn lookups_distinguish_not_found_from_empty() {
    let store = store();

    let empty = store.get_node_content("minimal", &["n9-nothing"]).unwrap();
    assert!(empty.nodes.is_empty());

    assert_eq!(
        store.get_node_content("missing", &["n1"]).unwrap_err(),
        LookupError::DocumentNotFound("missing".to_string())
    );
    assert!(store.get_tree("missing").is_err());
}

#[test]
fn zero_heading_content_is_reachable_through_the_tree() {
    let mut store = DocumentStore::new();
    store.load(vec![doctree_core::indexer::extract_document(
        "Just prose, no headings.\n",
        Path::new("notes/prose.md"),
        &Default::default(),
    )]);

    let doc = store.get_tree("notes/prose").unwrap();
    assert!(doc.nodes.is_empty());
    assert_eq!(doc.preamble, "Just prose, no headings.");
    assert!(store.search_documents("prose", &SearchOptions::default()).unwrap().is_empty());
}

#[test]
fn every_subtree_is_its_contiguous_descendant_run() {
    let store = store();
    for doc in store.documents() {
        for (i, node) in doc.nodes.iter().enumerate() {
            let subtree = store.get_subtree(&doc.doc_id, &node.node_id).unwrap();
            assert_eq!(subtree.nodes[0].node_id, node.node_id);
            assert!(subtree.nodes[1..].iter().all(|n| n.level > node.level));

            let next = i + subtree.nodes.len();
            if let Some(after) = doc.nodes.get(next) {
                assert!(after.level <= node.level, "{}: run ends too early", doc.doc_id);
            }
        }
    }
}

#[test]
fn outline_round_trips_for_every_document() {
    let store = store();
    for doc in store.documents() {
        let outline = build_outline(&doc.nodes);
        let order: Vec<usize> = (0..doc.nodes.len()).collect();
        assert_eq!(flatten_outline(&outline), order, "{}", doc.doc_id);

        for i in 0..doc.nodes.len() {
            if let Some(parent) = parent_index(&doc.nodes, i) {
                assert!(doc.nodes[parent].level < doc.nodes[i].level);
            }
        }
    }
}

#[test]
fn store_serves_concurrent_readers() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentStore>();

    let store = store();
    let expected = store.search_documents("middleware", &SearchOptions::default()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..20 {
                    let hits =
                        store.search_documents("middleware", &SearchOptions::default()).unwrap();
                    assert_eq!(hits, expected);
                    assert!(store.get_subtree("guides/auth-middleware", "n2-token-refresh-flow").is_ok());
                }
            });
        }
    });
}
