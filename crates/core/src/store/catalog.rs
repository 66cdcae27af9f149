//! The document catalog and its queries.

use std::collections::{HashMap, HashSet};

use super::search::{expand_query, score_nodes, snippet};
use super::terms::TermIndex;
use super::types::{
    DocumentPage, ListQuery, LookupError, MAX_LIST_LIMIT, MAX_SEARCH_LIMIT, NodeSelection,
    SearchConfig, SearchHit, SearchOptions, StoreStats, Subtree,
};
use crate::indexer::Document;
use crate::tree;

/// Loaded documents plus the lookups built over them.
///
/// Built once by [`DocumentStore::load`], then read-only. Every query takes
/// `&self`, so a loaded store can be shared across threads without locking.
#[derive(Debug, Default)]
pub struct DocumentStore {
    /// Documents in load order.
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
    /// Per document: node id to node index.
    node_index: Vec<HashMap<String, usize>>,
    terms: TermIndex,
    config: SearchConfig,
    stats: StoreStats,
}

impl DocumentStore {
    /// An empty store with default search settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Replace the catalog with `documents`.
    ///
    /// Any previous state is dropped. A document whose id is already loaded
    /// is skipped with a warning; the first one wins.
    pub fn load(&mut self, documents: Vec<Document>) {
        let mut kept = Vec::with_capacity(documents.len());
        let mut by_id = HashMap::with_capacity(documents.len());

        for doc in documents {
            if by_id.contains_key(&doc.doc_id) {
                tracing::warn!("Skipping duplicate document id {} ({})", doc.doc_id, doc.file_path);
                continue;
            }
            by_id.insert(doc.doc_id.clone(), kept.len());
            kept.push(doc);
        }

        self.node_index = kept
            .iter()
            .map(|doc| {
                doc.nodes.iter().enumerate().map(|(i, n)| (n.node_id.clone(), i)).collect()
            })
            .collect();
        self.terms = TermIndex::build(&kept);
        self.stats = StoreStats {
            document_count: kept.len(),
            total_nodes: kept.iter().map(|d| d.nodes.len()).sum(),
            indexed_terms: self.terms.len(),
        };
        self.by_id = by_id;
        self.documents = kept;

        tracing::debug!(
            documents = self.stats.document_count,
            nodes = self.stats.total_nodes,
            terms = self.stats.indexed_terms,
            "store loaded"
        );
    }

    /// All documents in load order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Filter and paginate the catalog.
    ///
    /// `tag` and `query` apply together. An offset past the end yields an
    /// empty page with the full `total`.
    pub fn list_documents(&self, query: &ListQuery) -> DocumentPage<'_> {
        let needle = query.query.as_deref().map(str::trim).map(str::to_lowercase);
        let tag = query.tag.as_deref().map(str::trim);

        let matching: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| tag.is_none_or(|tag| doc.has_tag(tag)))
            .filter(|doc| needle.as_deref().is_none_or(|needle| matches_text(doc, needle)))
            .collect();

        let total = matching.len();
        let limit = query.limit.clamp(1, MAX_LIST_LIMIT);
        let documents = matching.into_iter().skip(query.offset).take(limit).collect();

        DocumentPage { documents, total }
    }

    /// Ranked keyword search over node titles and content.
    ///
    /// Nothing matching is an empty `Ok`. An unknown `doc_id` filter is
    /// [`LookupError::DocumentNotFound`].
    pub fn search_documents(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, LookupError> {
        let only_doc = match options.doc_id.as_deref() {
            Some(doc_id) => Some(self.doc_index(doc_id)?),
            None => None,
        };

        let terms = expand_query(query, &self.config.glossary);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let limit = options.limit.clamp(1, MAX_SEARCH_LIMIT);
        let hits = score_nodes(&self.terms, &terms, &self.config, only_doc)
            .into_iter()
            .take(limit)
            .map(|((doc, node), score)| {
                let document = &self.documents[doc];
                let node = &document.nodes[node];
                SearchHit {
                    doc_id: document.doc_id.clone(),
                    doc_title: document.title.clone(),
                    node_id: node.node_id.clone(),
                    node_title: node.title.clone(),
                    score,
                    snippet: snippet(&node.content, &terms, self.config.snippet_length),
                }
            })
            .collect();

        Ok(hits)
    }

    /// The full document, including its node outline.
    pub fn get_tree(&self, doc_id: &str) -> Result<&Document, LookupError> {
        self.doc_index(doc_id).map(|i| &self.documents[i])
    }

    /// Nodes with the given ids, in request order.
    ///
    /// Unknown ids are left out and repeated ids are returned once. Only an
    /// unknown document is an error.
    pub fn get_node_content<S: AsRef<str>>(
        &self,
        doc_id: &str,
        node_ids: &[S],
    ) -> Result<NodeSelection<'_>, LookupError> {
        let doc = self.doc_index(doc_id)?;
        let index = &self.node_index[doc];
        let nodes = &self.documents[doc].nodes;

        let mut seen = HashSet::new();
        let selected = node_ids
            .iter()
            .filter_map(|id| index.get(id.as_ref()).copied())
            .filter(|i| seen.insert(*i))
            .map(|i| &nodes[i])
            .collect();

        Ok(NodeSelection { nodes: selected })
    }

    /// A node and all of its descendants.
    pub fn get_subtree(&self, doc_id: &str, node_id: &str) -> Result<Subtree<'_>, LookupError> {
        let doc = self.doc_index(doc_id)?;
        let index = self.node_index[doc].get(node_id).copied().ok_or_else(|| {
            LookupError::NodeNotFound { doc_id: doc_id.to_string(), node_id: node_id.to_string() }
        })?;

        let nodes = &self.documents[doc].nodes;
        Ok(Subtree { nodes: &nodes[tree::subtree_range(nodes, index)] })
    }

    pub fn get_stats(&self) -> StoreStats {
        self.stats
    }

    fn doc_index(&self, doc_id: &str) -> Result<usize, LookupError> {
        self.by_id
            .get(doc_id)
            .copied()
            .ok_or_else(|| LookupError::DocumentNotFound(doc_id.to_string()))
    }
}

fn matches_text(doc: &Document, needle: &str) -> bool {
    doc.title.to_lowercase().contains(needle)
        || doc.description.as_deref().is_some_and(|d| d.to_lowercase().contains(needle))
        || doc.file_path.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::extract_document;
    use crate::tree::TreeOptions;
    use std::path::Path;

    fn doc(path: &str, content: &str) -> Document {
        extract_document(content, Path::new(path), &TreeOptions::default())
    }

    fn abc_store() -> DocumentStore {
        let mut store = DocumentStore::new();
        store.load(vec![doc("abc.md", "# A\n\nfoo\n\n## B\n\nbar\n\n## C\n\nbaz")]);
        store
    }

    #[test]
    fn subtree_of_root_is_whole_document() {
        let store = abc_store();
        let ids: Vec<_> =
            store.get_subtree("abc", "n1-a").unwrap().nodes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn subtree_of_leaf_is_itself() {
        let store = abc_store();
        let subtree = store.get_subtree("abc", "n2-b").unwrap();
        assert_eq!(subtree.nodes.len(), 1);
        assert_eq!(subtree.root().content, "bar");
    }

    #[test]
    fn subtree_lookup_errors() {
        let store = abc_store();
        assert_eq!(
            store.get_subtree("nope", "n1-a").unwrap_err(),
            LookupError::DocumentNotFound("nope".to_string())
        );
        assert!(matches!(
            store.get_subtree("abc", "n9").unwrap_err(),
            LookupError::NodeNotFound { .. }
        ));
    }

    #[test]
    fn search_finds_single_node() {
        let store = abc_store();
        let hits = store.search_documents("bar", &SearchOptions::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node_id, "n2-b");
        assert!(hits[0].score > 0.0);
        assert!(hits[0].snippet.contains("bar"));

        assert!(store.search_documents("zzz", &SearchOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn search_with_blank_query_is_empty() {
        let store = abc_store();
        assert!(store.search_documents("  ?! ", &SearchOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn search_with_unknown_doc_filter_is_not_found() {
        let store = abc_store();
        let options = SearchOptions { doc_id: Some("nope".to_string()), ..Default::default() };
        assert!(matches!(
            store.search_documents("bar", &options),
            Err(LookupError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn node_content_unknown_ids_are_empty_not_error() {
        let store = abc_store();
        let selection = store.get_node_content("abc", &["n9-x"]).unwrap();
        assert!(selection.nodes.is_empty());
        assert!(store.get_node_content("nope", &["n1-a"]).is_err());
    }

    #[test]
    fn node_content_keeps_request_order_and_dedupes() {
        let store = abc_store();
        let selection = store.get_node_content("abc", &["n3-c", "n1-a", "n3-c"]).unwrap();
        let titles: Vec<_> = selection.nodes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A"]);
    }

    #[test]
    fn load_replaces_previous_state() {
        let mut store = abc_store();
        store.load(vec![doc("other.md", "# Other\n\nqux\n")]);

        assert!(store.get_tree("abc").is_err());
        assert!(store.get_tree("other").is_ok());
        assert!(store.search_documents("bar", &SearchOptions::default()).unwrap().is_empty());
        assert_eq!(store.get_stats().document_count, 1);
    }

    #[test]
    fn load_skips_duplicate_ids() {
        let mut store = DocumentStore::new();
        store.load(vec![doc("a.md", "# First\n"), doc("a.md", "# Second\n")]);

        assert_eq!(store.documents().len(), 1);
        assert_eq!(store.get_tree("a").unwrap().title, "First");
    }

    #[test]
    fn stats_count_documents_nodes_terms() {
        let store = abc_store();
        // a b c foo bar baz
        assert_eq!(
            store.get_stats(),
            StoreStats { document_count: 1, total_nodes: 3, indexed_terms: 6 }
        );
        assert_eq!(DocumentStore::new().get_stats(), StoreStats::default());
    }

    #[test]
    fn list_limit_is_clamped() {
        let mut store = DocumentStore::new();
        store.load((0..3).map(|i| doc(&format!("d{i}.md"), "# D\n")).collect());

        let page = store.list_documents(&ListQuery { limit: 0, ..Default::default() });
        assert_eq!(page.documents.len(), 1);
        assert_eq!(page.total, 3);
    }
}
