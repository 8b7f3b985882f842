//! Grouped, stemmed multi-word search.
//!
//! A query is split into words and each word reduced to a stem. A node
//! matches a query word when any word in its content shares that stem. For
//! every combination of query words a node matched, the node joins the group
//! keyed by that combination, with the matched words emphasized. Groups with a
//! single member are dropped, and the rest are completed with ancestors so each
//! can be rendered as a tree.
//!
//! Relevance is stem equality only. There is no scoring beyond the ordering in
//! [`SearchResults::ranked`].

use std::{
    collections::{HashMap, HashSet},
    ops::Range,
};

use serde::Serialize;
use streem_graph::{Node, NodeStore, Tree, build_tree};
use tantivy::tokenizer::Language;
use tracing::{debug, trace};

use crate::{
    SearchError,
    analyzer::{Word, WordStemmer, significant_stems},
    ranges::emphasize,
};

/// Groups with fewer members than this are discarded.
pub const MIN_GROUP_SIZE: usize = 2;

/// Nodes that matched the same combination of query words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchGroup {
    /// Query words of the combination, space separated, in query order.
    pub key: String,
    /// Number of query words in the combination.
    pub words: usize,
    /// Number of nodes that matched, before ancestors were added.
    pub matches: usize,
    /// Matched nodes with emphasized content, followed by missing ancestors.
    pub nodes: Vec<Node>,
}

impl SearchGroup {
    /// Builds the group's tree.
    pub fn tree(&self) -> Tree {
        build_tree(&self.nodes, None)
    }
}

/// A search group rendered as a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTree {
    /// The group key.
    pub key: String,
    /// Number of query words in the combination.
    pub words: usize,
    /// Number of matched nodes.
    pub matches: usize,
    /// Tree over the completed node list.
    pub tree: Tree,
}

/// All groups produced by one query, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// Surviving groups.
    pub groups: Vec<SearchGroup>,
}

impl SearchResults {
    /// Returns true if no group survived.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Looks up a group by key.
    pub fn get(&self, key: &str) -> Option<&SearchGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Returns the group keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    /// Sorts groups by ascending match count, then descending word count.
    ///
    /// The sort is stable: ties keep their order of first appearance.
    pub fn ranked(mut self) -> Vec<SearchGroup> {
        self.groups
            .sort_by(|a, b| a.matches.cmp(&b.matches).then(b.words.cmp(&a.words)));
        self.groups
    }

    /// Ranks the groups and builds a tree for each.
    pub fn ranked_trees(self) -> Vec<GroupTree> {
        self.ranked()
            .into_iter()
            .map(|group| GroupTree {
                tree: group.tree(),
                key: group.key,
                words: group.words,
                matches: group.matches,
            })
            .collect()
    }
}

/// A group while nodes are still being collected.
struct PendingGroup {
    /// Group key.
    key: String,
    /// Number of query words.
    words: usize,
    /// Matched nodes so far.
    nodes: Vec<Node>,
}

/// Runs stemmed searches over node stores.
#[derive(Clone, Default)]
pub struct Searcher {
    /// Stemmer used for both queries and content.
    stemmer: WordStemmer,
}

impl Searcher {
    /// Creates a searcher stemming in the given language.
    pub fn new(language: Language) -> Self {
        Self {
            stemmer: WordStemmer::new(language),
        }
    }

    /// Creates a searcher from a stemmer language name.
    pub fn from_language_name(name: &str) -> Result<Self, SearchError> {
        WordStemmer::from_name(name).map(|stemmer| Self { stemmer })
    }

    /// Searches `store` for `query`.
    ///
    /// An empty query, or one whose stems are all too short, yields no groups.
    ///
    /// # Panics
    ///
    /// Panics if a matched node's ancestor chain runs through a parent id
    /// missing from `store`, or if one node matches as many distinct query
    /// words as `usize` has bits (see [`word_subsets`]).
    pub fn search(&mut self, store: &NodeStore, query: &str) -> SearchResults {
        let query_words = self.stemmer.words(query);
        let query_stems = significant_stems(&query_words);
        if query_stems.is_empty() {
            return SearchResults::default();
        }

        let mut pending: Vec<PendingGroup> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for node in store.nodes() {
            let content = node.text();
            let words = self.stemmer.words(content);
            let content_stems = significant_stems(&words);

            // Query words this node matched, each with the content spellings it matched.
            let matched: Vec<(&str, Vec<&str>)> = query_stems
                .iter()
                .filter_map(|&(query_word, stem)| {
                    let spellings: Vec<&str> = content_stems
                        .iter()
                        .filter(|(_, s)| *s == stem)
                        .map(|(w, _)| *w)
                        .collect();
                    (!spellings.is_empty()).then_some((query_word, spellings))
                })
                .collect();
            if matched.is_empty() {
                continue;
            }
            trace!(id = %node.id, words = matched.len(), "node matched");

            for subset in word_subsets(matched.len()) {
                let key = subset
                    .iter()
                    .map(|&i| matched[i].0)
                    .collect::<Vec<_>>()
                    .join(" ");
                let spellings: HashSet<&str> = subset
                    .iter()
                    .flat_map(|&i| matched[i].1.iter().copied())
                    .collect();

                let mut hit = node.clone();
                if let Some(text) = &node.content {
                    hit.content = Some(emphasize(text, spans_of(&words, &spellings)));
                }

                let slot = *slots.entry(key.clone()).or_insert_with(|| {
                    pending.push(PendingGroup {
                        key,
                        words: subset.len(),
                        nodes: Vec::new(),
                    });
                    pending.len() - 1
                });
                pending[slot].nodes.push(hit);
            }
        }

        let total = pending.len();
        let groups: Vec<SearchGroup> = pending
            .into_iter()
            .filter(|group| group.nodes.len() >= MIN_GROUP_SIZE)
            .map(|group| SearchGroup {
                matches: group.nodes.len(),
                nodes: complete_nodes(group.nodes, store),
                key: group.key,
                words: group.words,
            })
            .collect();
        debug!(
            query,
            groups = groups.len(),
            discarded = total - groups.len(),
            "search finished"
        );
        SearchResults { groups }
    }
}

/// Searches with an English stemmer.
///
/// # Panics
///
/// Panics under the same conditions as [`Searcher::search`].
pub fn search_nodes(store: &NodeStore, query: &str) -> SearchResults {
    Searcher::default().search(store, query)
}

/// Enumerates every non-empty subset of `0..count`.
///
/// Subsets come in binary counting order, so for `[a, b, c]` the order is
/// `a`, `b`, `a b`, `c`, `a c`, `b c`, `a b c`. Members of each subset are
/// ascending. The number of subsets is `2^count - 1`; `count` is bounded by the
/// number of distinct words in a query.
///
/// # Panics
///
/// Panics if `count` is not below the bit width of `usize`.
pub fn word_subsets(count: usize) -> impl Iterator<Item = Vec<usize>> {
    assert!(
        count < usize::BITS as usize,
        "cannot enumerate subsets of {count} words"
    );
    (1..1usize << count).map(move |mask| {
        (0..count)
            .filter(|i| mask & (1 << i) != 0)
            .collect()
    })
}

/// Byte spans of every word whose spelling is in `spellings`.
fn spans_of(words: &[Word<'_>], spellings: &HashSet<&str>) -> Vec<Range<usize>> {
    words
        .iter()
        .filter(|w| spellings.contains(w.text))
        .map(|w| w.span.clone())
        .collect()
}

/// Appends each matched node's missing ancestors.
///
/// Walking up from a node stops at the first ancestor already present.
fn complete_nodes(matched: Vec<Node>, store: &NodeStore) -> Vec<Node> {
    let mut present: HashSet<String> = matched.iter().map(|n| n.id.clone()).collect();
    let mut nodes = matched;
    for i in 0..nodes.len() {
        let mut parent = nodes[i].parent.clone();
        while let Some(id) = parent {
            if present.contains(&id) {
                break;
            }
            let Some(ancestor) = store.find_node(&id) else {
                panic!("parent must resolve: no node with id {id}");
            };
            parent = ancestor.parent.clone();
            present.insert(id);
            nodes.push(ancestor.clone());
        }
    }
    nodes
}
