use std::collections::HashMap;

use crate::normalize::Normalizer;

pub(crate) type NodeId = u32;

const ROOT: NodeId = 0;

/// Mutable node used while keywords are being inserted.
#[derive(Debug, Default)]
struct BuilderNode {
    transitions: HashMap<char, NodeId>,
    /// Index into `TrieBuilder::keywords`.
    keyword: Option<u32>,
}

#[derive(Debug)]
pub(crate) struct TrieBuilder {
    nodes: Vec<BuilderNode>,
    keywords: Vec<String>,
}

impl TrieBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![BuilderNode::default()],
            keywords: Vec::new(),
        }
    }

    /// Insert `keyword` along the path spelled by its normalized scalars.
    ///
    /// The original spelling is stored at the terminal node. Returns the spelling it replaced when
    /// an earlier keyword normalized to the same path.
    pub(crate) fn insert(
        &mut self,
        keyword: String,
        normalizer: Option<&Normalizer>,
    ) -> Option<String> {
        debug_assert!(!keyword.is_empty(), "empty keywords must be rejected by the caller");

        let mut current = ROOT;
        for c in keyword.chars() {
            let c = normalizer.map_or(c, |n| n.apply(c));
            current = match self.nodes[current as usize].transitions.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(BuilderNode::default());
                    self.nodes[current as usize].transitions.insert(c, next);
                    next
                }
            };
        }

        match self.nodes[current as usize].keyword {
            Some(ix) => Some(std::mem::replace(&mut self.keywords[ix as usize], keyword)),
            None => {
                self.nodes[current as usize].keyword = Some(self.keywords.len() as u32);
                self.keywords.push(keyword);
                None
            }
        }
    }

    /// Freeze into the read-only representation.
    ///
    /// Node ids are preserved; each node's outgoing edges become a contiguous run sorted by
    /// scalar value.
    pub(crate) fn build(self) -> KeywordTrie {
        let edge_count: usize = self.nodes.iter().map(|n| n.transitions.len()).sum();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut edge_chars = Vec::with_capacity(edge_count);
        let mut edge_targets = Vec::with_capacity(edge_count);

        let mut edges: Vec<(char, NodeId)> = Vec::new();
        for node in &self.nodes {
            edges.clear();
            edges.extend(node.transitions.iter().map(|(&c, &target)| (c, target)));
            edges.sort_unstable_by_key(|&(c, _)| c);

            let edges_start = edge_chars.len() as u32;
            for &(c, target) in &edges {
                edge_chars.push(c);
                edge_targets.push(target);
            }
            nodes.push(Node {
                edges_start,
                edges_end: edge_chars.len() as u32,
                keyword: node.keyword,
            });
        }

        debug_assert_eq!(edge_chars.len(), edge_count);
        debug_assert_eq!(edge_chars.len(), edge_targets.len());

        KeywordTrie {
            nodes,
            edge_chars,
            edge_targets,
            keywords: self.keywords,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Node {
    /// `edge_chars[edges_start..edges_end]` are this node's outgoing scalars (sorted).
    edges_start: u32,
    edges_end: u32,
    keyword: Option<u32>,
}

/// Immutable prefix tree keyed by (normalized) Unicode scalar values.
#[derive(Debug, Clone)]
pub(crate) struct KeywordTrie {
    nodes: Vec<Node>,
    edge_chars: Vec<char>,
    /// Parallel to `edge_chars`.
    edge_targets: Vec<NodeId>,
    keywords: Vec<String>,
}

impl KeywordTrie {
    #[inline]
    pub(crate) fn step(&self, node: NodeId, c: char) -> Option<NodeId> {
        let node = &self.nodes[node as usize];
        let start = node.edges_start as usize;
        let chars = &self.edge_chars[start..node.edges_end as usize];
        chars
            .binary_search(&c)
            .ok()
            .map(|ix| self.edge_targets[start + ix])
    }

    #[inline]
    pub(crate) fn keyword(&self, node: NodeId) -> Option<&str> {
        self.nodes[node as usize]
            .keyword
            .map(|ix| self.keywords[ix as usize].as_str())
    }

    #[inline]
    pub(crate) fn has_children(&self, node: NodeId) -> bool {
        let node = &self.nodes[node as usize];
        node.edges_end > node.edges_start
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Position of an incremental walk from the root.
///
/// A cursor that fell off the trie stays dead; no longer input can match from there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    node: Option<NodeId>,
}

impl Cursor {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { node: Some(ROOT) }
    }

    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.node.is_some()
    }

    /// Follow the edge for `c`. `None` is the sentinel for undecodable input and never matches.
    #[inline]
    pub(crate) fn advance(&mut self, trie: &KeywordTrie, c: Option<char>) -> bool {
        self.node = match (self.node, c) {
            (Some(node), Some(c)) => trie.step(node, c),
            _ => None,
        };
        self.node.is_some()
    }

    /// `(keyword stored here, whether longer input could still reach a keyword)`.
    #[inline]
    pub(crate) fn outcome<'t>(&self, trie: &'t KeywordTrie) -> (Option<&'t str>, bool) {
        match self.node {
            Some(node) => (trie.keyword(node), trie.has_children(node)),
            None => (None, false),
        }
    }

    #[inline]
    pub(crate) fn matched<'t>(&self, trie: &'t KeywordTrie) -> Option<&'t str> {
        self.node.and_then(|node| trie.keyword(node))
    }
}
