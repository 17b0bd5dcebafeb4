// Online suffix tree over a single symbol string
//
// Built with Ukkonen's algorithm (see `builder`). Nodes live in an arena and
// refer to each other by `NodeId`; suffix links are optional ids, so the
// structure has no ownership cycles.
//
// The tree is implicit: there is no terminator symbol, so a suffix that is
// also a prefix of another suffix ends in the middle of an edge. Queries only
// rely on the suffix property (every substring is a path prefix from the
// root), which holds for implicit trees as well.

mod builder;
mod node;

pub use node::{Node, NodeId, OPEN_END};

use builder::{TreeBuilder, ROOT};
use std::fmt;

/// Suffix tree with substring containment and occurrence queries
///
/// # Example
/// ```
/// use tarzan::SuffixTree;
///
/// let tree = SuffixTree::new("mississippi");
/// assert!(tree.has_substring("issi"));
/// assert_eq!(tree.occurrence_count("issi"), Some(2));
/// assert_eq!(tree.occurrence_count("mississippians"), None);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTree {
    nodes: Vec<Node>,
    text: Vec<char>,
}

impl SuffixTree {
    /// Build the tree over `text`, feeding its symbols one at a time
    pub fn new(text: &str) -> Self {
        let mut builder = TreeBuilder::with_capacity(text.len());
        for symbol in text.chars() {
            builder.extend(symbol);
        }
        let (nodes, text) = builder.finish();

        tracing::debug!(
            symbols = text.len(),
            nodes = nodes.len(),
            "built suffix tree"
        );

        Self { nodes, text }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// The source string the tree was built from
    pub fn text_string(&self) -> String {
        self.text.iter().collect()
    }

    /// Number of symbols in the text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Symbols on the edge leading into `id`; empty for the root
    pub fn edge_label(&self, id: NodeId) -> &[char] {
        if id == ROOT {
            return &[];
        }
        let node = &self.nodes[id.0];
        &self.text[node.start..node.end.min(self.text.len())]
    }

    /// Whether `pattern` occurs as a contiguous substring of the text
    ///
    /// Empty patterns are reported as not found.
    pub fn has_substring(&self, pattern: &str) -> bool {
        let pattern: Vec<char> = pattern.chars().collect();
        self.contains(&pattern)
    }

    /// Number of (possibly overlapping) occurrences of `pattern`
    ///
    /// Returns `None` when the pattern is longer than the text, since no
    /// occurrence position exists at all. An empty pattern counts zero.
    pub fn occurrence_count(&self, pattern: &str) -> Option<usize> {
        let pattern: Vec<char> = pattern.chars().collect();
        self.count(&pattern)
    }

    /// Stored surprise value of the node whose edge contains the end of
    /// `pattern`
    ///
    /// Returns `None` (not annotated) when the pattern does not occur, is
    /// empty, or the node was never annotated.
    pub fn surprise_value(&self, pattern: &str) -> Option<f64> {
        let pattern: Vec<char> = pattern.chars().collect();
        self.surprise_of(&pattern)
    }

    /// Surprise values of every non-root node in pre-order
    ///
    /// Children are visited in symbol order; unannotated nodes yield `0.0`.
    /// Each call starts a fresh traversal.
    pub fn surprise_values(&self) -> SurpriseValues<'_> {
        SurpriseValues::new(self)
    }

    pub(crate) fn contains(&self, pattern: &[char]) -> bool {
        self.locate(pattern).is_some()
    }

    pub(crate) fn count(&self, pattern: &[char]) -> Option<usize> {
        if pattern.len() > self.text.len() {
            return None;
        }
        if pattern.is_empty() || !self.contains(pattern) {
            return Some(0);
        }
        Some(
            self.text
                .windows(pattern.len())
                .filter(|window| *window == pattern)
                .count(),
        )
    }

    pub(crate) fn surprise_of(&self, pattern: &[char]) -> Option<f64> {
        self.locate(pattern)
            .and_then(|id| self.nodes[id.0].surprise)
    }

    pub(crate) fn set_surprise(&mut self, id: NodeId, value: f64) {
        debug_assert!(id != ROOT, "the root carries no surprise value");
        self.nodes[id.0].surprise = Some(value);
    }

    /// Descend from the root along `pattern`, comparing every symbol
    ///
    /// Returns the node whose incoming edge the pattern ends on (or exactly
    /// at its end).
    fn locate(&self, pattern: &[char]) -> Option<NodeId> {
        let mut rest = pattern;
        let mut current = ROOT;

        while let Some(&first) = rest.first() {
            let child = self.nodes[current.0].child(first)?;
            let label = self.edge_label(child);
            let matched = label.len().min(rest.len());

            if label[..matched] != rest[..matched] {
                return None;
            }
            if rest.len() <= label.len() {
                return Some(child);
            }

            rest = &rest[label.len()..];
            current = child;
        }

        None
    }
}

impl fmt::Display for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start\tend\tlink\tid\tchildren")?;
        for node in &self.nodes {
            let end = if node.end == OPEN_END {
                "inf".to_string()
            } else {
                node.end.to_string()
            };
            let link = node
                .suffix_link
                .map(|link| link.0.to_string())
                .unwrap_or_else(|| "-".to_string());
            let children: Vec<String> = node
                .children()
                .map(|(symbol, child)| format!("{} => {}", symbol, child.0))
                .collect();
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                node.start,
                end,
                link,
                node.id.0,
                children.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Pre-order iterator over the surprise values of a tree's non-root nodes
pub struct SurpriseValues<'a> {
    tree: &'a SuffixTree,
    stack: Vec<NodeId>,
}

impl<'a> SurpriseValues<'a> {
    fn new(tree: &'a SuffixTree) -> Self {
        let mut values = Self {
            tree,
            stack: Vec::new(),
        };
        values.push_children(ROOT);
        values
    }

    fn push_children(&mut self, id: NodeId) {
        // Reversed so the smallest symbol is popped first
        let children = &self.tree.nodes[id.0].children;
        self.stack.extend(children.values().rev().copied());
    }
}

impl Iterator for SurpriseValues<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let id = self.stack.pop()?;
        self.push_children(id);
        Some(self.tree.nodes[id.0].surprise.unwrap_or(0.0))
    }
}
