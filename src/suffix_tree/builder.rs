// Online suffix tree construction (Ukkonen)
//
// Symbols are appended one at a time. Pending suffix insertions are tracked
// by `remainder`; the active point says where the next one goes. Suffix links
// let each insertion jump to the next shorter suffix instead of rescanning
// from the root, which keeps construction amortized linear.

use crate::suffix_tree::node::{Node, NodeId, OPEN_END};

pub(crate) const ROOT: NodeId = NodeId(0);

/// Construction cursor, owned by the builder for the lifetime of one build
#[derive(Debug, Clone)]
struct ActivePoint {
    node: NodeId,
    /// Index into the text of the first symbol of the active edge
    edge: usize,
    length: usize,
    /// Suffixes still waiting to be inserted explicitly
    remainder: usize,
    /// Last internal node created (or visited) for the current symbol
    pending_link: Option<NodeId>,
}

impl ActivePoint {
    fn at_root() -> Self {
        Self {
            node: ROOT,
            edge: 0,
            length: 0,
            remainder: 0,
            pending_link: None,
        }
    }
}

pub(crate) struct TreeBuilder {
    nodes: Vec<Node>,
    text: Vec<char>,
    active: ActivePoint,
}

impl TreeBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        // A suffix tree over n symbols has at most 2n nodes
        let mut nodes = Vec::with_capacity(2 * capacity + 1);
        nodes.push(Node::new(ROOT, 0, 0));
        Self {
            nodes,
            text: Vec::with_capacity(capacity),
            active: ActivePoint::at_root(),
        }
    }

    pub(crate) fn finish(self) -> (Vec<Node>, Vec<char>) {
        (self.nodes, self.text)
    }

    fn new_node(&mut self, start: usize, end: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, start, end));
        id
    }

    /// Link the previously pending node to `node`, then make `node` pending
    fn add_suffix_link(&mut self, node: NodeId) {
        if let Some(pending) = self.active.pending_link {
            self.nodes[pending.0].suffix_link = Some(node);
        }
        self.active.pending_link = Some(node);
    }

    /// Skip/count: hop over `next` when the active length covers its edge
    fn walk_down(&mut self, next: NodeId, position: usize) -> bool {
        let edge_length = self.nodes[next.0].edge_length(position);
        if self.active.length >= edge_length {
            self.active.edge += edge_length;
            self.active.length -= edge_length;
            self.active.node = next;
            return true;
        }
        false
    }

    pub(crate) fn extend(&mut self, symbol: char) {
        self.text.push(symbol);
        let position = self.text.len() - 1;
        self.active.pending_link = None;
        self.active.remainder += 1;

        while self.active.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = position;
            }

            let active_node = self.active.node;
            let edge_symbol = self.text[self.active.edge];

            match self.nodes[active_node.0].child(edge_symbol) {
                None => {
                    let leaf = self.new_node(position, OPEN_END);
                    self.nodes[active_node.0].children.insert(edge_symbol, leaf);
                    self.add_suffix_link(active_node);
                }
                Some(next) => {
                    if self.walk_down(next, position) {
                        continue;
                    }

                    let next_start = self.nodes[next.0].start;
                    if self.text[next_start + self.active.length] == symbol {
                        // Already present implicitly; postpone the insertions
                        self.active.length += 1;
                        self.add_suffix_link(active_node);
                        break;
                    }

                    let split = self.new_node(next_start, next_start + self.active.length);
                    self.nodes[active_node.0].children.insert(edge_symbol, split);

                    let leaf = self.new_node(position, OPEN_END);
                    self.nodes[split.0].children.insert(symbol, leaf);

                    self.nodes[next.0].start += self.active.length;
                    let next_symbol = self.text[self.nodes[next.0].start];
                    self.nodes[split.0].children.insert(next_symbol, next);

                    self.add_suffix_link(split);
                }
            }

            self.active.remainder -= 1;

            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = position + 1 - self.active.remainder;
            } else {
                self.active.node = self.nodes[self.active.node.0]
                    .suffix_link
                    .unwrap_or(ROOT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> (Vec<Node>, Vec<char>) {
        let mut builder = TreeBuilder::with_capacity(text.len());
        for symbol in text.chars() {
            builder.extend(symbol);
        }
        builder.finish()
    }

    #[test]
    fn test_distinct_symbols_make_one_leaf_each() {
        let (nodes, text) = build("abc");
        assert_eq!(text, vec!['a', 'b', 'c']);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].children.len(), 3);
        assert!(nodes[1..].iter().all(|node| node.end == OPEN_END));
    }

    #[test]
    fn test_repeated_symbol_stays_implicit() {
        // "aa": the suffix "a" is a prefix of "aa" and is never split out
        let (nodes, _) = build("aa");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].children.len(), 1);
    }

    #[test]
    fn test_split_creates_internal_node_with_suffix_link() {
        let (nodes, _) = build("abcabx");
        let internal: Vec<&Node> = nodes[1..].iter().filter(|n| !n.is_leaf()).collect();

        // "ab" and "b" become internal nodes; "ab" links to "b"
        assert_eq!(internal.len(), 2);
        let ab = internal.iter().find(|n| n.end - n.start == 2).unwrap();
        let b = internal.iter().find(|n| n.end - n.start == 1).unwrap();
        assert_eq!(ab.suffix_link, Some(b.id));
    }

    #[test]
    fn test_siblings_never_share_first_symbol() {
        let (nodes, text) = build("abracadabra");
        for node in &nodes {
            for (&symbol, &child) in &node.children {
                assert_eq!(text[nodes[child.0].start], symbol);
            }
        }
    }
}
