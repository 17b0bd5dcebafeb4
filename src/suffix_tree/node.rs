use std::collections::BTreeMap;

/// End marker for leaf edges that grow with the text during construction
pub const OPEN_END: usize = usize::MAX;

/// Index of a node inside the arena of the tree that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in its tree's arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of a suffix tree
///
/// The edge leading into a node is labelled `text[start..end)`. Leaves carry
/// `end == OPEN_END` and always extend to the end of the text.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) children: BTreeMap<char, NodeId>,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) surprise: Option<f64>,
}

impl Node {
    pub(crate) fn new(id: NodeId, start: usize, end: usize) -> Self {
        Self {
            id,
            start,
            end,
            children: BTreeMap::new(),
            suffix_link: None,
            surprise: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Raw end index; `OPEN_END` for leaves
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in ascending symbol order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&symbol, &child)| (symbol, child))
    }

    pub fn child(&self, symbol: char) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Surprise value set by the annotator; `None` until annotated
    pub fn surprise(&self) -> Option<f64> {
        self.surprise
    }

    /// Edge length while the text is being extended at `position`
    #[inline]
    pub(crate) fn edge_length(&self, position: usize) -> usize {
        self.end.min(position + 1) - self.start
    }
}
