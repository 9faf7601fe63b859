use std::ops::Index;

use crate::traversal::TreeNode;
use crate::{
    Children, Result, SuffixEdge, SuffixError, SuffixPath, SuffixTreeEdge, SuffixTrieEdge,
    Symbol, TerminatedText,
};

/// A node of a suffix tree or suffix trie.
///
/// Leaves record where their suffix starts in the text. Intermediate nodes
/// own their children exclusively, so a structure is always a tree: no
/// sharing, no cycles. Nodes are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SuffixNode<E> {
    /// End of the suffix starting at `start`.
    Leaf {
        /// Text offset of the suffix.
        start: usize,
    },
    /// Branching node.
    Intermediate {
        /// Outgoing edges and the subtrees they lead to.
        children: Children<E, SuffixNode<E>>,
    },
}

/// Node of a suffix tree (edges span any number of symbols).
pub type SuffixTreeNode = SuffixNode<SuffixTreeEdge>;

/// Node of a suffix trie (edges span exactly one symbol).
pub type SuffixTrieNode = SuffixNode<SuffixTrieEdge>;

impl<E: SuffixEdge> SuffixNode<E> {
    /// A leaf for the suffix starting at `start`.
    #[inline]
    pub fn leaf(start: usize) -> Self {
        SuffixNode::Leaf { start }
    }

    /// An intermediate node over `children`.
    ///
    /// Borrowed maps are copied, so the node never observes later changes
    /// to them.
    pub fn intermediate(children: impl Into<Children<E, Self>>) -> Self {
        SuffixNode::Intermediate {
            children: children.into(),
        }
    }

    /// Whether this is a [`SuffixNode::Leaf`].
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, SuffixNode::Leaf { .. })
    }

    /// Start of the suffix for leaves, `None` for intermediate nodes.
    #[inline]
    pub fn leaf_start(&self) -> Option<usize> {
        match self {
            SuffixNode::Leaf { start } => Some(*start),
            SuffixNode::Intermediate { .. } => None,
        }
    }

    /// Read-only children for intermediate nodes, `None` for leaves.
    #[inline]
    pub fn children(&self) -> Option<&Children<E, Self>> {
        match self {
            SuffixNode::Leaf { .. } => None,
            SuffixNode::Intermediate { children } => Some(children),
        }
    }

    /// The child reached through `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixError::MissingEdge`] if this is a leaf or no child is
    /// reached through `edge`.
    pub fn child(&self, edge: &E) -> Result<&Self> {
        self.children()
            .and_then(|children| children.get(edge))
            .ok_or_else(|| SuffixError::MissingEdge(format!("{edge:?}")))
    }

    /// Every leaf below this node with the path leading to it.
    ///
    /// Paths come out in depth-first order over ascending edges; callers
    /// should not rely on that. A leaf yields one empty path.
    pub fn node_to_leaf_paths(&self) -> LeafPaths<'_, E> {
        LeafPaths {
            stack: vec![(self, 0, None)],
            path_buf: Vec::new(),
        }
    }

    /// The strings spelled by every node-to-leaf path, decoded against the
    /// text this structure was built from.
    ///
    /// From the root these are exactly the suffixes of `text`.
    pub fn suffixes_for<S: Symbol>(&self, text: &TerminatedText<S>) -> Vec<Vec<S>> {
        self.node_to_leaf_paths()
            .map(|path| path.suffix_for(text))
            .collect()
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(children) = node.children() {
                stack.extend(children.nodes());
            }
        }
        count
    }
}

impl<E: SuffixEdge> Index<&E> for SuffixNode<E> {
    type Output = Self;

    /// # Panics
    ///
    /// If this is a leaf or no child is reached through `edge`.
    fn index(&self, edge: &E) -> &Self {
        match self.children() {
            Some(children) => &children[edge],
            None => panic!("leaf has no child through edge {edge:?}"),
        }
    }
}

impl<E: SuffixEdge> TreeNode for SuffixNode<E> {
    type Edge = E;

    fn child_entries(&self) -> impl Iterator<Item = (&E, &Self)> {
        self.children().into_iter().flat_map(Children::iter)
    }
}

/// Iterator returned by [`SuffixNode::node_to_leaf_paths`].
pub struct LeafPaths<'a, E> {
    /// DFS stack: (node, parent depth, edge from the parent).
    stack: Vec<(&'a SuffixNode<E>, usize, Option<E>)>,
    /// Shared path prefix, truncated back to the parent depth on each pop.
    path_buf: Vec<(E, &'a SuffixNode<E>)>,
}

impl<'a, E: SuffixEdge> Iterator for LeafPaths<'a, E> {
    type Item = SuffixPath<'a, E>;

    fn next(&mut self) -> Option<SuffixPath<'a, E>> {
        while let Some((node, parent_depth, edge)) = self.stack.pop() {
            self.path_buf.truncate(parent_depth);
            if let Some(edge) = edge {
                self.path_buf.push((edge, node));
            }
            match node {
                SuffixNode::Leaf { .. } => {
                    return Some(SuffixPath::from_validated(self.path_buf.clone()));
                }
                SuffixNode::Intermediate { children } => {
                    let depth = self.path_buf.len();
                    for (&edge, child) in children.iter().rev() {
                        self.stack.push((child, depth, Some(edge)));
                    }
                }
            }
        }
        None
    }
}
