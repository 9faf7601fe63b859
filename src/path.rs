use crate::{Result, SuffixEdge, SuffixError, SuffixNode, Symbol, TerminatedText};

/// A downward path through a suffix structure.
///
/// Each `(edge, node)` pair holds the edge taken and the node it leads to;
/// every node is the child of the previous one through exactly that edge.
/// Paths borrow the structure they walk and cannot be modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixPath<'a, E> {
    pairs: Vec<(E, &'a SuffixNode<E>)>,
}

impl<'a, E: SuffixEdge> SuffixPath<'a, E> {
    /// A path with no edges.
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Follows `edges` downward from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixError::InvalidPath`] with the index of the first edge
    /// that does not lead to a child of the node reached so far.
    pub fn from_edges(root: &'a SuffixNode<E>, edges: impl IntoIterator<Item = E>) -> Result<Self> {
        let mut pairs = Vec::new();
        let mut current = root;
        for (position, edge) in edges.into_iter().enumerate() {
            current = current
                .child(&edge)
                .map_err(|_| SuffixError::InvalidPath { position })?;
            pairs.push((edge, current));
        }
        Ok(Self { pairs })
    }

    /// Wraps pairs already known to descend edge by edge.
    pub(crate) fn from_validated(pairs: Vec<(E, &'a SuffixNode<E>)>) -> Self {
        debug_assert!(pairs
            .windows(2)
            .all(|w| w[0].1.child(&w[1].0).is_ok_and(|c| std::ptr::eq(c, w[1].1))));
        Self { pairs }
    }

    /// Appends `tail` to this path.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixError::InvalidPath`] (position relative to the joined
    /// path) if the first node of `tail` is not a child of the last node of
    /// this path through the first edge of `tail`.
    pub fn concat(&self, tail: &SuffixPath<'a, E>) -> Result<Self> {
        if let (Some(last), Some(&(edge, first))) = (self.last_node(), tail.pairs.first()) {
            match last.child(&edge) {
                Ok(child) if std::ptr::eq(child, first) => {}
                _ => {
                    return Err(SuffixError::InvalidPath {
                        position: self.pairs.len(),
                    })
                }
            }
        }
        let mut pairs = self.pairs.clone();
        pairs.extend_from_slice(&tail.pairs);
        Ok(Self { pairs })
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the path has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The `(edge, node)` pairs from top to bottom.
    #[inline]
    pub fn pairs(&self) -> &[(E, &'a SuffixNode<E>)] {
        &self.pairs
    }

    /// Edges from top to bottom.
    pub fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.pairs.iter().map(|(edge, _)| edge)
    }

    /// Nodes from top to bottom.
    pub fn nodes(&self) -> impl Iterator<Item = &'a SuffixNode<E>> + '_ {
        self.pairs.iter().map(|&(_, node)| node)
    }

    /// The bottom node, `None` for an empty path.
    pub fn last_node(&self) -> Option<&'a SuffixNode<E>> {
        self.pairs.last().map(|&(_, node)| node)
    }

    /// Start of the suffix if the path ends at a leaf.
    pub fn leaf_start(&self) -> Option<usize> {
        self.last_node().and_then(SuffixNode::leaf_start)
    }

    /// Total number of symbols spelled by the path.
    pub fn total_edges_len(&self) -> usize {
        self.pairs.iter().map(|(edge, _)| edge.len()).sum()
    }

    /// Whether any edge of the path spans text offset `index`.
    pub fn contains_index(&self, index: usize) -> bool {
        self.pairs
            .iter()
            .any(|(edge, _)| edge.start() <= index && index < edge.end())
    }

    /// The symbols spelled by the path, read from `text`.
    pub fn suffix_for<S: Symbol>(&self, text: &TerminatedText<S>) -> Vec<S> {
        let mut out = Vec::with_capacity(self.total_edges_len());
        for (edge, _) in &self.pairs {
            out.extend_from_slice(text.span(edge.start(), edge.len()));
        }
        out
    }
}

impl<E: SuffixEdge> Default for SuffixPath<'_, E> {
    fn default() -> Self {
        Self::empty()
    }
}
