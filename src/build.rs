use crate::{
    Children, SuffixEdge, SuffixNode, SuffixTreeEdge, SuffixTreeNode, SuffixTrieEdge,
    SuffixTrieNode, Symbol, TerminatedText,
};

/// Mutable node used while inserting suffixes; frozen into a [`SuffixNode`]
/// once every suffix is in.
struct Draft<E> {
    edges: Vec<(E, Draft<E>)>,
    leaf: Option<usize>,
}

impl<E: SuffixEdge> Draft<E> {
    fn branch() -> Self {
        Self {
            edges: Vec::new(),
            leaf: None,
        }
    }

    fn leaf(start: usize) -> Self {
        Self {
            edges: Vec::new(),
            leaf: Some(start),
        }
    }

    /// Index of the child whose edge starts with `symbol`.
    fn child_starting_with<S: Symbol>(&self, text: &[S], symbol: S) -> Option<usize> {
        self.edges
            .iter()
            .position(|(edge, _)| text[edge.start()] == symbol)
    }

    fn freeze(self) -> SuffixNode<E> {
        match self.leaf {
            Some(start) => SuffixNode::leaf(start),
            None => SuffixNode::intermediate(
                self.edges
                    .into_iter()
                    .map(|(edge, child)| (edge, child.freeze()))
                    .collect::<Children<_, _>>(),
            ),
        }
    }
}

/// Builds the suffix trie of `text`: one edge per symbol, one leaf per
/// suffix.
///
/// Takes time and space quadratic in the text length.
pub fn build_suffix_trie<S: Symbol>(text: &TerminatedText<S>) -> SuffixTrieNode {
    let symbols = text.as_slice();
    let n = symbols.len();
    let mut root = Draft::branch();

    for start in 0..n {
        let mut node = &mut root;
        for pos in start..n {
            let idx = match node.child_starting_with(symbols, symbols[pos]) {
                Some(idx) => idx,
                None => {
                    // The terminator is unique, so the last step always
                    // creates the leaf.
                    let child = if pos + 1 == n {
                        Draft::leaf(start)
                    } else {
                        Draft::branch()
                    };
                    node.edges.push((SuffixTrieEdge::new(pos), child));
                    node.edges.len() - 1
                }
            };
            let current = node;
            node = &mut current.edges[idx].1;
        }
        debug_assert_eq!(node.leaf, Some(start));
    }

    let trie = root.freeze();
    log::debug!("suffix trie built: {} nodes over {n} symbols", trie.node_count());
    trie
}

/// Builds the suffix tree of `text`: chains of single-child nodes are
/// compressed into one edge, so every intermediate node but the root
/// branches.
pub fn build_suffix_tree<S: Symbol>(text: &TerminatedText<S>) -> SuffixTreeNode {
    let symbols = text.as_slice();
    let n = symbols.len();
    let mut root = Draft::branch();

    for start in 0..n {
        let mut node = &mut root;
        let mut pos = start;
        loop {
            let Some(idx) = node.child_starting_with(symbols, symbols[pos]) else {
                let leaf_edge = SuffixTreeEdge::new(pos, n - pos);
                node.edges.push((leaf_edge, Draft::leaf(start)));
                break;
            };

            let edge = node.edges[idx].0;
            let limit = edge.len().min(n - pos);
            let matched = (0..limit)
                .take_while(|&k| symbols[edge.start() + k] == symbols[pos + k])
                .count();

            if matched == edge.len() {
                pos += matched;
                let current = node;
                node = &mut current.edges[idx].1;
                continue;
            }

            // Split the edge where the suffix diverges from it.
            let (_, old_child) = node.edges.swap_remove(idx);
            let mut middle = Draft::branch();
            middle.edges.push((
                SuffixTreeEdge::new(edge.start() + matched, edge.len() - matched),
                old_child,
            ));
            middle.edges.push((
                SuffixTreeEdge::new(pos + matched, n - pos - matched),
                Draft::leaf(start),
            ));
            node.edges.push((SuffixTreeEdge::new(edge.start(), matched), middle));
            break;
        }
    }

    let tree = root.freeze();
    log::debug!("suffix tree built: {} nodes over {n} symbols", tree.node_count());
    tree
}
