use std::collections::{btree_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

/// Read-only edge→child mapping of an intermediate node.
///
/// The mapping is owned by the node and copied out of borrowed sources at
/// construction, so later changes to the caller's map never reach the node.
/// There is no mutating API:
///
/// ```compile_fail
/// use suffix_match::{SuffixTreeEdge, SuffixTreeNode};
///
/// let root = SuffixTreeNode::intermediate([(SuffixTreeEdge::new(0, 1), SuffixTreeNode::leaf(0))]);
/// let children = root.children().unwrap();
/// children.insert(SuffixTreeEdge::new(1, 1), SuffixTreeNode::leaf(1));
/// ```
///
/// Iteration follows ascending edge order, which is the "natural" children
/// order seen by traversals.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Children<E, N> {
    map: BTreeMap<E, N>,
}

impl<E: Ord, N> Children<E, N> {
    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The child reached through `edge`, if any.
    #[inline]
    pub fn get(&self, edge: &E) -> Option<&N> {
        self.map.get(edge)
    }

    /// Whether `edge` leads to a child.
    #[inline]
    pub fn contains_edge(&self, edge: &E) -> bool {
        self.map.contains_key(edge)
    }

    /// `(edge, child)` pairs in ascending edge order.
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, E, N> {
        self.map.iter()
    }

    /// Outgoing edges in ascending order.
    pub fn edges(&self) -> btree_map::Keys<'_, E, N> {
        self.map.keys()
    }

    /// Children in ascending edge order.
    pub fn nodes(&self) -> btree_map::Values<'_, E, N> {
        self.map.values()
    }
}

impl<E, N> Default for Children<E, N> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<E: Ord + std::fmt::Debug, N> Index<&E> for Children<E, N> {
    type Output = N;

    /// # Panics
    ///
    /// If no child is reached through `edge`.
    fn index(&self, edge: &E) -> &N {
        match self.map.get(edge) {
            Some(child) => child,
            None => panic!("no child through edge {edge:?}"),
        }
    }
}

impl<'a, E, N> IntoIterator for &'a Children<E, N> {
    type Item = (&'a E, &'a N);
    type IntoIter = btree_map::Iter<'a, E, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<E: Ord, N> From<BTreeMap<E, N>> for Children<E, N> {
    fn from(map: BTreeMap<E, N>) -> Self {
        Self { map }
    }
}

impl<E: Ord + Clone, N: Clone> From<&BTreeMap<E, N>> for Children<E, N> {
    fn from(map: &BTreeMap<E, N>) -> Self {
        Self { map: map.clone() }
    }
}

impl<E: Ord + Hash + Clone, N: Clone, H: BuildHasher> From<&HashMap<E, N, H>> for Children<E, N> {
    fn from(map: &HashMap<E, N, H>) -> Self {
        map.iter().map(|(e, n)| (e.clone(), n.clone())).collect()
    }
}

impl<E: Ord, N, const K: usize> From<[(E, N); K]> for Children<E, N> {
    fn from(pairs: [(E, N); K]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<E: Ord, N> FromIterator<(E, N)> for Children<E, N> {
    /// Collects pairs into a mapping. A repeated edge keeps the last child.
    fn from_iter<I: IntoIterator<Item = (E, N)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
