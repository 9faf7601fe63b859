//! Lazy traversals over immutable, edge-indexed trees.
//!
//! A traversal is a pull-based iterator of [`TreeVisit`]s. Nothing is
//! computed ahead of the consumer: stopping early is just dropping the
//! iterator.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::SuffixError;

/// A node of an immutable tree whose children are indexed by edges.
pub trait TreeNode {
    /// Edge type labelling parent→child links.
    type Edge;

    /// `(edge, child)` pairs in the node's natural order. Empty for leaves.
    fn child_entries(&self) -> impl Iterator<Item = (&Self::Edge, &Self)>;
}

/// Relative order of a parent and its descendants in a traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Parent before its children (preorder).
    #[default]
    ParentFirst,
    /// Children before their parent (postorder).
    ChildrenFirst,
}

impl TryFrom<i32> for TraversalOrder {
    type Error = SuffixError;

    /// `0` is [`ParentFirst`](Self::ParentFirst), `1` is
    /// [`ChildrenFirst`](Self::ChildrenFirst).
    fn try_from(code: i32) -> Result<Self, SuffixError> {
        match code {
            0 => Ok(Self::ParentFirst),
            1 => Ok(Self::ChildrenFirst),
            other => Err(SuffixError::UnsupportedOrder(other.to_string())),
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = SuffixError;

    fn from_str(s: &str) -> Result<Self, SuffixError> {
        match s.to_ascii_lowercase().as_str() {
            "parent-first" | "preorder" => Ok(Self::ParentFirst),
            "children-first" | "postorder" => Ok(Self::ChildrenFirst),
            _ => Err(SuffixError::UnsupportedOrder(s.to_string())),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentFirst => write!(f, "parent-first"),
            Self::ChildrenFirst => write!(f, "children-first"),
        }
    }
}

/// Decides the order in which a node's children are explored.
///
/// Implementations must be pure: the output order may depend only on the
/// input pairs. Breadth-first traversals rely on this to keep same-level
/// nodes in depth-first order.
pub trait ChildrenSorter<N: TreeNode> {
    /// Reorders `children` in place.
    fn sort<'a>(&self, children: &mut [(&'a N::Edge, &'a N)]);
}

/// Keeps children in the mapping's natural order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<N: TreeNode> ChildrenSorter<N> for NaturalOrder {
    #[inline]
    fn sort<'a>(&self, _children: &mut [(&'a N::Edge, &'a N)]) {}
}

/// Ascending edge order.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeAscending;

impl<N: TreeNode> ChildrenSorter<N> for EdgeAscending
where
    N::Edge: Ord,
{
    fn sort<'a>(&self, children: &mut [(&'a N::Edge, &'a N)]) {
        children.sort_by(|a, b| a.0.cmp(b.0));
    }
}

/// Descending edge order.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDescending;

impl<N: TreeNode> ChildrenSorter<N> for EdgeDescending
where
    N::Edge: Ord,
{
    fn sort<'a>(&self, children: &mut [(&'a N::Edge, &'a N)]) {
        children.sort_by(|a, b| b.0.cmp(a.0));
    }
}

/// Stable sort of children by a comparator over `(edge, child)` pairs.
///
/// ```
/// use suffix_match::{SortBy, SuffixTreeEdge, SuffixTreeNode};
///
/// // Leaves first, then by edge.
/// let sorter = SortBy(
///     |a: (&SuffixTreeEdge, &SuffixTreeNode), b: (&SuffixTreeEdge, &SuffixTreeNode)| {
///         b.1.is_leaf().cmp(&a.1.is_leaf()).then(a.0.cmp(b.0))
///     },
/// );
/// # let _ = sorter;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SortBy<F>(pub F);

impl<N, F> ChildrenSorter<N> for SortBy<F>
where
    N: TreeNode,
    F: Fn((&N::Edge, &N), (&N::Edge, &N)) -> Ordering,
{
    fn sort<'a>(&self, children: &mut [(&'a N::Edge, &'a N)]) {
        children.sort_by(|a, b| (self.0)(*a, *b));
    }
}

/// Where a visited node sits in the tree.
pub struct VisitContext<'a, N: TreeNode> {
    /// Parent node, `None` at the traversal root.
    pub parent: Option<&'a N>,
    /// Edge from the parent, `None` at the traversal root.
    pub incoming_edge: Option<&'a N::Edge>,
    /// Depth from the traversal root (root = 0).
    pub level: usize,
}

impl<'a, N: TreeNode> VisitContext<'a, N> {
    fn root() -> Self {
        Self {
            parent: None,
            incoming_edge: None,
            level: 0,
        }
    }
}

impl<N: TreeNode> Clone for VisitContext<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: TreeNode> Copy for VisitContext<'_, N> {}

impl<N> fmt::Debug for VisitContext<'_, N>
where
    N: TreeNode + fmt::Debug,
    N::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitContext")
            .field("parent", &self.parent)
            .field("incoming_edge", &self.incoming_edge)
            .field("level", &self.level)
            .finish()
    }
}

/// A node emitted by a traversal, with its context.
pub struct TreeVisit<'a, N: TreeNode> {
    /// The visited node.
    pub node: &'a N,
    /// Parent, incoming edge and level of `node`.
    pub context: VisitContext<'a, N>,
}

impl<N: TreeNode> Clone for TreeVisit<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: TreeNode> Copy for TreeVisit<'_, N> {}

impl<N> fmt::Debug for TreeVisit<'_, N>
where
    N: TreeNode + fmt::Debug,
    N::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeVisit")
            .field("node", &self.node)
            .field("context", &self.context)
            .finish()
    }
}

/// A strategy producing a lazy sequence of visits from a root.
pub trait VisitStrategy<N: TreeNode> {
    /// Iterator returned by [`visit`](Self::visit).
    type Visits<'a>: Iterator<Item = TreeVisit<'a, N>>
    where
        Self: 'a,
        N: 'a;

    /// Order between parents and children applied by this strategy.
    fn order(&self) -> TraversalOrder;

    /// Lazily visits the tree rooted at `root`.
    fn visit<'a>(&'a self, root: &'a N) -> Self::Visits<'a>;

    /// Visits the whole tree, handing each visit to `visitor`.
    fn visit_with<'a, V>(&'a self, root: &'a N, visitor: V)
    where
        V: FnMut(TreeVisit<'a, N>),
    {
        self.visit(root).for_each(visitor);
    }
}

/// Depth-first traversal: preorder for [`TraversalOrder::ParentFirst`],
/// postorder for [`TraversalOrder::ChildrenFirst`], children explored in the
/// order given by the sorter.
#[derive(Clone, Debug, Default)]
pub struct DepthFirstTraversal<S = NaturalOrder> {
    order: TraversalOrder,
    sorter: S,
}

impl DepthFirstTraversal<NaturalOrder> {
    /// Depth-first traversal exploring children in natural order.
    pub fn new(order: TraversalOrder) -> Self {
        Self::with_sorter(order, NaturalOrder)
    }
}

impl<S> DepthFirstTraversal<S> {
    /// Depth-first traversal exploring children in the order given by `sorter`.
    pub fn with_sorter(order: TraversalOrder, sorter: S) -> Self {
        Self { order, sorter }
    }

    /// The children sorter.
    pub fn sorter(&self) -> &S {
        &self.sorter
    }
}

impl<N, S> VisitStrategy<N> for DepthFirstTraversal<S>
where
    N: TreeNode,
    S: ChildrenSorter<N>,
{
    type Visits<'a>
        = DepthFirstVisits<'a, N, S>
    where
        Self: 'a,
        N: 'a;

    fn order(&self) -> TraversalOrder {
        self.order
    }

    fn visit<'a>(&'a self, root: &'a N) -> DepthFirstVisits<'a, N, S> {
        DepthFirstVisits::new(root, self.order, &self.sorter)
    }
}

struct Frame<'a, N: TreeNode> {
    visit: TreeVisit<'a, N>,
    /// Children already pushed (postorder only).
    expanded: bool,
}

/// Iterator returned by [`DepthFirstTraversal::visit`].
pub struct DepthFirstVisits<'a, N: TreeNode, S> {
    order: TraversalOrder,
    sorter: &'a S,
    stack: Vec<Frame<'a, N>>,
    /// Preorder: last emitted visit, expanded on the following pull.
    pending: Option<TreeVisit<'a, N>>,
    /// Reusable buffer for sorting a node's children.
    children_buf: Vec<(&'a N::Edge, &'a N)>,
}

impl<'a, N, S> DepthFirstVisits<'a, N, S>
where
    N: TreeNode,
    S: ChildrenSorter<N>,
{
    pub(crate) fn new(root: &'a N, order: TraversalOrder, sorter: &'a S) -> Self {
        let root_frame = Frame {
            visit: TreeVisit {
                node: root,
                context: VisitContext::root(),
            },
            expanded: false,
        };
        Self {
            order,
            sorter,
            stack: vec![root_frame],
            pending: None,
            children_buf: Vec::new(),
        }
    }

    /// Pushes the children of `visit` so that the sorter's first child is
    /// popped first.
    fn push_children(&mut self, visit: TreeVisit<'a, N>) {
        self.children_buf.clear();
        self.children_buf.extend(visit.node.child_entries());
        self.sorter.sort(&mut self.children_buf);

        let level = visit.context.level + 1;
        for &(edge, child) in self.children_buf.iter().rev() {
            self.stack.push(Frame {
                visit: TreeVisit {
                    node: child,
                    context: VisitContext {
                        parent: Some(visit.node),
                        incoming_edge: Some(edge),
                        level,
                    },
                },
                expanded: false,
            });
        }
    }
}

impl<'a, N, S> Iterator for DepthFirstVisits<'a, N, S>
where
    N: TreeNode,
    S: ChildrenSorter<N>,
{
    type Item = TreeVisit<'a, N>;

    fn next(&mut self) -> Option<TreeVisit<'a, N>> {
        match self.order {
            TraversalOrder::ParentFirst => {
                if let Some(previous) = self.pending.take() {
                    self.push_children(previous);
                }
                let frame = self.stack.pop()?;
                self.pending = Some(frame.visit);
                Some(frame.visit)
            }
            TraversalOrder::ChildrenFirst => {
                while let Some(frame) = self.stack.pop() {
                    if frame.expanded {
                        return Some(frame.visit);
                    }
                    self.stack.push(Frame {
                        visit: frame.visit,
                        expanded: true,
                    });
                    self.push_children(frame.visit);
                }
                None
            }
        }
    }
}

/// Breadth-first traversal: all nodes of a level before the next level
/// ([`TraversalOrder::ParentFirst`]) or the previous one
/// ([`TraversalOrder::ChildrenFirst`]).
///
/// Nodes are first collected with their level in depth-first preorder under
/// the sorter, then stably sorted by level. Nodes on the same level therefore
/// keep their depth-first relative order. Collection happens on the first
/// pull and holds the whole tree's visits.
#[derive(Clone, Debug, Default)]
pub struct BreadthFirstTraversal<S = NaturalOrder> {
    order: TraversalOrder,
    sorter: S,
}

impl BreadthFirstTraversal<NaturalOrder> {
    /// Breadth-first traversal exploring children in natural order.
    pub fn new(order: TraversalOrder) -> Self {
        Self::with_sorter(order, NaturalOrder)
    }
}

impl<S> BreadthFirstTraversal<S> {
    /// Breadth-first traversal exploring children in the order given by `sorter`.
    pub fn with_sorter(order: TraversalOrder, sorter: S) -> Self {
        Self { order, sorter }
    }

    /// The children sorter.
    pub fn sorter(&self) -> &S {
        &self.sorter
    }
}

impl<N, S> VisitStrategy<N> for BreadthFirstTraversal<S>
where
    N: TreeNode,
    S: ChildrenSorter<N>,
{
    type Visits<'a>
        = BreadthFirstVisits<'a, N, S>
    where
        Self: 'a,
        N: 'a;

    fn order(&self) -> TraversalOrder {
        self.order
    }

    fn visit<'a>(&'a self, root: &'a N) -> BreadthFirstVisits<'a, N, S> {
        BreadthFirstVisits {
            state: BreadthFirstState::Pending {
                root,
                order: self.order,
                sorter: &self.sorter,
            },
        }
    }
}

enum BreadthFirstState<'a, N: TreeNode, S> {
    Pending {
        root: &'a N,
        order: TraversalOrder,
        sorter: &'a S,
    },
    Sorted(std::vec::IntoIter<TreeVisit<'a, N>>),
}

/// Iterator returned by [`BreadthFirstTraversal::visit`].
pub struct BreadthFirstVisits<'a, N: TreeNode, S> {
    state: BreadthFirstState<'a, N, S>,
}

impl<'a, N, S> Iterator for BreadthFirstVisits<'a, N, S>
where
    N: TreeNode,
    S: ChildrenSorter<N>,
{
    type Item = TreeVisit<'a, N>;

    fn next(&mut self) -> Option<TreeVisit<'a, N>> {
        if let BreadthFirstState::Pending {
            root,
            order,
            sorter,
        } = self.state
        {
            let mut visits: Vec<TreeVisit<'a, N>> =
                DepthFirstVisits::new(root, TraversalOrder::ParentFirst, sorter).collect();
            // Both sorts are stable: same-level nodes keep depth-first order.
            match order {
                TraversalOrder::ParentFirst => visits.sort_by_key(|v| v.context.level),
                TraversalOrder::ChildrenFirst => {
                    visits.sort_by(|a, b| b.context.level.cmp(&a.context.level))
                }
            }
            log::trace!("breadth-first {order} traversal collected {} nodes", visits.len());
            self.state = BreadthFirstState::Sorted(visits.into_iter());
        }

        match &mut self.state {
            BreadthFirstState::Sorted(iter) => iter.next(),
            BreadthFirstState::Pending { .. } => None,
        }
    }
}
