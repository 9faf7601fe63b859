//! Exact pattern matching over a static text.
//!
//! This crate provides two ways to find every occurrence of a pattern in a
//! terminated text:
//!
//! - immutable, edge-indexed suffix structures ([`SuffixTreeNode`],
//!   [`SuffixTrieNode`]) walked by pluggable lazy traversals
//!   ([`DepthFirstTraversal`], [`BreadthFirstTraversal`]);
//! - backward search over the Burrows-Wheeler transform
//!   ([`NarrowingIntervalMatcher`]), which narrows a row interval one pattern
//!   symbol at a time from count tables, without walking any suffix.
//!
//! Both share one contract: a root-to-leaf path identifies a suffix, and
//! [`TreeWalkMatcher`] and [`BwtMatcher`] report the same occurrences.
//!
//! # Quick start
//!
//! ```
//! use suffix_match::{build_suffix_tree, BwtMatcher, OccurrenceFinder, TerminatedText, TreeWalkMatcher};
//!
//! let text: TerminatedText<char> = "mississippi".parse().unwrap();
//! let pattern: Vec<char> = "ssi".chars().collect();
//!
//! let tree = build_suffix_tree(&text);
//! let by_tree = TreeWalkMatcher::new(&tree, &text).find_occurrences(&pattern);
//! let by_bwt = BwtMatcher::new(&text).find_occurrences(&pattern);
//! assert_eq!(by_tree, vec![2, 5]);
//! assert_eq!(by_tree, by_bwt);
//! ```

#![warn(missing_docs)]

mod alphabet;
mod backward;
mod build;
mod bwt;
mod children;
mod counts;
mod edge;
mod matching;
mod node;
mod path;
mod symbol;
mod text;
pub mod traversal;

use thiserror::Error;

pub use alphabet::Alphabet;
pub use backward::{NarrowingIntervalMatcher, RowInterval};
pub use build::{build_suffix_tree, build_suffix_trie};
pub use bwt::BwTransform;
pub use children::Children;
pub use counts::{CountTables, OccurrenceCounts, OnDemandCounts};
pub use edge::{AdjacencyOrder, SuffixEdge, SuffixTreeEdge, SuffixTrieEdge};
pub use matching::{BwtMatcher, OccurrenceFinder, TreeWalkMatcher};
pub use node::{LeafPaths, SuffixNode, SuffixTreeNode, SuffixTrieNode};
pub use path::SuffixPath;
pub use symbol::Symbol;
pub use text::TerminatedText;
pub use traversal::{
    BreadthFirstTraversal, ChildrenSorter, DepthFirstTraversal, EdgeAscending, EdgeDescending,
    NaturalOrder, SortBy, TraversalOrder, TreeNode, TreeVisit, VisitContext, VisitStrategy,
};

/// Errors raised by suffix structures, traversals and texts.
///
/// All of them are usage errors: they are reported as soon as they are
/// detected and never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SuffixError {
    /// A traversal order code or name that maps to no [`TraversalOrder`].
    #[error("unsupported traversal order: {0}")]
    UnsupportedOrder(String),
    /// Indexed lookup of an edge that leads to no child.
    #[error("no child through edge {0}")]
    MissingEdge(String),
    /// A path step that does not lead to a child of the previous node.
    #[error("path step {position} does not descend from the previous node")]
    InvalidPath {
        /// Index of the offending step.
        position: usize,
    },
    /// The terminator symbol occurs inside the text.
    #[error("terminator found inside the text at offset {position}")]
    TerminatorInText {
        /// Offset of the first occurrence.
        position: usize,
    },
}

/// Result type alias using [`SuffixError`].
pub type Result<T> = std::result::Result<T, SuffixError>;
