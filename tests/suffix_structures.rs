use std::collections::HashMap;

use suffix_match::{
    build_suffix_tree, build_suffix_trie, BreadthFirstTraversal, BwTransform, BwtMatcher,
    CountTables, DepthFirstTraversal, EdgeDescending, NarrowingIntervalMatcher, OccurrenceFinder,
    RowInterval, SortBy, SuffixEdge, SuffixError, SuffixPath, SuffixTreeEdge, SuffixTreeNode,
    TerminatedText, TraversalOrder, TreeWalkMatcher, VisitStrategy,
};

fn text(s: &str) -> TerminatedText<char> {
    s.parse().unwrap()
}

fn decode(edge: &SuffixTreeEdge, text: &TerminatedText<char>) -> String {
    text.span(edge.start(), edge.len()).iter().collect()
}

#[test]
fn abc_paths_are_its_suffixes() {
    let text = text("abc");
    for suffixes in [
        build_suffix_tree(&text).suffixes_for(&text),
        build_suffix_trie(&text).suffixes_for(&text),
    ] {
        let mut decoded: Vec<String> = suffixes
            .into_iter()
            .map(|s| s.into_iter().collect())
            .collect();
        decoded.sort();
        assert_eq!(decoded, ["$", "abc$", "bc$", "c$"]);
    }
}

#[test]
fn preorder_and_postorder_over_banana_tree() {
    let text = text("banana");
    let tree = build_suffix_tree(&text);
    let incoming = |order| -> Vec<String> {
        DepthFirstTraversal::new(order)
            .visit(&tree)
            .filter_map(|v| v.context.incoming_edge.map(|e| decode(e, &text)))
            .collect()
    };

    // Edges sort by text offset: (1,1) "a" < (2,2) "na" < (6,1) "$", etc.
    assert_eq!(
        incoming(TraversalOrder::ParentFirst),
        ["banana$", "a", "na", "na$", "$", "$", "na", "na$", "$", "$"]
    );
    assert_eq!(
        incoming(TraversalOrder::ChildrenFirst),
        ["banana$", "na$", "$", "na", "$", "a", "na$", "$", "na", "$"]
    );
}

#[test]
fn sorter_reverses_sibling_order() {
    let text = text("abc");
    let tree = build_suffix_tree(&text);
    let traversal = DepthFirstTraversal::with_sorter(TraversalOrder::ParentFirst, EdgeDescending);
    let leaves: Vec<usize> = traversal
        .visit(&tree)
        .filter_map(|v| v.node.leaf_start())
        .collect();
    assert_eq!(leaves, [3, 2, 1, 0]);
}

#[test]
fn sorter_can_order_by_child() {
    let text = text("banana");
    let tree = build_suffix_tree(&text);
    let leaves_first = SortBy(
        |a: (&SuffixTreeEdge, &SuffixTreeNode), b: (&SuffixTreeEdge, &SuffixTreeNode)| {
            b.1.is_leaf().cmp(&a.1.is_leaf())
        },
    );
    let traversal = DepthFirstTraversal::with_sorter(TraversalOrder::ParentFirst, leaves_first);
    let leaves: Vec<usize> = traversal
        .visit(&tree)
        .filter_map(|v| v.node.leaf_start())
        .collect();
    // Root: "banana$" and "$" before "a" and "na"; below "a", "$" before "na".
    assert_eq!(leaves, [0, 6, 5, 1, 3, 2, 4]);
}

#[test]
fn breadth_first_levels_over_banana_tree() {
    let text = text("banana");
    let tree = build_suffix_tree(&text);

    let levels: Vec<usize> = BreadthFirstTraversal::new(TraversalOrder::ParentFirst)
        .visit(&tree)
        .map(|v| v.context.level)
        .collect();
    assert_eq!(levels, [0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3]);

    let levels: Vec<usize> = BreadthFirstTraversal::new(TraversalOrder::ChildrenFirst)
        .visit(&tree)
        .map(|v| v.context.level)
        .collect();
    assert_eq!(levels, [3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 0]);
}

#[test]
fn early_termination() {
    let text = text("mississippi");
    let tree = build_suffix_tree(&text);
    let traversal = DepthFirstTraversal::new(TraversalOrder::ParentFirst);
    // "mississippi$" is the lowest edge out of the root.
    let first_leaf = traversal.visit(&tree).find(|v| v.node.is_leaf());
    assert_eq!(first_leaf.and_then(|v| v.node.leaf_start()), Some(0));
}

#[test]
fn unsupported_order_codes() {
    for code in [-1, 2, 42] {
        assert_eq!(
            TraversalOrder::try_from(code),
            Err(SuffixError::UnsupportedOrder(code.to_string()))
        );
    }
    assert!("sideways".parse::<TraversalOrder>().is_err());
    assert_eq!(TraversalOrder::try_from(1), Ok(TraversalOrder::ChildrenFirst));
}

#[test]
fn children_are_copied_from_the_source_map() {
    let mut source = HashMap::new();
    source.insert(SuffixTreeEdge::new(0, 2), SuffixTreeNode::leaf(0));
    source.insert(SuffixTreeEdge::new(1, 1), SuffixTreeNode::leaf(1));
    let node = SuffixTreeNode::intermediate(&source);

    source.remove(&SuffixTreeEdge::new(0, 2));
    source.insert(SuffixTreeEdge::new(2, 1), SuffixTreeNode::leaf(2));

    let children = node.children().unwrap();
    assert_eq!(children.len(), 2);
    assert!(children.contains_edge(&SuffixTreeEdge::new(0, 2)));
    assert!(!children.contains_edge(&SuffixTreeEdge::new(2, 1)));
    assert_eq!(
        node.child(&SuffixTreeEdge::new(2, 1)),
        Err(SuffixError::MissingEdge("SuffixTreeEdge { start: 2, len: 1 }".into()))
    );
}

#[test]
fn paths_from_edges() {
    let text = text("banana");
    let tree = build_suffix_tree(&text);

    let path = SuffixPath::from_edges(
        &tree,
        [
            SuffixTreeEdge::new(1, 1),
            SuffixTreeEdge::new(2, 2),
            SuffixTreeEdge::new(4, 3),
        ],
    )
    .unwrap();
    assert_eq!(path.leaf_start(), Some(1));
    assert_eq!(path.suffix_for(&text).into_iter().collect::<String>(), "anana$");

    let bad = SuffixPath::from_edges(
        &tree,
        [SuffixTreeEdge::new(1, 1), SuffixTreeEdge::new(0, 7)],
    );
    assert_eq!(bad.unwrap_err(), SuffixError::InvalidPath { position: 1 });
}

#[test]
fn terminator_must_be_unique() {
    assert_eq!(
        "a$b".parse::<TerminatedText<char>>(),
        Err(SuffixError::TerminatorInText { position: 1 })
    );
    let text = TerminatedText::with_terminator("a$b".chars(), '#').unwrap();
    let tree = build_suffix_tree(&text);
    let pattern: Vec<char> = "$b#".chars().collect();
    assert_eq!(TreeWalkMatcher::new(&tree, &text).find_occurrences(&pattern), [1]);
    assert_eq!(BwtMatcher::new(&text).find_occurrences(&pattern), [1]);
}

#[test]
fn backward_search_over_borrowed_tables() {
    let text = text("abracadabra");
    let bwt = BwTransform::build(&text);
    let tables = CountTables::build(bwt.as_slice());
    let matcher = NarrowingIntervalMatcher::new(&tables);

    let pattern: Vec<char> = "abra".chars().collect();
    let interval = matcher.match_pattern(&pattern).unwrap();
    assert_eq!(interval.len(), 2);
    let mut offsets: Vec<usize> = interval.rows().map(|row| bwt.offset_of_row(row)).collect();
    offsets.sort_unstable();
    assert_eq!(offsets, [0, 7]);

    assert_eq!(
        matcher.match_pattern::<char>(&[]),
        Some(RowInterval { start: 0, end: 12 })
    );
}
