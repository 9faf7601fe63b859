use quickcheck::quickcheck;
use suffix_match::{
    build_suffix_tree, build_suffix_trie, BreadthFirstTraversal, BwtMatcher, DepthFirstTraversal,
    OccurrenceFinder, SuffixEdge, SuffixNode, TerminatedText, TraversalOrder, TreeWalkMatcher,
    VisitStrategy,
};

/// Maps arbitrary strings onto a four-letter alphabet so that patterns
/// actually repeat.
fn dna(s: &str) -> Vec<u8> {
    s.chars().map(|c| b"acgt"[c as usize % 4]).collect()
}

fn terminated(s: &str) -> TerminatedText<u8> {
    TerminatedText::new(dna(s)).unwrap()
}

/// Offsets where `pattern` starts, found by brute force.
fn naive_occurrences(text: &TerminatedText<u8>, pattern: &[u8]) -> Vec<usize> {
    let symbols = text.as_slice();
    (0..symbols.len())
        .filter(|&i| symbols[i..].starts_with(pattern))
        .collect()
}

fn decoded_suffixes<E: SuffixEdge>(
    root: &SuffixNode<E>,
    text: &TerminatedText<u8>,
) -> Vec<Vec<u8>> {
    let mut suffixes = root.suffixes_for(text);
    suffixes.sort();
    suffixes
}

fn all_suffixes(text: &TerminatedText<u8>) -> Vec<Vec<u8>> {
    let mut suffixes: Vec<Vec<u8>> = (0..text.len()).map(|i| text.suffix(i).to_vec()).collect();
    suffixes.sort();
    suffixes
}

#[test]
fn qc_tree_enumerates_suffixes() {
    fn prop(s: String) -> bool {
        let text = terminated(&s);
        decoded_suffixes(&build_suffix_tree(&text), &text) == all_suffixes(&text)
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn qc_trie_enumerates_suffixes() {
    fn prop(s: String) -> bool {
        let text = terminated(&s);
        decoded_suffixes(&build_suffix_trie(&text), &text) == all_suffixes(&text)
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn qc_one_leaf_per_suffix() {
    fn prop(s: String) -> bool {
        let text = terminated(&s);
        let tree = build_suffix_tree(&text);
        tree.node_to_leaf_paths().count() == text.len()
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn qc_matchers_agree() {
    fn prop(s: String, p: String) -> bool {
        let text = terminated(&s);
        let pattern: Vec<u8> = dna(&p).into_iter().take(4).collect();
        let expected = naive_occurrences(&text, &pattern);

        let tree = build_suffix_tree(&text);
        let trie = build_suffix_trie(&text);
        TreeWalkMatcher::new(&tree, &text).find_occurrences(&pattern) == expected
            && TreeWalkMatcher::new(&trie, &text).find_occurrences(&pattern) == expected
            && BwtMatcher::new(&text).find_occurrences(&pattern) == expected
            && BwtMatcher::on_demand(&text).find_occurrences(&pattern) == expected
    }
    quickcheck(prop as fn(String, String) -> bool);
}

#[test]
fn qc_interval_width_is_occurrence_count() {
    fn prop(s: String, p: String) -> bool {
        let text = terminated(&s);
        let pattern: Vec<u8> = dna(&p).into_iter().take(3).collect();
        let k = naive_occurrences(&text, &pattern).len();
        let width = BwtMatcher::new(&text)
            .interval(&pattern)
            .map_or(0, |interval| interval.len());
        width == k
    }
    quickcheck(prop as fn(String, String) -> bool);
}

#[test]
fn qc_breadth_first_is_depth_first_stably_sorted_by_level() {
    fn prop(s: String) -> bool {
        let text = terminated(&s);
        let tree = build_suffix_tree(&text);

        let depth_first = DepthFirstTraversal::new(TraversalOrder::ParentFirst);
        let mut expected: Vec<(*const SuffixNode<_>, usize)> = depth_first
            .visit(&tree)
            .map(|v| (v.node as *const _, v.context.level))
            .collect();
        let breadth_first = BreadthFirstTraversal::new(TraversalOrder::ParentFirst);
        let actual: Vec<(*const SuffixNode<_>, usize)> = breadth_first
            .visit(&tree)
            .map(|v| (v.node as *const _, v.context.level))
            .collect();
        expected.sort_by_key(|&(_, level)| level);
        if actual != expected {
            return false;
        }

        let breadth_first = BreadthFirstTraversal::new(TraversalOrder::ChildrenFirst);
        let actual: Vec<(*const SuffixNode<_>, usize)> = breadth_first
            .visit(&tree)
            .map(|v| (v.node as *const _, v.context.level))
            .collect();
        expected.sort_by_key(|&(_, level)| std::cmp::Reverse(level));
        actual == expected
    }
    quickcheck(prop as fn(String) -> bool);
}
