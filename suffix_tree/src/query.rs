// Queries over a finished tree. Nothing in here depends on
// which strategy built the tree, and nothing mutates it.
use crate::types::arena::ROOT;
use crate::types::node::NodeId;
use crate::SuffixTree;

impl SuffixTree {
    pub fn contains<P: AsRef<[u8]>>(&self, pattern: P) -> bool {
        self.locate(pattern.as_ref()).is_some()
    }

    /// Starting positions of every occurrence of `pattern`, in the
    /// order the leaves are met when children are visited by
    /// ascending byte. Empty when the pattern does not occur, and
    /// every suffix for the empty pattern.
    pub fn find_all<P: AsRef<[u8]>>(&self, pattern: P) -> Vec<usize> {
        match self.locate(pattern.as_ref()) {
            Some(node) => self.leaves_below(node),
            None => vec![],
        }
    }

    pub fn count_all<P: AsRef<[u8]>>(&self, pattern: P) -> usize {
        match self.locate(pattern.as_ref()) {
            Some(node) => self.count_leaves_below(node),
            None => 0,
        }
    }

    // The node at or just below the end of the pattern. When
    // the pattern stops inside an edge, the node that edge
    // leads to is returned, so its leaves are still exactly
    // the occurrences.
    pub fn node_from_pattern<P: AsRef<[u8]>>(&self, pattern: P) -> Option<NodeId> {
        self.locate(pattern.as_ref())
    }

    pub fn path_label(&self, node: NodeId) -> Vec<u8> {
        let mut edges = vec![];
        let mut cur = node;
        while let Some(parent) = self.node(cur).parent() {
            edges.push(self.edge_label(cur));
            cur = parent;
        }

        let mut label = Vec::with_capacity(edges.iter().map(|e| e.len()).sum());
        for edge in edges.into_iter().rev() {
            label.extend_from_slice(edge);
        }
        label
    }

    pub fn string_depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut cur = node;
        while let Some(parent) = self.node(cur).parent() {
            depth += self.edge_len(cur);
            cur = parent;
        }
        depth
    }

    // Children are kept sorted by their first byte, so a
    // depth first walk meets the leaves in lexicographic
    // order of their suffixes.
    pub fn suffix_array(&self) -> Vec<usize> {
        self.leaves_below(ROOT)
    }

    fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let s = self.text().as_bytes();
        let mut node = ROOT;
        let mut i = 0;

        while i < pattern.len() {
            let next = self.node(node).child(pattern[i])?;
            let edge = self.arena().edge_range(next);

            let matched = (edge.end - edge.start).min(pattern.len() - i);
            if s[edge.start..edge.start + matched] != pattern[i..i + matched] {
                return None;
            }

            i += matched;
            node = next;
        }

        Some(node)
    }

    fn leaves_below(&self, node: NodeId) -> Vec<usize> {
        let mut leaves = vec![];
        let mut stack = vec![node];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if let Some(suffix) = node.suffix_index() {
                leaves.push(suffix);
            }
            // Reversed so the smallest byte is popped first
            stack.extend(node.children().values().rev());
        }

        leaves
    }

    fn count_leaves_below(&self, node: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![node];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.suffix_index().is_some() {
                count += 1;
            }
            stack.extend(node.children().values());
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use crate::{Strategy, SuffixTree};
    use quickcheck::TestResult;
    use std::collections::BTreeSet;

    fn banana() -> Vec<SuffixTree> {
        Strategy::ALL
            .iter()
            .map(|&strategy| SuffixTree::build("banana$", strategy))
            .collect()
    }

    #[test]
    fn contains() {
        for st in banana() {
            assert!(st.contains("ana"), "{}", st.strategy());
            assert!(st.contains("banana$"));
            assert!(st.contains("a"));
            assert!(!st.contains("begin"));
            assert!(!st.contains("nab"));
            assert!(!st.contains("banana$$"));
        }
    }

    #[test]
    fn empty_pattern_matches_everything() {
        for st in banana() {
            assert!(st.contains(""));
            assert_eq!(7, st.count_all(""));
            assert_eq!(Some(st.root()), st.node_from_pattern(""));

            let mut all = st.find_all("");
            all.sort();
            assert_eq!((0..7).collect::<Vec<_>>(), all);
        }
    }

    #[test]
    fn find_all() {
        for st in banana() {
            let na: BTreeSet<_> = st.find_all("na").into_iter().collect();
            assert_eq!([2, 4].iter().copied().collect::<BTreeSet<_>>(), na);

            let a: BTreeSet<_> = st.find_all("a").into_iter().collect();
            assert_eq!([1, 3, 5].iter().copied().collect::<BTreeSet<_>>(), a);

            assert!(st.find_all("begin").is_empty());
            assert!(st.find_all("bananas").is_empty());
        }
    }

    #[test]
    fn count_all() {
        for st in banana() {
            assert_eq!(2, st.count_all("ana"));
            assert_eq!(3, st.count_all("a"));
            assert_eq!(1, st.count_all("$"));
            assert_eq!(0, st.count_all("x"));
        }
    }

    #[test]
    fn node_path_label_and_depth() {
        for st in banana() {
            let ana = st.node_from_pattern("ana").unwrap();
            assert_eq!(b"ana".to_vec(), st.path_label(ana));
            assert_eq!(3, st.string_depth(ana));
            assert!(st.node(ana).is_internal_node());

            // Stops inside the edge "na" of the "a" node, so
            // it resolves to the node below: "ana".
            assert_eq!(Some(ana), st.node_from_pattern("an"));

            let leaf = st.node_from_pattern("anana").unwrap();
            assert_eq!(Some(1), st.node(leaf).suffix_index());
            assert_eq!(b"anana$".to_vec(), st.path_label(leaf));

            assert_eq!(None, st.node_from_pattern("anab"));
            assert!(st.path_label(st.root()).is_empty());
            assert_eq!(0, st.string_depth(st.root()));
        }
    }

    #[test]
    fn banana_suffix_array() {
        for st in banana() {
            assert_eq!(vec![6, 5, 3, 1, 0, 4, 2], st.suffix_array());
        }
    }

    #[test]
    fn mississippi_suffix_array() {
        for &strategy in Strategy::ALL.iter() {
            let st = SuffixTree::build("mississippi$", strategy);
            assert_eq!(
                vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2],
                st.suffix_array()
            );
        }
    }

    #[quickcheck]
    fn quickcheck_leaf_paths_are_suffixes(xs: Vec<u8>) -> TestResult {
        let mut bytes = xs.into_iter().filter(|&b| b != b'$').collect::<Vec<_>>();
        if bytes.is_empty() {
            return TestResult::discard();
        }
        bytes.push(b'$');

        let st = SuffixTree::build(bytes.clone(), Strategy::Ukkonen);
        let ok = st.arena().iter().all(|(id, node)| match node.suffix_index() {
            Some(i) => st.path_label(id) == bytes[i..] && st.string_depth(id) == bytes.len() - i,
            None => true,
        });
        TestResult::from_bool(ok)
    }
}
