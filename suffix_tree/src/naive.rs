// Quadratic construction: every suffix is inserted with
// a fresh walk from the root. No suffix links are made.
use log::trace;

use crate::types::arena::{NodeArena, ROOT};
use crate::types::node::EdgeEnd;
use crate::types::text::Text;

pub(crate) fn build(text: &Text) -> NodeArena {
    let s = text.as_bytes();
    let n = s.len();
    let mut arena = NodeArena::with_capacity(2 * n);
    arena.set_leaf_end(n);

    for suffix in 0..n {
        insert_suffix(&mut arena, s, suffix);
    }

    trace!("naive: inserted {} suffixes", n);
    arena
}

fn insert_suffix(arena: &mut NodeArena, s: &[u8], suffix: usize) {
    let n = s.len();
    let mut node = ROOT;
    let mut i = suffix;

    while i < n {
        let child = match arena[node].child(s[i]) {
            Some(child) => child,
            None => {
                // Nothing starts with this byte yet, hang the rest
                // of the suffix directly off the current node
                arena.add_leaf(node, s[i], i, EdgeEnd::Closed(n), suffix);
                return;
            }
        };

        let edge = arena.edge_range(child);
        let mut k = 0;
        while edge.start + k < edge.end && i + k < n && s[edge.start + k] == s[i + k] {
            k += 1;
        }

        if edge.start + k == edge.end {
            // Whole edge matched, keep going below it
            node = child;
            i += k;
            continue;
        }

        let mid = arena.split_edge(node, child, k, s);
        arena.add_leaf(mid, s[i + k], i + k, EdgeEnd::Closed(n), suffix);
        return;
    }
}
