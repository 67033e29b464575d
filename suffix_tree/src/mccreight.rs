// McCreight's construction. Suffixes are still inserted
// longest first, but instead of walking down from the root
// every time, the insertion of suffix i starts from the
// suffix link of the previous head. The part of the path
// that is already known to exist (rescan) is skipped over
// one edge at a time by comparing lengths only, and only the
// unknown remainder (scan) is compared byte by byte.
use log::trace;

use crate::types::arena::{NodeArena, ROOT};
use crate::types::node::{EdgeEnd, NodeId};
use crate::types::text::Text;

pub(crate) fn build(text: &Text) -> NodeArena {
    let mut builder = McCreight::new(text.as_bytes());
    for i in 0..text.len() {
        builder.insert_suffix(i);
    }

    trace!(
        "mccreight: {} suffixes, {} rescan jumps",
        text.len(),
        builder.rescan_jumps
    );
    builder.arena
}

struct McCreight<'s> {
    s: &'s [u8],
    arena: NodeArena,
    // String depth of every node, indexed by NodeId.
    depth: Vec<usize>,

    // Parent of the leaf inserted last.
    head: NodeId,
    // Set when `head` was created by the last insertion and
    // has no suffix link yet. It gets one during the next
    // insertion, once the node for its suffix is found.
    previous_internal: Option<NodeId>,

    rescan_jumps: usize,
}

enum Rescan {
    // The known part ends exactly at a node
    Node(NodeId),
    // The known part ended in the middle of an edge, which
    // was split. The new node is the head of the suffix.
    Split(NodeId),
}

impl<'s> McCreight<'s> {
    fn new(s: &'s [u8]) -> Self {
        let mut arena = NodeArena::with_capacity(2 * s.len());
        arena.set_leaf_end(s.len());
        arena.set_suffix_link(ROOT, ROOT);

        let mut depth = Vec::with_capacity(2 * s.len());
        depth.push(0);

        McCreight {
            s,
            arena,
            depth,
            head: ROOT,
            previous_internal: None,
            rescan_jumps: 0,
        }
    }

    fn insert_suffix(&mut self, i: usize) {
        let start = match self.previous_internal.take() {
            // Head already has its link (or is the root, which links
            // to itself), jump straight there.
            None => self.arena[self.head].suffix_link().unwrap_or(ROOT),
            Some(pending) => match self.rescan(pending) {
                Rescan::Node(node) => {
                    self.arena.set_suffix_link(pending, node);
                    node
                }
                Rescan::Split(mid) => {
                    self.arena.set_suffix_link(pending, mid);
                    let leaf_start = i + self.depth[mid];
                    self.add_leaf(mid, leaf_start, i);
                    self.head = mid;
                    self.previous_internal = Some(mid);
                    return;
                }
            },
        };

        let pos = i + self.depth[start];
        self.scan(start, pos, i);
    }

    // Finds where the path label of `head` minus its first byte
    // ends. That string is known to be in the tree, so edges
    // can be skipped by length alone.
    fn rescan(&mut self, head: NodeId) -> Rescan {
        let parent = self.arena[head].parent().unwrap_or(ROOT);
        let mut beta = self.arena.edge_range(head);

        let mut node = if parent == ROOT {
            beta.start += 1;
            ROOT
        } else {
            // Every internal node other than the last head has its link
            self.arena[parent].suffix_link().unwrap_or(ROOT)
        };

        while beta.start < beta.end {
            let child = match self.arena[node].child(self.s[beta.start]) {
                Some(child) => child,
                None => break,
            };
            let len = self.arena.edge_len(child);
            let remaining = beta.end - beta.start;
            self.rescan_jumps += 1;

            if len <= remaining {
                node = child;
                beta.start += len;
            } else {
                return Rescan::Split(self.split(node, child, remaining));
            }
        }

        Rescan::Node(node)
    }

    // Byte by byte descent from `node`, where text[pos..] is
    // what is left of suffix i to place.
    fn scan(&mut self, mut node: NodeId, mut pos: usize, i: usize) {
        let n = self.s.len();

        loop {
            let child = match self.arena[node].child(self.s[pos]) {
                Some(child) => child,
                None => {
                    self.add_leaf(node, pos, i);
                    self.head = node;
                    return;
                }
            };

            let edge = self.arena.edge_range(child);
            let mut k = 0;
            while edge.start + k < edge.end && pos + k < n && self.s[edge.start + k] == self.s[pos + k] {
                k += 1;
            }

            if edge.start + k == edge.end {
                node = child;
                pos += k;
                continue;
            }

            let mid = self.split(node, child, k);
            self.add_leaf(mid, pos + k, i);
            self.head = mid;
            self.previous_internal = Some(mid);
            return;
        }
    }

    fn split(&mut self, parent: NodeId, child: NodeId, at: usize) -> NodeId {
        let mid = self.arena.split_edge(parent, child, at, self.s);
        self.depth.resize(self.arena.len(), 0);
        self.depth[mid] = self.depth[parent] + at;
        mid
    }

    fn add_leaf(&mut self, parent: NodeId, start: usize, suffix: usize) {
        let n = self.s.len();
        let leaf = self
            .arena
            .add_leaf(parent, self.s[start], start, EdgeEnd::Closed(n), suffix);
        self.depth.resize(self.arena.len(), 0);
        self.depth[leaf] = n - suffix;
    }
}
