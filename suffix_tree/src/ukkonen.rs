// Ukkonen's online construction, one phase per byte of the text.
//
// Rule 1 (extend every leaf by the new byte) is never done
// explicitly: leaves are created with an open end that reads
// the arena's shared `leaf_end`, and that is bumped once at the
// start of each phase.
// Rule 2 creates a new leaf, splitting an edge first if the
// active point is in the middle of one.
// Rule 3 fires when the byte is already there, which ends the
// phase since every shorter suffix is then implicitly present too.
use log::trace;

use crate::types::arena::{NodeArena, ROOT};
use crate::types::node::{EdgeEnd, NodeId};
use crate::types::text::Text;

pub(crate) fn build(text: &Text) -> NodeArena {
    let mut ukkonen = Ukkonen::new(text.as_bytes());
    for pos in 0..text.len() {
        ukkonen.extend(pos);
    }

    trace!(
        "ukkonen: {} phases, {} walk-downs",
        text.len(),
        ukkonen.walk_downs
    );
    ukkonen.arena
}

struct Ukkonen<'s> {
    s: &'s [u8],
    arena: NodeArena,

    // The active point. `active_edge` is a position in the text
    // whose byte picks the outgoing edge of `active_node`, and
    // `active_length` is how far along that edge we are.
    active_node: NodeId,
    active_edge: usize,
    active_length: usize,

    // Suffixes that still have to be made explicit.
    remainder: usize,
    // Internal node created in this phase that still waits
    // for its suffix link.
    last_new_node: Option<NodeId>,

    walk_downs: usize,
}

impl<'s> Ukkonen<'s> {
    fn new(s: &'s [u8]) -> Self {
        let mut arena = NodeArena::with_capacity(2 * s.len());
        arena.set_suffix_link(ROOT, ROOT);

        Ukkonen {
            s,
            arena,
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remainder: 0,
            last_new_node: None,
            walk_downs: 0,
        }
    }

    fn extend(&mut self, pos: usize) {
        // Rule 1 for every existing leaf
        self.arena.set_leaf_end(pos + 1);
        self.remainder += 1;
        self.last_new_node = None;

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge = pos;
            }

            let edge_byte = self.s[self.active_edge];
            match self.arena[self.active_node].child(edge_byte) {
                None => {
                    // Rule 2, new leaf straight off the active node
                    let suffix = pos + 1 - self.remainder;
                    self.arena
                        .add_leaf(self.active_node, edge_byte, pos, EdgeEnd::Open, suffix);

                    if let Some(last) = self.last_new_node.take() {
                        self.arena.set_suffix_link(last, self.active_node);
                    }
                }
                Some(next) => {
                    if self.walk_down(next) {
                        continue;
                    }

                    let edge_start = self.arena[next].start();
                    if self.s[edge_start + self.active_length] == self.s[pos] {
                        // Rule 3, show stopper
                        if let Some(last) = self.last_new_node {
                            if self.active_node != ROOT {
                                self.arena.set_suffix_link(last, self.active_node);
                                self.last_new_node = None;
                            }
                        }
                        self.active_length += 1;
                        break;
                    }

                    // Rule 2, split the edge and hang the leaf off the new node
                    let split = self
                        .arena
                        .split_edge(self.active_node, next, self.active_length, self.s);
                    self.arena.set_suffix_link(split, ROOT);

                    let suffix = pos + 1 - self.remainder;
                    self.arena
                        .add_leaf(split, self.s[pos], pos, EdgeEnd::Open, suffix);

                    if let Some(last) = self.last_new_node {
                        self.arena.set_suffix_link(last, split);
                    }
                    self.last_new_node = Some(split);
                }
            }

            self.remainder -= 1;

            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = pos + 1 - self.remainder;
            } else if self.active_node != ROOT {
                self.active_node = self.arena[self.active_node].suffix_link().unwrap_or(ROOT);
            }
        }
    }

    // Skip/count: if the active point lies beyond the end of
    // `next`'s edge, jump over the whole edge without comparing.
    fn walk_down(&mut self, next: NodeId) -> bool {
        let len = self.arena.edge_len(next);
        if self.active_length >= len {
            self.active_edge += len;
            self.active_length -= len;
            self.active_node = next;
            self.walk_downs += 1;
            return true;
        }
        false
    }
}
