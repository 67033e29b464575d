use std::ops::{Index, Range};

use super::node::{EdgeEnd, Node, NodeId};

pub const ROOT: NodeId = 0;

// Owns every node of one tree. Nodes are only ever
// appended, so a NodeId stays valid for the lifetime
// of the tree. The only thing that changes on an
// existing node after creation is its `start` (and
// parent) when its edge gets split.
#[derive(Debug, Clone)]
pub struct NodeArena {
  nodes: Vec<Node>,
  // The shared end every `EdgeEnd::Open` resolves to.
  leaf_end: usize,
}

impl NodeArena {
  pub(crate) fn with_capacity(capacity: usize) -> NodeArena {
    let mut nodes = Vec::with_capacity(capacity.max(1));
    nodes.push(Node::root());
    NodeArena { nodes, leaf_end: 0 }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
    self.nodes.iter().enumerate()
  }

  pub fn leaf_end(&self) -> usize {
    self.leaf_end
  }

  pub fn end(&self, id: NodeId) -> usize {
    match self.nodes[id].end {
      EdgeEnd::Closed(end) => end,
      EdgeEnd::Open => self.leaf_end,
    }
  }

  pub fn edge_range(&self, id: NodeId) -> Range<usize> {
    self.nodes[id].start..self.end(id)
  }

  pub fn edge_len(&self, id: NodeId) -> usize {
    self.end(id) - self.nodes[id].start
  }

  // Rule 1 of Ukkonen's algorithm in a single write.
  pub(crate) fn set_leaf_end(&mut self, end: usize) {
    self.leaf_end = end;
  }

  pub(crate) fn set_suffix_link(&mut self, from: NodeId, to: NodeId) {
    self.nodes[from].suffix_link = Some(to);
  }

  pub(crate) fn add_leaf(
    &mut self,
    parent: NodeId,
    key: u8,
    start: usize,
    end: EdgeEnd,
    suffix_index: usize,
  ) -> NodeId {
    let id = self.nodes.len();
    self.nodes.push(Node::leaf(parent, start, end, suffix_index));
    self.nodes[parent].children.insert(key, id);
    id
  }

  // Splits the edge into `child` after `at` bytes. The new
  // internal node takes over the first `at` bytes of the label
  // and becomes the parent of `child`, whose start moves up.
  // `0 < at < edge_len(child)` must hold.
  pub(crate) fn split_edge(&mut self, parent: NodeId, child: NodeId, at: usize, s: &[u8]) -> NodeId {
    let start = self.nodes[child].start;
    let mid = self.nodes.len();
    self
      .nodes
      .push(Node::new(Some(parent), start, EdgeEnd::Closed(start + at)));

    let node = &mut self.nodes[child];
    node.start = start + at;
    node.parent = Some(mid);

    self.nodes[mid].children.insert(s[start + at], child);
    self.nodes[parent].children.insert(s[start], mid);
    mid
  }
}

impl Index<NodeId> for NodeArena {
  type Output = Node;

  fn index(&self, id: NodeId) -> &Node {
    &self.nodes[id]
  }
}
