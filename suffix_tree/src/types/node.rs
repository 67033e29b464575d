use std::collections::BTreeMap;

pub type NodeId = usize;
// Keyed by the first byte of the child's edge label. Two
// children can never share a first byte, they would have
// been merged into one edge. The BTreeMap keeps them in
// ascending byte order, which the suffix array relies on.
pub type Children = BTreeMap<u8, NodeId>;

// End of an edge label, exclusive. Leaves built by
// Ukkonen's algorithm are `Open` until construction
// finishes, and all of them read the same `leaf_end`
// cell in the arena, so advancing that one value
// extends every open leaf at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
  Closed(usize),
  Open,
}

#[derive(Debug, Clone)]
pub struct Node {
  pub(crate) parent: Option<NodeId>,
  pub(crate) children: Children,
  pub(crate) suffix_link: Option<NodeId>,

  // The label of the edge going into this node is
  // text[start..end], with `end` resolved by the arena.
  pub(crate) start: usize,
  pub(crate) end: EdgeEnd,

  // Only set on leaves: text[suffix_index..] is the
  // suffix spelled out from the root to the leaf.
  pub(crate) suffix_index: Option<usize>,
}

impl Node {
  pub(crate) fn root() -> Node {
    Node::new(None, 0, EdgeEnd::Closed(0))
  }

  pub(crate) fn new(parent: Option<NodeId>, start: usize, end: EdgeEnd) -> Node {
    Node {
      parent,
      children: BTreeMap::new(),
      suffix_link: None,
      start,
      end,
      suffix_index: None,
    }
  }

  pub(crate) fn leaf(parent: NodeId, start: usize, end: EdgeEnd, suffix_index: usize) -> Node {
    Node {
      suffix_index: Some(suffix_index),
      ..Node::new(Some(parent), start, end)
    }
  }

  pub fn child(&self, b: u8) -> Option<NodeId> {
    self.children.get(&b).copied()
  }

  pub fn children(&self) -> &Children {
    &self.children
  }

  pub fn parent(&self) -> Option<NodeId> {
    self.parent
  }

  pub fn suffix_link(&self) -> Option<NodeId> {
    self.suffix_link
  }

  pub fn suffix_index(&self) -> Option<usize> {
    self.suffix_index
  }

  pub fn start(&self) -> usize {
    self.start
  }

  pub fn end(&self) -> EdgeEnd {
    self.end
  }

  pub fn is_root(&self) -> bool {
    self.parent.is_none()
  }

  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  pub fn is_internal_node(&self) -> bool {
    !self.is_root() && !self.is_leaf()
  }
}
