//! Suffix trees over a sentinel-terminated byte string.
//!
//! Three construction strategies produce the same tree over a shared
//! node arena: plain quadratic insertion, McCreight's algorithm and
//! Ukkonen's online algorithm. Queries work the same on all of them.
//!
//! ```
//! use suffix_tree::{Strategy, SuffixTree};
//!
//! let tree = SuffixTree::build("banana$", Strategy::McCreight);
//! assert!(tree.contains(b"ana"));
//! assert_eq!(vec![6, 5, 3, 1, 0, 4, 2], tree.suffix_array());
//! ```

// Some inspiration for structure taken from https://github.com/BurntSushi/suffix
use log::debug;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod display;
mod error;
mod mccreight;
mod naive;
mod query;
mod types;
mod ukkonen;

pub use error::{ParseStrategyError, TextError};
pub use types::arena::{NodeArena, ROOT};
pub use types::node::{Children, EdgeEnd, Node, NodeId};
pub use types::text::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive,
    McCreight,
    Ukkonen,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::McCreight, Strategy::Ukkonen];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::McCreight => "mccreight",
            Strategy::Ukkonen => "ukkonen",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(String::from(s)))
    }
}

pub struct SuffixTree {
    text: Text,
    arena: NodeArena,
    strategy: Strategy,
}

impl SuffixTree {
    pub fn new<T: Into<Text>>(text: T) -> SuffixTree {
        SuffixTree::build(text, Strategy::Ukkonen)
    }

    /// Builds the tree with the given strategy. The text must end with
    /// a byte that occurs nowhere else in it, this is not checked here
    /// (see [`Text::validate`]).
    pub fn build<T: Into<Text>>(text: T, strategy: Strategy) -> SuffixTree {
        let text = text.into();
        let arena = match strategy {
            Strategy::Naive => naive::build(&text),
            Strategy::McCreight => mccreight::build(&text),
            Strategy::Ukkonen => ukkonen::build(&text),
        };

        debug!(
            "Built {} suffix tree over {} bytes with {} nodes",
            strategy,
            text.len(),
            arena.len()
        );

        SuffixTree {
            text,
            arena,
            strategy,
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.arena
            .iter()
            .filter(|(_, node)| node.suffix_index().is_some())
            .count()
    }

    // Gets the bytes labelling the edge going into the node
    pub fn edge_label(&self, id: NodeId) -> &[u8] {
        self.text.slice(self.arena.edge_range(id))
    }

    pub fn edge_len(&self, id: NodeId) -> usize {
        self.arena.edge_len(id)
    }
}

impl fmt::Debug for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SuffixTree")
            .field("strategy", &self.strategy)
            .field("text", &self.text)
            .field("nodes", &self.arena.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_str() {
        assert_eq!(Ok(Strategy::Naive), "naive".parse());
        assert_eq!(Ok(Strategy::McCreight), "McCreight".parse());
        assert_eq!(Ok(Strategy::Ukkonen), " UKKONEN ".parse());
        assert_eq!(
            Err(ParseStrategyError(String::from("weiner"))),
            "weiner".parse::<Strategy>()
        );
    }

    #[test]
    fn strategy_display_round_trips() {
        for strategy in Strategy::ALL.iter() {
            assert_eq!(Ok(*strategy), strategy.to_string().parse());
        }
    }

    #[test]
    fn counts() {
        for &strategy in Strategy::ALL.iter() {
            let st = SuffixTree::build("banana$", strategy);
            assert_eq!(strategy, st.strategy());
            assert_eq!(7, st.leaf_count());
            // root, "a", "ana", "na" and 7 leaves
            assert_eq!(11, st.node_count());
        }
    }

    #[test]
    fn default_is_ukkonen() {
        assert_eq!(Strategy::Ukkonen, SuffixTree::new("abc$").strategy());
    }

    #[test]
    fn edge_labels() {
        let st = SuffixTree::build("banana$", Strategy::Naive);
        let b = st.node(st.root()).child(b'b').unwrap();
        assert_eq!(b"banana$", st.edge_label(b));
        assert_eq!(7, st.edge_len(b));
        assert!(st.edge_label(st.root()).is_empty());
    }
}
