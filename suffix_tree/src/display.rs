use std::fmt;

use crate::types::arena::ROOT;
use crate::types::node::NodeId;
use crate::SuffixTree;

// Long edges (leaves mostly) are cut off after this many bytes
const LABEL_LIMIT: usize = 60;

impl SuffixTree {
    fn label_of_node_formatted(&self, id: NodeId) -> String {
        let label = self.edge_label(id);
        let shown = &label[..label.len().min(LABEL_LIMIT)];
        let mut formatted = format!("{:?}", String::from_utf8_lossy(shown));
        if label.len() > LABEL_LIMIT {
            formatted.push_str("...");
        }
        formatted
    }
}

impl fmt::Display for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "root")?;

        // (node, prefix drawn before its connector, last sibling?)
        let mut stack: Vec<(NodeId, String, bool)> = vec![];
        let push_children = |stack: &mut Vec<(NodeId, String, bool)>, id: NodeId, prefix: &str| {
            let children = self.node(id).children();
            let last = children.len();
            for (i, &child) in children.values().enumerate().rev() {
                stack.push((child, String::from(prefix), i + 1 == last));
            }
        };
        push_children(&mut stack, ROOT, "");

        while let Some((id, prefix, last)) = stack.pop() {
            let connector = if last { "└─ " } else { "├─ " };
            write!(f, "{}{}{}", prefix, connector, self.label_of_node_formatted(id))?;
            match self.node(id).suffix_index() {
                Some(suffix) => writeln!(f, " (suffix {})", suffix)?,
                None => writeln!(f)?,
            }

            let child_prefix = format!("{}{}", prefix, if last { "   " } else { "│  " });
            push_children(&mut stack, id, &child_prefix);
        }

        Ok(())
    }
}
