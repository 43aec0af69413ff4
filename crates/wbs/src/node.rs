use serde::{Deserialize, Serialize};

/// One node of a work breakdown structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WbsNode {
    /// Hierarchical code (`A`, `A.2`, `A.2.1`)
    pub code: String,

    /// Display name
    pub name: String,

    /// Child nodes, in display order
    pub children: Vec<WbsNode>,
}

impl WbsNode {
    /// Create a leaf node
    #[must_use]
    pub fn leaf(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children
    #[must_use]
    pub fn branch(code: impl Into<String>, name: impl Into<String>, children: Vec<WbsNode>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children,
        }
    }

    /// Count this node and everything below it
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(WbsNode::count).sum::<usize>()
    }

    /// Depth of the subtree rooted here (a leaf is 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(WbsNode::depth).max().unwrap_or(0)
    }
}
