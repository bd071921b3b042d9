//! A node of either kind, as handed from the line classifier to the tree builder.

use super::branch::Branch;
use super::leaf::Leaf;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Branch,
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Branch => write!(f, "branch"),
            NodeKind::Leaf => write!(f, "leaf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Branch(Branch),
    Leaf(Leaf),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Branch(_) => NodeKind::Branch,
            Node::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Branch(branch) => branch.name(),
            Node::Leaf(leaf) => leaf.name(),
        }
    }
}

impl From<Branch> for Node {
    fn from(branch: Branch) -> Self {
        Node::Branch(branch)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}
