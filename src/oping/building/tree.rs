//! Tree attachment
//!
//!     The builder holds the synthetic root. A node at level L is attached to the branch reached
//!     by stepping from the root into the last child branch L times. Those last children form
//!     the chain of currently open branches, an implicit stack: appending a branch at depth L
//!     makes it the open branch at that depth and closes whatever was open below it, without
//!     any explicit push or pop.
//!
//!     Before attaching, [check_level] validates the level against the previous node:
//!         - the first node must sit at level 0;
//!         - a node may be at most one level deeper than the previous one.
//!
//!     The descent itself fails with [StructureError::NoOpenBranch] when a step finds no child
//!     branch, which is what happens to a node indented under a leaf with no open branch at
//!     that depth.
//!
//!     A leaf at level 0 lands in the root's own leaf list. The forest is the root's branches,
//!     so such a leaf is accepted but never part of the result.

use crate::oping::ast::{Branch, Forest, Node};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("the first node must not be indented, found level {level}")]
    IndentedFirstNode { level: usize },
    #[error("indentation jumps from level {from} to level {to}, at most one level deeper is allowed")]
    LevelJump { from: usize, to: usize },
    #[error("there is no open branch at depth {depth}")]
    NoOpenBranch { depth: usize },
}

/// Validates a node's level against the previous node's level.
pub fn check_level(level: usize, previous: Option<usize>) -> Result<(), StructureError> {
    match previous {
        None if level > 0 => Err(StructureError::IndentedFirstNode { level }),
        Some(from) if level > from + 1 => Err(StructureError::LevelJump { from, to: level }),
        _ => Ok(()),
    }
}

#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: Branch,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: Branch::root(),
        }
    }

    /// The synthetic root; its branches are the forest built so far.
    pub fn root(&self) -> &Branch {
        &self.root
    }

    /// The open branch at `depth` (the root is depth 0).
    fn open_branch(&mut self, depth: usize) -> Result<&mut Branch, StructureError> {
        let mut branch = &mut self.root;
        for step in 1..=depth {
            branch = branch
                .last_branch_mut()
                .ok_or(StructureError::NoOpenBranch { depth: step })?;
        }
        Ok(branch)
    }

    /// Attaches a node at `level` under the open branch chain.
    pub fn attach(&mut self, level: usize, node: Node) -> Result<(), StructureError> {
        let parent = self.open_branch(level)?;
        trace!(level, kind = %node.kind(), name = node.name(), "attaching node");
        match node {
            Node::Branch(branch) => parent.push_branch(branch),
            Node::Leaf(leaf) => parent.push_leaf(leaf),
        }
        Ok(())
    }

    /// Removes the open top-level branch, if any.
    ///
    /// In streaming mode the root holds at most one branch, so this is the last completed one.
    pub fn take_top_level(&mut self) -> Option<Branch> {
        self.root.pop_branch()
    }

    pub fn into_forest(self) -> Forest {
        self.root.into_branches()
    }
}
