//! Node pool
//!
//!     Streaming documents tend to repeat the same shape for every top-level branch. Instead of
//!     dropping a delivered subtree and allocating the next one from scratch, its nodes are
//!     parked here, keyed by identity: `(namespace, name)` for branches, `name` for leaves.
//!     Asking for a node with a known key returns a parked one, with empty lists that keep their
//!     previous capacity.
//!
//!     Branches are bucketed by name and matched on namespace inside the bucket, so lookups can
//!     borrow the name without building an owned key.
//!
//!     The pool is unbounded. Its size is bounded in practice by the number of distinct keys
//!     times the widest subtree seen.

use crate::oping::ast::{Branch, Leaf};
use std::collections::HashMap;
use tracing::trace;

/// Counters of how the pool served node requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Nodes built from scratch.
    pub allocated: usize,
    /// Nodes served from recycled instances.
    pub reused: usize,
    /// Nodes returned to the pool.
    pub recycled: usize,
}

#[derive(Debug, Default)]
pub struct NodePool {
    branches: HashMap<String, Vec<Branch>>,
    leaves: HashMap<String, Vec<Leaf>>,
    stats: PoolStats,
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Number of parked nodes.
    pub fn parked(&self) -> usize {
        self.branches.values().map(Vec::len).sum::<usize>()
            + self.leaves.values().map(Vec::len).sum::<usize>()
    }

    pub fn take_branch(&mut self, namespace: Option<&str>, name: &str) -> Branch {
        let parked = self.branches.get_mut(name).and_then(|bucket| {
            let index = bucket.iter().rposition(|b| b.namespace() == namespace)?;
            Some(bucket.swap_remove(index))
        });
        match parked {
            Some(branch) => {
                debug_assert!(branch.is_empty());
                self.stats.reused += 1;
                branch
            }
            None => {
                self.stats.allocated += 1;
                Branch::new(namespace, name)
            }
        }
    }

    pub fn take_leaf(&mut self, name: &str) -> Leaf {
        match self.leaves.get_mut(name).and_then(Vec::pop) {
            Some(leaf) => {
                debug_assert!(leaf.values().is_empty());
                self.stats.reused += 1;
                leaf
            }
            None => {
                self.stats.allocated += 1;
                Leaf::new(name)
            }
        }
    }

    /// Parks a branch and its whole subtree, children first.
    pub fn recycle_branch(&mut self, mut branch: Branch) {
        let (branches, leaves) = branch.drain_children();
        for child in branches {
            self.recycle_branch(child);
        }
        for leaf in leaves {
            self.recycle_leaf(leaf);
        }
        trace!(branch = %branch.qualified_name(), "recycled branch");
        self.stats.recycled += 1;
        self.branches
            .entry(branch.name().to_string())
            .or_default()
            .push(branch);
    }

    pub fn recycle_leaf(&mut self, mut leaf: Leaf) {
        leaf.clear();
        self.stats.recycled += 1;
        self.leaves
            .entry(leaf.name().to_string())
            .or_default()
            .push(leaf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtree() -> Branch {
        let mut root = Branch::new(None, "a");
        let mut leaf = Leaf::new("x");
        leaf.values_mut().push("1".to_string());
        root.push_leaf(leaf);
        let mut child = Branch::new(Some("ns"), "b");
        child.push_leaf(Leaf::new("y"));
        root.push_branch(child);
        root
    }

    #[test]
    fn test_fresh_pool_allocates() {
        let mut pool = NodePool::new();
        let branch = pool.take_branch(Some("ns"), "a");
        let leaf = pool.take_leaf("x");
        assert_eq!(branch.namespace(), Some("ns"));
        assert_eq!(leaf.name(), "x");
        assert_eq!(
            pool.stats(),
            PoolStats {
                allocated: 2,
                reused: 0,
                recycled: 0
            }
        );
    }

    #[test]
    fn test_recycle_parks_whole_subtree() {
        let mut pool = NodePool::new();
        pool.recycle_branch(subtree());
        assert_eq!(pool.parked(), 4);
        assert_eq!(pool.stats().recycled, 4);
    }

    #[test]
    fn test_reuse_is_keyed_by_namespace_and_name() {
        let mut pool = NodePool::new();
        pool.recycle_branch(subtree());

        // Same name, different namespace: not a match.
        let other = pool.take_branch(None, "b");
        assert_eq!(pool.stats().allocated, 1);
        assert_eq!(other.namespace(), None);

        let b = pool.take_branch(Some("ns"), "b");
        assert_eq!(pool.stats().reused, 1);
        assert!(b.is_empty());

        let x = pool.take_leaf("x");
        assert_eq!(pool.stats().reused, 2);
        assert!(x.values().is_empty());
    }

    #[test]
    fn test_reused_branch_is_cleared() {
        let mut pool = NodePool::new();
        pool.recycle_branch(subtree());
        let a = pool.take_branch(None, "a");
        assert_eq!(a.name(), "a");
        assert!(a.leaves().is_empty());
        assert!(a.branches().is_empty());
        assert_eq!(pool.parked(), 3);
    }
}
