//! Branch element
//!
//!     A branch is declared with a plus sign and a name, optionally prefixed by a namespace:
//!
//!         + fruits
//!         + shop:fruits
//!
//!     Everything indented one level below it, up to the next line at its own level or
//!     shallower, belongs to it.
//!
//!     The synthetic root of a parse is a branch too, with an empty name. Its branches are the
//!     forest.

use super::leaf::Leaf;
use serde::Serialize;
use std::vec::Drain;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Branch {
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    name: String,
    leaves: Vec<Leaf>,
    branches: Vec<Branch>,
}

impl Branch {
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_owned),
            name: name.into(),
            leaves: Vec::new(),
            branches: Vec::new(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_is(&self, name: &str) -> bool {
        self.name == name
    }

    /// `namespace:name`, or just the name when there is no namespace.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}:{}", namespace, self.name),
            None => self.name.clone(),
        }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// The most recently added child branch.
    pub fn last_branch(&self) -> Option<&Branch> {
        self.branches.last()
    }

    /// First child branch with the given name.
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name_is(name))
    }

    /// First leaf with the given name.
    pub fn leaf(&self, name: &str) -> Option<&Leaf> {
        self.leaves.iter().find(|l| l.name_is(name))
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() && self.leaves.is_empty()
    }

    /// Number of nodes in this subtree, this branch included.
    pub fn node_count(&self) -> usize {
        1 + self.leaves.len() + self.branches.iter().map(Branch::node_count).sum::<usize>()
    }

    pub(crate) fn push_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    pub(crate) fn push_leaf(&mut self, leaf: Leaf) {
        self.leaves.push(leaf);
    }

    pub(crate) fn last_branch_mut(&mut self) -> Option<&mut Branch> {
        self.branches.last_mut()
    }

    pub(crate) fn pop_branch(&mut self) -> Option<Branch> {
        self.branches.pop()
    }

    pub(crate) fn into_branches(self) -> Vec<Branch> {
        self.branches
    }

    /// Moves the children out, leaving both lists empty with their capacity intact.
    pub(crate) fn drain_children(&mut self) -> (Drain<'_, Branch>, Drain<'_, Leaf>) {
        (self.branches.drain(..), self.leaves.drain(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Branch {
        let mut root = Branch::new(Some("shop"), "fruits");
        root.push_leaf(Leaf::new("apples"));
        let mut citrus = Branch::new(None, "citrus");
        citrus.push_leaf(Leaf::new("lemons"));
        root.push_branch(citrus);
        root.push_branch(Branch::new(None, "berries"));
        root
    }

    #[test]
    fn test_accessors() {
        let branch = sample();
        assert_eq!(branch.namespace(), Some("shop"));
        assert_eq!(branch.name(), "fruits");
        assert_eq!(branch.qualified_name(), "shop:fruits");
        assert_eq!(branch.last_branch().map(Branch::name), Some("berries"));
        assert!(branch.branch("citrus").unwrap().leaf("lemons").is_some());
        assert!(branch.leaf("pears").is_none());
        assert_eq!(branch.node_count(), 5);
    }

    #[test]
    fn test_drain_children_empties_lists() {
        let mut branch = sample();
        let (branches, leaves) = branch.drain_children();
        assert_eq!(branches.count(), 2);
        assert_eq!(leaves.count(), 1);
        assert!(branch.is_empty());
        assert_eq!(branch.qualified_name(), "shop:fruits");
    }

    #[test]
    fn test_serialize_skips_missing_namespace() {
        let json = serde_json::to_value(Branch::new(None, "plain")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "plain", "leaves": [], "branches": []})
        );
    }
}
