//! Tree nodes
//!
//!     A parse produces a forest of [Branch]es. A branch has a name, an optional namespace and
//!     two ordered child lists: its leaves and its sub-branches. A [Leaf] has a name and an
//!     ordered list of string values.
//!
//!     The two lists are kept apart, so the relative order of a leaf and a sibling branch is not
//!     recorded. Within each list, document order is preserved.
//!
//!     While a document is being parsed, the open branch chain is the path that starts at the
//!     root and always steps into the most recently added child branch. Child branches are only
//!     ever appended, so the most recent child is the last one in the list.

pub mod branch;
pub mod leaf;
pub mod node;

pub use branch::Branch;
pub use leaf::Leaf;
pub use node::{Node, NodeKind};

/// The top-level branches of one document, in document order.
pub type Forest = Vec<Branch>;
