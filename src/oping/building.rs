//! Tree building
//!
//!     [tree] attaches classified nodes under the open branch chain and validates levels.
//!     [pool] hands out branches and leaves in streaming mode, reusing the ones recycled after
//!     each delivered top-level branch.

pub mod pool;
pub mod tree;

pub use pool::{NodePool, PoolStats};
pub use tree::{StructureError, TreeBuilder};
