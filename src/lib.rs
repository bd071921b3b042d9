//! # oping
//!
//! A parser for the oping format: an indentation based text format describing a forest of
//! named branches and leaves.
//!
//! ```text
//! # inventory
//! + shop:fruits
//!   - apples: 3, green, 'granny, smith'
//!   + citrus
//!     - lemons: 12
//! ```
//!
//! File Layout
//!
//! The crate follows the order in which a line travels through the parser:
//! src/oping
//!   ├── lexing      Indentation levels, line classification and value tokenization
//!   ├── building    Tree attachment and the node pool used while streaming
//!   ├── parsing     Line sources, the per-parse session and the two parse modes
//!   ├── ast         Branch, Leaf and Node
//!   └── formats     Treeviz, JSON and YAML renderings of a forest
//!
//! The two entry points are [`parse_forest`], which returns every top-level branch, and
//! [`parse_each_branch`], which lends each completed top-level branch to a callback and then
//! recycles its nodes.

pub mod oping;

pub use oping::ast::{Branch, Forest, Leaf, Node, NodeKind};
pub use oping::building::PoolStats;
pub use oping::error::{ErrorKind, ParseError};
pub use oping::parsing::{
    parse_each_branch, parse_each_branch_file, parse_each_branch_lines, parse_each_branch_reader,
    parse_forest, parse_forest_file, parse_forest_lines, parse_forest_reader, StreamStats,
};
