//! The oping format
//!
//!     An oping document is a sequence of lines. Each meaningful line declares one node, and its
//!     indentation tells which branch it belongs to:
//!
//!         + [namespace:]name          a branch, may contain branches and leaves
//!         - name: v1, 'v, 2', v3      a leaf, holds an ordered list of values
//!         # ...                       a comment
//!
//!     Blank lines are ignored. The first indented line fixes the indentation unit (its width
//!     and whether it uses spaces or tabs); every later line must be indented by a multiple of
//!     that unit, using the same character.
//!
//! Pipeline
//!
//!     Each line goes through:
//!         1. [lexing::indentation]: leading whitespace into a level.
//!         2. [lexing::line_classification]: the trimmed line into a declaration.
//!         3. [building::tree]: level checks and attachment under the open branch chain.
//!         4. [lexing::values]: for leaves, the raw value text into tokens.
//!
//!     The [parsing] module drives this per line and exposes the forest and streaming modes.

pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
