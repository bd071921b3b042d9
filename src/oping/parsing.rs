//! Parsing
//!
//!     Drives the lexing and building stages line by line, in one of two modes:
//!
//!         - [forest]: every top-level branch is kept and returned once the input ends.
//!         - [streaming]: each top-level branch is lent to a callback as soon as the next one
//!           starts, then its nodes are recycled for the rest of the document.
//!
//!     Both modes share [session::ParseSession], the only state of a parse. Nothing is kept
//!     between calls, so independent parses never observe each other.
//!
//!     Line sources are abstracted by [source]: strings, readers and files all become a
//!     sequence of fallible lines without their line terminators.

pub mod forest;
pub mod session;
pub mod source;
pub mod streaming;

pub use forest::{parse_forest, parse_forest_file, parse_forest_lines, parse_forest_reader};
pub use session::ParseSession;
pub use streaming::{
    parse_each_branch, parse_each_branch_file, parse_each_branch_lines, parse_each_branch_reader,
    StreamStats,
};
