//! Lexer
//!
//!     Everything that looks at the text of a single line lives here. Lexing is line local: the
//!     only state carried between lines is the indentation unit, which the
//!     [indentation](indentation) tracker infers from the first indented line.
//!
//!     For each raw line:
//!         1. [line_classification::classify_line] decides if it is blank, a comment, or a node.
//!         2. [indentation::IndentationTracker::level] turns its leading whitespace into a level.
//!         3. [line_classification::parse_declaration] extracts the branch or leaf parts.
//!         4. [values::tokenize_values] splits a leaf's value text.

pub mod indentation;
pub mod line_classification;
pub mod values;

pub use indentation::{IndentChar, IndentUnit, IndentationError, IndentationTracker};
pub use line_classification::{classify_line, parse_declaration, Declaration, GrammarError, LineType};
pub use values::{tokenize_values, tokenize_values_into};
