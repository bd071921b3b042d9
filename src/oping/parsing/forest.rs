//! Forest mode
//!
//!     Parses a whole document and returns its top-level branches. Nothing is recycled, the
//!     caller owns the result. On error no partial forest is returned.

use super::session::ParseSession;
use super::source::{infallible_lines, open_file, reader_lines, str_lines};
use crate::oping::ast::{Branch, Forest};
use crate::oping::error::ParseError;
use std::io::BufRead;
use std::path::Path;

fn build_forest<I, L>(lines: I) -> Result<Forest, ParseError>
where
    I: IntoIterator<Item = Result<L, ParseError>>,
    L: AsRef<str>,
{
    let mut session = ParseSession::new();
    let mut ignore = |_: &Branch| {};
    for line in lines {
        session.feed(line?.as_ref(), &mut ignore)?;
    }
    Ok(session.finish_forest())
}

/// Parse an in-memory document.
pub fn parse_forest(source: &str) -> Result<Forest, ParseError> {
    build_forest(str_lines(source))
}

/// Parse a document given as individual lines, without terminators.
pub fn parse_forest_lines<I, L>(lines: I) -> Result<Forest, ParseError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    build_forest(infallible_lines(lines))
}

/// Parse a document from a buffered reader.
pub fn parse_forest_reader<R: BufRead>(reader: R) -> Result<Forest, ParseError> {
    build_forest(reader_lines(reader))
}

/// Parse the document stored at `path`.
pub fn parse_forest_file(path: impl AsRef<Path>) -> Result<Forest, ParseError> {
    parse_forest_reader(open_file(path)?)
}
