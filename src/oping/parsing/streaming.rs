//! Streaming mode
//!
//!     Parses a document one top-level branch at a time. A top-level branch is complete when
//!     the next one starts; at that point it is lent to the callback and its nodes go back to
//!     the pool, to be reused by later lines with the same names. The last branch is lent once
//!     the input ends and is then simply dropped.
//!
//!     The callback receives `&Branch`, so it cannot keep the branch past its return. Clone it
//!     to keep a copy.
//!
//!     If an error occurs, the callback is not called again. Branches delivered before the
//!     error have already been handed over.

use super::session::ParseSession;
use super::source::{infallible_lines, open_file, reader_lines, str_lines};
use crate::oping::ast::Branch;
use crate::oping::building::PoolStats;
use crate::oping::error::ParseError;
use std::io::BufRead;
use std::path::Path;

/// What a streaming parse did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Top-level branches handed to the callback.
    pub delivered: usize,
    /// How the node pool served the parse.
    pub pool: PoolStats,
}

fn stream_branches<I, L, F>(lines: I, mut on_branch: F) -> Result<StreamStats, ParseError>
where
    I: IntoIterator<Item = Result<L, ParseError>>,
    L: AsRef<str>,
    F: FnMut(&Branch),
{
    let mut session = ParseSession::recycling();
    for line in lines {
        session.feed(line?.as_ref(), &mut on_branch)?;
    }
    let (delivered, pool) = session.finish_streaming(&mut on_branch);
    Ok(StreamStats { delivered, pool })
}

/// Stream the top-level branches of an in-memory document.
pub fn parse_each_branch<F>(source: &str, on_branch: F) -> Result<StreamStats, ParseError>
where
    F: FnMut(&Branch),
{
    stream_branches(str_lines(source), on_branch)
}

/// Stream the top-level branches of a document given as individual lines.
pub fn parse_each_branch_lines<I, L, F>(lines: I, on_branch: F) -> Result<StreamStats, ParseError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
    F: FnMut(&Branch),
{
    stream_branches(infallible_lines(lines), on_branch)
}

/// Stream the top-level branches read from a buffered reader.
pub fn parse_each_branch_reader<R, F>(reader: R, on_branch: F) -> Result<StreamStats, ParseError>
where
    R: BufRead,
    F: FnMut(&Branch),
{
    stream_branches(reader_lines(reader), on_branch)
}

/// Stream the top-level branches of the document stored at `path`.
pub fn parse_each_branch_file<F>(
    path: impl AsRef<Path>,
    on_branch: F,
) -> Result<StreamStats, ParseError>
where
    F: FnMut(&Branch),
{
    parse_each_branch_reader(open_file(path)?, on_branch)
}
