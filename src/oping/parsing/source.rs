//! Line sources
//!
//!     The parser consumes lines without their terminators. `str::lines` and `BufRead::lines`
//!     both strip `\n` and `\r\n`, so either can feed a session. Read failures surface as
//!     [ParseError::Io] at the line where they happen.

use crate::oping::error::ParseError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lines of an in-memory document.
pub fn str_lines(source: &str) -> impl Iterator<Item = Result<&str, ParseError>> {
    source.lines().map(Ok)
}

/// Lines of an infallible source, such as a `Vec<String>`.
pub fn infallible_lines<I, L>(lines: I) -> impl Iterator<Item = Result<L, ParseError>>
where
    I: IntoIterator<Item = L>,
{
    lines.into_iter().map(Ok)
}

/// Lines of a buffered reader.
pub fn reader_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, ParseError>> {
    reader.lines().map(|line| line.map_err(ParseError::from))
}

/// Opens a file for line reading.
pub fn open_file(path: impl AsRef<Path>) -> Result<BufReader<File>, ParseError> {
    Ok(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_lines_strip_terminators() {
        let lines: Vec<_> = str_lines("+ a\r\n  - x: 1\n")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["+ a", "  - x: 1"]);
    }

    #[test]
    fn test_reader_lines() {
        let reader = std::io::Cursor::new("+ a\n\n  - x: 1");
        let lines: Vec<_> = reader_lines(reader).collect::<Result<_, _>>().unwrap();
        assert_eq!(lines, vec!["+ a", "", "  - x: 1"]);
    }

    #[test]
    fn test_missing_file() {
        let err = open_file("/definitely/not/here.oping").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
