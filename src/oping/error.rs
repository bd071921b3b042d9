//! Error types for parsing
//!
//!     Every failure aborts the parse. Syntax failures carry the 1-based count of meaningful
//!     lines read so far (comments count, blank lines don't) and a human readable reason.
//!
//!     The components report their own narrower errors ([GrammarError], [IndentationError],
//!     [StructureError]); the parse session attaches the line number and folds them into
//!     [ParseError].
//!
//! [GrammarError]: crate::oping::lexing::line_classification::GrammarError
//! [IndentationError]: crate::oping::lexing::indentation::IndentationError
//! [StructureError]: crate::oping::building::tree::StructureError

use std::fmt;
use thiserror::Error;

/// Which rule a syntax error broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line is neither a valid branch nor a valid leaf.
    Grammar,
    /// The indentation level implies an impossible tree edit.
    Structure,
    /// The leading whitespace does not agree with the indentation unit.
    Consistency,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Grammar => write!(f, "Grammar"),
            ErrorKind::Structure => write!(f, "Structure"),
            ErrorKind::Consistency => write!(f, "Consistency"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{kind} error at line {line}: {reason}")]
    Syntax {
        line: usize,
        kind: ErrorKind,
        reason: String,
    },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn syntax(line: usize, kind: ErrorKind, reason: impl fmt::Display) -> Self {
        ParseError::Syntax {
            line,
            kind,
            reason: reason.to_string(),
        }
    }

    /// The meaningful line the error was found on, for syntax errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } => Some(*line),
            ParseError::Io(_) => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ParseError::Syntax { kind, .. } => Some(*kind),
            ParseError::Io(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ParseError::Syntax { reason, .. } => Some(reason),
            ParseError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParseError::syntax(4, ErrorKind::Structure, "level jumps from 0 to 2");
        assert_eq!(
            err.to_string(),
            "Structure error at line 4: level jumps from 0 to 2"
        );
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.kind(), Some(ErrorKind::Structure));
    }

    #[test]
    fn test_kind_display_matches_variant() {
        assert_eq!(ErrorKind::Grammar.to_string(), "Grammar");
        assert_eq!(ErrorKind::Structure.to_string(), "Structure");
        assert_eq!(ErrorKind::Consistency.to_string(), "Consistency");
        let err = ParseError::syntax(2, ErrorKind::Consistency, "tabs after spaces");
        assert_eq!(
            err.to_string(),
            "Consistency error at line 2: tabs after spaces"
        );
    }

    #[test]
    fn test_io_error_has_no_line() {
        let err = ParseError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.line(), None);
        assert_eq!(err.kind(), None);
        assert!(err.to_string().starts_with("failed to read input"));
    }
}
