//! Indentation tracking
//!
//!     Documents don't declare their indentation width. The first line that starts with a space
//!     or a tab defines it: the length of its leading run of that character becomes the unit,
//!     and the line itself is at level 1. From then on every line's level is its leading
//!     whitespace length divided by the unit.
//!
//!     Two things are rejected:
//!         - leading whitespace that mixes in the other character (tabs in a space indented
//!           document, or the reverse);
//!         - leading whitespace whose length is not a multiple of the unit.
//!
//!     The tracker also remembers the level of the previous node, which the tree builder needs
//!     to validate the next one.

use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentChar {
    Space,
    Tab,
}

impl IndentChar {
    fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(IndentChar::Space),
            '\t' => Some(IndentChar::Tab),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            IndentChar::Space => ' ',
            IndentChar::Tab => '\t',
        }
    }
}

impl fmt::Display for IndentChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentChar::Space => write!(f, "spaces"),
            IndentChar::Tab => write!(f, "tabs"),
        }
    }
}

/// The width and character of one indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentUnit {
    pub width: usize,
    pub ch: IndentChar,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndentationError {
    #[error("indentation mixes tabs and spaces, the document is indented with {expected}")]
    MixedCharacters { expected: IndentChar },
    #[error("indentation of {width} is not a multiple of the indentation unit ({unit})")]
    NotAMultiple { width: usize, unit: usize },
}

#[derive(Debug, Default)]
pub struct IndentationTracker {
    unit: Option<IndentUnit>,
    previous: Option<usize>,
}

impl IndentationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The inferred unit, once an indented line has been seen.
    pub fn unit(&self) -> Option<IndentUnit> {
        self.unit
    }

    /// Level of the last node accepted by the builder.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn record(&mut self, level: usize) {
        self.previous = Some(level);
    }

    /// Computes the level of a raw (untrimmed) line.
    ///
    /// The first indented line fixes the unit and is always level 1.
    pub fn level(&mut self, raw_line: &str) -> Result<usize, IndentationError> {
        let indent = leading_indentation(raw_line);
        let Some(first) = indent.chars().next().and_then(IndentChar::from_char) else {
            return Ok(0);
        };

        match self.unit {
            None => {
                let width = indent.chars().take_while(|&c| c == first.as_char()).count();
                if width != indent.len() {
                    return Err(IndentationError::MixedCharacters { expected: first });
                }
                let unit = IndentUnit { width, ch: first };
                debug!(width, ch = %unit.ch, "inferred indentation unit");
                self.unit = Some(unit);
                Ok(1)
            }
            Some(unit) => {
                if indent.chars().any(|c| c != unit.ch.as_char()) {
                    return Err(IndentationError::MixedCharacters { expected: unit.ch });
                }
                if indent.len() % unit.width != 0 {
                    return Err(IndentationError::NotAMultiple {
                        width: indent.len(),
                        unit: unit.width,
                    });
                }
                Ok(indent.len() / unit.width)
            }
        }
    }
}

/// The leading run of spaces and tabs.
fn leading_indentation(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}
