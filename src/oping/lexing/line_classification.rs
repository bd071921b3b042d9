//! Line Classification
//!
//!     Lines are classified on their trimmed text. The first character decides what the line
//!     must be, then the matching grammar extracts its parts:
//!
//! | First char | Line    | Grammar                                    |
//! |------------|---------|--------------------------------------------|
//! | (none)     | Blank   | -                                          |
//! | `#`        | Comment | -                                          |
//! | `+`        | Branch  | `+ [namespace:]name`, nothing after name   |
//! | `-`        | Leaf    | `- name: raw values`                       |
//! | other      | Unknown | always an error                            |
//!
//!     Branch names and namespaces are ASCII letters and digits. Leaf names may also contain
//!     underscores. Everything after a leaf's colon, leading spaces excluded, is the raw value
//!     text, handed to the [values](super::values) tokenizer.

use crate::oping::ast::NodeKind;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const COMMENT_MARKER: char = '#';
pub const BRANCH_MARKER: char = '+';
pub const LEAF_MARKER: char = '-';

static BRANCH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+ +(?:(?P<namespace>[A-Za-z0-9]+):)?(?P<name>[A-Za-z0-9]+)$").unwrap()
});

static LEAF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- +(?P<name>[A-Za-z0-9_]+?) *: *(?P<values>.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Blank,
    Comment,
    Branch,
    Leaf,
    Unknown,
}

impl LineType {
    /// Whether the line counts towards error line numbers.
    pub fn is_meaningful(self) -> bool {
        self != LineType::Blank
    }
}

/// The parts of a node line, borrowed from the line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    Branch {
        namespace: Option<&'a str>,
        name: &'a str,
    },
    Leaf {
        name: &'a str,
        values: &'a str,
    },
}

impl Declaration<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Declaration::Branch { .. } => NodeKind::Branch,
            Declaration::Leaf { .. } => NodeKind::Leaf,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Branch { name, .. } | Declaration::Leaf { name, .. } => *name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("not a valid branch, expected `+ [namespace:]name` but found `{0}`")]
    InvalidBranch(String),
    #[error("not a valid leaf, expected `- name: values` but found `{0}`")]
    InvalidLeaf(String),
    #[error("expected a branch (`+`) or a leaf (`-`) but found `{0}`")]
    UnknownLine(String),
}

/// Determine the type of a trimmed line from its first character.
pub fn classify_line(trimmed: &str) -> LineType {
    match trimmed.chars().next() {
        None => LineType::Blank,
        Some(COMMENT_MARKER) => LineType::Comment,
        Some(BRANCH_MARKER) => LineType::Branch,
        Some(LEAF_MARKER) => LineType::Leaf,
        Some(_) => LineType::Unknown,
    }
}

/// Extract the branch or leaf declared on a trimmed line.
pub fn parse_declaration(trimmed: &str) -> Result<Declaration<'_>, GrammarError> {
    match classify_line(trimmed) {
        LineType::Branch => {
            let caps = BRANCH_REGEX
                .captures(trimmed)
                .ok_or_else(|| GrammarError::InvalidBranch(trimmed.to_string()))?;
            Ok(Declaration::Branch {
                namespace: caps.name("namespace").map(|m| m.as_str()),
                name: caps.name("name").map_or("", |m| m.as_str()),
            })
        }
        LineType::Leaf => {
            let caps = LEAF_REGEX
                .captures(trimmed)
                .ok_or_else(|| GrammarError::InvalidLeaf(trimmed.to_string()))?;
            Ok(Declaration::Leaf {
                name: caps.name("name").map_or("", |m| m.as_str()),
                values: caps.name("values").map_or("", |m| m.as_str()),
            })
        }
        LineType::Blank | LineType::Comment | LineType::Unknown => {
            Err(GrammarError::UnknownLine(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineType::Blank)]
    #[case("# note", LineType::Comment)]
    #[case("+ a", LineType::Branch)]
    #[case("- x: 1", LineType::Leaf)]
    #[case("plain text", LineType::Unknown)]
    fn test_classify_line(#[case] line: &str, #[case] expected: LineType) {
        assert_eq!(classify_line(line), expected);
    }

    #[test]
    fn test_branch_with_namespace() {
        assert_eq!(
            parse_declaration("+ ns:name"),
            Ok(Declaration::Branch {
                namespace: Some("ns"),
                name: "name"
            })
        );
    }

    #[test]
    fn test_branch_without_namespace() {
        assert_eq!(
            parse_declaration("+   name"),
            Ok(Declaration::Branch {
                namespace: None,
                name: "name"
            })
        );
    }

    #[rstest]
    #[case("+name")]
    #[case("+ name trailing")]
    #[case("+ na_me")]
    #[case("+ ns:")]
    #[case("+ a:b:c")]
    fn test_invalid_branches(#[case] line: &str) {
        assert_eq!(
            parse_declaration(line),
            Err(GrammarError::InvalidBranch(line.to_string()))
        );
    }

    #[test]
    fn test_leaf_parts() {
        assert_eq!(
            parse_declaration("- size_x:   1, 2"),
            Ok(Declaration::Leaf {
                name: "size_x",
                values: "1, 2"
            })
        );
        assert_eq!(
            parse_declaration("- label : 'a: b'"),
            Ok(Declaration::Leaf {
                name: "label",
                values: "'a: b'"
            })
        );
    }

    #[test]
    fn test_leaf_without_values() {
        assert_eq!(
            parse_declaration("- empty:"),
            Ok(Declaration::Leaf {
                name: "empty",
                values: ""
            })
        );
    }

    #[rstest]
    #[case("-x: 1")]
    #[case("- x 1")]
    #[case("- : 1")]
    #[case("- bad-name: 1")]
    fn test_invalid_leaves(#[case] line: &str) {
        assert_eq!(
            parse_declaration(line),
            Err(GrammarError::InvalidLeaf(line.to_string()))
        );
    }

    #[test]
    fn test_grammar_messages_name_the_expected_construct() {
        let leaf = parse_declaration("- x 1").unwrap_err().to_string();
        let branch = parse_declaration("+ a b").unwrap_err().to_string();
        let other = parse_declaration("* a").unwrap_err().to_string();
        assert!(leaf.starts_with("not a valid leaf"));
        assert!(branch.starts_with("not a valid branch"));
        assert!(other.starts_with("expected a branch"));
    }
}
