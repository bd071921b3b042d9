//! Treeviz formatter for forests
//!
//! Treeviz renders one line per node, which makes a parsed document quick to scan. Nesting is
//! drawn with box characters, two columns per level:
//!
//! ├─ + shop:fruits
//! │ ├─ - apples = ["3", "green"]
//! │ └─ + citrus
//! │   └─ - lemons = ["12"]
//! └─ + veggies
//!
//! Within a branch the leaves come first, then the child branches. Values are printed quoted,
//! so empty values and surrounding blanks stay visible.

use super::registry::{FormatError, Formatter};
use crate::oping::ast::{Branch, Leaf};
use std::fmt::Write;

enum Entry<'a> {
    Branch(&'a Branch),
    Leaf(&'a Leaf),
}

fn label(entry: &Entry<'_>) -> String {
    match entry {
        Entry::Branch(branch) => format!("+ {}", branch.qualified_name()),
        Entry::Leaf(leaf) => format!("- {} = {:?}", leaf.name(), leaf.values()),
    }
}

fn children(branch: &Branch) -> Vec<Entry<'_>> {
    branch
        .leaves()
        .iter()
        .map(Entry::Leaf)
        .chain(branch.branches().iter().map(Entry::Branch))
        .collect()
}

fn format_entries(output: &mut String, entries: &[Entry<'_>], prefix: &str) {
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index == entries.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        // Writing to a String cannot fail.
        let _ = writeln!(output, "{}{} {}", prefix, connector, label(entry));

        if let Entry::Branch(branch) = entry {
            let nested = children(branch);
            if !nested.is_empty() {
                let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
                format_entries(output, &nested, &child_prefix);
            }
        }
    }
}

/// Render a forest as treeviz text.
pub fn to_treeviz_str(forest: &[Branch]) -> String {
    let mut output = String::new();
    let entries: Vec<_> = forest.iter().map(Entry::Branch).collect();
    format_entries(&mut output, &entries, "");
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, forest: &[Branch]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(forest))
    }

    fn description(&self) -> &str {
        "One line per node, nesting drawn as a tree"
    }
}
