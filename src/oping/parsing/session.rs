//! Parse session
//!
//!     All the mutable state of one parse: the meaningful line counter, the indentation
//!     tracker, the tree under construction and, in streaming mode, the node pool.
//!
//!     For every line, [ParseSession::feed]:
//!         1. skips blank lines, and counts then skips comments;
//!         2. computes the level ([IndentationTracker::level]);
//!         3. extracts the declaration ([parse_declaration]);
//!         4. validates the level ([check_level]);
//!         5. in streaming mode, if the line opens a new top-level branch, lends the previous
//!            one to the callback and recycles it;
//!         6. builds the node (from the pool when streaming) and attaches it.
//!
//!     Any failure is returned right away and the session must not be fed again.

use crate::oping::ast::{Branch, Forest, Leaf, Node, NodeKind};
use crate::oping::building::tree::check_level;
use crate::oping::building::{NodePool, PoolStats, TreeBuilder};
use crate::oping::error::{ErrorKind, ParseError};
use crate::oping::lexing::{
    classify_line, parse_declaration, tokenize_values_into, Declaration, IndentationTracker,
    LineType,
};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ParseSession {
    line: usize,
    tracker: IndentationTracker,
    builder: TreeBuilder,
    pool: Option<NodePool>,
    delivered: usize,
}

impl ParseSession {
    /// A session that keeps every node (forest mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that recycles delivered branches (streaming mode).
    pub fn recycling() -> Self {
        Self {
            pool: Some(NodePool::new()),
            ..Self::default()
        }
    }

    pub fn is_recycling(&self) -> bool {
        self.pool.is_some()
    }

    /// Top-level branches handed to the callback so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.pool.as_ref().map(NodePool::stats).unwrap_or_default()
    }

    /// Processes one raw line.
    ///
    /// `on_branch` only runs in recycling sessions, when a new top-level branch starts.
    pub fn feed<F>(&mut self, raw: &str, on_branch: &mut F) -> Result<(), ParseError>
    where
        F: FnMut(&Branch),
    {
        let trimmed = raw.trim();
        let line_type = classify_line(trimmed);
        if !line_type.is_meaningful() {
            return Ok(());
        }
        self.line += 1;
        if line_type == LineType::Comment {
            return Ok(());
        }

        let line = self.line;
        let level = self
            .tracker
            .level(raw)
            .map_err(|e| ParseError::syntax(line, ErrorKind::Consistency, e))?;
        let declaration =
            parse_declaration(trimmed).map_err(|e| ParseError::syntax(line, ErrorKind::Grammar, e))?;
        let kind = declaration.kind();
        check_level(level, self.tracker.previous())
            .map_err(|e| ParseError::syntax(line, ErrorKind::Structure, e))?;

        if level == 0 && kind == NodeKind::Branch {
            self.complete_top_level(on_branch);
        }

        let node = self.make_node(declaration);
        self.builder
            .attach(level, node)
            .map_err(|e| ParseError::syntax(line, ErrorKind::Structure, e))?;
        self.tracker.record(level);
        Ok(())
    }

    /// Delivers and recycles the open top-level branch, when recycling.
    fn complete_top_level<F>(&mut self, on_branch: &mut F)
    where
        F: FnMut(&Branch),
    {
        let Some(pool) = self.pool.as_mut() else {
            return;
        };
        if let Some(completed) = self.builder.take_top_level() {
            debug!(
                branch = %completed.qualified_name(),
                nodes = completed.node_count(),
                "delivering top-level branch"
            );
            on_branch(&completed);
            self.delivered += 1;
            pool.recycle_branch(completed);
        }
    }

    fn make_node(&mut self, declaration: Declaration<'_>) -> Node {
        match declaration {
            Declaration::Branch { namespace, name } => Node::Branch(match self.pool.as_mut() {
                Some(pool) => pool.take_branch(namespace, name),
                None => Branch::new(namespace, name),
            }),
            Declaration::Leaf { name, values } => {
                let mut leaf = match self.pool.as_mut() {
                    Some(pool) => pool.take_leaf(name),
                    None => Leaf::new(name),
                };
                tokenize_values_into(values, leaf.values_mut());
                Node::Leaf(leaf)
            }
        }
    }

    /// Ends a forest session, returning every top-level branch.
    pub fn finish_forest(self) -> Forest {
        debug!(lines = self.line, "forest parse complete");
        self.builder.into_forest()
    }

    /// Ends a streaming session. The last open top-level branch is delivered but not recycled.
    pub fn finish_streaming<F>(mut self, on_branch: &mut F) -> (usize, PoolStats)
    where
        F: FnMut(&Branch),
    {
        if let Some(last) = self.builder.take_top_level() {
            debug!(branch = %last.qualified_name(), "delivering last top-level branch");
            on_branch(&last);
            self.delivered += 1;
        }
        let stats = self.pool_stats();
        debug!(
            lines = self.line,
            delivered = self.delivered,
            allocated = stats.allocated,
            reused = stats.reused,
            parked = self.pool.as_ref().map_or(0, NodePool::parked),
            "streaming parse complete"
        );
        (self.delivered, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(session: &mut ParseSession, source: &str) -> Result<Vec<String>, ParseError> {
        let mut seen = Vec::new();
        for raw in source.lines() {
            session.feed(raw, &mut |b: &Branch| seen.push(b.name().to_string()))?;
        }
        Ok(seen)
    }

    #[test]
    fn test_forest_session_never_delivers() {
        let mut session = ParseSession::new();
        let seen = feed_all(&mut session, "+ a\n+ b\n+ c").unwrap();
        assert!(seen.is_empty());
        assert!(!session.is_recycling());
        assert_eq!(session.finish_forest().len(), 3);
    }

    #[test]
    fn test_recycling_session_delivers_previous_branch() {
        let mut session = ParseSession::recycling();
        let seen = feed_all(&mut session, "+ a\n  - x: 1\n+ b\n+ c").unwrap();
        assert_eq!(seen, ["a", "b"]);
        assert_eq!(session.delivered(), 2);

        let mut last = Vec::new();
        let (delivered, _) =
            session.finish_streaming(&mut |b: &Branch| last.push(b.name().to_string()));
        assert_eq!(last, ["c"]);
        assert_eq!(delivered, 3);
    }

    #[test]
    fn test_line_counter_skips_blanks_but_counts_comments() {
        let mut session = ParseSession::new();
        let err = feed_all(&mut session, "\n# header\n\n+ a\n   \n  oops").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.kind(), Some(ErrorKind::Grammar));
    }

    #[test]
    fn test_invalid_line_is_not_delivered_first() {
        let mut session = ParseSession::recycling();
        let mut seen = Vec::new();
        session
            .feed("+ a", &mut |b: &Branch| seen.push(b.name().to_string()))
            .unwrap();
        let err = session
            .feed("+ b c", &mut |b: &Branch| seen.push(b.name().to_string()))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Grammar));
        assert!(seen.is_empty());
    }
}
