//! Format registry for forest serialization
//!
//! This module provides a pluggable registry system for forest serialization formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use super::serialized::{JsonFormatter, YamlFormatter};
use super::treeviz::TreevizFormatter;
use crate::oping::ast::Branch;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for forest formatters
///
/// Implementors provide a way to serialize a forest to a string representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    /// Serialize a forest, or any slice of top-level branches, to this format
    fn serialize(&self, forest: &[Branch]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of forest formatters, looked up by name.
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// A registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TreevizFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a forest using the named format
    pub fn serialize(&self, forest: &[Branch], format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(forest)
    }

    /// Names and descriptions of the registered formats, sorted by name
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.formatters
            .values()
            .map(|f| (f.name(), f.description()))
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
