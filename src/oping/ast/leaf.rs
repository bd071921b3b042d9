//! Leaf element
//!
//!     A leaf is declared with a dash, a name, a colon and its values:
//!
//!         - colors: red, 'dark, blue', green
//!
//!     The values keep their order and duplicates. Interior empty fields (`a,,b`) are kept as
//!     empty strings, a trailing comma does not add an empty value.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaf {
    name: String,
    values: Vec<String>,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn name_is(&self, name: &str) -> bool {
        self.name == name
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<String> {
        &mut self.values
    }

    /// Drops the values but keeps the allocation for reuse.
    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_name_and_capacity() {
        let mut leaf = Leaf::new("sizes");
        leaf.values_mut()
            .extend(["s", "m", "l"].iter().map(|v| v.to_string()));
        let capacity = leaf.values.capacity();

        leaf.clear();

        assert_eq!(leaf.name(), "sizes");
        assert!(leaf.values().is_empty());
        assert_eq!(leaf.values.capacity(), capacity);
    }
}
