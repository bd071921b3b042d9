//! JSON and YAML formatters, backed by the nodes' serde implementations.
//!
//! Branches serialize as `{namespace?, name, leaves, branches}`, leaves as `{name, values}`.

use super::registry::{FormatError, Formatter};
use crate::oping::ast::Branch;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, forest: &[Branch]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(forest)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, forest: &[Branch]) -> Result<String, FormatError> {
        serde_yaml::to_string(forest).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oping::parsing::parse_forest;

    #[test]
    fn test_json_shape() {
        let forest = parse_forest("+ ns:a\n  - x: 1, 2\n  + b").unwrap();
        let json = JsonFormatter.serialize(&forest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "namespace": "ns",
                "name": "a",
                "leaves": [{"name": "x", "values": ["1", "2"]}],
                "branches": [{"name": "b", "leaves": [], "branches": []}]
            }])
        );
    }

    #[test]
    fn test_yaml_round_trips_through_serde_value() {
        let forest = parse_forest("+ a\n  - x: 'one, two'").unwrap();
        let yaml = YamlFormatter.serialize(&forest).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value[0]["name"].as_str(), Some("a"));
        assert_eq!(value[0]["leaves"][0]["values"][0].as_str(), Some("one, two"));
    }
}
