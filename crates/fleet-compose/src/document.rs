//! Document text parsing and format detection
//!
//! Documents arrive as text in YAML, JSON, or TOML; every format is
//! normalized into a `serde_json::Value` tree so the rest of the engine
//! operates on one shape. Reading the text from disk is the caller's
//! concern.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_yaml::Value as YamlValue;

/// Supported document text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocFormat {
    Yaml,
    Json,
    Toml,
}

impl DocFormat {
    /// Detect format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Detect format from content heuristics
    pub fn from_content(content: &str) -> Self {
        let trimmed = content.trim_start();

        // JSON starts with { or [
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return Self::Json;
        }

        // TOML has [section] headers or key = value lines
        if trimmed.contains("\n[") || trimmed.starts_with('[') {
            if trimmed.lines().any(|l| l.contains(" = ")) {
                return Self::Toml;
            }
        }
        if trimmed
            .lines()
            .find(|l| !l.trim_start().starts_with('#') && !l.trim().is_empty())
            .is_some_and(|l| l.contains(" = ") && !l.contains(": "))
        {
            return Self::Toml;
        }

        Self::Yaml
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

/// Parse document text with format auto-detection.
pub fn parse_document(source: &str) -> Result<Value> {
    parse_document_as(source, DocFormat::from_content(source))
}

/// Parse document text in an explicit format.
pub fn parse_document_as(source: &str, format: DocFormat) -> Result<Value> {
    match format {
        DocFormat::Json => {
            serde_json::from_str(source).map_err(|e| Error::parse(format.name(), e.to_string()))
        }
        DocFormat::Yaml => {
            let value: YamlValue = serde_yaml::from_str(source)
                .map_err(|e| Error::parse(format.name(), e.to_string()))?;
            yaml_to_json(&value)
        }
        DocFormat::Toml => {
            let value: toml::Value =
                toml::from_str(source).map_err(|e| Error::parse(format.name(), e.to_string()))?;
            Ok(toml_to_json(&value))
        }
    }
}

/// Convert a serde_yaml::Value to a serde_json::Value, preserving
/// mapping order and flattening tagged values.
fn yaml_to_json(value: &YamlValue) -> Result<Value> {
    match value {
        YamlValue::Null => Ok(Value::Null),
        YamlValue::Bool(b) => Ok(Value::Bool(*b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                Ok(serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null))
            } else {
                Ok(Value::Null)
            }
        }
        YamlValue::String(s) => Ok(Value::String(s.clone())),
        YamlValue::Sequence(items) => {
            let converted: Result<Vec<_>> = items.iter().map(yaml_to_json).collect();
            Ok(Value::Array(converted?))
        }
        YamlValue::Mapping(mapping) => {
            let mut map = serde_json::Map::new();
            for (key, value) in mapping {
                let Some(key) = key.as_str() else {
                    return Err(Error::parse("YAML", "mapping keys must be strings"));
                };
                map.insert(key.to_string(), yaml_to_json(value)?);
            }
            Ok(Value::Object(map))
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Convert a toml::Value to a serde_json::Value.
fn toml_to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number((*i).into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            let mut map = serde_json::Map::new();
            for (key, value) in table {
                map.insert(key.clone(), toml_to_json(value));
            }
            Value::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::json(r#"{"vms": []}"#, DocFormat::Json)]
    #[case::yaml("vms:\n  - name: web\n", DocFormat::Yaml)]
    #[case::toml("[[vms]]\nname = \"web\"\n", DocFormat::Toml)]
    #[case::bare_toml("box = \"ubuntu\"\n", DocFormat::Toml)]
    fn test_format_detection(#[case] source: &str, #[case] expected: DocFormat) {
        assert_eq!(DocFormat::from_content(source), expected);
    }

    #[rstest]
    #[case("yml", Some(DocFormat::Yaml))]
    #[case("YAML", Some(DocFormat::Yaml))]
    #[case("json", Some(DocFormat::Json))]
    #[case("toml", Some(DocFormat::Toml))]
    #[case("rb", None)]
    fn test_extension_detection(#[case] ext: &str, #[case] expected: Option<DocFormat>) {
        assert_eq!(DocFormat::from_extension(ext), expected);
    }

    #[test]
    fn test_formats_normalize_to_the_same_tree() {
        let yaml = "vms:\n  - name: web\n    box: ubuntu\n";
        let json = r#"{"vms": [{"name": "web", "box": "ubuntu"}]}"#;
        let toml = "[[vms]]\nname = \"web\"\nbox = \"ubuntu\"\n";

        let expected = json!({"vms": [{"name": "web", "box": "ubuntu"}]});
        assert_eq!(parse_document(yaml).unwrap(), expected);
        assert_eq!(parse_document(json).unwrap(), expected);
        assert_eq!(parse_document(toml).unwrap(), expected);
    }

    #[test]
    fn test_parse_error_names_the_format() {
        let err = parse_document_as("{not json", DocFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse JSON document"));
    }

    #[test]
    fn test_yaml_rejects_non_string_keys() {
        let err = parse_document_as("1: a\n", DocFormat::Yaml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse YAML document: mapping keys must be strings"
        );
    }
}
