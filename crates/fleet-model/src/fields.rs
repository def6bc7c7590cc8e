//! Owned field-sets with presence-gated access

use crate::error::{Error, Result};
use serde_json::{Map, Value};

const EMPTY: &[Value] = &[];

/// An owned set of named fields backing one entity model.
///
/// Presence is significant: `get` distinguishes "absent" from "present but
/// empty or false", and the shape-checked accessors only fail when a field
/// is present with the wrong shape. List-valued fields default to an empty
/// list when absent; scalar fields default to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Map<String, Value>,
}

impl FieldSet {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a field-set from a document fragment, which must be a map.
    ///
    /// `field` names the fragment in error messages (e.g. the list key the
    /// fragment came from).
    pub fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::malformed(field, "a field-set map", &other)),
        }
    }

    /// Whether the field is present, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The raw value, if the field is present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A string field. Absent fields resolve to `None`; a present
    /// non-string value is an error.
    pub fn string(&self, name: &str) -> Result<Option<&str>> {
        match self.fields.get(name) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(Error::malformed(name, "a string", other)),
        }
    }

    /// A list field. Absent fields resolve to the empty list; a present
    /// non-list value is an error.
    pub fn list(&self, name: &str) -> Result<&[Value]> {
        match self.fields.get(name) {
            None => Ok(EMPTY),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(Error::malformed(name, "a list", other)),
        }
    }

    /// A map field. Absent fields resolve to `None`; a present non-map
    /// value is an error.
    pub fn map(&self, name: &str) -> Result<Option<&Map<String, Value>>> {
        match self.fields.get(name) {
            None => Ok(None),
            Some(Value::Object(fields)) => Ok(Some(fields)),
            Some(other) => Err(Error::malformed(name, "a map", other)),
        }
    }

    /// Clone the named fields that are present into a new map, preserving
    /// the declaration order of `names`.
    pub fn select(&self, names: &[&str]) -> Map<String, Value> {
        let mut selected = Map::new();
        for name in names {
            if let Some(value) = self.fields.get(*name) {
                selected.insert((*name).to_string(), value.clone());
            }
        }
        selected
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for FieldSet {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn fields(value: Value) -> FieldSet {
        FieldSet::from_value(value, "test").unwrap()
    }

    #[test]
    fn test_presence_is_distinct_from_emptiness() {
        let set = fields(json!({"box": "", "provisioners": []}));

        // Present-but-empty values are still present
        assert!(set.contains("box"));
        assert_eq!(set.string("box").unwrap(), Some(""));
        assert!(set.contains("provisioners"));
        assert_eq!(set.list("provisioners").unwrap(), EMPTY);

        // Absent values fall back to defaults
        assert!(!set.contains("hostname"));
        assert_eq!(set.string("hostname").unwrap(), None);
        assert_eq!(set.list("providers").unwrap(), EMPTY);
    }

    #[rstest]
    #[case::number(json!(42), "a number")]
    #[case::boolean(json!(true), "a boolean")]
    #[case::list(json!(["a"]), "a list")]
    #[case::map(json!({"a": 1}), "a map")]
    fn test_string_accessor_rejects_other_shapes(#[case] value: Value, #[case] found: &str) {
        let set = fields(json!({"box": value}));
        let err = set.string("box").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Malformed field 'box': expected a string, got {found}")
        );
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let set = fields(json!({"box": 42, "provisioners": "shell"}));
        assert!(set.list("provisioners").is_err());
        assert!(set.map("box").is_err());
    }

    #[test]
    fn test_from_value_rejects_non_maps() {
        let err = FieldSet::from_value(json!(["a"]), "vms").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed field 'vms': expected a field-set map, got a list"
        );
    }

    #[test]
    fn test_select_keeps_declaration_order() {
        let set = fields(json!({"c": 3, "a": 1, "missing": null}));
        let selected = set.select(&["a", "b", "c"]);

        let keys: Vec<_> = selected.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(selected["a"], json!(1));
    }
}
