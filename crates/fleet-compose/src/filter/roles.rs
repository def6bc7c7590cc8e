//! Role resolution and template merging
//!
//! A document may define reusable machine templates under a top-level
//! `roles` map and attach them to machines by name:
//!
//! ```yaml
//! roles:
//!   webserver:
//!     synced_folders:
//!       - {host_path: ./www, guest_path: /var/www}
//!   database:
//!     provisioners:
//!       - {type: puppet, manifest_file: dbserver.pp}
//! vms:
//!   - {name: web, roles: webserver}
//!   - {name: standalone, roles: [webserver, database]}
//! ```
//!
//! `vms` is a list because machine order is significant; `roles` is a map
//! because role declaration order is not. The filter folds each machine's
//! role stack into its own field-set and emits a rewritten document with
//! both `roles` keys consumed.
//!
//! Merge precedence: a scalar field already present on the machine is
//! never overwritten, and among roles the first declared to contribute a
//! scalar wins. List fields accumulate by prepending each role's items to
//! the front of the accumulator, so the final order is the reverse of
//! role declaration order followed by the machine's own items. Downstream
//! consumers depend on that exact order.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

const LIST_KEYS: &[&str] = &[
    "providers",
    "provisioners",
    "synced_folders",
    "forwarded_ports",
    "private_networks",
    "public_networks",
    "guest",
];

const SCALAR_KEYS: &[&str] = &["provider", "box", "name", "communicator"];

/// Resolves role references and merges role field-sets into machines.
pub struct RolesFilter;

impl RolesFilter {
    /// Rewrite a document by folding roles into every machine.
    ///
    /// Takes the document by value and returns a new one. A document
    /// without a top-level `vms` key is returned unchanged, `roles`
    /// included.
    pub fn run(document: Value) -> Result<Value> {
        let mut root = match document {
            Value::Object(root) => root,
            other => return Ok(other),
        };
        if !root.contains_key("vms") {
            return Ok(Value::Object(root));
        }

        let roles = match root.remove("roles") {
            None => Map::new(),
            Some(Value::Object(roles)) => roles,
            Some(other) => {
                return Err(Error::malformed("roles", "a map of role definitions", &other));
            }
        };
        let vms = match root.remove("vms") {
            Some(Value::Array(vms)) => vms,
            Some(other) => {
                return Err(Error::malformed("vms", "an ordered list of machines", &other));
            }
            None => unreachable!("checked above"),
        };

        let mut merged = Vec::with_capacity(vms.len());
        for vm in vms {
            let fields = match vm {
                Value::Object(fields) => fields,
                other => return Err(Error::malformed("vms", "a machine field-set", &other)),
            };
            merged.push(Value::Object(Self::filter_vm(fields, &roles)?));
        }
        root.insert("vms".to_string(), Value::Array(merged));

        Ok(Value::Object(root))
    }

    /// Fold one machine's role stack into its own field-set.
    fn filter_vm(
        mut vm: Map<String, Value>,
        roles: &Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let stack = Self::role_stack(vm.remove("roles"), roles)?;
        if !stack.is_empty() {
            tracing::debug!(roles = stack.len(), "Folding roles into machine");
        }
        for role in stack {
            Self::merge(&mut vm, role)?;
        }
        Ok(vm)
    }

    /// Normalize a role reference into an ordered stack of definitions.
    ///
    /// Absent references yield an empty stack; a single name behaves like
    /// a one-element list; a list resolves in its declared order.
    fn role_stack<'a>(
        reference: Option<Value>,
        roles: &'a Map<String, Value>,
    ) -> Result<Vec<&'a Map<String, Value>>> {
        let names = match reference {
            None => Vec::new(),
            Some(Value::String(name)) => vec![name],
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(Error::malformed("roles", "a role name string", &other)),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::malformed(
                    "roles",
                    "a role name, a list of role names, or nothing",
                    &other,
                ));
            }
        };

        names
            .iter()
            .map(|name| Self::role(name, roles))
            .collect()
    }

    /// Fetch the role definition for a name.
    fn role<'a>(name: &str, roles: &'a Map<String, Value>) -> Result<&'a Map<String, Value>> {
        match roles.get(name) {
            Some(Value::Object(fields)) => Ok(fields),
            Some(other) => Err(Error::malformed(name, "a role field-set map", other)),
            None => {
                let mut known: Vec<String> = roles.keys().cloned().collect();
                known.sort();
                Err(Error::UnknownRole {
                    name: name.to_string(),
                    known,
                })
            }
        }
    }

    /// Merge one role into the accumulated machine field-set.
    ///
    /// List fields present on the role are prepended, in their original
    /// order, to the front of the accumulator's list (initialized empty
    /// when absent). Scalar fields are written only when the accumulator
    /// does not already have the key; presence gates the write, not
    /// truthiness. Fields outside both sets are inert.
    fn merge(left: &mut Map<String, Value>, right: &Map<String, Value>) -> Result<()> {
        for key in LIST_KEYS {
            let Some(contribution) = right.get(*key) else {
                continue;
            };
            let Value::Array(items) = contribution else {
                return Err(Error::malformed(*key, "a list", contribution));
            };
            match left
                .entry((*key).to_string())
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                Value::Array(accumulated) => {
                    accumulated.splice(0..0, items.iter().cloned());
                }
                other => return Err(Error::malformed(*key, "a list", other)),
            }
        }

        for key in SCALAR_KEYS {
            if let Some(value) = right.get(*key) {
                if !left.contains_key(*key) {
                    left.insert((*key).to_string(), value.clone());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn run(document: Value) -> Value {
        RolesFilter::run(document).unwrap()
    }

    #[test]
    fn test_first_declared_role_wins_scalars() {
        let merged = run(json!({
            "roles": {
                "a": {"box": "from-a"},
                "b": {"box": "from-b"},
            },
            "vms": [{"name": "web", "roles": ["a", "b"]}],
        }));
        assert_eq!(merged["vms"][0]["box"], json!("from-a"));
    }

    #[test]
    fn test_machine_scalar_beats_every_role() {
        let merged = run(json!({
            "roles": {"a": {"box": "from-a"}},
            "vms": [{"name": "web", "box": "own", "roles": ["a"]}],
        }));
        assert_eq!(merged["vms"][0]["box"], json!("own"));
    }

    #[test]
    fn test_list_items_accumulate_in_reverse_role_order() {
        let merged = run(json!({
            "roles": {
                "a": {"provisioners": [{"type": "shell", "inline": "a1"}]},
                "b": {"provisioners": [{"type": "shell", "inline": "b1"}]},
            },
            "vms": [{
                "name": "web",
                "roles": ["a", "b"],
                "provisioners": [{"type": "shell", "inline": "v1"}],
            }],
        }));

        let inlines: Vec<_> = merged["vms"][0]["provisioners"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["inline"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(inlines, vec!["b1", "a1", "v1"]);
    }

    #[test]
    fn test_role_items_keep_their_own_order() {
        let merged = run(json!({
            "roles": {
                "a": {"provisioners": [
                    {"type": "shell", "inline": "a1"},
                    {"type": "shell", "inline": "a2"},
                ]},
            },
            "vms": [{"name": "web", "roles": "a"}],
        }));

        let inlines: Vec<_> = merged["vms"][0]["provisioners"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["inline"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(inlines, vec!["a1", "a2"]);
    }

    #[rstest]
    #[case::single_name(json!("a"))]
    #[case::one_element_list(json!(["a"]))]
    fn test_role_reference_normalization(#[case] reference: Value) {
        let merged = run(json!({
            "roles": {"a": {"box": "from-a"}},
            "vms": [{"name": "web", "roles": reference}],
        }));
        assert_eq!(
            merged,
            json!({"vms": [{"name": "web", "box": "from-a"}]})
        );
    }

    #[test]
    fn test_absent_reference_is_a_no_op_merge() {
        let merged = run(json!({
            "roles": {"a": {"box": "from-a"}},
            "vms": [{"name": "web"}],
        }));
        assert_eq!(merged, json!({"vms": [{"name": "web"}]}));
    }

    #[test]
    fn test_unknown_role_fails_with_known_names() {
        let err = RolesFilter::run(json!({
            "roles": {"db": {}, "web": {}},
            "vms": [{"name": "x", "roles": ["ghost"]}],
        }))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unknown role 'ghost', defined roles: [\"db\", \"web\"]"
        );
    }

    #[test]
    fn test_document_without_vms_is_untouched() {
        let document = json!({
            "roles": {"a": {"box": "from-a"}},
            "ssh": {"username": "admin"},
        });
        assert_eq!(run(document.clone()), document);
    }

    #[test]
    fn test_roles_key_is_consumed() {
        let merged = run(json!({
            "roles": {"a": {}},
            "vms": [{"name": "web", "roles": "a"}],
        }));
        assert_eq!(merged, json!({"vms": [{"name": "web"}]}));
    }

    #[test]
    fn test_inert_role_fields_are_ignored() {
        let merged = run(json!({
            "roles": {"a": {"hostname": "ignored", "box": "kept"}},
            "vms": [{"name": "web", "roles": "a"}],
        }));
        assert_eq!(
            merged["vms"][0],
            json!({"name": "web", "box": "kept"})
        );
    }

    #[test]
    fn test_scalar_write_is_presence_gated() {
        // A machine whose box is explicitly null still owns the field
        let merged = run(json!({
            "roles": {"a": {"box": "from-a"}},
            "vms": [{"name": "web", "box": null, "roles": "a"}],
        }));
        assert_eq!(merged["vms"][0]["box"], json!(null));
    }

    #[rstest]
    #[case::roles_not_a_map(json!({"roles": [], "vms": []}))]
    #[case::vms_not_a_list(json!({"vms": {}}))]
    #[case::vm_not_a_map(json!({"vms": ["web"]}))]
    #[case::reference_not_a_name(json!({"vms": [{"roles": 42}]}))]
    #[case::list_field_not_a_list(json!({
        "roles": {"a": {"provisioners": "shell"}},
        "vms": [{"roles": "a"}],
    }))]
    fn test_malformed_shapes_fail(#[case] document: Value) {
        let err = RolesFilter::run(document).unwrap_err();
        assert!(matches!(err, Error::MalformedField { .. }));
    }
}
