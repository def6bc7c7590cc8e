//! End-to-end composition tests
//!
//! These exercise the complete flow: document text -> parse -> role
//! resolution -> model compilation -> thunk invocation against a
//! recording target.

use fleet_compose::{parse_document, Pipeline, RolesFilter};
use fleet_model::{Call, ChildKind, MutationTarget, RecordingTarget};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fields(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn test_yaml_document_composes_end_to_end() {
    let source = r#"
roles:
  webserver:
    synced_folders:
      - {host_path: ./www, guest_path: /var/www}
  database:
    provisioners:
      - {type: puppet, manifest_file: dbserver.pp}
    box: db-box
vms:
  - name: standalone
    roles: [webserver, database]
    box: own-box
    provisioners:
      - {type: shell, inline: bootstrap}
"#;

    let document = parse_document(source).unwrap();
    let thunk = Pipeline::new().run(document).unwrap();

    let mut target = RecordingTarget::new();
    thunk.invoke(&mut target).unwrap();

    assert_eq!(
        target.into_calls(),
        vec![
            Call::DefineMachine {
                name: "standalone".to_string()
            },
            // The machine's own box wins over the database role's
            Call::SetAttribute {
                key: "box".to_string(),
                value: json!("own-box"),
            },
            // Last-declared role's provisioners run first, machine's own last
            Call::AddChild {
                kind: ChildKind::Provisioner,
                fields: fields(json!({"type": "puppet", "manifest_file": "dbserver.pp"})),
            },
            Call::AddChild {
                kind: ChildKind::Provisioner,
                fields: fields(json!({"type": "shell", "inline": "bootstrap"})),
            },
            Call::AddChild {
                kind: ChildKind::SyncedFolder,
                fields: fields(json!({"host_path": "./www", "guest_path": "/var/www"})),
            },
        ]
    );
}

#[test]
fn test_machines_and_globals_invoke_in_document_order() {
    let source = r#"
vms:
  - name: web
    forwarded_ports:
      - {guest: 80, host: 8080}
    plugins:
      - {plugin: hostmanager}
  - name: db
ssh:
  username: admin
"#;

    let thunk = Pipeline::new().run(parse_document(source).unwrap()).unwrap();
    let mut target = RecordingTarget::new();
    thunk.invoke(&mut target).unwrap();

    assert_eq!(
        target.into_calls(),
        vec![
            Call::DefineMachine {
                name: "web".to_string()
            },
            Call::AddChild {
                kind: ChildKind::ForwardedPort,
                fields: fields(json!({"guest": 80, "host": 8080})),
            },
            // Machine plugins land outside the machine scope
            Call::AddChild {
                kind: ChildKind::Plugin,
                fields: fields(json!({"plugin": "hostmanager"})),
            },
            Call::DefineMachine {
                name: "db".to_string()
            },
            Call::AddChild {
                kind: ChildKind::Ssh,
                fields: fields(json!({"username": "admin"})),
            },
        ]
    );
}

#[test]
fn test_document_without_machines_passes_through_unchanged() {
    let document = json!({
        "roles": {"base": {"box": "ubuntu"}},
        "vagrant": {"host": "detect"},
    });

    assert_eq!(RolesFilter::run(document.clone()).unwrap(), document);
}

#[test]
fn test_toml_and_json_agree_with_yaml() {
    let yaml = "vms:\n  - name: web\n    box: ubuntu\n";
    let toml = "[[vms]]\nname = \"web\"\nbox = \"ubuntu\"\n";
    let json_src = r#"{"vms": [{"name": "web", "box": "ubuntu"}]}"#;

    let from_yaml = Pipeline::new().run(parse_document(yaml).unwrap()).unwrap();
    let from_toml = Pipeline::new().run(parse_document(toml).unwrap()).unwrap();
    let from_json = Pipeline::new()
        .run(parse_document(json_src).unwrap())
        .unwrap();

    assert_eq!(from_yaml, from_toml);
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_failed_composition_performs_no_mutations() {
    let document = json!({
        "roles": {"web": {}},
        "vms": [{"name": "x", "roles": "ghost"}],
    });

    let target = RecordingTarget::new();
    let result = Pipeline::new().run(document);
    assert!(result.is_err());
    assert!(target.calls().is_empty());

    // A target error during invocation surfaces as well
    struct FailingTarget;
    impl MutationTarget for FailingTarget {
        fn define_machine(
            &mut self,
            _name: &str,
        ) -> fleet_model::Result<&mut dyn MutationTarget> {
            Err(fleet_model::Error::target("machine rejected"))
        }
        fn set_attribute(
            &mut self,
            _key: &str,
            _value: &serde_json::Value,
        ) -> fleet_model::Result<()> {
            Ok(())
        }
        fn add_child(
            &mut self,
            _kind: ChildKind,
            _fields: &serde_json::Map<String, serde_json::Value>,
        ) -> fleet_model::Result<()> {
            Ok(())
        }
    }

    let thunk = Pipeline::new()
        .run(json!({"vms": [{"name": "web"}]}))
        .unwrap();
    let err = thunk.invoke(&mut FailingTarget).unwrap_err();
    assert_eq!(err.to_string(), "Target error: machine rejected");
}
