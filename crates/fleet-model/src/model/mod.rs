//! Entity models for every recognized configuration node
//!
//! Each model wraps one owned [`FieldSet`] and compiles itself into
//! deferred mutation ops. Models declare their attribute lists once;
//! compilation propagates an attribute only when it is present in the
//! source field-set, and child lists compile in source order.

pub mod network;
pub mod plugin;
pub mod provider;
pub mod provisioner;
pub mod root;
pub mod ssh;
pub mod synced_folder;
pub mod trigger;
pub mod vm;
pub mod winrm;

pub use network::{ForwardedPort, PrivateNetwork, PublicNetwork};
pub use plugin::Plugin;
pub use provider::{LibvirtProvider, VirtualBoxProvider};
pub use provisioner::{FileProvisioner, PuppetProvisioner, ShellProvisioner};
pub use root::RootModel;
pub use ssh::SshSettings;
pub use synced_folder::SyncedFolder;
pub use trigger::Trigger;
pub use vm::VmModel;
pub use winrm::WinRmSettings;

use crate::error::Result;
use crate::fields::FieldSet;
use crate::registry::{ModelCategory, ModelRegistry};
use crate::target::ChildKind;
use crate::thunk::MutationOp;
use serde_json::Value;

/// A typed model over one field-set, able to compile itself into
/// deferred mutation ops.
pub trait EntityModel: std::fmt::Debug {
    /// Compile this entity into its ordered mutation ops.
    ///
    /// The registry is used to instantiate discriminated children; leaf
    /// models ignore it.
    fn compile(&self, registry: &ModelRegistry) -> Result<Vec<MutationOp>>;
}

/// Emit a `SetAttribute` op for each named field that is present.
pub(crate) fn push_present_attributes(
    ops: &mut Vec<MutationOp>,
    fields: &FieldSet,
    names: &[&str],
) {
    for name in names {
        if let Some(value) = fields.get(name) {
            ops.push(MutationOp::SetAttribute {
                key: (*name).to_string(),
                value: value.clone(),
            });
        }
    }
}

/// Build an `AddChild` op carrying the discriminator plus every declared
/// attribute present in the source.
pub(crate) fn tagged_child(
    kind: ChildKind,
    type_name: &str,
    fields: &FieldSet,
    attributes: &[&str],
) -> MutationOp {
    let mut resolved = serde_json::Map::new();
    resolved.insert("type".to_string(), Value::String(type_name.to_string()));
    resolved.extend(fields.select(attributes));
    MutationOp::AddChild {
        kind,
        fields: resolved,
    }
}

/// Build an `AddChild` op for a non-discriminated child.
pub(crate) fn plain_child(kind: ChildKind, fields: &FieldSet, attributes: &[&str]) -> MutationOp {
    MutationOp::AddChild {
        kind,
        fields: fields.select(attributes),
    }
}

/// Compile every entry of a child list through a fixed constructor.
pub(crate) fn compile_each<M, F>(
    ops: &mut Vec<MutationOp>,
    registry: &ModelRegistry,
    field: &str,
    entries: &[Value],
    make: F,
) -> Result<()>
where
    M: EntityModel,
    F: Fn(FieldSet) -> M,
{
    for entry in entries {
        let fields = FieldSet::from_value(entry.clone(), field)?;
        ops.extend(make(fields).compile(registry)?);
    }
    Ok(())
}

/// Compile every entry of a child list through the registry.
pub(crate) fn compile_registered(
    ops: &mut Vec<MutationOp>,
    registry: &ModelRegistry,
    category: ModelCategory,
    field: &str,
    entries: &[Value],
) -> Result<()> {
    for entry in entries {
        let fields = FieldSet::from_value(entry.clone(), field)?;
        let model = registry.instantiate(category, fields)?;
        ops.extend(model.compile(registry)?);
    }
    Ok(())
}
