//! Root document model

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::plugin::Plugin;
use crate::model::ssh::SshSettings;
use crate::model::trigger::Trigger;
use crate::model::vm::VmModel;
use crate::model::winrm::WinRmSettings;
use crate::model::{compile_each, EntityModel};
use crate::registry::ModelRegistry;
use crate::thunk::MutationOp;

/// The top level of a resolved document.
///
/// Compiles global settings and every machine, in document order:
/// `vagrant` host override first, then each `vms` entry, then `triggers`,
/// `ssh`, `winrm` and `plugins` pass-through children.
#[derive(Debug)]
pub struct RootModel {
    fields: FieldSet,
}

impl RootModel {
    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for RootModel {
    fn compile(&self, registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        let mut ops = Vec::new();

        if let Some(vagrant) = self.fields.map("vagrant")? {
            if let Some(host) = vagrant.get("host") {
                ops.push(MutationOp::SetAttribute {
                    key: "vagrant.host".to_string(),
                    value: host.clone(),
                });
            }
        }

        let vms = self.fields.list("vms")?;
        tracing::debug!(machines = vms.len(), "Compiling root document");
        compile_each(&mut ops, registry, "vms", vms, VmModel::new)?;

        compile_each(
            &mut ops,
            registry,
            "triggers",
            self.fields.list("triggers")?,
            Trigger::new,
        )?;

        if let Some(value) = self.fields.get("ssh") {
            let fields = FieldSet::from_value(value.clone(), "ssh")?;
            ops.extend(SshSettings::new(fields).compile(registry)?);
        }
        if let Some(value) = self.fields.get("winrm") {
            let fields = FieldSet::from_value(value.clone(), "winrm")?;
            ops.extend(WinRmSettings::new(fields).compile(registry)?);
        }
        compile_each(
            &mut ops,
            registry,
            "plugins",
            self.fields.list("plugins")?,
            Plugin::new,
        )?;

        Ok(ops)
    }
}
