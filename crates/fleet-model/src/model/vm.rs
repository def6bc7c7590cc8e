//! Machine model

use crate::error::{Error, Result};
use crate::fields::FieldSet;
use crate::model::network::{ForwardedPort, PrivateNetwork, PublicNetwork};
use crate::model::plugin::Plugin;
use crate::model::synced_folder::SyncedFolder;
use crate::model::{
    compile_each, compile_registered, push_present_attributes, EntityModel,
};
use crate::registry::{ModelCategory, ModelRegistry};
use crate::thunk::MutationOp;

/// One machine definition and all of its nested configuration.
///
/// Compiles to a `DefineMachine` scope holding the machine's own
/// attribute sets followed by its children in a fixed order: the singular
/// `provider`, then `providers`, `provisioners`, `forwarded_ports`,
/// `private_networks`, `public_networks` and `synced_folders`, each in
/// source-list order. Machine-level `plugins` compile after the scope
/// closes, at the parent level.
#[derive(Debug)]
pub struct VmModel {
    fields: FieldSet,
}

impl VmModel {
    const SCALAR_ATTRIBUTES: &'static [&'static str] =
        &["box", "box_url", "hostname", "guest", "communicator"];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for VmModel {
    fn compile(&self, registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        let name = self
            .fields
            .string("name")?
            .ok_or_else(|| Error::missing("name", "a machine name string"))?
            .to_string();

        let mut body = Vec::new();
        push_present_attributes(&mut body, &self.fields, Self::SCALAR_ATTRIBUTES);

        if let Some(value) = self.fields.get("provider") {
            let fields = FieldSet::from_value(value.clone(), "provider")?;
            let model = registry.instantiate(ModelCategory::Provider, fields)?;
            body.extend(model.compile(registry)?);
        }

        compile_registered(
            &mut body,
            registry,
            ModelCategory::Provider,
            "providers",
            self.fields.list("providers")?,
        )?;
        compile_registered(
            &mut body,
            registry,
            ModelCategory::Provisioner,
            "provisioners",
            self.fields.list("provisioners")?,
        )?;
        compile_each(
            &mut body,
            registry,
            "forwarded_ports",
            self.fields.list("forwarded_ports")?,
            ForwardedPort::new,
        )?;
        compile_each(
            &mut body,
            registry,
            "private_networks",
            self.fields.list("private_networks")?,
            PrivateNetwork::new,
        )?;
        compile_each(
            &mut body,
            registry,
            "public_networks",
            self.fields.list("public_networks")?,
            PublicNetwork::new,
        )?;
        compile_each(
            &mut body,
            registry,
            "synced_folders",
            self.fields.list("synced_folders")?,
            SyncedFolder::new,
        )?;

        let mut ops = vec![MutationOp::DefineMachine { name, ops: body }];

        // Plugins install environment-wide, outside the machine scope
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
