//! `puppet` provisioner

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{tagged_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// Applies Puppet manifests on the guest with `puppet apply`.
#[derive(Debug)]
pub struct PuppetProvisioner {
    fields: FieldSet,
}

impl PuppetProvisioner {
    const ATTRIBUTES: &'static [&'static str] = &[
        "binary_path",
        "manifests_path",
        "manifest_file",
        "module_path",
        "facter",
        "options",
        "hiera_config_path",
        "working_directory",
        "environment",
        "environment_path",
        "synced_folder_type",
        "synced_folder_args",
        "temp_dir",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for PuppetProvisioner {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![tagged_child(
            ChildKind::Provisioner,
            "puppet",
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
