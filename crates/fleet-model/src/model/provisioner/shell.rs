//! `shell` provisioner

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{tagged_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// Runs a script or an inline command on the guest.
///
/// Either `path` (a host-side script) or `inline` (a command string) is
/// expected; which one is the caller's choice and is not validated here.
#[derive(Debug)]
pub struct ShellProvisioner {
    fields: FieldSet,
}

impl ShellProvisioner {
    const ATTRIBUTES: &'static [&'static str] = &[
        "path",
        "inline",
        "args",
        "env",
        "privileged",
        "upload_path",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for ShellProvisioner {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![tagged_child(
            ChildKind::Provisioner,
            "shell",
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
