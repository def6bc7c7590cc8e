//! `file` provisioner

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{tagged_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// Copies a file or directory from the host to the guest.
#[derive(Debug)]
pub struct FileProvisioner {
    fields: FieldSet,
}

impl FileProvisioner {
    const ATTRIBUTES: &'static [&'static str] = &["source", "destination"];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for FileProvisioner {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![tagged_child(
            ChildKind::Provisioner,
            "file",
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
