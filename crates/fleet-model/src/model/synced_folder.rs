//! Synced folder model

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{plain_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// A host directory shared into the guest.
#[derive(Debug)]
pub struct SyncedFolder {
    fields: FieldSet,
}

impl SyncedFolder {
    const ATTRIBUTES: &'static [&'static str] = &[
        "host_path",
        "guest_path",
        "type",
        "create",
        "disabled",
        "owner",
        "group",
        "mount_options",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for SyncedFolder {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::SyncedFolder,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
