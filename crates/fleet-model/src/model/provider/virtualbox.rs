//! `virtualbox` provider

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{tagged_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// VirtualBox-specific machine parameters.
#[derive(Debug)]
pub struct VirtualBoxProvider {
    fields: FieldSet,
}

impl VirtualBoxProvider {
    const ATTRIBUTES: &'static [&'static str] = &[
        "name",
        "gui",
        "memory",
        "cpus",
        "linked_clone",
        "customize",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for VirtualBoxProvider {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![tagged_child(
            ChildKind::Provider,
            "virtualbox",
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
