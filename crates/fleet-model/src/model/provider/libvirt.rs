//! `libvirt` provider

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{tagged_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// Libvirt/KVM-specific machine parameters.
#[derive(Debug)]
pub struct LibvirtProvider {
    fields: FieldSet,
}

impl LibvirtProvider {
    const ATTRIBUTES: &'static [&'static str] = &[
        "memory",
        "cpus",
        "cpu_mode",
        "machine_type",
        "storage_pool_name",
        "nested",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for LibvirtProvider {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![tagged_child(
            ChildKind::Provider,
            "libvirt",
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
