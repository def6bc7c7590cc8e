//! Plugin model

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{plain_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// A plugin the environment expects to be installed, with optional
/// version and source constraints.
///
/// Plugins declared on a machine apply at the parent scope, after the
/// machine definition closes.
#[derive(Debug)]
pub struct Plugin {
    fields: FieldSet,
}

impl Plugin {
    const ATTRIBUTES: &'static [&'static str] = &["plugin", "version", "sources"];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for Plugin {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::Plugin,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
