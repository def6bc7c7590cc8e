//! Trigger model

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{plain_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// A lifecycle hook run before or after machine actions.
#[derive(Debug)]
pub struct Trigger {
    fields: FieldSet,
}

impl Trigger {
    const ATTRIBUTES: &'static [&'static str] = &[
        "before",
        "after",
        "name",
        "info",
        "warn",
        "run",
        "run_remote",
        "only_on",
        "on_error",
        "ignore",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for Trigger {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::Trigger,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
