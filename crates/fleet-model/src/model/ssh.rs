//! SSH communicator settings model

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{plain_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// SSH settings shared by every machine in the document.
#[derive(Debug)]
pub struct SshSettings {
    fields: FieldSet,
}

impl SshSettings {
    const ATTRIBUTES: &'static [&'static str] = &[
        "username",
        "password",
        "host",
        "port",
        "guest_port",
        "private_key_path",
        "forward_agent",
        "forward_x11",
        "insert_key",
        "keep_alive",
        "proxy_command",
        "shell",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for SshSettings {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::Ssh,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
