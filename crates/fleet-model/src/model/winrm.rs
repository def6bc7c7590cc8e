//! WinRM communicator settings model

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{plain_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// WinRM settings shared by every Windows machine in the document.
#[derive(Debug)]
pub struct WinRmSettings {
    fields: FieldSet,
}

impl WinRmSettings {
    const ATTRIBUTES: &'static [&'static str] = &[
        "username",
        "password",
        "host",
        "port",
        "guest_port",
        "transport",
        "max_tries",
        "retry_delay",
        "timeout",
        "basic_auth_only",
        "ssl_peer_verification",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for WinRmSettings {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::WinRm,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
