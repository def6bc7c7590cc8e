//! Network settings models
//!
//! Network entries carry no `type` discriminator; each list key on the
//! machine maps to a fixed constructor here.

use crate::error::Result;
use crate::fields::FieldSet;
use crate::model::{plain_child, EntityModel};
use crate::registry::ModelRegistry;
use crate::target::ChildKind;
use crate::thunk::MutationOp;

/// A host-only network interface with a static or DHCP-assigned address.
#[derive(Debug)]
pub struct PrivateNetwork {
    fields: FieldSet,
}

impl PrivateNetwork {
    const ATTRIBUTES: &'static [&'static str] = &["ip", "netmask", "type", "auto_config"];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for PrivateNetwork {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::PrivateNetwork,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}

/// A bridged network interface on the host's public network.
#[derive(Debug)]
pub struct PublicNetwork {
    fields: FieldSet,
}

impl PublicNetwork {
    const ATTRIBUTES: &'static [&'static str] = &[
        "ip",
        "bridge",
        "auto_config",
        "use_dhcp_assigned_default_route",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for PublicNetwork {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::PublicNetwork,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}

/// A guest-to-host port mapping.
#[derive(Debug)]
pub struct ForwardedPort {
    fields: FieldSet,
}

impl ForwardedPort {
    const ATTRIBUTES: &'static [&'static str] = &[
        "guest",
        "host",
        "guest_ip",
        "host_ip",
        "protocol",
        "auto_correct",
        "id",
    ];

    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }
}

impl EntityModel for ForwardedPort {
    fn compile(&self, _registry: &ModelRegistry) -> Result<Vec<MutationOp>> {
        Ok(vec![plain_child(
            ChildKind::ForwardedPort,
            &self.fields,
            Self::ATTRIBUTES,
        )])
    }
}
