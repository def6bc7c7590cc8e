//! Mutation target abstraction and the recording reference implementation

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Child entity kinds handed to a mutation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildKind {
    Provider,
    Provisioner,
    SyncedFolder,
    ForwardedPort,
    PrivateNetwork,
    PublicNetwork,
    Plugin,
    Ssh,
    WinRm,
    Trigger,
}

impl ChildKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Provisioner => "provisioner",
            Self::SyncedFolder => "synced_folder",
            Self::ForwardedPort => "forwarded_port",
            Self::PrivateNetwork => "private_network",
            Self::PublicNetwork => "public_network",
            Self::Plugin => "plugin",
            Self::Ssh => "ssh",
            Self::WinRm => "winrm",
            Self::Trigger => "trigger",
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The narrow interface a configuration target exposes to compiled
/// mutation plans.
///
/// Invocation is strictly sequential and depth-first, so an implementation
/// may return itself from [`define_machine`](Self::define_machine) and
/// infer scope from call order.
pub trait MutationTarget {
    /// Open a named machine scope and return the target for its body.
    fn define_machine(&mut self, name: &str) -> Result<&mut dyn MutationTarget>;

    /// Set a scalar attribute in the current scope.
    fn set_attribute(&mut self, key: &str, value: &Value) -> Result<()>;

    /// Attach a fully resolved child entity to the current scope.
    fn add_child(&mut self, kind: ChildKind, fields: &Map<String, Value>) -> Result<()>;
}

/// One call received by a [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    DefineMachine { name: String },
    SetAttribute { key: String, value: Value },
    AddChild { kind: ChildKind, fields: Map<String, Value> },
}

/// A target that records every call it receives, in order.
///
/// This is the reference implementation of [`MutationTarget`], used by
/// the crate's own tests and useful for asserting full call sequences
/// against compiled plans.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    calls: Vec<Call>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<Call> {
        self.calls
    }
}

impl MutationTarget for RecordingTarget {
    fn define_machine(&mut self, name: &str) -> Result<&mut dyn MutationTarget> {
        self.calls.push(Call::DefineMachine {
            name: name.to_string(),
        });
        Ok(self)
    }

    fn set_attribute(&mut self, key: &str, value: &Value) -> Result<()> {
        self.calls.push(Call::SetAttribute {
            key: key.to_string(),
            value: value.clone(),
        });
        Ok(())
    }

    fn add_child(&mut self, kind: ChildKind, fields: &Map<String, Value>) -> Result<()> {
        self.calls.push(Call::AddChild {
            kind,
            fields: fields.clone(),
        });
        Ok(())
    }
}
