//! Deferred mutation plans
//!
//! A compiled plan is plain data: an ordered sequence of tagged mutation
//! ops. Composition is by nesting (`DefineMachine` holds the ops for its
//! scope) and invocation replays the ops depth-first against a
//! [`MutationTarget`], preserving source order throughout.

use crate::error::Result;
use crate::target::{ChildKind, MutationTarget};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One deferred mutation against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOp {
    /// Open a named machine scope and apply `ops` inside it
    DefineMachine { name: String, ops: Vec<MutationOp> },
    /// Set a scalar attribute in the current scope
    SetAttribute { key: String, value: Value },
    /// Attach a resolved child entity to the current scope
    AddChild {
        kind: ChildKind,
        fields: Map<String, Value>,
    },
}

impl MutationOp {
    fn apply(&self, target: &mut dyn MutationTarget) -> Result<()> {
        match self {
            Self::DefineMachine { name, ops } => {
                let scoped = target.define_machine(name)?;
                for op in ops {
                    op.apply(&mut *scoped)?;
                }
                Ok(())
            }
            Self::SetAttribute { key, value } => target.set_attribute(key, value),
            Self::AddChild { kind, fields } => target.add_child(*kind, fields),
        }
    }
}

/// An ordered, composed sequence of deferred mutations.
///
/// Compiling a thunk has no side effects; invoking it replays every op
/// against the given target and stops at the first failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationThunk {
    ops: Vec<MutationOp>,
}

impl MutationThunk {
    pub fn new(ops: Vec<MutationOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[MutationOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay the plan against a target, depth-first and in order.
    pub fn invoke(&self, target: &mut dyn MutationTarget) -> Result<()> {
        tracing::trace!(ops = self.ops.len(), "Invoking mutation plan");
        for op in &self.ops {
            op.apply(target)?;
        }
        Ok(())
    }
}
