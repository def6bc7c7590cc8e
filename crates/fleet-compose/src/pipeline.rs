//! The composition pipeline
//!
//! Ties the stages together: role resolution rewrites the document, the
//! root model compiles it, and the caller gets back one composed
//! mutation thunk. Invoking the thunk against a target is the caller's
//! responsibility.

use crate::error::Result;
use crate::filter::RolesFilter;
use fleet_model::{EntityModel, FieldSet, ModelRegistry, MutationThunk, RootModel};
use serde_json::Value;

/// Composes a document into a single mutation thunk.
///
/// The pipeline owns the model registry; extra types can be registered
/// through [`registry_mut`](Self::registry_mut) before the first run.
pub struct Pipeline {
    registry: ModelRegistry,
}

impl Pipeline {
    /// A pipeline with the built-in model types registered.
    pub fn new() -> Self {
        Self {
            registry: ModelRegistry::with_builtins(),
        }
    }

    /// A pipeline over a caller-assembled registry.
    pub fn with_registry(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModelRegistry {
        &mut self.registry
    }

    /// Compose a document into one mutation thunk.
    pub fn run(&self, document: Value) -> Result<MutationThunk> {
        let document = RolesFilter::run(document)?;
        tracing::debug!("Roles resolved, compiling models");

        let fields = FieldSet::from_value(document, "document")?;
        let ops = RootModel::new(fields).compile(&self.registry)?;

        tracing::debug!(ops = ops.len(), "Document compiled");
        Ok(MutationThunk::new(ops))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
