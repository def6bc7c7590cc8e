//! Model registry: discriminator string to model factory
//!
//! The registry is built during an explicit initialization step
//! ([`ModelRegistry::with_builtins`] plus any [`register`](ModelRegistry::register)
//! calls) and is read-only during compilation.

use crate::error::{Error, Result};
use crate::fields::FieldSet;
use crate::model::provider::{LibvirtProvider, VirtualBoxProvider};
use crate::model::provisioner::{FileProvisioner, PuppetProvisioner, ShellProvisioner};
use crate::model::EntityModel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Entity categories that carry a `type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    Provisioner,
    Provider,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioner => "provisioner",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Factory producing an entity model from an owned field-set.
pub type ModelFactory = fn(FieldSet) -> Box<dyn EntityModel>;

/// Central mapping from (category, discriminator) to model factory.
///
/// Registering an existing name within the same category replaces the
/// prior binding; the last registration wins.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    factories: HashMap<(ModelCategory, String), ModelFactory>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in model types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ModelCategory::Provisioner, "shell", |fields| {
            Box::new(ShellProvisioner::new(fields))
        });
        registry.register(ModelCategory::Provisioner, "file", |fields| {
            Box::new(FileProvisioner::new(fields))
        });
        registry.register(ModelCategory::Provisioner, "puppet", |fields| {
            Box::new(PuppetProvisioner::new(fields))
        });
        registry.register(ModelCategory::Provider, "virtualbox", |fields| {
            Box::new(VirtualBoxProvider::new(fields))
        });
        registry.register(ModelCategory::Provider, "libvirt", |fields| {
            Box::new(LibvirtProvider::new(fields))
        });
        registry
    }

    /// Register a factory for a discriminator within a category.
    pub fn register(
        &mut self,
        category: ModelCategory,
        name: impl Into<String>,
        factory: ModelFactory,
    ) {
        self.factories.insert((category, name.into()), factory);
    }

    /// Check whether a discriminator is registered in a category.
    pub fn contains(&self, category: ModelCategory, name: &str) -> bool {
        self.factories.contains_key(&(category, name.to_string()))
    }

    /// List the registered discriminators for a category (sorted).
    pub fn known_types(&self, category: ModelCategory) -> Vec<String> {
        let mut names: Vec<String> = self
            .factories
            .keys()
            .filter(|(cat, _)| *cat == category)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Instantiate a model from a document fragment.
    ///
    /// Reads the `type` discriminator from the field-set and dispatches to
    /// the registered factory. A missing or non-string discriminator is a
    /// malformed-field error; an unregistered discriminator is an
    /// unknown-type error listing the category's registered types.
    pub fn instantiate(
        &self,
        category: ModelCategory,
        fields: FieldSet,
    ) -> Result<Box<dyn EntityModel>> {
        let name = match fields.get("type") {
            Some(serde_json::Value::String(name)) => name.clone(),
            Some(other) => return Err(Error::malformed("type", "a type discriminator string", other)),
            None => return Err(Error::missing("type", "a type discriminator string")),
        };

        let factory = self.factories.get(&(category, name.clone())).ok_or_else(|| {
            Error::UnknownType {
                category: category.to_string(),
                name: name.clone(),
                known: self.known_types(category),
            }
        })?;

        tracing::debug!(%category, type_name = %name, "Instantiating model");
        Ok(factory(fields))
    }
}
