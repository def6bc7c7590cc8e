//! Entity models, type registry, and mutation thunks for Fleet Composer
//!
//! This crate turns resolved document fragments into deferred mutation
//! plans. Concrete models wrap one [`FieldSet`] each and compile into
//! [`MutationOp`] sequences; discriminated categories (provisioners,
//! providers) dispatch through the [`ModelRegistry`]; the compiled
//! [`MutationThunk`] replays against any [`MutationTarget`].

pub mod error;
pub mod fields;
pub mod model;
pub mod registry;
pub mod target;
pub mod thunk;

pub use error::{Error, Result};
pub use fields::FieldSet;
pub use model::{EntityModel, RootModel, VmModel};
pub use registry::{ModelCategory, ModelFactory, ModelRegistry};
pub use target::{Call, ChildKind, MutationTarget, RecordingTarget};
pub use thunk::{MutationOp, MutationThunk};
