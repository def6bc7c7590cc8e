//! Role resolution, template merging, and the composition pipeline
//!
//! Turns a declarative fleet document (machines plus reusable role
//! templates) into one composed mutation thunk. Parsing document text
//! is provided here ([`parse_document`]); reading files and invoking the
//! resulting thunk against a live target belong to the caller.

pub mod document;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;

pub use document::{parse_document, parse_document_as, DocFormat};
pub use error::{Error, Result};
pub use filter::RolesFilter;
pub use pipeline::Pipeline;
