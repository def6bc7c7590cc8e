//! Provider models
//!
//! Providers are discriminated by the `type` field and registered in the
//! [`ModelRegistry`](crate::registry::ModelRegistry) under the `provider`
//! category. A machine may carry one singular `provider` map or a
//! `providers` list; both dispatch through the registry.

mod libvirt;
mod virtualbox;

pub use libvirt::LibvirtProvider;
pub use virtualbox::VirtualBoxProvider;
