//! Document rewrite filters applied before model compilation

mod roles;

pub use roles::RolesFilter;
