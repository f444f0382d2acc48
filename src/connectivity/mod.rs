//! Contains the components and the partition they form.

#[macro_use]
pub mod component;
pub mod partition;
