//! # facdev-datastore
//!
//! The in-memory [`DocumentStore`](facdev_core::traits::DocumentStore)
//! implementation used by single-node deployments and tests, plus typed
//! repositories that adapt the raw document contract to the domain
//! entities.

pub mod memory;
pub mod repositories;

pub use memory::MemoryStore;
