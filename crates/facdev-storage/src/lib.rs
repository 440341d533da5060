//! # facdev-storage
//!
//! Object store providers for evidence files, certificates, and profile
//! photos, plus the portal's storage path conventions.

pub mod paths;
pub mod providers;

pub use providers::local::LocalObjectStore;
pub use providers::memory::MemoryObjectStore;
