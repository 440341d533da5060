//! Object store provider implementations.

pub mod local;
pub mod memory;
