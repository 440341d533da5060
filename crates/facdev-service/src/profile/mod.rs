//! Faculty profile management.

pub mod service;

pub use service::ProfileService;
