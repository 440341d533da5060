//! Department events and registrations.

pub mod service;

pub use service::EventService;
