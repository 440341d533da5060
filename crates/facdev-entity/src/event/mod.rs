//! Institutional event entities.

pub mod model;
pub mod registration;

pub use model::{Event, EventStatus, NewEvent};
pub use registration::EventRegistration;
