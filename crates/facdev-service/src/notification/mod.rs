//! Notification delivery and the per-user feed.

pub mod service;

pub use service::NotificationService;
