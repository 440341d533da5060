//! # facdev-worker
//!
//! Background worker that watches a user's approved activities and
//! issues a PDF certificate for every record that does not have one
//! yet. Runs alongside the services in the same process and is stopped
//! through a shared shutdown signal.

pub mod watcher;

pub use watcher::CertificateWatcher;
