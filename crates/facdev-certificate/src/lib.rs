//! # facdev-certificate
//!
//! Pure, deterministic PDF certificate rendering. The renderer maps a
//! [`CertificateData`] input to a single-page landscape A4 document;
//! it performs no I/O and depends on nothing but its input.

pub mod data;
pub mod layout;
pub mod metrics;
pub mod renderer;

pub use data::{CertificateData, certificate_id};
pub use renderer::render;
