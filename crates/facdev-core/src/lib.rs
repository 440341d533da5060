//! Core building blocks shared by every FacDev crate.
//!
//! This crate defines the error type and result alias, typed record
//! identifiers, the document-store and object-store contracts, and the
//! layered application configuration. It contains no business logic;
//! entity models and services build on top of it.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
