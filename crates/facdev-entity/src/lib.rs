//! # facdev-entity
//!
//! Domain entity models for the FacDev portal. Every struct in this crate
//! represents a document in a datastore collection or a domain value
//! object. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`; inputs that accept user-provided values additionally
//! derive `validator::Validate`.

pub mod activity;
pub mod event;
pub mod notification;
pub mod profile;
pub mod user;
