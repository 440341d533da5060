//! Contracts implemented by the collaborator crates.

pub mod datastore;
pub mod storage;

pub use datastore::{Document, DocumentStore, StoredDocument, Watch, to_document};
pub use storage::ObjectStore;
