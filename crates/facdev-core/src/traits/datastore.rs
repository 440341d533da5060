//! Document store contract.
//!
//! The portal persists every record in a schemaless document store
//! organised as named collections of JSON documents. Implementations
//! must provide point reads, equality-filtered queries, shallow field
//! merges, and live watches that push a fresh result snapshot whenever
//! a matching document changes.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::filter::FieldFilter;

/// Raw field map of a stored document.
pub type Document = Map<String, Value>;

/// A document together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, fields: Document) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Deserializes the document into a typed record. The identifier is
    /// injected under the `id` key so record types can carry it as a
    /// regular field.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_owned(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// Serializes a record into a raw document, dropping the `id` field.
/// Identifiers address documents and are never stored inside them.
pub fn to_document<T: Serialize>(value: &T) -> AppResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(mut map) => {
            map.remove("id");
            Ok(map)
        }
        other => Err(AppError::internal(format!(
            "record must serialize to a json object, got {other}"
        ))),
    }
}

/// A live query subscription.
///
/// The store delivers the full matching result set immediately after
/// registration and again after every mutation that changes it.
/// Dropping the handle cancels the subscription.
pub struct Watch {
    receiver: mpsc::UnboundedReceiver<Vec<StoredDocument>>,
    canceller: Option<Box<dyn FnOnce() + Send>>,
}

impl Watch {
    pub fn new(
        receiver: mpsc::UnboundedReceiver<Vec<StoredDocument>>,
        canceller: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            receiver,
            canceller: Some(Box::new(canceller)),
        }
    }

    /// Waits for the next result snapshot. Returns `None` once the
    /// store side has shut down.
    pub async fn recv(&mut self) -> Option<Vec<StoredDocument>> {
        self.receiver.recv().await
    }

    /// Cancels the subscription explicitly.
    pub fn cancel(self) {}
}

impl Drop for Watch {
    fn drop(&mut self) {
        if let Some(cancel) = self.canceller.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Watch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watch").finish_non_exhaustive()
    }
}

/// Backend-agnostic document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a new document and returns its assigned identifier.
    async fn insert(&self, collection: &str, document: Document) -> AppResult<String>;

    /// Writes a document at a caller-chosen identifier, replacing any
    /// existing content in full.
    async fn set(&self, collection: &str, id: &str, document: Document) -> AppResult<()>;

    /// Merges the given fields into an existing document, overwriting
    /// only the named fields. Fails with a not-found error when the
    /// document does not exist.
    async fn update(&self, collection: &str, id: &str, patch: Document) -> AppResult<()>;

    /// Point read by identifier.
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>>;

    /// Returns every document in `collection` matching all `filters`.
    async fn query(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> AppResult<Vec<StoredDocument>>;

    /// Registers a live query over `collection`.
    async fn watch(&self, collection: &str, filters: Vec<FieldFilter>) -> AppResult<Watch>;
}
