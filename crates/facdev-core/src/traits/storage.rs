//! Object store contract.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Backend-agnostic object storage for evidence files, certificates,
/// and profile photos. Paths are forward-slash separated and relative
/// to the store root.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes an object, replacing any existing content at `path`.
    async fn put(&self, path: &str, bytes: Bytes) -> AppResult<()>;

    /// Reads an object in full.
    async fn get(&self, path: &str) -> AppResult<Bytes>;

    /// True when an object exists at `path`.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Resolves the publicly shareable URL for an object.
    async fn public_url(&self, path: &str) -> AppResult<String>;
}
