//! In-memory object store provider for tests and sandbox runs.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use facdev_core::error::AppError;
use facdev_core::result::AppResult;
use facdev_core::traits::storage::ObjectStore;

/// In-memory object store. URLs use the `memory://` scheme and are not
/// fetchable; they only need to be stable and unique per path.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: DashMap<String, Bytes>,
}

impl MemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, path: &str, bytes: Bytes) -> AppResult<()> {
        self.objects.insert(path.to_string(), bytes);
        Ok(())
    }

    async fn get(&self, path: &str) -> AppResult<Bytes> {
        self.objects
            .get(path)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Object not found: {path}")))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.objects.contains_key(path))
    }

    async fn public_url(&self, path: &str) -> AppResult<String> {
        Ok(format!("memory://{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_reports_objects() {
        let store = MemoryObjectStore::new();
        assert!(store.is_empty());

        store
            .put("certificates/u1/a1.pdf", Bytes::from_static(b"pdf"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.exists("certificates/u1/a1.pdf").await.unwrap());
        assert_eq!(
            store.public_url("certificates/u1/a1.pdf").await.unwrap(),
            "memory://certificates/u1/a1.pdf"
        );
        assert!(store.get("certificates/u1/missing.pdf").await.is_err());
    }
}
