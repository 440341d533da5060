//! In-memory document store with live queries.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{RwLock, mpsc};
use tracing::debug;

use facdev_core::error::AppError;
use facdev_core::result::AppResult;
use facdev_core::traits::datastore::{Document, DocumentStore, StoredDocument, Watch};
use facdev_core::types::filter::{FieldFilter, matches_all};
use facdev_core::types::id::{RECORD_ID_LEN, generate_record_id};

/// A document plus its revision counter. The revision bumps on every
/// write so live queries can tell a changed result set from an
/// untouched one without comparing field maps.
#[derive(Debug, Clone)]
struct VersionedDocument {
    fields: Document,
    revision: u64,
}

/// A registered live query.
struct WatcherEntry {
    collection: String,
    filters: Vec<FieldFilter>,
    sender: mpsc::UnboundedSender<Vec<StoredDocument>>,
    /// (id, revision) pairs of the last delivered result set.
    last_delivered: Vec<(String, u64)>,
}

/// In-memory [`DocumentStore`] implementation.
///
/// Collections are created on first write. Mutations notify every
/// registered watcher of the affected collection; a watcher receives
/// the full current result set whenever it differs from the one last
/// delivered to it.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, VersionedDocument>>>,
    watchers: Arc<DashMap<u64, WatcherEntry>>,
    next_watch_id: AtomicU64,
    next_revision: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            watchers: Arc::new(DashMap::new()),
            next_watch_id: AtomicU64::new(1),
            next_revision: AtomicU64::new(1),
        }
    }

    /// Number of currently registered watchers, across all collections.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    fn bump_revision(&self) -> u64 {
        self.next_revision.fetch_add(1, Ordering::Relaxed)
    }

    /// Builds the matching result set and its (id, revision) signature.
    fn collect(
        collection: Option<&BTreeMap<String, VersionedDocument>>,
        filters: &[FieldFilter],
    ) -> (Vec<StoredDocument>, Vec<(String, u64)>) {
        let mut snapshot = Vec::new();
        let mut signature = Vec::new();
        if let Some(docs) = collection {
            for (id, doc) in docs {
                if matches_all(filters, &doc.fields) {
                    snapshot.push(StoredDocument::new(id.clone(), doc.fields.clone()));
                    signature.push((id.clone(), doc.revision));
                }
            }
        }
        (snapshot, signature)
    }

    /// Delivers fresh snapshots to every watcher of `collection` whose
    /// result set changed since its last delivery. Watchers whose
    /// receiving side is gone are unregistered.
    async fn notify_collection(&self, collection: &str) {
        let guard = self.collections.read().await;
        let docs = guard.get(collection);

        let mut dead = Vec::new();
        for mut entry in self.watchers.iter_mut() {
            if entry.collection != collection {
                continue;
            }
            let (snapshot, signature) = Self::collect(docs, &entry.filters);
            if signature == entry.last_delivered {
                continue;
            }
            if entry.sender.send(snapshot).is_ok() {
                entry.last_delivered = signature;
            } else {
                dead.push(*entry.key());
            }
        }
        drop(guard);

        for key in dead {
            self.watchers.remove(&key);
            debug!(watch_id = key, "dropped watcher with closed receiver");
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("watchers", &self.watchers.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, document: Document) -> AppResult<String> {
        let id = {
            let mut guard = self.collections.write().await;
            let docs = guard.entry(collection.to_string()).or_default();
            let mut id = generate_record_id(RECORD_ID_LEN);
            while docs.contains_key(&id) {
                id = generate_record_id(RECORD_ID_LEN);
            }
            docs.insert(
                id.clone(),
                VersionedDocument {
                    fields: document,
                    revision: self.bump_revision(),
                },
            );
            id
        };
        self.notify_collection(collection).await;
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, document: Document) -> AppResult<()> {
        {
            let mut guard = self.collections.write().await;
            let docs = guard.entry(collection.to_string()).or_default();
            docs.insert(
                id.to_string(),
                VersionedDocument {
                    fields: document,
                    revision: self.bump_revision(),
                },
            );
        }
        self.notify_collection(collection).await;
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, patch: Document) -> AppResult<()> {
        {
            let mut guard = self.collections.write().await;
            let doc = guard
                .get_mut(collection)
                .and_then(|docs| docs.get_mut(id))
                .ok_or_else(|| {
                    AppError::not_found(format!("document {collection}/{id} not found"))
                })?;
            for (field, value) in patch {
                doc.fields.insert(field, value);
            }
            doc.revision = self.bump_revision();
        }
        self.notify_collection(collection).await;
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|doc| StoredDocument::new(id, doc.fields.clone())))
    }

    async fn query(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> AppResult<Vec<StoredDocument>> {
        let guard = self.collections.read().await;
        let (snapshot, _) = Self::collect(guard.get(collection), filters);
        Ok(snapshot)
    }

    async fn watch(&self, collection: &str, filters: Vec<FieldFilter>) -> AppResult<Watch> {
        let key = self.next_watch_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();

        // Register under the read guard so a concurrent write cannot
        // slip between the initial snapshot and the registration.
        let guard = self.collections.read().await;
        let (snapshot, signature) = Self::collect(guard.get(collection), &filters);
        let _ = tx.send(snapshot);
        self.watchers.insert(
            key,
            WatcherEntry {
                collection: collection.to_string(),
                filters,
                sender: tx,
                last_delivered: signature,
            },
        );
        drop(guard);
        debug!(watch_id = key, collection, "registered watcher");

        let watchers = Arc::clone(&self.watchers);
        Ok(Watch::new(rx, move || {
            watchers.remove(&key);
        }))
    }
}
