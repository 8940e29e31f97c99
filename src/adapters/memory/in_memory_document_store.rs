//! In-Memory Document Store Adapter
//!
//! Keeps document manifests in memory, keyed by id.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::{Document, DocumentManifest};
use crate::domain::foundation::{Clock, DomainError};
use crate::ports::DocumentStore;

/// In-memory storage for document manifests
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    manifests: Arc<RwLock<HashMap<String, DocumentManifest>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryDocumentStore {
    /// Create an empty store. Fetched documents are stamped with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            manifests: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Clear all stored manifests (useful for tests)
    pub async fn clear(&self) {
        self.manifests.write().await.clear();
    }

    /// Get the number of stored documents
    pub async fn len(&self) -> usize {
        self.manifests.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.manifests.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn add(&self, document: &Document) -> Result<(), DomainError> {
        let mut manifests = self.manifests.write().await;
        if manifests.contains_key(document.id()) {
            tracing::warn!(document_id = %document.id(), "Rejected duplicate document");
            return Err(DomainError::already_exists(format!(
                "cannot add document with id \"{}\": the id is already in use",
                document.id()
            )));
        }
        manifests.insert(document.id().to_string(), document.manifest().clone());
        tracing::debug!(document_id = %document.id(), "Stored new document");
        Ok(())
    }

    async fn update(&self, document: &Document) -> Result<(), DomainError> {
        let mut manifests = self.manifests.write().await;
        manifests.insert(document.id().to_string(), document.manifest().clone());
        tracing::debug!(document_id = %document.id(), "Replaced document manifest");
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<Document, DomainError> {
        let manifests = self.manifests.read().await;
        manifests
            .get(id)
            .cloned()
            .map(|manifest| Document::from_manifest(manifest, Arc::clone(&self.clock)))
            .ok_or_else(|| {
                DomainError::does_not_exist(format!(
                    "cannot fetch document with id \"{}\": document does not exist",
                    id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, SystemClock};
    use crate::ports::AssetsListing;
    use std::time::Duration;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(SystemClock)
    }

    fn document(id: &str) -> Document {
        let mut document = Document::new(id, clock());
        let no_assets = |_: &str, _: Duration| Ok::<_, DomainError>(AssetsListing::empty());
        document
            .new_version("/rawfiles/7ca9f9b2687cb/0034-8910-rsp-48-2-0275.xml", &no_assets, Duration::from_secs(2))
            .unwrap();
        document
    }

    #[tokio::test]
    async fn test_add_and_fetch_document() {
        let store = InMemoryDocumentStore::new(clock());
        let original = document("0034-8910-rsp-48-2-0275");

        store.add(&original).await.unwrap();
        let fetched = store.fetch("0034-8910-rsp-48-2-0275").await.unwrap();

        assert_eq!(fetched.manifest(), original.manifest());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_id() {
        let store = InMemoryDocumentStore::new(clock());
        store.add(&document("0034-8910-rsp-48-2-0275")).await.unwrap();

        let err = store
            .add(&document("0034-8910-rsp-48-2-0275"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::AlreadyExists);
        assert_eq!(
            err.to_string(),
            "cannot add document with id \"0034-8910-rsp-48-2-0275\": the id is already in use"
        );
    }

    #[tokio::test]
    async fn test_fetch_missing_document() {
        let store = InMemoryDocumentStore::new(clock());

        let err = store.fetch("missing").await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DoesNotExist);
        assert_eq!(
            err.to_string(),
            "cannot fetch document with id \"missing\": document does not exist"
        );
    }

    #[tokio::test]
    async fn test_update_replaces_manifest() {
        let store = InMemoryDocumentStore::new(clock());
        let mut stored = document("0034-8910-rsp-48-2-0275");
        store.add(&stored).await.unwrap();

        stored.new_asset_version("gf01.gif", "/rawfiles/gf01.gif").unwrap();
        store.update(&stored).await.unwrap();

        let fetched = store.fetch("0034-8910-rsp-48-2-0275").await.unwrap();
        assert_eq!(fetched.latest_version().unwrap().assets["gf01.gif"], "/rawfiles/gf01.gif");
    }

    #[tokio::test]
    async fn test_update_inserts_missing_document() {
        let store = InMemoryDocumentStore::new(clock());
        store.update(&document("new")).await.unwrap();
        assert!(store.fetch("new").await.is_ok());
    }

    #[tokio::test]
    async fn test_fetched_document_is_independent_copy() {
        let store = InMemoryDocumentStore::new(clock());
        store.add(&document("doc")).await.unwrap();

        let mut fetched = store.fetch("doc").await.unwrap();
        fetched.new_asset_version("gf01.gif", "/gf01.gif").unwrap();

        let again = store.fetch("doc").await.unwrap();
        assert!(again.latest_version().unwrap().assets.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = InMemoryDocumentStore::new(clock());
        store.add(&document("doc")).await.unwrap();

        store.clear().await;

        assert!(store.is_empty().await);
    }
}
