//! In-Memory Documents Bundle Store Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::bundle::{BundleManifest, DocumentsBundle};
use crate::domain::foundation::{Clock, DomainError};
use crate::ports::DocumentsBundleStore;

/// In-memory storage for bundle manifests
#[derive(Clone)]
pub struct InMemoryDocumentsBundleStore {
    manifests: Arc<RwLock<HashMap<String, BundleManifest>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryDocumentsBundleStore {
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

    pub async fn len(&self) -> usize {
        self.manifests.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.manifests.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentsBundleStore for InMemoryDocumentsBundleStore {
    async fn add(&self, bundle: &DocumentsBundle) -> Result<(), DomainError> {
        let mut manifests = self.manifests.write().await;
        if manifests.contains_key(bundle.id()) {
            tracing::warn!(bundle_id = %bundle.id(), "Rejected duplicate documents bundle");
            return Err(DomainError::already_exists(format!(
                "cannot add documents bundle with id \"{}\": the id is already in use",
                bundle.id()
            )));
        }
        manifests.insert(bundle.id().to_string(), bundle.manifest().clone());
        tracing::debug!(bundle_id = %bundle.id(), "Stored new documents bundle");
        Ok(())
    }

    async fn update(&self, bundle: &DocumentsBundle) -> Result<(), DomainError> {
        let mut manifests = self.manifests.write().await;
        manifests.insert(bundle.id().to_string(), bundle.manifest().clone());
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<DocumentsBundle, DomainError> {
        let manifests = self.manifests.read().await;
        manifests
            .get(id)
            .cloned()
            .map(|manifest| DocumentsBundle::from_manifest(manifest, Arc::clone(&self.clock)))
            .ok_or_else(|| {
                DomainError::does_not_exist(format!(
                    "cannot fetch documents bundle with id \"{}\": documents bundle does not exist",
                    id
                ))
            })
    }
}
