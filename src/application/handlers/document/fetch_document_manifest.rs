//! FetchDocumentManifestHandler - Query handler for raw document manifests.

use std::sync::Arc;

use crate::domain::document::DocumentManifest;
use crate::domain::foundation::DomainError;
use crate::ports::DocumentStore;

/// Query for the manifest of a document.
#[derive(Debug, Clone)]
pub struct FetchDocumentManifestQuery {
    pub id: String,
}

/// Handler for retrieving document manifests.
pub struct FetchDocumentManifestHandler {
    store: Arc<dyn DocumentStore>,
}

impl FetchDocumentManifestHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FetchDocumentManifestQuery) -> Result<DocumentManifest, DomainError> {
        tracing::debug!(document_id = %query.id, "Fetching document manifest");
        let document = self.store.fetch(&query.id).await?;
        Ok(document.into_manifest())
    }
}
