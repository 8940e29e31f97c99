//! FetchDocumentsBundleHandler - Query handler for bundle manifests.

use std::sync::Arc;

use crate::domain::bundle::BundleManifest;
use crate::domain::foundation::DomainError;
use crate::ports::DocumentsBundleStore;

/// Query for the manifest of a bundle.
#[derive(Debug, Clone)]
pub struct FetchDocumentsBundleQuery {
    pub id: String,
}

/// Handler for retrieving bundle manifests.
pub struct FetchDocumentsBundleHandler {
    store: Arc<dyn DocumentsBundleStore>,
}

impl FetchDocumentsBundleHandler {
    pub fn new(store: Arc<dyn DocumentsBundleStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FetchDocumentsBundleQuery) -> Result<BundleManifest, DomainError> {
        tracing::debug!(bundle_id = %query.id, "Fetching documents bundle");
        let bundle = self.store.fetch(&query.id).await?;
        Ok(bundle.into_manifest())
    }
}
