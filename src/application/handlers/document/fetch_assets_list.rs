//! FetchAssetsListHandler - Query handler for the assets of a version.

use std::sync::Arc;

use crate::domain::document::ResolvedVersion;
use crate::domain::foundation::DomainError;
use crate::ports::DocumentStore;

/// Query for the resolved assets of one version of a document.
#[derive(Debug, Clone)]
pub struct FetchAssetsListQuery {
    pub id: String,
    /// Version index; negative values count from the latest (`-1`).
    pub version_index: isize,
}

impl FetchAssetsListQuery {
    /// Query for the latest version.
    pub fn latest(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version_index: -1,
        }
    }
}

/// Handler for listing the assets of a document version.
pub struct FetchAssetsListHandler {
    store: Arc<dyn DocumentStore>,
}

impl FetchAssetsListHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FetchAssetsListQuery) -> Result<ResolvedVersion, DomainError> {
        let document = self.store.fetch(&query.id).await?;
        document.version(query.version_index)
    }
}
