//! FetchDocumentVersionHandler - Query handler for resolved document
//! versions, by index or as of an instant.

use std::sync::Arc;

use crate::domain::document::ResolvedVersion;
use crate::domain::foundation::DomainError;
use crate::ports::DocumentStore;

/// Query for a resolved version of a document.
///
/// When `version_at` is set the point-in-time lookup is used and
/// `version_index` is ignored.
#[derive(Debug, Clone)]
pub struct FetchDocumentVersionQuery {
    pub id: String,
    pub version_index: isize,
    /// UTC instant such as `2018-08-05T23:04:00Z`.
    pub version_at: Option<String>,
}

impl FetchDocumentVersionQuery {
    pub fn latest(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version_index: -1,
            version_at: None,
        }
    }

    pub fn at(id: impl Into<String>, instant: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version_index: -1,
            version_at: Some(instant.into()),
        }
    }
}

/// Handler for resolving document versions.
pub struct FetchDocumentVersionHandler {
    store: Arc<dyn DocumentStore>,
}

impl FetchDocumentVersionHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `DoesNotExist` for unknown documents or indices
    /// - `MalformedTimestamp` / `NoVersionAtTime` for point-in-time lookups
    /// - `EmptyHistory` if the document has no versions
    pub async fn handle(&self, query: FetchDocumentVersionQuery) -> Result<ResolvedVersion, DomainError> {
        let document = self.store.fetch(&query.id).await?;
        match &query.version_at {
            Some(instant) => {
                tracing::debug!(document_id = %query.id, version_at = %instant, "Resolving document version at instant");
                document.version_at(instant)
            }
            None => document.version(query.version_index),
        }
    }
}
