//! RegisterDocumentVersionHandler - Command handler for new versions of
//! registered documents.

use std::sync::Arc;
use std::time::Duration;

use super::register_document::{record_version, RegisterDocumentCommand};
use crate::domain::document::Document;
use crate::domain::foundation::DomainError;
use crate::ports::{AssetsResolver, DocumentStore};

/// Handler for registering a new version of an existing document.
pub struct RegisterDocumentVersionHandler {
    store: Arc<dyn DocumentStore>,
    resolver: Arc<dyn AssetsResolver>,
    assets_timeout: Duration,
}

impl RegisterDocumentVersionHandler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        resolver: Arc<dyn AssetsResolver>,
        assets_timeout: Duration,
    ) -> Self {
        Self {
            store,
            resolver,
            assets_timeout,
        }
    }

    /// # Errors
    ///
    /// - `DoesNotExist` if the document was never registered
    pub async fn handle(&self, cmd: RegisterDocumentCommand) -> Result<Document, DomainError> {
        let mut document = self.store.fetch(&cmd.id).await?;
        record_version(&mut document, &cmd, self.resolver.as_ref(), self.assets_timeout)?;

        self.store.update(&document).await?;

        tracing::info!(
            document_id = %document.id(),
            versions = document.version_count(),
            "Registered document version"
        );
        Ok(document)
    }
}
