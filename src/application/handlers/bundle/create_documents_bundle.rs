//! CreateDocumentsBundleHandler - Command handler for creating bundles.

use std::sync::Arc;

use crate::domain::bundle::DocumentsBundle;
use crate::domain::foundation::{Clock, DomainError};
use crate::ports::DocumentsBundleStore;

/// Descriptive metadata accepted when creating a bundle.
#[derive(Debug, Clone, Default)]
pub struct BundleMetadata {
    pub publication_year: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub supplement: Option<String>,
}

/// Command to create a documents bundle.
#[derive(Debug, Clone)]
pub struct CreateDocumentsBundleCommand {
    pub id: String,
    /// Member document ids, in bundle order.
    pub docs: Vec<String>,
    pub metadata: BundleMetadata,
}

impl CreateDocumentsBundleCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            docs: Vec::new(),
            metadata: BundleMetadata::default(),
        }
    }
}

/// Handler for creating documents bundles.
pub struct CreateDocumentsBundleHandler {
    store: Arc<dyn DocumentsBundleStore>,
    clock: Arc<dyn Clock>,
}

impl CreateDocumentsBundleHandler {
    pub fn new(store: Arc<dyn DocumentsBundleStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// # Errors
    ///
    /// - `AlreadyExists` if the id is taken or `docs` repeats a document
    /// - `Validation` if the publication year is not four digits
    pub async fn handle(&self, cmd: CreateDocumentsBundleCommand) -> Result<DocumentsBundle, DomainError> {
        let mut bundle = DocumentsBundle::new(cmd.id, Arc::clone(&self.clock));
        for doc in &cmd.docs {
            bundle.add_document(doc)?;
        }

        let metadata = cmd.metadata;
        if let Some(year) = metadata.publication_year {
            bundle.set_publication_year(year)?;
        }
        if let Some(volume) = metadata.volume {
            bundle.set_volume(volume);
        }
        if let Some(number) = metadata.number {
            bundle.set_number(number);
        }
        if let Some(supplement) = metadata.supplement {
            bundle.set_supplement(supplement);
        }

        self.store.add(&bundle).await?;

        tracing::info!(
            bundle_id = %bundle.id(),
            documents = bundle.documents().len(),
            "Created documents bundle"
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentsBundleStore;
    use crate::domain::foundation::{ErrorCode, SystemClock};

    fn setup() -> (Arc<InMemoryDocumentsBundleStore>, CreateDocumentsBundleHandler) {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let store = Arc::new(InMemoryDocumentsBundleStore::new(Arc::clone(&clock)));
        let handler = CreateDocumentsBundleHandler::new(Arc::clone(&store) as Arc<dyn DocumentsBundleStore>, clock);
        (store, handler)
    }

    #[tokio::test]
    async fn creates_empty_bundle() {
        let (store, handler) = setup();

        handler.handle(CreateDocumentsBundleCommand::new("xpto")).await.unwrap();

        assert!(store.fetch("xpto").await.is_ok());
    }

    #[tokio::test]
    async fn creates_bundle_with_documents_and_metadata() {
        let (store, handler) = setup();
        let mut cmd = CreateDocumentsBundleCommand::new("xpto");
        cmd.docs = vec!["/document/1".to_string(), "/document/2".to_string()];
        cmd.metadata.publication_year = Some("2018".to_string());
        cmd.metadata.volume = Some("2".to_string());

        handler.handle(cmd).await.unwrap();

        let bundle = store.fetch("xpto").await.unwrap();
        assert_eq!(bundle.documents(), &["/document/1", "/document/2"]);
        assert_eq!(bundle.publication_year(), "2018");
        assert_eq!(bundle.volume(), "2");
        assert_eq!(bundle.number(), "");
    }

    #[tokio::test]
    async fn rejects_duplicate_bundle() {
        let (_store, handler) = setup();
        handler.handle(CreateDocumentsBundleCommand::new("xpto")).await.unwrap();

        let err = handler
            .handle(CreateDocumentsBundleCommand::new("xpto"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::AlreadyExists);
    }

    #[tokio::test]
    async fn rejects_invalid_publication_year_without_storing() {
        let (store, handler) = setup();
        let mut cmd = CreateDocumentsBundleCommand::new("xpto");
        cmd.metadata.publication_year = Some("18".to_string());

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(store.is_empty().await);
    }
}
