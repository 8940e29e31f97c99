//! RegisterAssetVersionHandler - Command handler for new asset locations.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::DocumentStore;

/// Command to record a new location for one asset of a document.
#[derive(Debug, Clone)]
pub struct RegisterAssetVersionCommand {
    pub id: String,
    pub asset_id: String,
    pub asset_url: String,
}

/// Handler for registering asset versions.
pub struct RegisterAssetVersionHandler {
    store: Arc<dyn DocumentStore>,
}

impl RegisterAssetVersionHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `DoesNotExist` if the document was never registered
    /// - `EmptyHistory` if the document has no version to attach the asset to
    pub async fn handle(&self, cmd: RegisterAssetVersionCommand) -> Result<(), DomainError> {
        let mut document = self.store.fetch(&cmd.id).await?;
        document.new_asset_version(&cmd.asset_id, &cmd.asset_url)?;
        self.store.update(&document).await?;

        tracing::info!(document_id = %cmd.id, asset_id = %cmd.asset_id, "Registered asset version");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentStore;
    use crate::domain::document::Document;
    use crate::domain::foundation::{ErrorCode, SystemClock};

    #[tokio::test]
    async fn fails_when_document_has_no_versions() {
        let store = Arc::new(InMemoryDocumentStore::new(Arc::new(SystemClock)));
        store
            .add(&Document::new("doc", Arc::new(SystemClock)))
            .await
            .unwrap();
        let handler = RegisterAssetVersionHandler::new(store);

        let err = handler
            .handle(RegisterAssetVersionCommand {
                id: "doc".to_string(),
                asset_id: "gf01.gif".to_string(),
                asset_url: "/gf01.gif".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::EmptyHistory);
    }
}
