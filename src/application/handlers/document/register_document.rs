//! RegisterDocumentHandler - Command handler for registering new documents.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::document::Document;
use crate::domain::foundation::{Clock, DomainError};
use crate::ports::{AssetsResolver, DocumentStore};

/// Command to register a document, or a new version of one.
#[derive(Debug, Clone)]
pub struct RegisterDocumentCommand {
    /// Alphanumeric document identifier, unique in the store.
    pub id: String,
    /// Publicly reachable location of the document data.
    pub data_url: String,
    /// Asset ids paired with their locations, recorded after the version.
    pub assets: Vec<(String, String)>,
}

impl RegisterDocumentCommand {
    pub fn new(id: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data_url: data_url.into(),
            assets: Vec::new(),
        }
    }

    pub fn with_asset(mut self, asset_id: impl Into<String>, asset_url: impl Into<String>) -> Self {
        self.assets.push((asset_id.into(), asset_url.into()));
        self
    }
}

/// Handler for registering new documents.
pub struct RegisterDocumentHandler {
    store: Arc<dyn DocumentStore>,
    resolver: Arc<dyn AssetsResolver>,
    clock: Arc<dyn Clock>,
    assets_timeout: Duration,
}

impl RegisterDocumentHandler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        resolver: Arc<dyn AssetsResolver>,
        clock: Arc<dyn Clock>,
        assets_timeout: Duration,
    ) -> Self {
        Self {
            store,
            resolver,
            clock,
            assets_timeout,
        }
    }

    /// # Errors
    ///
    /// - `AlreadyExists` if a document with this id is already registered
    /// - resolver failures from building the first version
    pub async fn handle(&self, cmd: RegisterDocumentCommand) -> Result<Document, DomainError> {
        let mut document = Document::new(cmd.id.clone(), Arc::clone(&self.clock));
        record_version(&mut document, &cmd, self.resolver.as_ref(), self.assets_timeout)?;

        self.store.add(&document).await?;

        tracing::info!(document_id = %document.id(), "Registered document");
        Ok(document)
    }
}

/// Appends a version for `cmd.data_url`, then records each supplied asset.
pub(super) fn record_version(
    document: &mut Document,
    cmd: &RegisterDocumentCommand,
    resolver: &dyn AssetsResolver,
    assets_timeout: Duration,
) -> Result<(), DomainError> {
    document.new_version(&cmd.data_url, resolver, assets_timeout)?;
    for (asset_id, asset_url) in &cmd.assets {
        document.new_asset_version(asset_id, asset_url)?;
    }
    Ok(())
}
