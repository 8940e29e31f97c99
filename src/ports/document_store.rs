//! Document store port.
//!
//! Persists documents keyed by their manifest id. Implementations map the
//! id to their primary key and must store the manifest content verbatim.

use async_trait::async_trait;

use crate::domain::document::Document;
use crate::domain::foundation::DomainError;

/// Repository port for Document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new document.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a document with the same id is stored
    /// - `Storage` on persistence failure
    async fn add(&self, document: &Document) -> Result<(), DomainError>;

    /// Replace the stored manifest of a document, inserting it if absent.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn update(&self, document: &Document) -> Result<(), DomainError>;

    /// Rebuild a document from its stored manifest.
    ///
    /// # Errors
    ///
    /// - `DoesNotExist` if no document has this id
    /// - `Storage` on persistence failure
    async fn fetch(&self, id: &str) -> Result<Document, DomainError>;
}
