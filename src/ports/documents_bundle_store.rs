//! Documents bundle store port.

use async_trait::async_trait;

use crate::domain::bundle::DocumentsBundle;
use crate::domain::foundation::DomainError;

/// Repository port for DocumentsBundle persistence.
///
/// Same contract as `DocumentStore`: keyed by manifest id, content stored
/// verbatim.
#[async_trait]
pub trait DocumentsBundleStore: Send + Sync {
    /// Persist a new bundle.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a bundle with the same id is stored
    /// - `Storage` on persistence failure
    async fn add(&self, bundle: &DocumentsBundle) -> Result<(), DomainError>;

    /// Replace the stored manifest of a bundle, inserting it if absent.
    async fn update(&self, bundle: &DocumentsBundle) -> Result<(), DomainError>;

    /// Rebuild a bundle from its stored manifest.
    ///
    /// # Errors
    ///
    /// - `DoesNotExist` if no bundle has this id
    async fn fetch(&self, id: &str) -> Result<DocumentsBundle, DomainError>;
}
