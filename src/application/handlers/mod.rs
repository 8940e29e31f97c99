//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod bundle;
pub mod document;

pub use bundle::{
    BundleMetadata, CreateDocumentsBundleCommand, CreateDocumentsBundleHandler,
    FetchDocumentsBundleHandler, FetchDocumentsBundleQuery,
};
pub use document::{
    FetchAssetsListHandler, FetchAssetsListQuery, FetchDocumentManifestHandler,
    FetchDocumentManifestQuery, FetchDocumentVersionHandler, FetchDocumentVersionQuery,
    RegisterAssetVersionCommand, RegisterAssetVersionHandler, RegisterDocumentCommand,
    RegisterDocumentHandler, RegisterDocumentVersionHandler,
};
