//! Document command and query handlers.

mod fetch_assets_list;
mod fetch_document_manifest;
mod fetch_document_version;
mod register_asset_version;
mod register_document;
mod register_document_version;

pub use fetch_assets_list::{FetchAssetsListHandler, FetchAssetsListQuery};
pub use fetch_document_manifest::{FetchDocumentManifestHandler, FetchDocumentManifestQuery};
pub use fetch_document_version::{FetchDocumentVersionHandler, FetchDocumentVersionQuery};
pub use register_asset_version::{RegisterAssetVersionCommand, RegisterAssetVersionHandler};
pub use register_document::{RegisterDocumentCommand, RegisterDocumentHandler};
pub use register_document_version::RegisterDocumentVersionHandler;
