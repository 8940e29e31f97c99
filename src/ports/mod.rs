//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentStore` - persistence of document manifests
//! - `DocumentsBundleStore` - persistence of bundle manifests
//! - `AssetsResolver` - lists the assets referenced by document data

mod assets_resolver;
mod document_store;
mod documents_bundle_store;

pub use assets_resolver::{AssetsListing, AssetsResolver};
pub use document_store::DocumentStore;
pub use documents_bundle_store::DocumentsBundleStore;
