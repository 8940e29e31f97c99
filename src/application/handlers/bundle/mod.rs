//! Documents bundle command and query handlers.

mod create_documents_bundle;
mod fetch_documents_bundle;

pub use create_documents_bundle::{
    BundleMetadata, CreateDocumentsBundleCommand, CreateDocumentsBundleHandler,
};
pub use fetch_documents_bundle::{FetchDocumentsBundleHandler, FetchDocumentsBundleQuery};
