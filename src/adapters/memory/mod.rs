//! In-Memory Store Adapters
//!
//! Implementations of the store ports backed by hash maps.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::{InMemoryDocumentStore, InMemoryDocumentsBundleStore};
//!
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let documents = InMemoryDocumentStore::new(Arc::clone(&clock));
//! let bundles = InMemoryDocumentsBundleStore::new(clock);
//! ```

mod in_memory_document_store;
mod in_memory_documents_bundle_store;

pub use in_memory_document_store::InMemoryDocumentStore;
pub use in_memory_documents_bundle_store::InMemoryDocumentsBundleStore;
