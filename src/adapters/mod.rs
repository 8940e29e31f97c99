//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory document and bundle stores

pub mod memory;

pub use memory::{InMemoryDocumentStore, InMemoryDocumentsBundleStore};
