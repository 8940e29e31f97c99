//! Document domain module.
//!
//! A document is an append-only sequence of versions. Each version points
//! at the document data and carries the full pointer history of every
//! asset (figures, supplementary files) known at the time it was appended.

#[allow(clippy::module_inception)]
mod document;
mod manifest;

pub use document::{Document, ResolvedVersion};
pub use manifest::{AssetEntry, AssetHistory, DocumentManifest, Version};
