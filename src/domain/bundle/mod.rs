//! Bundle domain module.
//!
//! A documents bundle groups document identifiers (e.g. the articles of a
//! journal issue) together with descriptive metadata.
//!
//! - `BundleManifest` - the raw data and its pure update operations
//! - `DocumentsBundle` - typed entity built on those operations
//! - `Section` - language-to-label mapping stored in the bundle metadata

mod documents_bundle;
mod manifest;
mod section;

pub use documents_bundle::DocumentsBundle;
pub use manifest::{clamped_insert_index, BundleManifest};
pub use section::Section;
