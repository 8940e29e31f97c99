//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, clocks, errors)
//! - `bundle` - Bundle manifests and the DocumentsBundle entity
//! - `document` - Document manifests and point-in-time version resolution

pub mod bundle;
pub mod document;
pub mod foundation;
