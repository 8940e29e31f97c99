//! Document Store - Versioned document and bundle manifests
//!
//! Documents keep an append-only history of versions, each pointing at the
//! document data and at the full pointer history of its assets, so any past
//! state can be resolved by index or by instant. Bundles group documents
//! in order and carry descriptive metadata.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
