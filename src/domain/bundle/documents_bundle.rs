//! DocumentsBundle entity - typed view over a bundle manifest.
//!
//! The entity owns nothing but the manifest and the clock used to stamp
//! updates. Every mutating method computes a new manifest through the pure
//! `BundleManifest` operations and adopts it only on success.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::{BundleManifest, Section};
use crate::domain::foundation::{Clock, DomainError};

const PUBLICATION_YEAR: &str = "publication_year";
const VOLUME: &str = "volume";
const NUMBER: &str = "number";
const SUPPLEMENT: &str = "supplement";
const SECTIONS: &str = "sections";

/// A container of documents, such as a journal issue.
#[derive(Clone)]
pub struct DocumentsBundle {
    manifest: BundleManifest,
    clock: Arc<dyn Clock>,
}

impl DocumentsBundle {
    /// Creates a bundle with a fresh manifest stamped by `clock`.
    pub fn new(id: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let manifest = BundleManifest::new(id, clock.now());
        Self { manifest, clock }
    }

    /// Wraps an existing manifest. The manifest is not validated.
    pub fn from_manifest(manifest: BundleManifest, clock: Arc<dyn Clock>) -> Self {
        Self { manifest, clock }
    }

    pub fn id(&self) -> &str {
        self.manifest.id()
    }

    pub fn manifest(&self) -> &BundleManifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> BundleManifest {
        self.manifest
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scalar metadata
    // ─────────────────────────────────────────────────────────────────────────

    pub fn publication_year(&self) -> String {
        self.scalar(PUBLICATION_YEAR)
    }

    /// Sets the publication year.
    ///
    /// # Errors
    ///
    /// - `Validation` unless the value renders as exactly four ASCII digits
    pub fn set_publication_year(&mut self, value: impl fmt::Display) -> Result<(), DomainError> {
        let value = value.to_string();
        if !is_four_digit_year(&value) {
            return Err(DomainError::validation(format!(
                "cannot set {} with value \"{}\": the value is not valid",
                PUBLICATION_YEAR, value
            )));
        }
        self.set_scalar(PUBLICATION_YEAR, value);
        Ok(())
    }

    pub fn volume(&self) -> String {
        self.scalar(VOLUME)
    }

    pub fn set_volume(&mut self, value: impl fmt::Display) {
        self.set_scalar(VOLUME, value.to_string());
    }

    pub fn number(&self) -> String {
        self.scalar(NUMBER)
    }

    pub fn set_number(&mut self, value: impl fmt::Display) {
        self.set_scalar(NUMBER, value.to_string());
    }

    pub fn supplement(&self) -> String {
        self.scalar(SUPPLEMENT)
    }

    pub fn set_supplement(&mut self, value: impl fmt::Display) {
        self.set_scalar(SUPPLEMENT, value.to_string());
    }

    fn scalar(&self, key: &str) -> String {
        match self.manifest.metadata_value(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn set_scalar(&mut self, key: &str, value: String) {
        self.manifest = self.manifest.set_metadata(key, value, self.clock.now());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the sections in insertion order.
    ///
    /// Entries that are not language-to-label mappings are skipped.
    pub fn sections(&self) -> Vec<Section> {
        self.raw_sections()
            .iter()
            .filter_map(|raw| {
                let section = Section::from_value(raw);
                if section.is_none() {
                    tracing::warn!(bundle_id = %self.id(), entry = %raw, "Skipping malformed section");
                }
                section
            })
            .collect()
    }

    /// Appends a section.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if an identical section is already present
    pub fn add_section(&mut self, section: Section) -> Result<(), DomainError> {
        let value = section.to_value();
        let mut sections = self.raw_sections();
        if sections.contains(&value) {
            return Err(DomainError::already_exists(format!(
                "cannot add section {}: the section already exists.",
                section
            )));
        }

        sections.push(value);
        self.manifest = self
            .manifest
            .set_metadata(SECTIONS, Value::Array(sections), self.clock.now());
        Ok(())
    }

    /// Removes a section.
    ///
    /// # Errors
    ///
    /// - `DoesNotExist` if no identical section is present
    pub fn remove_section(&mut self, section: &Section) -> Result<(), DomainError> {
        let value = section.to_value();
        let mut sections = self.raw_sections();
        let position = sections.iter().position(|s| *s == value).ok_or_else(|| {
            DomainError::does_not_exist(format!(
                "cannot remove section {}: the section does not exists.",
                section
            ))
        })?;

        sections.remove(position);
        self.manifest = self
            .manifest
            .set_metadata(SECTIONS, Value::Array(sections), self.clock.now());
        Ok(())
    }

    fn raw_sections(&self) -> Vec<Value> {
        match self.manifest.metadata_value(SECTIONS) {
            Some(Value::Array(sections)) => sections.clone(),
            _ => Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Documents
    // ─────────────────────────────────────────────────────────────────────────

    /// Identifiers of the member documents, in bundle order.
    pub fn documents(&self) -> &[String] {
        self.manifest.items()
    }

    pub fn add_document(&mut self, document: &str) -> Result<(), DomainError> {
        self.manifest = self.manifest.add_item(document, self.clock.now())?;
        Ok(())
    }

    pub fn insert_document(&mut self, index: isize, document: &str) -> Result<(), DomainError> {
        self.manifest = self.manifest.insert_item(index, document, self.clock.now())?;
        Ok(())
    }

    pub fn remove_document(&mut self, document: &str) -> Result<(), DomainError> {
        self.manifest = self.manifest.remove_item(document, self.clock.now())?;
        Ok(())
    }
}

impl fmt::Debug for DocumentsBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentsBundle")
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

fn is_four_digit_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}
