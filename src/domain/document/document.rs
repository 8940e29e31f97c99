//! Document entity - version history and point-in-time resolution.
//!
//! # Resolution rules
//!
//! - `version(index)` collapses each asset history to its last recorded
//!   entry, regardless of the version's own timestamp.
//! - `version_at(instant)` picks the version with the greatest timestamp not
//!   after `instant`, then resolves every asset to its greatest entry not
//!   after `instant`, or `""` when none qualifies yet.
//! - Ties on equal timestamps go to whichever was recorded later.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::{AssetEntry, DocumentManifest, Version};
use crate::domain::foundation::{Clock, DomainError, Timestamp};
use crate::ports::AssetsResolver;

/// A version with every asset history collapsed to a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVersion {
    pub data: String,
    pub assets: IndexMap<String, String>,
    pub timestamp: String,
}

/// A document and its append-only version history.
#[derive(Clone)]
pub struct Document {
    manifest: DocumentManifest,
    clock: Arc<dyn Clock>,
}

impl Document {
    /// Creates a document with no versions.
    pub fn new(id: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            manifest: DocumentManifest::new(id),
            clock,
        }
    }

    /// Wraps an existing manifest. The manifest is not validated.
    pub fn from_manifest(manifest: DocumentManifest, clock: Arc<dyn Clock>) -> Self {
        Self { manifest, clock }
    }

    pub fn id(&self) -> &str {
        self.manifest.id()
    }

    pub fn manifest(&self) -> &DocumentManifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> DocumentManifest {
        self.manifest
    }

    pub fn version_count(&self) -> usize {
        self.manifest.versions().len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolves the most recently appended version.
    pub fn latest_version(&self) -> Result<ResolvedVersion, DomainError> {
        self.version(-1)
    }

    /// Resolves the version at `index`; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// - `EmptyHistory` if the document has no versions
    /// - `DoesNotExist` if `index` is outside the history
    pub fn version(&self, index: isize) -> Result<ResolvedVersion, DomainError> {
        let versions = self.manifest.versions();
        if versions.is_empty() {
            return Err(DomainError::EmptyHistory);
        }

        let position = if index < 0 {
            versions.len().checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        let version = position.and_then(|p| versions.get(p)).ok_or_else(|| {
            DomainError::does_not_exist(format!(
                "cannot fetch version at index {}: the version does not exist",
                index
            ))
        })?;

        let assets = version
            .assets()
            .iter()
            .map(|(name, history)| {
                let location = history.last().map(AssetEntry::location).unwrap_or_default();
                (name.clone(), location.to_string())
            })
            .collect();

        Ok(resolved(version, assets))
    }

    /// Resolves the document as it was at `instant`.
    ///
    /// Versions and asset entries whose recorded timestamp cannot be parsed
    /// are skipped with a warning.
    ///
    /// # Errors
    ///
    /// - `MalformedTimestamp` if `instant` is not an explicit UTC instant
    /// - `NoVersionAtTime` if no usable version was recorded at or before `instant`
    pub fn version_at(&self, instant: &str) -> Result<ResolvedVersion, DomainError> {
        let at = Timestamp::parse(instant)?;

        let mut selected: Option<(Timestamp, &Version)> = None;
        for version in self.manifest.versions() {
            let Some(recorded) = recorded_at(version.timestamp()) else {
                continue;
            };
            if recorded > at {
                continue;
            }
            if selected.map_or(true, |(best, _)| recorded >= best) {
                selected = Some((recorded, version));
            }
        }
        let (_, version) = selected.ok_or_else(|| DomainError::NoVersionAtTime(instant.to_string()))?;

        let mut assets = IndexMap::with_capacity(version.assets().len());
        for (name, history) in version.assets() {
            let location = location_at(history, &at).unwrap_or_default();
            assets.insert(name.clone(), location.to_string());
        }

        Ok(resolved(version, assets))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a new version whose data lives at `data_location`.
    ///
    /// Asset histories of the previous version are copied forward. Every asset
    /// the resolver reports with a location gets a new `(now, location)` entry;
    /// assets reported without one keep their copied history, so the new
    /// version still resolves to the last known pointer.
    ///
    /// # Errors
    ///
    /// - whatever the resolver fails with; the manifest is left unchanged
    pub fn new_version(
        &mut self,
        data_location: &str,
        resolver: &dyn AssetsResolver,
        timeout: Duration,
    ) -> Result<(), DomainError> {
        let now = self.clock.now().to_manifest_string();
        let listing = resolver.resolve(data_location, timeout)?;

        let mut assets = self
            .manifest
            .latest()
            .map(|latest| latest.assets().clone())
            .unwrap_or_default();
        for (name, location) in listing.assets {
            let history = assets.entry(name).or_default();
            if let Some(location) = location.filter(|l| !l.is_empty()) {
                history.push(AssetEntry::new(now.clone(), location));
            }
        }

        self.manifest = self
            .manifest
            .with_version(Version::new(data_location, assets, now));
        Ok(())
    }

    /// Records a new location for `asset_id` in the latest version.
    ///
    /// # Errors
    ///
    /// - `EmptyHistory` if the document has no versions
    pub fn new_asset_version(&mut self, asset_id: &str, location: &str) -> Result<(), DomainError> {
        let entry = AssetEntry::new(self.clock.now().to_manifest_string(), location);
        self.manifest = self
            .manifest
            .with_latest_asset_entry(asset_id, entry)
            .ok_or(DomainError::EmptyHistory)?;
        Ok(())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

fn resolved(version: &Version, assets: IndexMap<String, String>) -> ResolvedVersion {
    ResolvedVersion {
        data: version.data().to_string(),
        assets,
        timestamp: version.timestamp().to_string(),
    }
}

/// Latest location recorded at or before `at`, scanning the whole history.
fn location_at<'a>(history: &'a [AssetEntry], at: &Timestamp) -> Option<&'a str> {
    let mut best: Option<(Timestamp, &str)> = None;
    for entry in history {
        let Some(recorded) = recorded_at(entry.timestamp()) else {
            continue;
        };
        if recorded <= *at && best.map_or(true, |(ts, _)| recorded >= ts) {
            best = Some((recorded, entry.location()));
        }
    }
    best.map(|(_, location)| location)
}

fn recorded_at(value: &str) -> Option<Timestamp> {
    match Timestamp::parse(value) {
        Ok(recorded) => Some(recorded),
        Err(err) => {
            tracing::warn!(error = %err, "Skipping entry with unusable timestamp");
            None
        }
    }
}
