//! Document manifest - the append-only version history of one document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recorded pointer for an asset: `(timestamp, location)`.
///
/// Serialized as a two-element array, e.g.
/// `["2018-08-05T23:03:44.971230Z", "/rawfiles/8e644999a8fa4/gf01.gif"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry(String, String);

impl AssetEntry {
    pub fn new(timestamp: impl Into<String>, location: impl Into<String>) -> Self {
        Self(timestamp.into(), location.into())
    }

    pub fn timestamp(&self) -> &str {
        &self.0
    }

    pub fn location(&self) -> &str {
        &self.1
    }
}

/// Per-asset pointer histories, keyed by asset name.
pub type AssetHistory = IndexMap<String, Vec<AssetEntry>>;

/// A timestamped snapshot of a document.
///
/// `assets` is a full copy of every asset history known when the version
/// was appended, not a delta against the previous version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Version {
    #[serde(default)]
    data: String,

    #[serde(default)]
    assets: AssetHistory,

    #[serde(default)]
    timestamp: String,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Version {
    pub fn new(data: impl Into<String>, assets: AssetHistory, timestamp: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            assets,
            timestamp: timestamp.into(),
            extra: Map::new(),
        }
    }

    /// Location of the document data for this version.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn assets(&self) -> &AssetHistory {
        &self.assets
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Raw manifest of a document.
///
/// Missing keys default to empty values; unknown keys are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentManifest {
    #[serde(default)]
    id: String,

    #[serde(default)]
    versions: Vec<Version>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl DocumentManifest {
    /// Creates a manifest with no versions.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            versions: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn latest(&self) -> Option<&Version> {
        self.versions.last()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns a new manifest with `version` appended.
    pub fn with_version(&self, version: Version) -> Self {
        let mut next = self.clone();
        next.versions.push(version);
        next
    }

    /// Returns a new manifest where `entry` is appended to the history of
    /// `asset` in the latest version, or `None` if there are no versions.
    pub fn with_latest_asset_entry(&self, asset: &str, entry: AssetEntry) -> Option<Self> {
        let mut next = self.clone();
        next.versions
            .last_mut()?
            .assets
            .entry(asset.to_string())
            .or_default()
            .push(entry);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asset_entry_serializes_as_pair() {
        let entry = AssetEntry::new("2018-08-05T23:03:44.971230Z", "/rawfiles/gf01.gif");
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!(["2018-08-05T23:03:44.971230Z", "/rawfiles/gf01.gif"])
        );
    }

    #[test]
    fn manifest_deserializes_nested_structure() {
        let manifest: DocumentManifest = serde_json::from_value(json!({
            "id": "0034-8910-rsp-48-2-0275",
            "versions": [{
                "data": "/rawfiles/7ca9f9b2687cb/0034-8910-rsp-48-2-0275.xml",
                "assets": {
                    "gf01.gif": [["2018-08-05T23:03:44.971230Z", "/rawfiles/gf01.gif"]]
                },
                "timestamp": "2018-08-05T23:02:29.392990Z"
            }]
        }))
        .unwrap();

        let version = &manifest.versions()[0];
        assert_eq!(version.data(), "/rawfiles/7ca9f9b2687cb/0034-8910-rsp-48-2-0275.xml");
        assert_eq!(version.assets()["gf01.gif"][0].location(), "/rawfiles/gf01.gif");
        assert_eq!(version.timestamp(), "2018-08-05T23:02:29.392990Z");
    }

    #[test]
    fn manifest_with_unknown_schema_is_allowed() {
        let raw = json!({"versions": [], "_id": "abc"});
        let manifest: DocumentManifest = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(manifest.id(), "");
        assert_eq!(serde_json::to_value(&manifest).unwrap()["_id"], json!("abc"));
    }

    #[test]
    fn with_version_leaves_original_untouched() {
        let manifest = DocumentManifest::new("doc");
        let next = manifest.with_version(Version::new("/a.xml", AssetHistory::new(), "t"));

        assert!(manifest.versions().is_empty());
        assert_eq!(next.versions().len(), 1);
    }

    #[test]
    fn with_latest_asset_entry_appends_to_latest_version() {
        let manifest = DocumentManifest::new("doc")
            .with_version(Version::new("/a.xml", AssetHistory::new(), "t1"))
            .with_version(Version::new("/b.xml", AssetHistory::new(), "t2"));

        let next = manifest
            .with_latest_asset_entry("gf01.gif", AssetEntry::new("t3", "/gf01.gif"))
            .unwrap();

        assert!(next.versions()[0].assets().is_empty());
        assert_eq!(next.versions()[1].assets()["gf01.gif"].len(), 1);
        assert!(manifest.versions()[1].assets().is_empty());
    }

    #[test]
    fn with_latest_asset_entry_requires_a_version() {
        let manifest = DocumentManifest::new("doc");
        assert!(manifest
            .with_latest_asset_entry("gf01.gif", AssetEntry::new("t", "/gf01.gif"))
            .is_none());
    }
}
