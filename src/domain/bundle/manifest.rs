//! Bundle manifest - plain data plus pure update operations.
//!
//! Every operation takes `&self` and returns a brand-new manifest. The
//! argument is never touched, so a failed operation leaves the caller's
//! value exactly as it was (including `updated`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DomainError, Timestamp};

/// Raw manifest of a documents bundle.
///
/// # Invariants
///
/// - `items` contains no duplicates
/// - `created` never changes after `new`
/// - `updated` is refreshed on every successful operation and never moves backwards
///
/// Missing keys default to empty values when deserializing; the schema is
/// not validated on load. Unknown keys are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BundleManifest {
    #[serde(default)]
    id: String,

    #[serde(default)]
    created: String,

    #[serde(default)]
    updated: String,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    metadata: Map<String, Value>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl BundleManifest {
    /// Creates an empty manifest with `created == updated == now`.
    pub fn new(id: impl Into<String>, now: Timestamp) -> Self {
        let now = now.to_manifest_string();
        Self {
            id: id.into(),
            created: now.clone(),
            updated: now,
            items: Vec::new(),
            metadata: Map::new(),
            extra: Map::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn updated(&self) -> &str {
        &self.updated
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Returns a single metadata value, if present.
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Keys that are not part of the manifest schema, e.g. a store key.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Inserts or overwrites `metadata[key]`, leaving other keys untouched.
    pub fn set_metadata(&self, key: &str, value: impl Into<Value>, now: Timestamp) -> Self {
        let mut next = self.clone();
        next.metadata.insert(key.to_string(), value.into());
        next.touched(now)
    }

    /// Appends `item` to the end of `items`.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if `item` is already present
    pub fn add_item(&self, item: &str, now: Timestamp) -> Result<Self, DomainError> {
        if self.contains_item(item) {
            return Err(DomainError::already_exists(format!(
                "cannot add documents bundle item \"{}\": the item already exists",
                item
            )));
        }

        let mut next = self.clone();
        next.items.push(item.to_string());
        Ok(next.touched(now))
    }

    /// Inserts `item` at `index`. Negative indices count from the end and
    /// out-of-range indices clamp to the nearest boundary.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if `item` is already present
    pub fn insert_item(&self, index: isize, item: &str, now: Timestamp) -> Result<Self, DomainError> {
        if self.contains_item(item) {
            return Err(DomainError::already_exists(format!(
                "cannot insert documents bundle item \"{}\": the item already exists",
                item
            )));
        }

        let mut next = self.clone();
        let position = clamped_insert_index(next.items.len(), index);
        next.items.insert(position, item.to_string());
        Ok(next.touched(now))
    }

    /// Removes `item` from `items`.
    ///
    /// # Errors
    ///
    /// - `DoesNotExist` if `item` is not present
    pub fn remove_item(&self, item: &str, now: Timestamp) -> Result<Self, DomainError> {
        let position = self.items.iter().position(|i| i == item).ok_or_else(|| {
            DomainError::does_not_exist(format!(
                "cannot remove documents bundle item \"{}\": the item does not exist",
                item
            ))
        })?;

        let mut next = self.clone();
        next.items.remove(position);
        Ok(next.touched(now))
    }

    fn contains_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Refreshes `updated`, keeping the previous value if the clock is behind it.
    fn touched(mut self, now: Timestamp) -> Self {
        let moves_backwards = Timestamp::parse(&self.updated)
            .map(|previous| previous.is_after(&now))
            .unwrap_or(false);
        if !moves_backwards {
            self.updated = now.to_manifest_string();
        }
        self
    }
}

/// Resolves a possibly negative or out-of-range `index` to an insertion
/// position in a sequence of `len` elements.
///
/// Negative values count from the end (`-1` inserts before the last
/// element). Anything before the start clamps to `0`, anything past the
/// end clamps to `len`.
pub fn clamped_insert_index(len: usize, index: isize) -> usize {
    if index < 0 {
        let from_end = index.unsigned_abs();
        len.saturating_sub(from_end)
    } else {
        index.unsigned_abs().min(len)
    }
}
