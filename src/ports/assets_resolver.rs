//! Assets resolver port.
//!
//! When a new document version is registered, the resolver inspects the
//! data at the given location and lists the assets it references, each
//! with a location if one is already known.

use std::time::Duration;

use crate::domain::foundation::DomainError;

/// Result of resolving the assets referenced by a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetsListing {
    /// Raw content that was fetched, if any. Not used by version resolution.
    pub content: Option<Vec<u8>>,

    /// Asset names paired with their location, or `None` when unknown.
    pub assets: Vec<(String, Option<String>)>,
}

impl AssetsListing {
    /// A listing that references no assets.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(assets: Vec<(String, Option<String>)>) -> Self {
        Self {
            content: None,
            assets,
        }
    }
}

/// Port for listing the assets referenced by document data.
///
/// Any `Fn(&str, Duration) -> Result<AssetsListing, DomainError>` closure
/// implements this trait, which keeps test stubs to a single line.
pub trait AssetsResolver: Send + Sync {
    /// Resolves the assets of the data at `data_location`.
    ///
    /// # Errors
    ///
    /// - `AssetsResolution` if the data cannot be fetched or parsed
    fn resolve(&self, data_location: &str, timeout: Duration) -> Result<AssetsListing, DomainError>;
}

impl<F> AssetsResolver for F
where
    F: Fn(&str, Duration) -> Result<AssetsListing, DomainError> + Send + Sync,
{
    fn resolve(&self, data_location: &str, timeout: Duration) -> Result<AssetsListing, DomainError> {
        self(data_location, timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_resolver_is_object_safe() {
        fn _accepts_dyn(_resolver: &dyn AssetsResolver) {}
    }

    #[test]
    fn closures_implement_resolver() {
        let resolver = |location: &str, _timeout: Duration| {
            Ok::<_, DomainError>(AssetsListing::new(vec![(format!("{}-gf01", location), None)]))
        };

        let listing = resolver.resolve("doc", Duration::from_secs(2)).unwrap();
        assert_eq!(listing.assets, vec![("doc-gf01".to_string(), None)]);
        assert!(listing.content.is_none());
    }

    #[test]
    fn empty_listing_has_no_assets() {
        assert!(AssetsListing::empty().assets.is_empty());
    }
}
