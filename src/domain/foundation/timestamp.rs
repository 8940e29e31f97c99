//! Timestamp value object for UTC instants recorded in manifests.
//!
//! Manifests keep instants as plain ISO-8601 strings. `Timestamp` is the
//! validated form: parsing only succeeds when the input explicitly denotes
//! UTC, and rendering always yields a zero-padded string with microsecond
//! precision and a trailing `Z`.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses an ISO-8601 instant that carries an explicit UTC designator.
    ///
    /// Inputs without a trailing `Z` are rejected even when they would be
    /// valid local date-times; nothing is silently assumed to be UTC.
    ///
    /// # Errors
    ///
    /// - `MalformedTimestamp` if the UTC designator is missing or the value
    ///   is not a valid RFC 3339 date-time
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if !(trimmed.ends_with('Z') || trimmed.ends_with('z')) {
            return Err(DomainError::malformed_timestamp(
                value,
                "the value is not explicitly UTC (missing trailing \"Z\")",
            ));
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| DomainError::malformed_timestamp(value, e.to_string()))
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the given duration.
    pub fn plus(&self, duration: Duration) -> Self {
        Self(self.0 + duration)
    }

    /// Renders the manifest representation, e.g. `2018-08-05T23:02:29.392990Z`.
    pub fn to_manifest_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_manifest_string())
    }
}

impl FromStr for Timestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_accepts_utc_designator() {
        let ts = Timestamp::parse("2018-08-05T23:04:00Z").unwrap();
        assert_eq!(ts.as_datetime().year(), 2018);
        assert_eq!(ts.as_datetime().hour(), 23);
        assert_eq!(ts.as_datetime().minute(), 4);
    }

    #[test]
    fn parse_accepts_fractional_seconds() {
        let ts = Timestamp::parse("2018-08-05T23:02:29.392990Z").unwrap();
        assert_eq!(ts.as_datetime().nanosecond(), 392_990_000);
    }

    #[test]
    fn parse_rejects_missing_utc_designator() {
        let err = Timestamp::parse("2018-08-05 23:03:44").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedTimestamp);
    }

    #[test]
    fn parse_rejects_explicit_non_utc_offset() {
        let err = Timestamp::parse("2018-08-05T23:03:44+02:00").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedTimestamp);
    }

    #[test]
    fn parse_rejects_date_only_input() {
        assert!(Timestamp::parse("2018-12-31").is_err());
    }

    #[test]
    fn parse_rejects_unpadded_values() {
        assert!(Timestamp::parse("2018-8-5T23:03:44Z").is_err());
    }

    #[test]
    fn parse_rejects_garbage_with_trailing_z() {
        let err = Timestamp::parse("yesterdayZ").unwrap_err();
        assert!(matches!(err, DomainError::MalformedTimestamp { .. }));
    }

    #[test]
    fn manifest_string_is_zero_padded_with_micros() {
        let ts = Timestamp::parse("2018-08-05T03:04:05Z").unwrap();
        assert_eq!(ts.to_manifest_string(), "2018-08-05T03:04:05.000000Z");
        assert_eq!(ts.to_string(), "2018-08-05T03:04:05.000000Z");
    }

    #[test]
    fn manifest_string_parses_back_to_same_instant() {
        let ts = Timestamp::parse("2018-08-05T23:02:29.392990Z").unwrap();
        let reparsed: Timestamp = ts.to_manifest_string().parse().unwrap();
        assert_eq!(ts, reparsed);
    }

    #[test]
    fn ordering_follows_instants_not_text() {
        // "29Z" sorts after "29.1Z" as text
        let earlier = Timestamp::parse("2018-08-05T23:02:29Z").unwrap();
        let later = Timestamp::parse("2018-08-05T23:02:29.1Z").unwrap();
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
    }

    #[test]
    fn plus_adds_duration() {
        let ts = Timestamp::parse("2018-08-05T23:00:00Z").unwrap();
        assert_eq!(
            ts.plus(Duration::seconds(90)).to_manifest_string(),
            "2018-08-05T23:01:30.000000Z"
        );
    }
}
