//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
///
/// Stable identifiers that presentation layers can map to their own
/// status codes without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Conflict errors
    AlreadyExists,

    // Not found errors
    DoesNotExist,

    // Validation errors
    ValidationFailed,
    MalformedTimestamp,

    // Version resolution errors
    NoVersionAtTime,
    EmptyHistory,

    // Collaborator errors
    AssetsResolutionFailed,
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::DoesNotExist => "DOES_NOT_EXIST",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MalformedTimestamp => "MALFORMED_TIMESTAMP",
            ErrorCode::NoVersionAtTime => "NO_VERSION_AT_TIME",
            ErrorCode::EmptyHistory => "EMPTY_HISTORY",
            ErrorCode::AssetsResolutionFailed => "ASSETS_RESOLUTION_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by manifest operations, entities and store ports.
///
/// The `AlreadyExists`, `DoesNotExist` and `Validation` variants display
/// their message verbatim. Downstream consumers match on those messages,
/// so the templates must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    DoesNotExist(String),

    #[error("{0}")]
    Validation(String),

    #[error("malformed timestamp \"{value}\": {reason}")]
    MalformedTimestamp { value: String, reason: String },

    #[error("there is no version available at {0}")]
    NoVersionAtTime(String),

    #[error("the document has no versions")]
    EmptyHistory,

    #[error("cannot resolve assets: {0}")]
    AssetsResolution(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Creates an already-exists error.
    pub fn already_exists(message: impl Into<String>) -> Self {
        DomainError::AlreadyExists(message.into())
    }

    /// Creates a does-not-exist error.
    pub fn does_not_exist(message: impl Into<String>) -> Self {
        DomainError::DoesNotExist(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    /// Creates a malformed timestamp error for the offending input.
    pub fn malformed_timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::MalformedTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an assets resolution error.
    pub fn assets_resolution(message: impl Into<String>) -> Self {
        DomainError::AssetsResolution(message.into())
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            DomainError::DoesNotExist(_) => ErrorCode::DoesNotExist,
            DomainError::Validation(_) => ErrorCode::ValidationFailed,
            DomainError::MalformedTimestamp { .. } => ErrorCode::MalformedTimestamp,
            DomainError::NoVersionAtTime(_) => ErrorCode::NoVersionAtTime,
            DomainError::EmptyHistory => ErrorCode::EmptyHistory,
            DomainError::AssetsResolution(_) => ErrorCode::AssetsResolutionFailed,
            DomainError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_displays_message_verbatim() {
        let err = DomainError::already_exists(
            "cannot add documents bundle item \"/documents/1\": the item already exists",
        );
        assert_eq!(
            err.to_string(),
            "cannot add documents bundle item \"/documents/1\": the item already exists"
        );
    }

    #[test]
    fn validation_displays_message_verbatim() {
        let err = DomainError::validation("cannot set publication_year with value \"18\": the value is not valid");
        assert_eq!(
            err.to_string(),
            "cannot set publication_year with value \"18\": the value is not valid"
        );
    }

    #[test]
    fn malformed_timestamp_displays_value_and_reason() {
        let err = DomainError::malformed_timestamp("2018-08-05 23:03:44", "missing UTC designator");
        assert_eq!(
            err.to_string(),
            "malformed timestamp \"2018-08-05 23:03:44\": missing UTC designator"
        );
    }

    #[test]
    fn code_maps_each_variant() {
        assert_eq!(DomainError::already_exists("x").code(), ErrorCode::AlreadyExists);
        assert_eq!(DomainError::does_not_exist("x").code(), ErrorCode::DoesNotExist);
        assert_eq!(DomainError::validation("x").code(), ErrorCode::ValidationFailed);
        assert_eq!(
            DomainError::malformed_timestamp("x", "y").code(),
            ErrorCode::MalformedTimestamp
        );
        assert_eq!(
            DomainError::NoVersionAtTime("x".to_string()).code(),
            ErrorCode::NoVersionAtTime
        );
        assert_eq!(DomainError::EmptyHistory.code(), ErrorCode::EmptyHistory);
        assert_eq!(
            DomainError::assets_resolution("x").code(),
            ErrorCode::AssetsResolutionFailed
        );
        assert_eq!(DomainError::storage("x").code(), ErrorCode::StorageError);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AlreadyExists), "ALREADY_EXISTS");
        assert_eq!(format!("{}", ErrorCode::NoVersionAtTime), "NO_VERSION_AT_TIME");
    }
}
