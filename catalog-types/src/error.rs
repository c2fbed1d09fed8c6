//! Validation errors for submitted records.

use thiserror::Error;

/// Why a submitted form was rejected before any network call.
///
/// Always recoverable by re-submission; never a system fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    /// The ISBN contained something other than digits.
    #[error("isbn must be numeric, got {0:?}")]
    InvalidIsbn(String),

    /// The publication date did not parse.
    #[error("invalid publication date {0:?}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingField("title");
        assert_eq!(err.to_string(), "required field is empty: title");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
