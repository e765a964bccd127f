//! Result Store Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A result store error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for result store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The gender is neither `Men` nor `Women`.
    #[display("unrecognized gender: {_0}")]
    UnrecognizedGender(#[error(not(source))] String),
    /// The swimmer already has a time recorded for the event.
    #[display("duplicate result for swimmer '{swimmer}' in event '{event}'")]
    DuplicateResult {
        /// Name of the swimmer.
        swimmer: String,
        /// Name of the event.
        event: String,
    },
    /// The swimmer was first reported under a different gender.
    #[display("swimmer '{swimmer}' is recorded as {recorded}, not {reported}")]
    GenderMismatch {
        /// Name of the swimmer.
        swimmer: String,
        /// Gender of the existing profile.
        recorded: String,
        /// Gender supplied with the rejected result.
        reported: String,
    },
    /// No result was ever reported for the swimmer.
    #[display("no such swimmer in this meet: {_0}")]
    UnknownSwimmer(#[error(not(source))] String),
    /// The event has no results in the swimmer's gender table.
    #[display("no such event: {_0}")]
    UnknownEvent(#[error(not(source))] String),
    /// The event exists, but the swimmer has no time recorded in it.
    #[display("no such swimmer '{swimmer}' in event '{event}'")]
    SwimmerNotInEvent {
        /// Name of the swimmer.
        swimmer: String,
        /// Name of the event.
        event: String,
    },
    /// A value was found but could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Everything here is either a caller mistake or a legitimate
        // "not found"; asking again gives the same answer.
        false
    }

    /// Returns `true` for lookups that simply found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnknownSwimmer(_) | ErrorKind::UnknownEvent(_) | ErrorKind::SwimmerNotInEvent { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(
            ErrorKind::UnrecognizedGender("Mixed".to_string()).to_string(),
            "unrecognized gender: Mixed"
        );
        assert_eq!(
            ErrorKind::DuplicateResult {
                swimmer: "Alice".to_string(),
                event: "50 Free".to_string()
            }
            .to_string(),
            "duplicate result for swimmer 'Alice' in event '50 Free'"
        );
        assert_eq!(
            ErrorKind::UnknownSwimmer("Zed".to_string()).to_string(),
            "no such swimmer in this meet: Zed"
        );
    }

    #[test]
    fn error_kind_not_found() {
        assert!(ErrorKind::UnknownSwimmer("Zed".to_string()).is_not_found());
        assert!(ErrorKind::UnknownEvent("100 Fly".to_string()).is_not_found());
        assert!(!ErrorKind::UnrecognizedGender("Mixed".to_string()).is_not_found());
        assert!(!ErrorKind::UnknownEvent("100 Fly".to_string()).is_retryable());
    }
}
