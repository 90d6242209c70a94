//! Error types for [`Timestamp`] parsing.
//!
//! [`Timestamp`]: super::Timestamp

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Reason that an ISO 8601 timestamp couldn't be parsed.
#[derive(Debug)]
pub struct TimestampParseError {
    /// Type of error that occurred.
    kind: TimestampParseErrorType,
    /// Source of the error, if there is any.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl TimestampParseError {
    /// Error caused by a Unix value outside the representable range.
    pub(crate) const RANGE: TimestampParseError = TimestampParseError {
        kind: TimestampParseErrorType::Range,
        source: None,
    };

    /// Error caused by the datetime being of an improper format.
    pub(crate) fn format(source: chrono::ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Format,
            source: Some(Box::new(source)),
        }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(
        self,
    ) -> (
        TimestampParseErrorType,
        Option<Box<dyn Error + Send + Sync>>,
    ) {
        (self.kind, self.source)
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            TimestampParseErrorType::Format => {
                f.write_str("provided value is not in an iso 8601 format")
            }
            TimestampParseErrorType::Range => {
                f.write_str("value of a field is not in an acceptable range")
            }
        }
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`TimestampParseError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum TimestampParseErrorType {
    /// Format of the input datetime is invalid.
    Format,
    /// Value of a field is not in an acceptable range.
    Range,
}

#[cfg(test)]
mod tests {
    use super::super::Timestamp;
    use super::TimestampParseErrorType;
    use std::error::Error;

    #[test]
    fn format_error_carries_source() {
        let err = Timestamp::parse("not a datetime").unwrap_err();
        assert!(matches!(err.kind(), TimestampParseErrorType::Format));
        assert!(err.source().is_some());
    }

    #[test]
    fn range_error_has_no_source() {
        let err = Timestamp::from_secs(i64::MAX).unwrap_err();
        let (kind, source) = err.into_parts();
        assert!(matches!(kind, TimestampParseErrorType::Range));
        assert!(source.is_none());
    }
}
