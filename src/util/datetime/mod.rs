//! Utilities for parsing and formatting ISO 8601 timestamps.
//!
//! Discord emits two ISO 8601 forms: with microseconds
//! (`2021-01-01T01:01:01.010000+00:00`) and without
//! (`2021-01-01T01:01:01+00:00`). [`Timestamp`] parses both through
//! `chrono` and re-serializes in the microsecond form.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Number of microseconds in a second.
const MICROSECONDS_PER_SECOND: i64 = 1_000_000;

/// Representation of a Discord ISO 8601 timestamp.
///
/// # serde
///
/// Deserializes from a JSON string and serializes back as a JSON string,
/// normalized to microsecond precision.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parse a timestamp from an ISO 8601 datetime string.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Format`] error if the string is
    /// not a valid ISO 8601 datetime with offset.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        DateTime::parse_from_rfc3339(datetime)
            .map(Self)
            .map_err(|source| TimestampParseError::format(source))
    }

    /// Create a timestamp from a Unix timestamp with seconds precision.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Range`] error if the value is
    /// outside the representable datetime range.
    pub fn from_secs(unix_seconds: i64) -> Result<Self, TimestampParseError> {
        Utc.timestamp_opt(unix_seconds, 0)
            .single()
            .map(|datetime| Self(datetime.fixed_offset()))
            .ok_or(TimestampParseError::RANGE)
    }

    /// Create a timestamp from a Unix timestamp with microseconds precision.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Range`] error if the value is
    /// outside the representable datetime range.
    pub fn from_micros(unix_microseconds: i64) -> Result<Self, TimestampParseError> {
        let secs = unix_microseconds.div_euclid(MICROSECONDS_PER_SECOND);
        let micros = unix_microseconds.rem_euclid(MICROSECONDS_PER_SECOND) as u32;

        Utc.timestamp_opt(secs, micros * 1_000)
            .single()
            .map(|datetime| Self(datetime.fixed_offset()))
            .ok_or(TimestampParseError::RANGE)
    }

    /// Total number of seconds within the timestamp.
    pub fn as_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Total number of microseconds within the timestamp.
    pub fn as_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    /// View as a `chrono` datetime for calendar arithmetic.
    pub const fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.6f%:z"))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("an iso 8601 datetime string")
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        Timestamp::parse(value).map_err(DeError::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
