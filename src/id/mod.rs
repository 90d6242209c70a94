//! Type-safe snowflake IDs with marker types.
//!
//! Discord IDs are 64-bit snowflakes transmitted as decimal strings in JSON.
//! [`Id`] wraps the raw integer and carries a zero-sized marker so that, for
//! example, a role ID can't be passed where a user ID is required. The
//! timestamp, worker, process, and increment components are derived on
//! demand rather than stored; bulk deserialization of records keeps IDs at
//! eight bytes apiece.

pub mod marker;

mod error;

pub use self::error::{IdParseError, IdParseErrorType};

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::NonZeroU64,
    str::FromStr,
};

/// Discord epoch: the first second of 2015, in Unix milliseconds.
pub const EPOCH: u64 = 1_420_070_400_000;

/// ID of a resource, such as the ID of a [channel] or [user].
///
/// Markers themselves perform no logical action and are only used to ensure
/// that IDs of incorrect types aren't used. See the [`marker`] module.
///
/// # serde
///
/// Serializes as a decimal string. Deserializes from a string or, as a
/// lenient fallback for payloads that inline small IDs, from a JSON
/// integer; re-serialization always produces the string form.
///
/// [channel]: marker::ChannelMarker
/// [user]: marker::UserMarker
pub struct Id<M> {
    value: u64,
    phantom: PhantomData<fn(M) -> M>,
}

impl<M> Id<M> {
    /// Create an ID from a raw snowflake value.
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// Raw snowflake value.
    pub const fn get(self) -> u64 {
        self.value
    }

    /// Cast an ID from one marker type to another.
    pub const fn cast<N>(self) -> Id<N> {
        Id::new(self.value)
    }

    /// Parse an ID from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an [`IdParseErrorType::Malformed`] error if the input is not
    /// a decimal representation of a non-negative 64-bit integer.
    pub fn parse(text: &str) -> Result<Self, IdParseError> {
        // `u64::from_str` rejects signs, whitespace, and overflow, which is
        // exactly the wire contract.
        match text.parse::<u64>() {
            Ok(value) => Ok(Self::new(value)),
            Err(source) => Err(IdParseError::malformed(text, source)),
        }
    }

    /// Unix-millisecond timestamp encoded in the snowflake's high 42 bits.
    pub const fn timestamp_millis(self) -> i64 {
        ((self.value >> 22) + EPOCH) as i64
    }

    /// The point in time the snowflake was generated.
    pub fn created_at(self) -> chrono::DateTime<chrono::Utc> {
        use chrono::TimeZone;

        chrono::Utc
            .timestamp_millis_opt(self.timestamp_millis())
            .single()
            .unwrap_or_default()
    }

    /// Internal worker ID (5 bits).
    pub const fn worker_id(self) -> u8 {
        ((self.value >> 17) & 0x1F) as u8
    }

    /// Internal process ID (5 bits).
    pub const fn process_id(self) -> u8 {
        ((self.value >> 12) & 0x1F) as u8
    }

    /// Per-process sequence number (12 bits).
    pub const fn increment(self) -> u16 {
        (self.value & 0xFFF) as u16
    }
}

// Manual trait impls: derives would put an `M: Trait` bound on the marker,
// which is never satisfiable for the unit marker structs.

impl<M> Clone for Id<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Id<M> {}

impl<M> Debug for Id<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Id")?;
        let name = std::any::type_name::<M>();
        // Markers live in `crate::id::marker`; print just `Id::<UserMarker>`.
        if let Some(short) = name.rsplit("::").next() {
            f.write_str("::<")?;
            f.write_str(short)?;
            f.write_str(">")?;
        }
        f.write_str("(")?;
        Debug::fmt(&self.value, f)?;
        f.write_str(")")
    }
}

impl<M> Display for Id<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

impl<M> PartialEq for Id<M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M> Eq for Id<M> {}

impl<M> PartialOrd for Id<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M> Ord for Id<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<M> Hash for Id<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<M> From<u64> for Id<M> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<M> From<NonZeroU64> for Id<M> {
    fn from(value: NonZeroU64) -> Self {
        Self::new(value.get())
    }
}

impl<M> From<Id<M>> for u64 {
    fn from(id: Id<M>) -> Self {
        id.value
    }
}

impl<M> FromStr for Id<M> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct IdVisitor<M> {
    phantom: PhantomData<fn(M) -> M>,
}

impl<'de, M> Visitor<'de> for IdVisitor<M> {
    type Value = Id<M>;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a snowflake as a decimal string or unsigned integer")
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Id::new(value))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map(Id::new)
            .map_err(|_| DeError::custom(format_args!("snowflake is negative: {value}")))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        Id::parse(value).map_err(DeError::custom)
    }
}

impl<'de, M> Deserialize<'de> for Id<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor {
            phantom: PhantomData,
        })
    }
}

impl<M> Serialize for Id<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // collect_str avoids the intermediate String allocation of
        // `to_string` for writers that can take a Display directly.
        serializer.collect_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{marker::UserMarker, Id, EPOCH};
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use static_assertions::assert_impl_all;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    assert_impl_all!(
        Id<UserMarker>: Clone, Copy, Eq, Ord, Send, Sync, std::fmt::Debug
    );

    #[test]
    fn parse_format_round_trip() {
        for raw in [0u64, 1, 7, 175_928_847_299_117_063, u64::MAX] {
            let id = Id::<UserMarker>::parse(&raw.to_string()).unwrap();
            assert_eq!(id.get(), raw);
            assert_eq!(id.to_string(), raw.to_string());
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "abc", "-5", "+7", " 42", "18446744073709551616", "1.5"] {
            assert!(Id::<UserMarker>::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn known_snowflake_decomposition() {
        // Worked example from the Discord API docs.
        let id = Id::<UserMarker>::new(175_928_847_299_117_063);

        assert_eq!(id.timestamp_millis(), 1_462_015_105_796);
        assert_eq!(id.worker_id(), 1);
        assert_eq!(id.process_id(), 0);
        assert_eq!(id.increment(), 7);
    }

    #[test]
    fn timestamp_formula() {
        for raw in [1u64 << 22, 0xFFFF_FFFF, 175_928_847_299_117_063] {
            let id = Id::<UserMarker>::new(raw);
            assert_eq!(id.timestamp_millis(), ((raw >> 22) + EPOCH) as i64);
        }
    }

    #[test]
    fn serde_string_form() {
        let id = Id::<UserMarker>::new(175_928_847_299_117_063);

        assert_tokens(&id, &[Token::Str("175928847299117063")]);
    }

    #[test]
    fn serde_integer_fallback() {
        let id = Id::<UserMarker>::new(114_941_315_417_899_012);

        assert_de_tokens(&id, &[Token::U64(114_941_315_417_899_012)]);
        assert_de_tokens(&id, &[Token::I64(114_941_315_417_899_012)]);
    }

    #[test]
    fn optional_id_null_is_absent() {
        let parsed: Option<Id<UserMarker>> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn equality_and_hash_use_raw_only() {
        let a = Id::<UserMarker>::new(42);
        let b = Id::<UserMarker>::new(42);
        assert_eq!(a, b);

        let hash = |id: Id<UserMarker>| {
            let mut hasher = DefaultHasher::new();
            id.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(a), hash(b));
    }

    #[test]
    fn cast_preserves_value() {
        let user = Id::<UserMarker>::new(42);
        let generic = user.cast::<super::marker::GenericMarker>();
        assert_eq!(generic.get(), 42);
    }
}
