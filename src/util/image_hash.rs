//! Validated image hashes.

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An image hash as sent by the CDN: 32 hex characters, optionally with an
/// `a_` prefix marking an animated asset.
///
/// Stored as the raw string; validation happens on decode so that malformed
/// hashes surface as schema errors rather than broken CDN URLs later.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ImageHash(String);

impl ImageHash {
    /// Parse an image hash, validating shape and characters.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix("a_").unwrap_or(value);

        if hex.len() == 32 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(value.to_owned()))
        } else {
            None
        }
    }

    /// Whether the asset is animated.
    pub fn is_animated(&self) -> bool {
        self.0.starts_with("a_")
    }

    /// The raw hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

struct ImageHashVisitor;

impl Visitor<'_> for ImageHashVisitor {
    type Value = ImageHash;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a 32-character hex image hash")
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        ImageHash::parse(value)
            .ok_or_else(|| DeError::custom(format_args!("invalid image hash: {value:?}")))
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ImageHashVisitor)
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ImageHash;

    #[test]
    fn accepts_plain_and_animated() {
        let plain = ImageHash::parse("1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d").unwrap();
        assert!(!plain.is_animated());

        let animated = ImageHash::parse("a_1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d").unwrap();
        assert!(animated.is_animated());
    }

    #[test]
    fn rejects_bad_shapes() {
        for bad in ["", "zzz", "1a2b3c", "g_1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d"] {
            assert!(ImageHash::parse(bad).is_none(), "accepted {bad:?}");
        }
    }

    #[test]
    fn serde_round_trip() {
        let hash: ImageHash =
            serde_json::from_str("\"1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d\"").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d\"");
    }
}
