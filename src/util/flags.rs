//! Mask codec shared by every flag-set type in the crate.
//!
//! Flag sets are declared with [`bitflags!`] in their domain modules
//! (`MessageFlags`, `Permissions`, …). On the wire each one is a single
//! integer: the bitwise OR of the numeric values of the contained variants.
//! This module provides the conversion layer between that integer and the
//! typed set:
//!
//! - [`FlagsExt::from_mask`] / [`FlagsExt::to_mask`] — round-trip with
//!   explicit lossy detection for bits that have no named variant.
//! - [`impl_flags_serde!`] — serde wiring: always an integer on encode,
//!   integer or decimal string on decode (the platform sends large masks
//!   as strings in some payloads). Unknown bits are dropped and reported
//!   through a `tracing` warning, once per decode.
//! - [`preserve`] — opt-in serde `with`-module for record fields that need
//!   to retain unknown bits verbatim instead of dropping them.
//!
//! [`bitflags!`]: bitflags::bitflags

use bitflags::Flags;
use serde::de::{Deserializer, Error as DeError, Visitor};
use std::{
    fmt::{Formatter, Result as FmtResult},
    marker::PhantomData,
};

/// Mask operations over any `u64`-backed flag set.
///
/// Blanket-implemented for every `bitflags!` type in the crate.
pub trait FlagsExt: Flags<Bits = u64> {
    /// Decode an integer mask into a flag set.
    ///
    /// Returns the set of named variants whose values AND non-zero with the
    /// mask, plus a `lossy` marker that is `true` when the mask carried bits
    /// with no named variant. Lossy decodes succeed; the caller decides
    /// whether the discarded bits matter.
    fn from_mask(mask: i64) -> (Self, bool) {
        let bits = mask as u64;
        let set = Self::from_bits_truncate(bits);
        let lossy = bits & !Self::all().bits() != 0;

        (set, lossy)
    }

    /// Encode the flag set as an integer mask.
    fn to_mask(&self) -> i64 {
        self.bits() as i64
    }

    /// Bits of the mask that have no named variant.
    fn unknown_bits(mask: i64) -> u64 {
        mask as u64 & !Self::all().bits()
    }

    /// Stable, human-readable rendering for diagnostics: the contained
    /// variant names in alphabetical order, `|`-separated.
    fn names(&self) -> String {
        let mut names: Vec<&'static str> = self.iter_names().map(|(name, _)| name).collect();
        names.sort_unstable();

        names.join(" | ")
    }
}

impl<F: Flags<Bits = u64>> FlagsExt for F {}

/// serde visitor accepting an integer mask or its decimal-string form.
pub(crate) struct MaskVisitor<F> {
    phantom: PhantomData<fn(F) -> F>,
}

impl<F> MaskVisitor<F> {
    pub(crate) const fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<F: FlagsExt> MaskVisitor<F> {
    fn decode<E: DeError>(self, mask: i64) -> Result<F, E> {
        let (set, lossy) = F::from_mask(mask);

        if lossy {
            tracing::warn!(
                kind = std::any::type_name::<F>(),
                unknown_bits = <F as FlagsExt>::unknown_bits(mask),
                "lossy flag decode: discarding unknown bits",
            );
        }

        Ok(set)
    }
}

impl<'de, F: FlagsExt> Visitor<'de> for MaskVisitor<F> {
    type Value = F;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a flag mask as an integer or decimal string")
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
        self.decode(value)
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        self.decode(value as i64)
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        let mask = value
            .parse::<u64>()
            .map_err(|_| DeError::custom(format_args!("invalid flag mask string: {value:?}")))?;

        self.decode(mask as i64)
    }
}

pub(crate) fn deserialize_mask<'de, F, D>(deserializer: D) -> Result<F, D::Error>
where
    F: FlagsExt,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MaskVisitor::new())
}

/// Implement `Serialize`/`Deserialize` and `Display` for a `bitflags!`
/// type.
///
/// Encodes as a plain integer; decodes integers or decimal strings,
/// dropping (and logging) unknown bits. `Display` renders the diagnostic
/// form of [`FlagsExt::names`].
macro_rules! impl_flags_serde {
    ($name:ident) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64($crate::util::flags::FlagsExt::to_mask(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                $crate::util::flags::deserialize_mask(deserializer)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::util::flags::FlagsExt::names(self))
            }
        }
    };
}

pub(crate) use impl_flags_serde;

/// serde `with`-module that preserves unknown bits through a decode.
///
/// For fields where the record opts in to carrying bits the crate doesn't
/// name yet, e.g. `#[serde(with = "crate::util::flags::preserve")]` on the
/// permission masks of an overwrite.
pub mod preserve {
    use super::FlagsExt;
    use serde::{
        de::{Deserializer, Error as DeError, Visitor},
        ser::Serializer,
    };
    use std::{
        fmt::{Formatter, Result as FmtResult},
        marker::PhantomData,
    };

    struct RetainVisitor<F> {
        phantom: PhantomData<fn(F) -> F>,
    }

    impl<'de, F: FlagsExt> Visitor<'de> for RetainVisitor<F> {
        type Value = F;

        fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
            f.write_str("a flag mask as an integer or decimal string")
        }

        fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
            Ok(F::from_bits_retain(value as u64))
        }

        fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
            Ok(F::from_bits_retain(value))
        }

        fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
            value
                .parse::<u64>()
                .map(F::from_bits_retain)
                .map_err(|_| DeError::custom(format_args!("invalid flag mask string: {value:?}")))
        }
    }

    pub fn serialize<F, S>(flags: &F, serializer: S) -> Result<S::Ok, S::Error>
    where
        F: FlagsExt,
        S: Serializer,
    {
        serializer.serialize_i64(flags.to_mask())
    }

    pub fn deserialize<'de, F, D>(deserializer: D) -> Result<F, D::Error>
    where
        F: FlagsExt,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RetainVisitor {
            phantom: PhantomData,
        })
    }
}
