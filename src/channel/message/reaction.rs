//! Reactions aggregated on a message.

use crate::id::{marker::EmojiMarker, Id};
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Aggregated count of one emoji's reactions on a message.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Reaction {
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_details: Option<ReactionCountDetails>,
    /// Whether the current user reacted with this emoji.
    #[serde(default)]
    pub me: bool,
    pub emoji: ReactionEmoji,
}

/// Normal/burst breakdown of a reaction count.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReactionCountDetails {
    pub normal: u64,
    pub burst: u64,
}

/// The emoji of a reaction: a custom emoji snowflake or a unicode name.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReactionEmoji {
    /// Set for custom emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<EmojiMarker>>,
    /// Unicode glyph, or the name of a custom emoji. Custom-emoji names
    /// are advisory and may be stale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub animated: bool,
}

impl ReactionEmoji {
    /// Unicode emoji with the given glyph.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            animated: false,
        }
    }

    /// Custom emoji with the given ID.
    pub fn custom(id: Id<EmojiMarker>) -> Self {
        Self {
            id: Some(id),
            name: None,
            animated: false,
        }
    }

    /// The emoji's identity for matching.
    ///
    /// A custom emoji is identified by its `id`; a unicode emoji by its
    /// `name`. Two custom emoji with different IDs are distinct even when
    /// their names collide, and a custom emoji never matches a unicode one.
    ///
    /// # Errors
    ///
    /// Returns [`EmojiIdentityError`] when neither `id` nor `name` is set.
    pub fn identity(&self) -> Result<EmojiIdentity<'_>, EmojiIdentityError> {
        if let Some(id) = self.id {
            Ok(EmojiIdentity::Custom(id))
        } else if let Some(name) = self.name.as_deref() {
            Ok(EmojiIdentity::Unicode(name))
        } else {
            Err(EmojiIdentityError)
        }
    }

    /// Whether this emoji matches the same identity as `other`.
    ///
    /// An invalid emoji matches nothing.
    pub(super) fn same_identity(&self, other: &Self) -> bool {
        match (self.identity(), other.identity()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Resolved identity of a reaction emoji.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmojiIdentity<'a> {
    /// Custom emoji, keyed by snowflake.
    Custom(Id<EmojiMarker>),
    /// Unicode emoji, keyed by glyph.
    Unicode(&'a str),
}

/// A reaction emoji with neither an ID nor a name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmojiIdentityError;

impl Display for EmojiIdentityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("emoji has neither an id nor a name")
    }
}

impl Error for EmojiIdentityError {}

#[cfg(test)]
mod tests {
    use super::{EmojiIdentity, ReactionEmoji};
    use crate::id::Id;

    #[test]
    fn identity_prefers_id() {
        let mut emoji = ReactionEmoji::custom(Id::new(42));
        emoji.name = Some("thumbsup".to_owned());

        assert_eq!(emoji.identity().unwrap(), EmojiIdentity::Custom(Id::new(42)));
    }

    #[test]
    fn identity_falls_back_to_name() {
        let emoji = ReactionEmoji::unicode("👍");
        assert_eq!(emoji.identity().unwrap(), EmojiIdentity::Unicode("👍"));
    }

    #[test]
    fn empty_emoji_is_invalid() {
        assert!(ReactionEmoji::default().identity().is_err());
    }

    #[test]
    fn custom_emoji_with_same_name_are_distinct() {
        let mut a = ReactionEmoji::custom(Id::new(1));
        a.name = Some("party".to_owned());
        let mut b = ReactionEmoji::custom(Id::new(2));
        b.name = Some("party".to_owned());

        assert!(!a.same_identity(&b));
        assert!(a.same_identity(&a.clone()));
    }

    #[test]
    fn custom_never_matches_unicode() {
        let mut custom = ReactionEmoji::custom(Id::new(1));
        custom.name = Some("👍".to_owned());
        let unicode = ReactionEmoji::unicode("👍");

        assert!(!custom.same_identity(&unicode));
        assert!(!unicode.same_identity(&custom));
    }

    #[test]
    fn unicode_serde_shape() {
        let emoji = ReactionEmoji::unicode("👍");
        let json = serde_json::to_string(&emoji).unwrap();
        assert_eq!(json, r#"{"name":"👍"}"#);

        let back: ReactionEmoji = serde_json::from_str(&json).unwrap();
        assert_eq!(back, emoji);
    }
}
