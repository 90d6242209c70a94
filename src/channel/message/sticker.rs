//! Stickers.

use crate::id::{
    marker::{GuildMarker, StickerMarker, StickerPackMarker, UserMarker},
    Id,
};
use crate::user::User;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A full sticker object.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sticker {
    pub id: Id<StickerMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<Id<StickerPackMarker>>,
    pub name: String,
    pub description: Option<String>,
    /// Comma-separated autocomplete tags.
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "type")]
    pub kind: StickerType,
    pub format_type: StickerFormatType,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<u64>,
}

/// The minimal sticker payload nested in messages.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StickerItem {
    pub id: Id<StickerMarker>,
    pub name: String,
    pub format_type: StickerFormatType,
}

/// Origin of a sticker.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum StickerType {
    /// Part of an official pack.
    Standard = 1,
    /// Uploaded to a guild.
    Guild = 2,
}

/// File format of a sticker.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum StickerFormatType {
    Png = 1,
    Apng = 2,
    Lottie = 3,
    Gif = 4,
}

#[cfg(test)]
mod tests {
    use super::{StickerFormatType, StickerItem};
    use serde_json::json;

    #[test]
    fn sticker_item_decodes() {
        let item: StickerItem = serde_json::from_value(json!({
            "id": "1",
            "name": "wave",
            "format_type": 3,
        }))
        .unwrap();

        assert_eq!(item.format_type, StickerFormatType::Lottie);
    }
}
