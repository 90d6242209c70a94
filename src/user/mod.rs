//! User records and user flags.

mod flags;

pub use self::flags::UserFlags;

use crate::id::{
    marker::{AvatarDecorationDataSkuMarker, UserMarker},
    Id,
};
use crate::util::ImageHash;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A Discord user account.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: Id<UserMarker>,
    /// Username, unique per discriminator under the legacy system and
    /// globally unique under the new one.
    #[serde(rename = "username")]
    pub name: String,
    /// Legacy four-digit tag; `0` for accounts migrated to unique usernames.
    #[serde(with = "discriminator")]
    pub discriminator: u16,
    /// Display name shown in place of the username, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    pub avatar: Option<ImageHash>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub bot: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    #[serde(default, skip_serializing_if = "UserFlags::is_empty")]
    pub flags: UserFlags,
    #[serde(default, skip_serializing_if = "UserFlags::is_empty")]
    pub public_flags: UserFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_data: Option<AvatarDecorationData>,
}

impl User {
    /// Returns the CDN URL for the user's avatar, or `None` if no avatar is
    /// set.
    pub fn avatar_url(&self) -> Option<String> {
        let hash = self.avatar.as_ref()?;

        Some(format!(
            "https://cdn.discordapp.com/avatars/{}/{}.png",
            self.id, hash
        ))
    }

    /// `Username#Discriminator`, or just `Username` for accounts on the new
    /// username system.
    pub fn tag(&self) -> String {
        if self.discriminator == 0 {
            self.name.clone()
        } else {
            format!("{}#{:04}", self.name, self.discriminator)
        }
    }
}

/// Nitro subscription tier of a user.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum PremiumType {
    None = 0,
    NitroClassic = 1,
    Nitro = 2,
    NitroBasic = 3,
}

/// Decoration overlaid on a user's avatar.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AvatarDecorationData {
    /// Asset hash of the decoration.
    pub asset: ImageHash,
    /// SKU the decoration was purchased under.
    pub sku_id: Id<AvatarDecorationDataSkuMarker>,
}

/// The wire form of a discriminator is a string (`"0001"`); old payloads
/// occasionally carry a bare integer.
mod discriminator {
    use serde::{
        de::{Deserializer, Error as DeError, Visitor},
        ser::Serializer,
    };
    use std::fmt::{Formatter, Result as FmtResult};

    struct DiscriminatorVisitor;

    impl Visitor<'_> for DiscriminatorVisitor {
        type Value = u16;

        fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
            f.write_str("a discriminator as a string or integer")
        }

        fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
            u16::try_from(value)
                .map_err(|_| DeError::custom(format_args!("discriminator out of range: {value}")))
        }

        fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
            value
                .parse()
                .map_err(|_| DeError::custom(format_args!("invalid discriminator: {value:?}")))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        deserializer.deserialize_any(DiscriminatorVisitor)
    }

    pub fn serialize<S: Serializer>(value: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{value:04}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{PremiumType, User, UserFlags};
    use serde_json::json;

    fn sample() -> User {
        serde_json::from_value(json!({
            "id": "789",
            "username": "alice",
            "discriminator": "0001",
            "avatar": null,
        }))
        .unwrap()
    }

    #[test]
    fn minimal_user_decodes_with_defaults() {
        let user = sample();

        assert_eq!(user.id.get(), 789);
        assert_eq!(user.name, "alice");
        assert_eq!(user.discriminator, 1);
        assert!(!user.bot);
        assert!(user.flags.is_empty());
        assert!(user.premium_type.is_none());
    }

    #[test]
    fn tag_with_and_without_discriminator() {
        let mut user = sample();
        assert_eq!(user.tag(), "alice#0001");

        user.discriminator = 0;
        assert_eq!(user.tag(), "alice");
    }

    #[test]
    fn avatar_url() {
        let user: User = serde_json::from_value(json!({
            "id": "789",
            "username": "alice",
            "discriminator": "0",
            "avatar": "1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d",
        }))
        .unwrap();

        let url = user.avatar_url().unwrap();
        assert!(url.starts_with("https://cdn.discordapp.com/avatars/789/"));

        assert!(sample().avatar_url().is_none());
    }

    #[test]
    fn full_user_decodes() {
        let user: User = serde_json::from_value(json!({
            "id": "175928847299117063",
            "username": "bob",
            "discriminator": "0",
            "global_name": "Bob",
            "avatar": null,
            "bot": true,
            "flags": 1 << 16,
            "premium_type": 2,
            "avatar_decoration_data": {
                "asset": "a_1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d",
                "sku_id": "1088481234",
            },
        }))
        .unwrap();

        assert!(user.bot);
        assert!(user.flags.contains(UserFlags::VERIFIED_BOT));
        assert_eq!(user.premium_type, Some(PremiumType::Nitro));
        let decoration = user.avatar_decoration_data.unwrap();
        assert!(decoration.asset.is_animated());
        assert_eq!(decoration.sku_id.get(), 1_088_481_234);
    }

    #[test]
    fn discriminator_reencodes_padded() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["discriminator"], "0001");
        assert_eq!(json["username"], "alice");
    }
}
