//! Guild roles.

use super::Permissions;
use crate::id::{
    marker::{IntegrationMarker, RoleMarker, RoleSubscriptionSkuMarker, UserMarker},
    Id,
};
use crate::util::{flags::impl_flags_serde, ImageHash};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A guild role.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Role {
    pub id: Id<RoleMarker>,
    pub name: String,
    /// RGB color; `0` means no color.
    pub color: u32,
    pub hoist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_emoji: Option<String>,
    pub position: i64,
    pub permissions: Permissions,
    pub managed: bool,
    pub mentionable: bool,
    #[serde(default, skip_serializing_if = "RoleFlags::is_empty")]
    pub flags: RoleFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<RoleTags>,
}

bitflags! {
    /// Properties of a [`Role`].
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct RoleFlags: u64 {
        /// The role can be selected in an onboarding prompt.
        const IN_PROMPT = 1;
    }
}

impl_flags_serde!(RoleFlags);

/// How a managed role relates to bots, integrations, and subscriptions.
///
/// The `premium_subscriber` and `available_for_purchase` wire fields are
/// null-valued when present; presence is the signal, so they decode to
/// booleans here.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoleTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Id<UserMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<Id<IntegrationMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_listing_id: Option<Id<RoleSubscriptionSkuMarker>>,
    #[serde(
        default,
        with = "null_presence",
        skip_serializing_if = "crate::util::is_false"
    )]
    pub premium_subscriber: bool,
    #[serde(
        default,
        with = "null_presence",
        skip_serializing_if = "crate::util::is_false"
    )]
    pub available_for_purchase: bool,
}

/// Fields whose *presence* (with a `null` value) means `true`.
mod null_presence {
    use serde::{de::Deserializer, ser::Serializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        <Option<()> as serde::Deserialize>::deserialize(deserializer)?;

        Ok(true)
    }

    pub fn serialize<S: Serializer>(_: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, RoleTags};
    use serde_json::json;

    #[test]
    fn role_decodes() {
        let role: Role = serde_json::from_value(json!({
            "id": "2",
            "name": "moderators",
            "color": 0x00FF_0000,
            "hoist": true,
            "position": 3,
            "permissions": "8",
            "managed": false,
            "mentionable": true,
        }))
        .unwrap();

        assert_eq!(role.name, "moderators");
        assert!(role
            .permissions
            .contains(super::Permissions::ADMINISTRATOR));
        assert!(role.tags.is_none());
    }

    #[test]
    fn premium_subscriber_tag_is_presence_keyed() {
        let tags: RoleTags = serde_json::from_value(json!({
            "premium_subscriber": null,
        }))
        .unwrap();
        assert!(tags.premium_subscriber);
        assert!(!tags.available_for_purchase);

        let tags: RoleTags = serde_json::from_value(json!({})).unwrap();
        assert!(!tags.premium_subscriber);
    }
}
