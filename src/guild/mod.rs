//! Guilds, members, roles, and permissions.

pub mod audit_log;
pub mod auto_moderation;
pub mod scheduled_event;

mod emoji;
mod member;
mod permissions;
mod role;

pub use self::{
    emoji::Emoji,
    member::{Member, MemberFlags, PartialMember},
    permissions::Permissions,
    role::{Role, RoleFlags, RoleTags},
};

use crate::channel::Channel;
use crate::id::{
    marker::{ApplicationMarker, ChannelMarker, GuildMarker, UserMarker},
    Id,
};
use crate::util::{flags::impl_flags_serde, ImageHash};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A guild (server).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Guild {
    pub id: Id<GuildMarker>,
    pub name: String,
    pub icon: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageHash>,
    pub owner_id: Id<UserMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Id<ChannelMarker>>,
    #[serde(default)]
    pub afk_timeout: u64,
    pub verification_level: VerificationLevel,
    pub default_message_notifications: DefaultMessageNotificationLevel,
    pub explicit_content_filter: ExplicitContentFilter,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    /// Enabled guild feature strings, e.g. `"COMMUNITY"`. The set grows
    /// server-side; unknown values pass through untouched.
    #[serde(default)]
    pub features: Vec<String>,
    pub mfa_level: MfaLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Id<ChannelMarker>>,
    #[serde(default, skip_serializing_if = "SystemChannelFlags::is_empty")]
    pub system_channel_flags: SystemChannelFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_members: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanity_url_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub premium_tier: PremiumTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_subscription_count: Option<u64>,
    #[serde(default)]
    pub preferred_locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_updates_channel_id: Option<Id<ChannelMarker>>,
    pub nsfw_level: NSFWLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<u64>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Guild {
    /// Unix-millisecond creation time derived from the guild snowflake.
    pub const fn created_at_ms(&self) -> i64 {
        self.id.timestamp_millis()
    }
}

/// A guild the gateway couldn't deliver, typically during an outage.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UnavailableGuild {
    pub id: Id<GuildMarker>,
    #[serde(default)]
    pub unavailable: bool,
}

bitflags! {
    /// Suppression toggles for the guild's system channel.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct SystemChannelFlags: u64 {
        const SUPPRESS_JOIN_NOTIFICATIONS = 1;
        const SUPPRESS_PREMIUM_SUBSCRIPTIONS = 1 << 1;
        const SUPPRESS_GUILD_REMINDER_NOTIFICATIONS = 1 << 2;
        const SUPPRESS_JOIN_NOTIFICATION_REPLIES = 1 << 3;
        const SUPPRESS_ROLE_SUBSCRIPTION_PURCHASE_NOTIFICATIONS = 1 << 4;
        const SUPPRESS_ROLE_SUBSCRIPTION_PURCHASE_NOTIFICATION_REPLIES = 1 << 5;
    }
}

impl_flags_serde!(SystemChannelFlags);

/// Verification requirement before members can send messages.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum VerificationLevel {
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    VeryHigh = 4,
}

/// Default notification setting for guild messages.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum DefaultMessageNotificationLevel {
    AllMessages = 0,
    OnlyMentions = 1,
}

/// Whose media is scanned for explicit content.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ExplicitContentFilter {
    Disabled = 0,
    MembersWithoutRoles = 1,
    AllMembers = 2,
}

/// Whether moderation actions require two-factor authentication.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum MfaLevel {
    None = 0,
    Elevated = 1,
}

/// Server boost tier.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum PremiumTier {
    None = 0,
    Tier1 = 1,
    Tier2 = 2,
    Tier3 = 3,
}

/// Guild-level age restriction.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum NSFWLevel {
    Default = 0,
    Explicit = 1,
    Safe = 2,
    AgeRestricted = 3,
}

#[cfg(test)]
mod tests {
    use super::{Guild, NSFWLevel, PremiumTier, SystemChannelFlags, VerificationLevel};
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": "175928847299117063",
            "name": "testing",
            "icon": null,
            "owner_id": "789",
            "verification_level": 2,
            "default_message_notifications": 1,
            "explicit_content_filter": 0,
            "mfa_level": 1,
            "system_channel_flags": 0b101,
            "premium_tier": 3,
            "nsfw_level": 0,
            "features": ["COMMUNITY", "SOME_FUTURE_FEATURE"],
            "roles": [],
            "emojis": [],
        })
    }

    #[test]
    fn guild_decodes() {
        let guild: Guild = serde_json::from_value(sample()).unwrap();

        assert_eq!(guild.name, "testing");
        assert_eq!(guild.verification_level, VerificationLevel::Medium);
        assert_eq!(guild.premium_tier, PremiumTier::Tier3);
        assert_eq!(guild.nsfw_level, NSFWLevel::Default);
        assert!(guild
            .system_channel_flags
            .contains(SystemChannelFlags::SUPPRESS_JOIN_NOTIFICATIONS));
        assert!(guild
            .system_channel_flags
            .contains(SystemChannelFlags::SUPPRESS_GUILD_REMINDER_NOTIFICATIONS));
        assert_eq!(guild.features.len(), 2);
    }

    #[test]
    fn created_at_from_snowflake() {
        let guild: Guild = serde_json::from_value(sample()).unwrap();
        assert_eq!(guild.created_at_ms(), 1_462_015_105_796);
    }

    #[test]
    fn unknown_nsfw_level_is_rejected() {
        let mut payload = sample();
        payload["nsfw_level"] = json!(9);
        assert!(serde_json::from_value::<Guild>(payload).is_err());
    }
}
