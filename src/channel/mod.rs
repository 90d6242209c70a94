//! Channels, messages, typing state, and webhooks.

pub mod message;
pub mod typing;
pub mod webhook;

mod attachment;

pub use self::{
    attachment::{Attachment, AttachmentFlags},
    typing::{TypingIndicator, TYPING_TTL},
};

use crate::guild::Permissions;
use crate::id::{
    marker::{ApplicationMarker, ChannelMarker, GenericMarker, GuildMarker, TagMarker, UserMarker},
    Id,
};
use crate::user::User;
use crate::util::{flags::impl_flags_serde, Timestamp};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A guild channel, DM, or thread.
///
/// One struct covers every channel kind; which optional fields are set
/// depends on [`kind`](Self::kind). Live message and typing state are not
/// part of the record — see [`TypingIndicator`] for the latter.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Channel {
    pub id: Id<ChannelMarker>,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub nsfw: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Id<GenericMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Slowmode interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    /// DM and group-DM participants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Id<UserMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<VideoQualityMode>,
    /// Approximate message count of a thread; stops counting at 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_metadata: Option<ThreadMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<AutoArchiveDuration>,
    #[serde(default, skip_serializing_if = "ChannelFlags::is_empty")]
    pub flags: ChannelFlags,
    /// Tags that can be applied to threads in a forum channel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_tags: Vec<ForumTag>,
    /// Tags applied to a forum thread.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_tags: Vec<Id<TagMarker>>,
}

impl Channel {
    /// Whether the channel is a thread.
    pub const fn is_thread(&self) -> bool {
        matches!(
            self.kind,
            ChannelType::AnnouncementThread | ChannelType::PublicThread | ChannelType::PrivateThread
        )
    }
}

/// Kind of a [`Channel`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    Dm = 1,
    GuildVoice = 2,
    GroupDm = 3,
    GuildCategory = 4,
    GuildAnnouncement = 5,
    AnnouncementThread = 10,
    PublicThread = 11,
    PrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

bitflags! {
    /// Properties of a [`Channel`].
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ChannelFlags: u64 {
        /// Thread is pinned in its forum channel.
        const PINNED = 1 << 1;
        /// Forum threads must carry a tag.
        const REQUIRE_TAG = 1 << 4;
        const HIDE_MEDIA_DOWNLOAD_OPTIONS = 1 << 15;
    }
}

impl_flags_serde!(ChannelFlags);

/// Permission overrides for one role or member within a channel.
///
/// The masks keep unknown permission bits verbatim so that round-tripping
/// an overwrite through client code never strips grants the crate doesn't
/// name yet.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PermissionOverwrite {
    /// Role or user ID, per `kind`.
    pub id: Id<GenericMarker>,
    #[serde(rename = "type")]
    pub kind: PermissionOverwriteType,
    #[serde(with = "crate::util::flags::preserve")]
    pub allow: Permissions,
    #[serde(with = "crate::util::flags::preserve")]
    pub deny: Permissions,
}

/// Whether an overwrite targets a role or a member.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum PermissionOverwriteType {
    Role = 0,
    Member = 1,
}

/// Thread-specific channel state.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ThreadMetadata {
    pub archived: bool,
    pub auto_archive_duration: AutoArchiveDuration,
    pub archive_timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub invitable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<Timestamp>,
}

/// Minutes of inactivity before a thread auto-archives.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u16)]
pub enum AutoArchiveDuration {
    Hour = 60,
    Day = 1440,
    ThreeDays = 4320,
    Week = 10080,
}

/// Video quality of a voice channel.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum VideoQualityMode {
    Auto = 1,
    Full = 2,
}

/// A tag assignable to forum threads.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ForumTag {
    pub id: Id<TagMarker>,
    pub name: String,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub moderated: bool,
    pub emoji_id: Option<Id<crate::id::marker::EmojiMarker>>,
    pub emoji_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{AutoArchiveDuration, Channel, ChannelFlags, ChannelType, PermissionOverwriteType};
    use serde_json::json;

    #[test]
    fn text_channel_decodes() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "41771983423143937",
            "type": 0,
            "guild_id": "41771983423143936",
            "name": "general",
            "topic": "talk",
            "position": 0,
            "rate_limit_per_user": 5,
            "nsfw": false,
            "permission_overwrites": [
                {"id": "1", "type": 0, "allow": "1024", "deny": "0"},
            ],
        }))
        .unwrap();

        assert_eq!(channel.kind, ChannelType::GuildText);
        assert_eq!(channel.rate_limit_per_user, Some(5));
        assert_eq!(
            channel.permission_overwrites[0].kind,
            PermissionOverwriteType::Role
        );
        assert!(!channel.is_thread());
    }

    #[test]
    fn forum_thread_decodes() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "1",
            "type": 11,
            "flags": 1 << 1,
            "applied_tags": ["7"],
            "thread_metadata": {
                "archived": false,
                "auto_archive_duration": 1440,
                "archive_timestamp": "2021-08-10T11:16:37+00:00",
            },
        }))
        .unwrap();

        assert!(channel.is_thread());
        assert!(channel.flags.contains(ChannelFlags::PINNED));
        assert_eq!(channel.applied_tags.len(), 1);
        assert_eq!(
            channel.thread_metadata.unwrap().auto_archive_duration,
            AutoArchiveDuration::Day
        );
    }

    #[test]
    fn unknown_channel_type_is_rejected() {
        assert!(serde_json::from_value::<Channel>(json!({"id": "1", "type": 99})).is_err());
    }
}
