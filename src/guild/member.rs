//! Guild members.

use super::Permissions;
use crate::id::{marker::RoleMarker, Id};
use crate::user::User;
use crate::util::{flags::impl_flags_serde, ImageHash, Timestamp};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A user's membership within a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Member {
    /// The underlying user. Absent in `MESSAGE_CREATE` member payloads,
    /// where the author is carried separately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageHash>,
    #[serde(default)]
    pub roles: Vec<Id<RoleMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<Timestamp>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default, skip_serializing_if = "MemberFlags::is_empty")]
    pub flags: MemberFlags,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub pending: bool,
    /// Until when the member's communication is disabled (timeout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<Timestamp>,
}

/// Member payload without the guild-specific voice fields, as nested in
/// interactions and message mentions.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PartialMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Id<RoleMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    #[serde(default, skip_serializing_if = "MemberFlags::is_empty")]
    pub flags: MemberFlags,
}

bitflags! {
    /// Moderation-relevant properties of a [`Member`].
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct MemberFlags: u64 {
        const DID_REJOIN = 1;
        const COMPLETED_ONBOARDING = 1 << 1;
        const BYPASSES_VERIFICATION = 1 << 2;
        const STARTED_ONBOARDING = 1 << 3;
    }
}

impl_flags_serde!(MemberFlags);
