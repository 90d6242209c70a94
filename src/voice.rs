//! Voice connection state.

use crate::guild::Member;
use crate::id::{
    marker::{ChannelMarker, GuildMarker, UserMarker},
    Id,
};
use crate::util::Timestamp;
use serde::{Deserialize, Serialize};

/// A user's voice connection state within a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VoiceState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    /// `None` when the user disconnected.
    pub channel_id: Option<Id<ChannelMarker>>,
    pub user_id: Id<UserMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    pub session_id: String,
    /// Deafened by a moderator.
    pub deaf: bool,
    /// Muted by a moderator.
    pub mute: bool,
    pub self_deaf: bool,
    pub self_mute: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub self_stream: bool,
    pub self_video: bool,
    /// Moved to the AFK channel or denied speaking.
    pub suppress: bool,
    pub request_to_speak_timestamp: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::VoiceState;
    use serde_json::json;

    #[test]
    fn voice_state_decodes() {
        let state: VoiceState = serde_json::from_value(json!({
            "guild_id": "1",
            "channel_id": "2",
            "user_id": "789",
            "session_id": "deadbeef",
            "deaf": false,
            "mute": false,
            "self_deaf": false,
            "self_mute": true,
            "self_video": false,
            "suppress": false,
            "request_to_speak_timestamp": null,
        }))
        .unwrap();

        assert!(state.self_mute);
        assert!(!state.self_stream);
        assert!(state.request_to_speak_timestamp.is_none());
    }

    #[test]
    fn disconnect_has_null_channel() {
        let state: VoiceState = serde_json::from_value(json!({
            "channel_id": null,
            "user_id": "789",
            "session_id": "deadbeef",
            "deaf": false,
            "mute": false,
            "self_deaf": false,
            "self_mute": false,
            "self_video": false,
            "suppress": false,
            "request_to_speak_timestamp": null,
        }))
        .unwrap();

        assert!(state.channel_id.is_none());
    }
}
