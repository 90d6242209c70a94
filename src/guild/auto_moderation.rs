//! Auto-moderation rules.

use crate::id::{
    marker::{AutoModerationRuleMarker, ChannelMarker, GuildMarker, RoleMarker, UserMarker},
    Id,
};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A rule that scans content and fires actions on a match.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AutoModerationRule {
    pub id: Id<AutoModerationRuleMarker>,
    pub guild_id: Id<GuildMarker>,
    pub name: String,
    pub creator_id: Id<UserMarker>,
    pub event_type: AutoModerationEventType,
    pub trigger_type: AutoModerationTriggerType,
    #[serde(default)]
    pub trigger_metadata: AutoModerationTriggerMetadata,
    pub actions: Vec<AutoModerationAction>,
    pub enabled: bool,
    #[serde(default)]
    pub exempt_roles: Vec<Id<RoleMarker>>,
    #[serde(default)]
    pub exempt_channels: Vec<Id<ChannelMarker>>,
}

/// Which event stream the rule scans.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum AutoModerationEventType {
    MessageSend = 1,
    MemberUpdate = 2,
}

/// What kind of content triggers the rule.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum AutoModerationTriggerType {
    Keyword = 1,
    Spam = 3,
    KeywordPreset = 4,
    MentionSpam = 5,
    MemberProfile = 6,
}

/// Trigger configuration; which fields apply depends on the trigger type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AutoModerationTriggerMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyword_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regex_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<AutoModerationKeywordPresetType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_total_limit: Option<u8>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub mention_raid_protection_enabled: bool,
}

/// Built-in keyword lists.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum AutoModerationKeywordPresetType {
    Profanity = 1,
    SexualContent = 2,
    Slurs = 3,
}

/// An action taken when a rule matches.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AutoModerationAction {
    #[serde(rename = "type")]
    pub kind: AutoModerationActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AutoModerationActionMetadata>,
}

/// Kind of [`AutoModerationAction`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum AutoModerationActionType {
    BlockMessage = 1,
    SendAlertMessage = 2,
    Timeout = 3,
    BlockMemberInteraction = 4,
}

/// Additional configuration for an action.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AutoModerationActionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    /// Timeout duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{AutoModerationActionType, AutoModerationRule, AutoModerationTriggerType};
    use serde_json::json;

    #[test]
    fn rule_decodes() {
        let rule: AutoModerationRule = serde_json::from_value(json!({
            "id": "1",
            "guild_id": "2",
            "name": "no spoilers",
            "creator_id": "789",
            "event_type": 1,
            "trigger_type": 1,
            "trigger_metadata": {
                "keyword_filter": ["spoiler"],
            },
            "actions": [
                {"type": 1},
                {"type": 3, "metadata": {"duration_seconds": 60}},
            ],
            "enabled": true,
            "exempt_roles": [],
            "exempt_channels": ["3"],
        }))
        .unwrap();

        assert_eq!(rule.trigger_type, AutoModerationTriggerType::Keyword);
        assert_eq!(rule.actions[1].kind, AutoModerationActionType::Timeout);
        assert_eq!(
            rule.actions[1].metadata.as_ref().unwrap().duration_seconds,
            Some(60)
        );
    }
}
