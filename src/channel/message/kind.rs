//! Message type codes.

use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Type of a [`Message`].
///
/// The wire form is the bare integer. Values absent from the table below
/// (13, 30, 33–35, 40–43) are reserved and fail decode with
/// [`UnknownMessageTypeError`] rather than being carried opaquely.
///
/// [`Message`]: super::Message
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum MessageType {
    Default = 0,
    RecipientAdd = 1,
    RecipientRemove = 2,
    Call = 3,
    ChannelNameChange = 4,
    ChannelIconChange = 5,
    ChannelPinnedMessage = 6,
    UserJoin = 7,
    GuildBoost = 8,
    GuildBoostTier1 = 9,
    GuildBoostTier2 = 10,
    GuildBoostTier3 = 11,
    ChannelFollowAdd = 12,
    GuildDiscoveryDisqualified = 14,
    GuildDiscoveryRequalified = 15,
    GuildDiscoveryGracePeriodInitialWarning = 16,
    GuildDiscoveryGracePeriodFinalWarning = 17,
    ThreadCreated = 18,
    Reply = 19,
    ChatInputCommand = 20,
    ThreadStarterMessage = 21,
    GuildInviteReminder = 22,
    ContextMenuCommand = 23,
    AutoModerationAction = 24,
    RoleSubscriptionPurchase = 25,
    InteractionPremiumUpsell = 26,
    StageStart = 27,
    StageEnd = 28,
    StageSpeaker = 29,
    StageTopic = 31,
    GuildApplicationPremiumSubscription = 32,
    GuildIncidentAlertModeEnabled = 36,
    GuildIncidentAlertModeDisabled = 37,
    GuildIncidentReportRaid = 38,
    GuildIncidentReportFalseAlarm = 39,
    PurchaseNotification = 44,
}

impl MessageType {
    /// Whether a message of this type can be deleted.
    pub const fn deletable(self) -> bool {
        !matches!(
            self,
            Self::RecipientAdd
                | Self::RecipientRemove
                | Self::Call
                | Self::ChannelNameChange
                | Self::ChannelIconChange
                | Self::ThreadStarterMessage
        )
    }

    /// The type's documented name, e.g. `"CHANNEL_PINNED_MESSAGE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::RecipientAdd => "RECIPIENT_ADD",
            Self::RecipientRemove => "RECIPIENT_REMOVE",
            Self::Call => "CALL",
            Self::ChannelNameChange => "CHANNEL_NAME_CHANGE",
            Self::ChannelIconChange => "CHANNEL_ICON_CHANGE",
            Self::ChannelPinnedMessage => "CHANNEL_PINNED_MESSAGE",
            Self::UserJoin => "USER_JOIN",
            Self::GuildBoost => "GUILD_BOOST",
            Self::GuildBoostTier1 => "GUILD_BOOST_TIER_1",
            Self::GuildBoostTier2 => "GUILD_BOOST_TIER_2",
            Self::GuildBoostTier3 => "GUILD_BOOST_TIER_3",
            Self::ChannelFollowAdd => "CHANNEL_FOLLOW_ADD",
            Self::GuildDiscoveryDisqualified => "GUILD_DISCOVERY_DISQUALIFIED",
            Self::GuildDiscoveryRequalified => "GUILD_DISCOVERY_REQUALIFIED",
            Self::GuildDiscoveryGracePeriodInitialWarning => {
                "GUILD_DISCOVERY_GRACE_PERIOD_INITIAL_WARNING"
            }
            Self::GuildDiscoveryGracePeriodFinalWarning => {
                "GUILD_DISCOVERY_GRACE_PERIOD_FINAL_WARNING"
            }
            Self::ThreadCreated => "THREAD_CREATED",
            Self::Reply => "REPLY",
            Self::ChatInputCommand => "CHAT_INPUT_COMMAND",
            Self::ThreadStarterMessage => "THREAD_STARTER_MESSAGE",
            Self::GuildInviteReminder => "GUILD_INVITE_REMINDER",
            Self::ContextMenuCommand => "CONTEXT_MENU_COMMAND",
            Self::AutoModerationAction => "AUTO_MODERATION_ACTION",
            Self::RoleSubscriptionPurchase => "ROLE_SUBSCRIPTION_PURCHASE",
            Self::InteractionPremiumUpsell => "INTERACTION_PREMIUM_UPSELL",
            Self::StageStart => "STAGE_START",
            Self::StageEnd => "STAGE_END",
            Self::StageSpeaker => "STAGE_SPEAKER",
            Self::StageTopic => "STAGE_TOPIC",
            Self::GuildApplicationPremiumSubscription => {
                "GUILD_APPLICATION_PREMIUM_SUBSCRIPTION"
            }
            Self::GuildIncidentAlertModeEnabled => "GUILD_INCIDENT_ALERT_MODE_ENABLED",
            Self::GuildIncidentAlertModeDisabled => "GUILD_INCIDENT_ALERT_MODE_DISABLED",
            Self::GuildIncidentReportRaid => "GUILD_INCIDENT_REPORT_RAID",
            Self::GuildIncidentReportFalseAlarm => "GUILD_INCIDENT_REPORT_FALSE_ALARM",
            Self::PurchaseNotification => "PURCHASE_NOTIFICATION",
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = UnknownMessageTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Default,
            1 => Self::RecipientAdd,
            2 => Self::RecipientRemove,
            3 => Self::Call,
            4 => Self::ChannelNameChange,
            5 => Self::ChannelIconChange,
            6 => Self::ChannelPinnedMessage,
            7 => Self::UserJoin,
            8 => Self::GuildBoost,
            9 => Self::GuildBoostTier1,
            10 => Self::GuildBoostTier2,
            11 => Self::GuildBoostTier3,
            12 => Self::ChannelFollowAdd,
            14 => Self::GuildDiscoveryDisqualified,
            15 => Self::GuildDiscoveryRequalified,
            16 => Self::GuildDiscoveryGracePeriodInitialWarning,
            17 => Self::GuildDiscoveryGracePeriodFinalWarning,
            18 => Self::ThreadCreated,
            19 => Self::Reply,
            20 => Self::ChatInputCommand,
            21 => Self::ThreadStarterMessage,
            22 => Self::GuildInviteReminder,
            23 => Self::ContextMenuCommand,
            24 => Self::AutoModerationAction,
            25 => Self::RoleSubscriptionPurchase,
            26 => Self::InteractionPremiumUpsell,
            27 => Self::StageStart,
            28 => Self::StageEnd,
            29 => Self::StageSpeaker,
            31 => Self::StageTopic,
            32 => Self::GuildApplicationPremiumSubscription,
            36 => Self::GuildIncidentAlertModeEnabled,
            37 => Self::GuildIncidentAlertModeDisabled,
            38 => Self::GuildIncidentReportRaid,
            39 => Self::GuildIncidentReportFalseAlarm,
            44 => Self::PurchaseNotification,
            unknown => return Err(UnknownMessageTypeError { value: unknown }),
        })
    }
}

impl From<MessageType> for u8 {
    fn from(kind: MessageType) -> Self {
        kind as u8
    }
}

/// A message type code outside the documented table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownMessageTypeError {
    value: u8,
}

impl UnknownMessageTypeError {
    /// The rejected code.
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl Display for UnknownMessageTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("unknown message type: ")?;
        Display::fmt(&self.value, f)
    }
}

impl Error for UnknownMessageTypeError {}

#[cfg(test)]
mod tests {
    use super::MessageType;

    #[test]
    fn table_round_trips_through_json() {
        let known: [(u8, &str, bool); 9] = [
            (0, "DEFAULT", true),
            (1, "RECIPIENT_ADD", false),
            (6, "CHANNEL_PINNED_MESSAGE", true),
            (19, "REPLY", true),
            (21, "THREAD_STARTER_MESSAGE", false),
            (24, "AUTO_MODERATION_ACTION", true),
            (31, "STAGE_TOPIC", true),
            (39, "GUILD_INCIDENT_REPORT_FALSE_ALARM", true),
            (44, "PURCHASE_NOTIFICATION", true),
        ];

        for (value, name, deletable) in known {
            let kind: MessageType = serde_json::from_str(&value.to_string()).unwrap();
            assert_eq!(kind.name(), name);
            assert_eq!(kind.deletable(), deletable, "deletable for {name}");
            assert_eq!(serde_json::to_string(&kind).unwrap(), value.to_string());
        }
    }

    #[test]
    fn reserved_values_fail_decode() {
        for reserved in [13u8, 30, 33, 34, 35, 40, 41, 42, 43, 45, 200] {
            let result = serde_json::from_str::<MessageType>(&reserved.to_string());
            let err = result.unwrap_err().to_string();
            assert!(
                err.contains("unknown message type"),
                "value {reserved}: {err}"
            );
        }
    }

    #[test]
    fn non_deletable_set_is_exact() {
        let non_deletable = [
            MessageType::RecipientAdd,
            MessageType::RecipientRemove,
            MessageType::Call,
            MessageType::ChannelNameChange,
            MessageType::ChannelIconChange,
            MessageType::ThreadStarterMessage,
        ];

        for kind in non_deletable {
            assert!(!kind.deletable(), "{} should not be deletable", kind.name());
        }
        assert!(MessageType::Default.deletable());
        assert!(MessageType::UserJoin.deletable());
    }
}
