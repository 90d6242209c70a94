//! Guild scheduled events.

use crate::id::{
    marker::{
        ChannelMarker, GuildMarker, ScheduledEventEntityMarker, ScheduledEventMarker, UserMarker,
    },
    Id,
};
use crate::user::User;
use crate::util::{ImageHash, Timestamp};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A scheduled event within a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuildScheduledEvent {
    pub id: Id<ScheduledEventMarker>,
    pub guild_id: Id<GuildMarker>,
    /// Set for stage and voice events; `None` for external ones.
    pub channel_id: Option<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Id<UserMarker>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scheduled_start_time: Timestamp,
    pub scheduled_end_time: Option<Timestamp>,
    pub privacy_level: ScheduledEventPrivacyLevel,
    pub status: ScheduledEventStatus,
    pub entity_type: ScheduledEventEntityType,
    pub entity_id: Option<Id<ScheduledEventEntityMarker>>,
    pub entity_metadata: Option<ScheduledEventEntityMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageHash>,
    /// Set when the event repeats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<ScheduledEventRecurrenceRule>,
}

/// Visibility of a scheduled event.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ScheduledEventPrivacyLevel {
    GuildOnly = 2,
}

/// Lifecycle state of a scheduled event.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ScheduledEventStatus {
    Scheduled = 1,
    Active = 2,
    Completed = 3,
    Cancelled = 4,
}

/// Where a scheduled event takes place.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ScheduledEventEntityType {
    StageInstance = 1,
    Voice = 2,
    External = 3,
}

/// Location metadata for external events.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScheduledEventEntityMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Repetition schedule of a recurring event.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScheduledEventRecurrenceRule {
    pub start: Timestamp,
    pub end: Option<Timestamp>,
    pub frequency: RecurrenceFrequency,
    /// Spacing between events; `2` with weekly frequency means biweekly.
    pub interval: u16,
    pub by_weekday: Option<Vec<RecurrenceWeekday>>,
    pub by_month: Option<Vec<u8>>,
    pub by_month_day: Option<Vec<u8>>,
    pub count: Option<u32>,
}

/// How often a recurring event repeats.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum RecurrenceFrequency {
    Yearly = 0,
    Monthly = 1,
    Weekly = 2,
    Daily = 3,
}

/// Weekday within a recurrence rule.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum RecurrenceWeekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

#[cfg(test)]
mod tests {
    use super::{
        GuildScheduledEvent, RecurrenceFrequency, ScheduledEventEntityType, ScheduledEventStatus,
    };
    use serde_json::json;

    #[test]
    fn recurring_external_event_decodes() {
        let event: GuildScheduledEvent = serde_json::from_value(json!({
            "id": "1",
            "guild_id": "2",
            "channel_id": null,
            "name": "office hours",
            "scheduled_start_time": "2021-08-10T11:16:37+00:00",
            "scheduled_end_time": null,
            "privacy_level": 2,
            "status": 1,
            "entity_type": 3,
            "entity_id": null,
            "entity_metadata": {"location": "somewhere"},
            "recurrence_rule": {
                "start": "2021-08-10T11:16:37+00:00",
                "end": null,
                "frequency": 2,
                "interval": 2,
                "by_weekday": [1],
                "by_month": null,
                "by_month_day": null,
                "count": null,
            },
        }))
        .unwrap();

        assert_eq!(event.status, ScheduledEventStatus::Scheduled);
        assert_eq!(event.entity_type, ScheduledEventEntityType::External);
        let rule = event.recurrence_rule.unwrap();
        assert_eq!(rule.frequency, RecurrenceFrequency::Weekly);
        assert_eq!(rule.interval, 2);
    }
}
