//! Webhooks.

use crate::id::{
    marker::{ApplicationMarker, ChannelMarker, GuildMarker, WebhookMarker},
    Id,
};
use crate::user::User;
use crate::util::ImageHash;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A webhook endpoint attached to a channel.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Webhook {
    pub id: Id<WebhookMarker>,
    #[serde(rename = "type")]
    pub kind: WebhookType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub channel_id: Option<Id<ChannelMarker>>,
    /// The user that created the webhook; absent when fetched by token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub name: Option<String>,
    pub avatar: Option<ImageHash>,
    /// Secret token, only present for incoming webhooks the requester owns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
}

/// Kind of a [`Webhook`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum WebhookType {
    Incoming = 1,
    ChannelFollower = 2,
    Application = 3,
}

#[cfg(test)]
mod tests {
    use super::{Webhook, WebhookType};
    use serde_json::json;

    #[test]
    fn incoming_webhook_decodes() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "1",
            "type": 1,
            "channel_id": "2",
            "name": "deploys",
            "avatar": null,
            "token": "secret",
        }))
        .unwrap();

        assert_eq!(webhook.kind, WebhookType::Incoming);
        assert_eq!(webhook.token.as_deref(), Some("secret"));
    }
}
