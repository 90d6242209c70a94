//! Interactions received from the gateway or interaction endpoint.

mod entitlement;

pub use self::entitlement::{Entitlement, EntitlementType};

use crate::application::command::{CommandOptionType, CommandType};
use crate::channel::message::{Component, Message};
use crate::channel::Channel;
use crate::guild::{PartialMember, Permissions};
use crate::id::{
    marker::{
        ApplicationMarker, ChannelMarker, GenericMarker, GuildMarker, InteractionMarker,
    },
    Id,
};
use crate::user::User;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;

/// A user's invocation of a command, component, or modal.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Interaction {
    pub id: Id<InteractionMarker>,
    pub application_id: Id<ApplicationMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    /// Set in guild contexts; the invoking user nests inside.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<PartialMember>,
    /// Set in DM contexts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Continuation token for responding.
    pub token: String,
    /// Permissions the app holds in the source channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_permissions: Option<Permissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_locale: Option<String>,
    /// For component interactions, the message the component is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entitlements: Vec<Entitlement>,
    /// Mapping from installation context (`"0"` guild, `"1"` user) to the
    /// ID of the authorizing owner.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub authorizing_integration_owners: HashMap<String, Id<GenericMarker>>,
}

impl Interaction {
    /// The user who triggered the interaction.
    ///
    /// In a guild context the user is nested inside `member`; in a DM it is
    /// at the top level. This helper checks both.
    pub fn author(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }
}

/// Kind of an [`Interaction`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutocomplete = 4,
    ModalSubmit = 5,
}

/// Payload of an interaction; which fields apply depends on the
/// interaction's type.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InteractionData {
    /// Invoked command ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<crate::id::marker::CommandMarker>>,
    /// Invoked command name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommandType>,
    /// Developer-defined ID of a component or modal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Component type, for component interactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<InteractionDataOption>,
    /// Selected values of a select menu.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Submitted components of a modal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    /// Target of a context-menu command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Id<GenericMarker>>,
}

/// A filled-in option of an invoked command.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InteractionDataOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    /// Submitted value; its JSON kind matches the option type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Nested options of a subcommand invocation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<InteractionDataOption>,
    /// Set on the option being typed during autocomplete.
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub focused: bool,
}

#[cfg(test)]
mod tests {
    use super::{Interaction, InteractionType};
    use serde_json::json;

    fn guild_interaction() -> Interaction {
        serde_json::from_value(json!({
            "id": "1",
            "application_id": "2",
            "type": 2,
            "token": "abc",
            "guild_id": "3",
            "member": {
                "user": {
                    "id": "789",
                    "username": "alice",
                    "discriminator": "0",
                    "avatar": null,
                },
                "roles": [],
            },
            "data": {
                "id": "4",
                "name": "roll",
                "type": 1,
                "options": [
                    {"name": "sides", "type": 4, "value": 20},
                ],
            },
            "entitlements": [],
            "authorizing_integration_owners": {"0": "3"},
        }))
        .unwrap()
    }

    #[test]
    fn command_interaction_decodes() {
        let interaction = guild_interaction();

        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        let data = interaction.data.as_ref().unwrap();
        assert_eq!(data.name.as_deref(), Some("roll"));
        assert_eq!(data.options[0].value, Some(json!(20)));
        assert_eq!(
            interaction.authorizing_integration_owners["0"].get(),
            3
        );
    }

    #[test]
    fn author_prefers_member_user() {
        let interaction = guild_interaction();
        assert_eq!(interaction.author().unwrap().name, "alice");
    }

    #[test]
    fn author_falls_back_to_top_level_user() {
        let interaction: Interaction = serde_json::from_value(json!({
            "id": "1",
            "application_id": "2",
            "type": 2,
            "token": "abc",
            "user": {
                "id": "790",
                "username": "bob",
                "discriminator": "0",
                "avatar": null,
            },
        }))
        .unwrap();

        assert_eq!(interaction.author().unwrap().name, "bob");
    }
}
