//! Application command registration types.

mod choice;

pub use self::choice::{CommandOptionChoice, CommandOptionChoiceValue};

use crate::guild::Permissions;
use crate::id::{
    marker::{ApplicationMarker, CommandMarker, CommandVersionMarker, GuildMarker},
    Id,
};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;

/// An application command: slash command or context-menu entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Command {
    /// Assigned by the platform on registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<CommandMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<String, String>>,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<HashMap<String, String>>,
    #[serde(rename = "type", default)]
    pub kind: CommandType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<Permissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Id<CommandVersionMarker>>,
}

/// Kind of a [`Command`].
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandType {
    /// Slash command.
    #[default]
    ChatInput = 1,
    /// User context menu.
    User = 2,
    /// Message context menu.
    Message = 3,
    PrimaryEntryPoint = 4,
}

/// A parameter of a command, or a subcommand (group).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<String, String>>,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<HashMap<String, String>>,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandOptionChoice>,
    /// Nested options of a subcommand or subcommand group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
}

/// Value type of a [`CommandOption`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandOptionType, CommandType};
    use serde_json::json;

    #[test]
    fn command_decodes_with_default_type() {
        let command: Command = serde_json::from_value(json!({
            "name": "roll",
            "description": "Roll some dice",
            "options": [
                {
                    "name": "sides",
                    "description": "Number of sides",
                    "type": 4,
                    "required": true,
                },
            ],
        }))
        .unwrap();

        assert_eq!(command.kind, CommandType::ChatInput);
        assert_eq!(command.options[0].kind, CommandOptionType::Integer);
        assert!(command.options[0].required);
    }

    #[test]
    fn registration_body_omits_unset_fields() {
        let command: Command = serde_json::from_value(json!({
            "name": "ping",
            "description": "Check latency",
        }))
        .unwrap();

        let json = serde_json::to_value(&command).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], 1);
    }
}
