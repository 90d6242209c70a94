//! Message components: action rows, buttons, select menus, text inputs.
//!
//! A single flat struct covers every component kind; which fields apply
//! depends on [`kind`](Component::kind). Helper constructors for the common
//! shapes live in [`crate::builders`].

use crate::channel::message::ReactionEmoji;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// An interactive element attached to a message or modal.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Button or text-input style code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Submitted value of a text input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Children of an action row.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ReactionEmoji>,
}

/// Kind of a [`Component`].
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
}

/// One choice in a string select menu.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ReactionEmoji>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub default: bool,
}

#[cfg(test)]
mod tests {
    use super::{Component, ComponentType};
    use serde_json::json;

    #[test]
    fn action_row_with_button_decodes() {
        let row: Component = serde_json::from_value(json!({
            "type": 1,
            "components": [
                {"type": 2, "style": 1, "label": "Click", "custom_id": "click-1"},
            ],
        }))
        .unwrap();

        assert_eq!(row.kind, ComponentType::ActionRow);
        assert_eq!(row.components.len(), 1);
        assert_eq!(row.components[0].kind, ComponentType::Button);
        assert_eq!(row.components[0].custom_id.as_deref(), Some("click-1"));
    }

    #[test]
    fn unknown_component_type_is_rejected() {
        assert!(serde_json::from_value::<Component>(json!({"type": 99})).is_err());
    }
}
