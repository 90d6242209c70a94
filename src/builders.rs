//! Builder patterns for ergonomic type construction.
//!
//! Filling in the full [`Command`] or [`Embed`] structs with `None`
//! everywhere gets old fast; these builders cover the common construction
//! paths. The component helper functions build the usual [`Component`]
//! shapes on top of struct-update syntax.

use crate::application::command::{Command, CommandOption, CommandOptionType, CommandType};
use crate::channel::message::component::{Component, ComponentType, SelectOption};
use crate::channel::message::embed::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail,
};
use crate::guild::Permissions;
use crate::util::Timestamp;

// ===========================================================================
// Command builder
// ===========================================================================

/// Ergonomic builder for [`Command`].
///
/// # Examples
///
/// ```
/// use discord_model::builders::CommandBuilder;
///
/// let command = CommandBuilder::chat_input("ping", "Check bot latency").build();
/// assert_eq!(command.name, "ping");
/// ```
#[derive(Debug)]
pub struct CommandBuilder {
    inner: Command,
}

impl CommandBuilder {
    fn with_kind(kind: CommandType, name: String, description: String) -> Self {
        Self {
            inner: Command {
                id: None,
                application_id: None,
                guild_id: None,
                name,
                name_localizations: None,
                description,
                description_localizations: None,
                kind,
                options: Vec::new(),
                default_member_permissions: None,
                nsfw: None,
                version: None,
            },
        }
    }

    /// Start building a CHAT_INPUT (slash) command.
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(CommandType::ChatInput, name.into(), description.into())
    }

    /// Start building a USER context-menu command.
    pub fn user(name: impl Into<String>) -> Self {
        Self::with_kind(CommandType::User, name.into(), String::new())
    }

    /// Start building a MESSAGE context-menu command.
    pub fn message(name: impl Into<String>) -> Self {
        Self::with_kind(CommandType::Message, name.into(), String::new())
    }

    /// Append an option.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.inner.options.push(option);
        self
    }

    /// Restrict the command to members holding the given permissions.
    pub fn default_member_permissions(mut self, permissions: Permissions) -> Self {
        self.inner.default_member_permissions = Some(permissions);
        self
    }

    /// Mark the command as age-restricted.
    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.inner.nsfw = Some(nsfw);
        self
    }

    /// Finish building.
    pub fn build(self) -> Command {
        self.inner
    }
}

/// Build a basic [`CommandOption`] of the given type.
pub fn command_option(
    kind: CommandOptionType,
    name: impl Into<String>,
    description: impl Into<String>,
    required: bool,
) -> CommandOption {
    CommandOption {
        name: name.into(),
        name_localizations: None,
        description: description.into(),
        description_localizations: None,
        kind,
        required,
        choices: Vec::new(),
        options: Vec::new(),
        autocomplete: None,
    }
}

// ===========================================================================
// Embed builder
// ===========================================================================

/// Ergonomic builder for [`Embed`].
#[derive(Debug, Default)]
pub struct EmbedBuilder {
    inner: Embed,
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.inner.color = Some(color);
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.inner.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.inner.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: None,
            proxy_icon_url: None,
        });
        self
    }

    pub fn footer_with_icon(
        mut self,
        text: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        self.inner.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: Some(icon_url.into()),
            proxy_icon_url: None,
        });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.inner.image = Some(EmbedImage {
            url: url.into(),
            proxy_url: None,
            height: None,
            width: None,
        });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.inner.thumbnail = Some(EmbedThumbnail {
            url: url.into(),
            proxy_url: None,
            height: None,
            width: None,
        });
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.inner.author = Some(EmbedAuthor {
            name: name.into(),
            url: None,
            icon_url: None,
            proxy_icon_url: None,
        });
        self
    }

    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.inner.timestamp = Some(timestamp);
        self
    }

    pub fn build(self) -> Embed {
        self.inner
    }
}

// ===========================================================================
// Component helpers
// ===========================================================================

/// Build an action row wrapping other components.
pub fn action_row(components: Vec<Component>) -> Component {
    Component {
        kind: ComponentType::ActionRow,
        components,
        ..Component::default()
    }
}

/// Build a button component.
///
/// `style`: 1 = Primary, 2 = Secondary, 3 = Success, 4 = Danger.
pub fn button(style: u8, label: impl Into<String>, custom_id: impl Into<String>) -> Component {
    Component {
        kind: ComponentType::Button,
        custom_id: Some(custom_id.into()),
        label: Some(label.into()),
        style: Some(style),
        ..Component::default()
    }
}

/// Build a link button (style 5, no custom id).
pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Component {
    Component {
        kind: ComponentType::Button,
        label: Some(label.into()),
        style: Some(5),
        url: Some(url.into()),
        ..Component::default()
    }
}

/// Build a single-choice string select menu.
pub fn string_select(
    custom_id: impl Into<String>,
    placeholder: impl Into<String>,
    options: Vec<SelectOption>,
) -> Component {
    Component {
        kind: ComponentType::StringSelect,
        custom_id: Some(custom_id.into()),
        placeholder: Some(placeholder.into()),
        min_values: Some(1),
        max_values: Some(1),
        options,
        ..Component::default()
    }
}

/// Build a text input for use inside a modal.
///
/// `style`: 1 = Short, 2 = Paragraph.
pub fn text_input(
    custom_id: impl Into<String>,
    label: impl Into<String>,
    style: u8,
    required: bool,
) -> Component {
    Component {
        kind: ComponentType::TextInput,
        custom_id: Some(custom_id.into()),
        label: Some(label.into()),
        style: Some(style),
        required: Some(required),
        ..Component::default()
    }
}
