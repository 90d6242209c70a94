//! Messages, embeds, components, reactions, and stickers.

pub mod component;
pub mod embed;
pub mod sticker;

mod flags;
mod kind;
mod reaction;

pub use self::{
    component::{Component, ComponentType, SelectOption},
    embed::Embed,
    flags::MessageFlags,
    kind::{MessageType, UnknownMessageTypeError},
    reaction::{EmojiIdentity, EmojiIdentityError, Reaction, ReactionCountDetails, ReactionEmoji},
    sticker::{Sticker, StickerItem},
};

use crate::channel::Attachment;
use crate::id::{
    marker::{
        ApplicationMarker, ChannelMarker, GuildMarker, InteractionMarker, MessageMarker,
        RoleMarker, UserMarker, WebhookMarker,
    },
    Id,
};
use crate::poll::Poll;
use crate::user::User;
use crate::util::Timestamp;
use serde::{Deserialize, Serialize};

/// A message sent in a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
    pub id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub author: User,
    pub content: String,
    pub timestamp: Timestamp,
    pub edited_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub tts: bool,
    #[serde(default)]
    pub mention_everyone: bool,
    #[serde(default)]
    pub mentions: Vec<User>,
    #[serde(default)]
    pub mention_roles: Vec<Id<RoleMarker>>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Id<WebhookMarker>>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    #[serde(default, skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    /// The replied-to message, when resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referenced_message: Option<Box<Message>>,
    /// Set when this message is an interaction response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<MessageInteraction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sticker_items: Vec<StickerItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
}

impl Message {
    /// Unix-millisecond creation time derived from the message snowflake.
    pub const fn created_at_ms(&self) -> i64 {
        self.id.timestamp_millis()
    }

    /// Whether a given user is mentioned in the message.
    pub fn mentions_user(&self, user_id: Id<UserMarker>) -> bool {
        self.mentions.iter().any(|user| user.id == user_id)
    }

    /// Whether this message can be deleted given its type.
    pub const fn deletable(&self) -> bool {
        self.kind.deletable()
    }

    /// Find the stored reaction matching the emoji's identity.
    ///
    /// Linear scan; the first match wins. A query with both `id` and `name`
    /// matches by `id` alone, since custom-emoji names are advisory. An
    /// invalid emoji (neither set) matches nothing.
    pub fn find_reaction(&self, emoji: &ReactionEmoji) -> Option<&Reaction> {
        self.reactions
            .iter()
            .find(|reaction| reaction.emoji.same_identity(emoji))
    }

    /// Insert a reaction, or replace the stored one with the same emoji
    /// identity in place. Existing ordering is preserved either way.
    ///
    /// # Errors
    ///
    /// Returns [`EmojiIdentityError`] if the reaction's emoji has neither
    /// an `id` nor a `name`.
    pub fn upsert_reaction(&mut self, reaction: Reaction) -> Result<(), EmojiIdentityError> {
        reaction.emoji.identity()?;

        let existing = self
            .reactions
            .iter_mut()
            .find(|stored| stored.emoji.same_identity(&reaction.emoji));

        match existing {
            Some(stored) => *stored = reaction,
            None => self.reactions.push(reaction),
        }

        Ok(())
    }

    /// Remove the first reaction matching the emoji's identity, preserving
    /// the order of the remainder. No-op if absent.
    pub fn remove_reaction(&mut self, emoji: &ReactionEmoji) {
        if let Some(index) = self
            .reactions
            .iter()
            .position(|stored| stored.emoji.same_identity(emoji))
        {
            self.reactions.remove(index);
        }
    }
}

/// Pointer to another message (reply, crosspost, forward).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MessageReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Id<MessageMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub fail_if_not_exists: bool,
}

/// Metadata on a message that is an interaction response.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MessageInteraction {
    pub id: Id<InteractionMarker>,
    /// Interaction type code.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Name of the invoked command.
    pub name: String,
    pub user: User,
}
