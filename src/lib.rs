//! Typed representations of Discord API objects.
//!
//! These mirror the Discord API docs so that client code can deserialize
//! gateway events and REST responses without touching `serde_json::Value`.
//! The crate is a pure domain model: no HTTP, no websocket, no caching —
//! just records, their JSON codecs, and a handful of in-memory helpers:
//!
//! - [`id`] — type-safe snowflake IDs and their bit-field decomposition.
//! - [`util::flags`] — the integer-mask codec behind every flag-set type.
//! - [`channel::typing`] — per-channel typing state with timed eviction,
//!   the one internally synchronized piece of the crate.
//! - [`channel::message`] — messages, with reaction aggregation helpers.
//! - [`builders`] — ergonomic construction for commands, embeds, and
//!   components.
//!
//! # serde conventions
//!
//! Records use snake-case keys matching the public API documentation.
//! Optional fields decode JSON `null` and absence to `None` and are omitted
//! on encode. Unknown JSON fields are ignored. Integer-coded enums reject
//! undocumented values; flag masks decode leniently, dropping (and logging)
//! unknown bits.

pub mod application;
pub mod builders;
pub mod channel;
pub mod guild;
pub mod id;
pub mod oauth;
pub mod poll;
pub mod user;
pub mod util;
pub mod voice;

// ===========================================================================
// Convenience re-exports
// ===========================================================================
// Consumers typically `use discord_model::*` for the handful of types that
// appear in almost every payload.

// ---- IDs ------------------------------------------------------------------
pub use self::id::marker::{
    ApplicationMarker, AttachmentMarker, ChannelMarker, CommandMarker, EmojiMarker, GuildMarker,
    InteractionMarker, MessageMarker, RoleMarker, UserMarker,
};
pub use self::id::Id;

// ---- User -----------------------------------------------------------------
pub use self::user::{User, UserFlags};

// ---- Channel / Message ----------------------------------------------------
pub use self::channel::message::{
    Component, Embed, EmojiIdentityError, Message, MessageFlags, MessageReference, MessageType,
    Reaction, ReactionEmoji, UnknownMessageTypeError,
};
pub use self::channel::{Attachment, Channel, ChannelType, TypingIndicator, TYPING_TTL};

// ---- Guild ----------------------------------------------------------------
pub use self::guild::{Guild, Member, PartialMember, Permissions, Role, UnavailableGuild};

// ---- Interactions / Commands ----------------------------------------------
pub use self::application::command::{
    Command, CommandOption, CommandOptionChoice, CommandOptionChoiceValue, CommandOptionType,
    CommandType,
};
pub use self::application::interaction::{Interaction, InteractionData, InteractionType};

// ---- Builders -------------------------------------------------------------
pub use self::builders::{CommandBuilder, EmbedBuilder};

// ---- Util -----------------------------------------------------------------
pub use self::util::{flags::FlagsExt, ImageHash, Timestamp};
