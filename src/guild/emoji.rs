//! Custom guild emoji.

use crate::id::{
    marker::{EmojiMarker, RoleMarker},
    Id,
};
use crate::user::User;
use serde::{Deserialize, Serialize};

/// A custom emoji uploaded to a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Emoji {
    /// `None` in reaction payloads carrying a unicode emoji.
    pub id: Option<Id<EmojiMarker>>,
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<Id<RoleMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub require_colons: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub managed: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub animated: bool,
    #[serde(default = "default_available", skip_serializing_if = "crate::util::is_true")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}
