//! OAuth2 application types.

mod partial_application;

pub use self::partial_application::PartialApplication;

use crate::id::{marker::ApplicationMarker, Id};
use crate::user::User;
use crate::util::{flags::impl_flags_serde, ImageHash};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A full application object.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Application {
    pub id: Id<ApplicationMarker>,
    pub name: String,
    pub icon: Option<ImageHash>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bot_public: bool,
    #[serde(default)]
    pub bot_require_code_grant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(default, skip_serializing_if = "ApplicationFlags::is_empty")]
    pub flags: ApplicationFlags,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

bitflags! {
    /// Gateway intent and verification state of an application.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ApplicationFlags: u64 {
        const APPLICATION_AUTO_MODERATION_RULE_CREATE_BADGE = 1 << 6;
        const GATEWAY_PRESENCE = 1 << 12;
        const GATEWAY_PRESENCE_LIMITED = 1 << 13;
        const GATEWAY_GUILD_MEMBERS = 1 << 14;
        const GATEWAY_GUILD_MEMBERS_LIMITED = 1 << 15;
        const VERIFICATION_PENDING_GUILD_LIMIT = 1 << 16;
        const EMBEDDED = 1 << 17;
        const GATEWAY_MESSAGE_CONTENT = 1 << 18;
        const GATEWAY_MESSAGE_CONTENT_LIMITED = 1 << 19;
        const APPLICATION_COMMAND_BADGE = 1 << 23;
    }
}

impl_flags_serde!(ApplicationFlags);

#[cfg(test)]
mod tests {
    use super::{Application, ApplicationFlags};
    use serde_json::json;

    #[test]
    fn application_decodes() {
        let application: Application = serde_json::from_value(json!({
            "id": "1",
            "name": "dicebot",
            "icon": null,
            "description": "rolls dice",
            "bot_public": true,
            "bot_require_code_grant": false,
            "flags": (1u64 << 18) | (1 << 23),
        }))
        .unwrap();

        assert!(application.bot_public);
        assert!(application
            .flags
            .contains(ApplicationFlags::GATEWAY_MESSAGE_CONTENT));
        assert!(application
            .flags
            .contains(ApplicationFlags::APPLICATION_COMMAND_BADGE));
    }
}
