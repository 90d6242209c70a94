//! Message attachments.

use crate::id::{marker::AttachmentMarker, Id};
use crate::util::flags::impl_flags_serde;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A file attached to a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Attachment {
    pub id: Id<AttachmentMarker>,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size: u64,
    pub url: String,
    pub proxy_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub ephemeral: bool,
    /// Duration of a voice message, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "AttachmentFlags::is_empty")]
    pub flags: AttachmentFlags,
}

bitflags! {
    /// Properties of an [`Attachment`].
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct AttachmentFlags: u64 {
        /// Edited through the clip remix feature.
        const IS_REMIX = 1 << 2;
    }
}

impl_flags_serde!(AttachmentFlags);
