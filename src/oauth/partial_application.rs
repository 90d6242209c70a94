//! Minimal application payload nested in gateway handshakes.

use super::ApplicationFlags;
use crate::id::{marker::ApplicationMarker, Id};
use serde::{Deserialize, Serialize};

/// The `id` + `flags` subset of an [`Application`].
///
/// [`Application`]: super::Application
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PartialApplication {
    #[serde(default)]
    pub flags: ApplicationFlags,
    pub id: Id<ApplicationMarker>,
}
