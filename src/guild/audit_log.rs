//! Guild audit logs.

use crate::channel::webhook::Webhook;
use crate::id::{
    marker::{AuditLogEntryMarker, GenericMarker, UserMarker},
    Id,
};
use crate::user::User;
use serde::{Deserialize, Serialize};

/// A page of a guild's audit log.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditLog {
    #[serde(default)]
    pub audit_log_entries: Vec<AuditLogEntry>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
}

/// A single moderation action recorded in the audit log.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditLogEntry {
    pub id: Id<AuditLogEntryMarker>,
    /// Action type code per the platform documentation. The code space
    /// grows server-side, so it is carried as-is rather than enumerated.
    pub action_type: u16,
    /// ID of the affected resource; its kind depends on `action_type`.
    pub target_id: Option<Id<GenericMarker>>,
    pub user_id: Option<Id<UserMarker>>,
    #[serde(default)]
    pub changes: Vec<AuditLogChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A before/after pair for one changed field.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditLogChange {
    /// Name of the changed field, e.g. `"name"` or `"$add"`.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::AuditLogEntry;
    use serde_json::json;

    #[test]
    fn entry_decodes() {
        let entry: AuditLogEntry = serde_json::from_value(json!({
            "id": "1",
            "action_type": 10,
            "target_id": "42",
            "user_id": "789",
            "changes": [
                {"key": "name", "old_value": "old", "new_value": "new"},
            ],
            "reason": "cleanup",
        }))
        .unwrap();

        assert_eq!(entry.action_type, 10);
        assert_eq!(entry.changes.len(), 1);
        assert_eq!(entry.changes[0].key, "name");
        assert_eq!(entry.reason.as_deref(), Some("cleanup"));
    }
}
