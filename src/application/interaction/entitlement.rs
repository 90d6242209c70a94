//! Premium entitlements attached to interactions.

use crate::id::{
    marker::{ApplicationMarker, EntitlementMarker, GuildMarker, SkuMarker, UserMarker},
    Id,
};
use crate::util::Timestamp;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Access a user or guild has to a premium SKU.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Entitlement {
    pub id: Id<EntitlementMarker>,
    pub sku_id: Id<SkuMarker>,
    pub application_id: Id<ApplicationMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id<UserMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(rename = "type")]
    pub kind: EntitlementType,
    #[serde(default)]
    pub deleted: bool,
    /// Start of the validity period; absent for perpetual entitlements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub consumed: bool,
}

/// How an [`Entitlement`] was granted.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum EntitlementType {
    Purchase = 1,
    PremiumSubscription = 2,
    DeveloperGift = 3,
    TestModePurchase = 4,
    FreePurchase = 5,
    UserGift = 6,
    PremiumPurchase = 7,
    ApplicationSubscription = 8,
}

#[cfg(test)]
mod tests {
    use super::{Entitlement, EntitlementType};
    use serde_json::json;

    #[test]
    fn entitlement_decodes() {
        let entitlement: Entitlement = serde_json::from_value(json!({
            "id": "1",
            "sku_id": "2",
            "application_id": "3",
            "user_id": "789",
            "type": 8,
            "deleted": false,
            "starts_at": "2021-08-10T11:16:37+00:00",
            "ends_at": null,
        }))
        .unwrap();

        assert_eq!(entitlement.kind, EntitlementType::ApplicationSubscription);
        assert!(entitlement.starts_at.is_some());
        assert!(entitlement.ends_at.is_none());
    }
}
