use serde::{Deserialize, Serialize};

use super::{EntityId, Resource, StatusFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Expired,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl StatusFilter for SubscriptionStatus {
    const FILTERS: &'static [Self] = &[Self::Active, Self::Expired, Self::Cancelled];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A membership plan held by a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: EntityId,
    pub member_id: EntityId,
    #[serde(default)]
    pub member_name: String,
    pub plan: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: SubscriptionStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    pub member_id: EntityId,
    pub plan: String,
}

impl Resource for Subscription {
    type Draft = SubscriptionDraft;

    const PATH: &'static str = "subscriptions";
    const NAME: &'static str = "subscription";

    fn id(&self) -> EntityId {
        self.id
    }
}
