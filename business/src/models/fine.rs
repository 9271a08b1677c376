use serde::{Deserialize, Serialize};

use super::{EntityId, Resource, StatusFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FineStatus {
    #[default]
    Unpaid,
    Paid,
    Waived,
    #[serde(other)]
    Unknown,
}

impl StatusFilter for FineStatus {
    const FILTERS: &'static [Self] = &[Self::Unpaid, Self::Paid, Self::Waived];

    fn label(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::Waived => "Waived",
            Self::Unknown => "Unknown",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Unpaid => "UNPAID",
            Self::Paid => "PAID",
            Self::Waived => "WAIVED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A charge raised against a member, usually for an overdue loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    pub id: EntityId,
    pub member_id: EntityId,
    #[serde(default)]
    pub member_name: String,
    #[serde(default)]
    pub loan_id: Option<EntityId>,
    #[serde(default)]
    pub reason: String,
    /// Amounts are computed by the backend and only displayed here.
    pub amount: f64,
    #[serde(default)]
    pub status: FineStatus,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl Fine {
    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, FineStatus::Unpaid)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FineDraft {
    pub member_id: EntityId,
    pub loan_id: Option<EntityId>,
    pub reason: String,
    pub amount: f64,
}

impl Resource for Fine {
    type Draft = FineDraft;

    const PATH: &'static str = "fines";
    const NAME: &'static str = "fine";

    fn id(&self) -> EntityId {
        self.id
    }
}
