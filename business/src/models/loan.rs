use serde::{Deserialize, Serialize};

use libris_states::Updater;

use super::{Book, EntityId, Resource, StatusFilter};
use crate::collection::CollectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    #[default]
    Active,
    Overdue,
    Returned,
    #[serde(other)]
    Unknown,
}

impl StatusFilter for LoanStatus {
    const FILTERS: &'static [Self] = &[Self::Active, Self::Overdue, Self::Returned];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Overdue => "Overdue",
            Self::Returned => "Returned",
            Self::Unknown => "Unknown",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Overdue => "OVERDUE",
            Self::Returned => "RETURNED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A book checked out by a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookLoan {
    pub id: EntityId,
    pub book_id: EntityId,
    #[serde(default)]
    pub book_title: String,
    pub member_id: EntityId,
    #[serde(default)]
    pub member_name: String,
    #[serde(default)]
    pub checkout_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub renewals: u32,
    #[serde(default)]
    pub status: LoanStatus,
}

impl BookLoan {
    /// Returned loans accept no further actions.
    pub fn is_open(&self) -> bool {
        !matches!(self.status, LoanStatus::Returned)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDraft {
    pub book_id: EntityId,
    pub member_id: EntityId,
}

impl Resource for BookLoan {
    type Draft = LoanDraft;

    const PATH: &'static str = "loans";
    const NAME: &'static str = "loan";

    fn id(&self) -> EntityId {
        self.id
    }

    // Checkouts and returns change book availability.
    fn invalidate_related(updater: &Updater) {
        updater.apply::<CollectionState<Book>, _>(CollectionState::mark_stale);
    }
}
