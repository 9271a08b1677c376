use serde::{Deserialize, Serialize};

use libris_states::Updater;

use super::{Book, EntityId, Resource, StatusFilter};
use crate::collection::CollectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Ready,
    Fulfilled,
    Cancelled,
    Expired,
    #[serde(other)]
    Unknown,
}

impl StatusFilter for ReservationStatus {
    const FILTERS: &'static [Self] = &[
        Self::Pending,
        Self::Ready,
        Self::Fulfilled,
        Self::Cancelled,
        Self::Expired,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Ready => "Ready for pickup",
            Self::Fulfilled => "Fulfilled",
            Self::Cancelled => "Cancelled",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Ready => "READY",
            Self::Fulfilled => "FULFILLED",
            Self::Cancelled => "CANCELLED",
            Self::Expired => "EXPIRED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A hold placed on a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: EntityId,
    pub book_id: EntityId,
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub member_id: Option<EntityId>,
    #[serde(default)]
    pub member_name: String,
    #[serde(default)]
    pub reserved_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// The member is taken from the session on the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub book_id: EntityId,
}

impl Resource for Reservation {
    type Draft = ReservationDraft;

    const PATH: &'static str = "reservations";
    const NAME: &'static str = "reservation";

    fn id(&self) -> EntityId {
        self.id
    }

    // Holding a copy changes book availability.
    fn invalidate_related(updater: &Updater) {
        updater.apply::<CollectionState<Book>, _>(CollectionState::mark_stale);
    }
}
