//! Entities served by the library backend.
//!
//! Each entity implements [`Resource`], which ties it to its REST collection
//! path and the payload used to create or update it.

mod book;
mod fine;
mod loan;
mod member;
mod reservation;
mod subscription;

use std::fmt::Debug;

use libris_states::Updater;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use book::{Book, BookDraft};
pub use fine::{Fine, FineDraft, FineStatus};
pub use loan::{BookLoan, LoanDraft, LoanStatus};
pub use member::{Member, MemberDraft, MemberRole};
pub use reservation::{Reservation, ReservationDraft, ReservationStatus};
pub use subscription::{Subscription, SubscriptionDraft, SubscriptionStatus};

/// Backend identifier shared by all entities.
pub type EntityId = i64;

/// A REST collection under `{api_url}/{PATH}`.
pub trait Resource: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static {
    /// Body of `POST /{PATH}` and `PUT /{PATH}/{id}`.
    type Draft: Serialize + Clone + Debug + Default + Send + Sync + 'static;

    const PATH: &'static str;

    /// Human readable singular name, used in messages.
    const NAME: &'static str;

    fn id(&self) -> EntityId;

    /// Marks other collections stale after a successful mutation of `Self`.
    fn invalidate_related(_updater: &Updater) {}
}

/// A status-like enum that can be used as a list filter.
pub trait StatusFilter: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Values offered in filter combo boxes.
    const FILTERS: &'static [Self];

    fn label(self) -> &'static str;

    /// Value sent as the `status` query parameter.
    fn code(self) -> &'static str;
}
