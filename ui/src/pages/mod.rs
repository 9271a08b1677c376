//! Pages of the application, one per entity screen.
//!
//! Each page owns its search, filter, pagination and selection state in the
//! [`StateCtx`], reads its collection slice and renders a [`DataTable`].
//!
//! [`DataTable`]: crate::widgets::DataTable

mod books;
mod catalog;
mod fines;
mod list_state;
mod loans;
mod members;
pub mod modals;
mod reservations;
mod rows;
mod shared;
mod subscriptions;

use egui::Ui;
use libris_business::BusinessConfig;
use libris_business::models::{BookLoan, Fine, Member, Reservation, Subscription};
use libris_states::StateCtx;
use serde::{Deserialize, Serialize};

pub use books::{BookForm, BooksState, book_columns, books_page};
pub use catalog::{CatalogState, catalog_columns, catalog_page};
pub use fines::{fine_columns, fines_page};
pub use list_state::{ListEvents, ListPageState, PendingDelete};
pub use loans::{loan_columns, loans_page};
pub use members::{member_columns, members_page};
pub use reservations::{reservation_columns, reservations_page};
pub use shared::Display;
pub use subscriptions::{subscription_columns, subscriptions_page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Catalog,
    Books,
    Loans,
    Reservations,
    Fines,
    Subscriptions,
    Members,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Catalog,
        Page::Books,
        Page::Loans,
        Page::Reservations,
        Page::Fines,
        Page::Subscriptions,
        Page::Members,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Catalog => "Catalog",
            Page::Books => "Books",
            Page::Loans => "Loans",
            Page::Reservations => "Reservations",
            Page::Fines => "Fines",
            Page::Subscriptions => "Subscriptions",
            Page::Members => "Members",
        }
    }
}

/// Registers the UI state of every page, sized by the configured page size.
pub fn register_page_states(ctx: &mut StateCtx) {
    let rows_per_page = ctx
        .try_state::<BusinessConfig>()
        .map_or(10, |config| config.default_page_size);

    ctx.add_state(CatalogState {
        list: ListPageState::new(rows_per_page),
    });
    ctx.add_state(BooksState {
        list: ListPageState::new(rows_per_page),
        form: None,
    });
    ctx.add_state(ListPageState::<BookLoan>::new(rows_per_page));
    ctx.add_state(ListPageState::<Reservation>::new(rows_per_page));
    ctx.add_state(ListPageState::<Fine>::new(rows_per_page));
    ctx.add_state(ListPageState::<Subscription>::new(rows_per_page));
    ctx.add_state(ListPageState::<Member>::new(rows_per_page));
}

pub fn show_page(page: Page, ctx: &mut StateCtx, ui: &mut Ui) {
    match page {
        Page::Catalog => catalog_page(ctx, ui),
        Page::Books => books_page(ctx, ui),
        Page::Loans => loans_page(ctx, ui),
        Page::Reservations => reservations_page(ctx, ui),
        Page::Fines => fines_page(ctx, ui),
        Page::Subscriptions => subscriptions_page(ctx, ui),
        Page::Members => members_page(ctx, ui),
    }
}
