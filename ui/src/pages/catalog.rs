//! Member-facing catalog: browse books and place reservations.

use egui::Ui;
use libris_business::models::{Book, Reservation, ReservationDraft};
use libris_business::{CollectionState, save};
use libris_states::{State, StateCtx};

use super::list_state::{ListEvents, ListPageState};
use super::modals::details_window;
use super::shared::{
    Display, ensure_fetched, mutation_feedback, or_placeholder, search_box, with_page_state,
};
use crate::widgets::data_table::format_currency;
use crate::widgets::{ChipColor, ChipProps, Column, DataTable, collection_error};

/// Catalog page state, separate from the book inventory page.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub list: ListPageState<Book>,
}

impl State for CatalogState {}

pub fn catalog_columns() -> Vec<Column<Book>> {
    vec![
        Column::text("title", "Title", |book: &Book| book.title.as_str().into()),
        Column::text("author", "Author", |book: &Book| book.author.as_str().into()),
        Column::chip_with(
            "genre",
            "Genre",
            |book: &Book| book.genre.as_deref().into(),
            |_| ChipProps::color(ChipColor::Info).outlined(),
        ),
        Column::chip_with(
            "availability",
            "Availability",
            |book: &Book| book.availability_label().into(),
            |value| {
                if value.to_text() == "Available" {
                    ChipProps::color(ChipColor::Success)
                } else {
                    ChipProps::color(ChipColor::Warning)
                }
            },
        ),
    ]
}

pub fn book_details(book: &Book, display: &Display) -> Vec<(&'static str, String)> {
    vec![
        ("Title", book.title.clone()),
        ("Author", book.author.clone()),
        ("ISBN", or_placeholder(book.isbn.as_deref())),
        ("Genre", or_placeholder(book.genre.as_deref())),
        (
            "Published",
            book.published_year
                .map_or_else(|| or_placeholder(None), |year| year.to_string()),
        ),
        (
            "Copies",
            format!("{} of {} available", book.available_copies, book.total_copies),
        ),
        (
            "Price",
            format_currency(&book.price.into(), &display.currency),
        ),
        ("Description", or_placeholder(book.description.as_deref())),
    ]
}

pub fn catalog_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<CatalogState, _>(ctx, |ctx, state| render(ctx, ui, &mut state.list));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, page: &mut ListPageState<Book>) {
    let display = Display::from_ctx(ctx);

    ui.heading("Library catalog");
    ui.add_space(8.0);
    search_box(ui, page, "Search by title or author");
    ui.add_space(8.0);

    ensure_fetched::<Book>(ctx, &page.query());
    mutation_feedback::<Reservation>(ctx, ui);

    let columns = catalog_columns();
    let mut events = ListEvents::default();
    let mut details = None;
    let mut reserve = None;

    {
        let books = ctx.state::<CollectionState<Book>>();
        collection_error(ui, books.error());

        let table = DataTable::new("catalog", &columns, books.items())
            .loading(books.is_loading())
            .locale(display.locale)
            .pagination(page.pagination(books.total_elements()))
            .empty_message("No books match your search")
            .custom_actions(|ui, book: &Book| {
                ui.horizontal(|ui| {
                    if ui.button("Details").clicked() {
                        details = Some(book.clone());
                    }
                    if ui
                        .add_enabled(book.is_available(), egui::Button::new("Reserve"))
                        .clicked()
                    {
                        reserve = Some(book.id);
                    }
                });
            });
        events.attach(table, false).show(ui);
    }

    page.apply(events);
    if details.is_some() {
        page.viewing = details;
    }

    if let Some(book_id) = reserve {
        log::info!("Reserving book {book_id}");
        save::<Reservation>(ctx, None, ReservationDraft { book_id });
    }

    if let Some(book) = &page.viewing
        && details_window(ui, "Book details", &book_details(book, &display))
    {
        page.viewing = None;
    }
}
