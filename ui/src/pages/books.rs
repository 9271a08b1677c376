//! Book inventory: create, edit and delete catalog entries.

use egui::{Grid, TextEdit, Ui, Window};
use libris_business::models::{Book, BookDraft, EntityId};
use libris_business::{CollectionState, MutationState, save};
use libris_states::{State, StateCtx};

use super::catalog::book_details;
use super::list_state::{ListEvents, ListPageState};
use super::modals::details_window;
use super::shared::{
    Display, bulk_delete_bar, confirm_pending_delete, ensure_fetched, mutation_feedback,
    search_box, with_page_state,
};
use crate::utils::colors::COLOR_RED;
use crate::widgets::{CellValue, ChipColor, ChipProps, Column, DataTable, collection_error};

/// Editable text of the book form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    /// `None` when creating a new book.
    pub editing: Option<EntityId>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub description: String,
    pub published_year: String,
    pub total_copies: String,
    pub price: String,
    pub error: Option<String>,
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

impl BookForm {
    pub fn create() -> Self {
        Self {
            total_copies: "1".to_owned(),
            ..Self::default()
        }
    }

    pub fn edit(book: &Book) -> Self {
        let draft = BookDraft::from(book);
        Self {
            editing: Some(book.id),
            title: draft.title,
            author: draft.author,
            isbn: draft.isbn.unwrap_or_default(),
            genre: draft.genre.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            published_year: draft
                .published_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            total_copies: draft.total_copies.to_string(),
            price: draft.price.map(|price| format!("{price:.2}")).unwrap_or_default(),
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit book"
        } else {
            "New book"
        }
    }

    /// Validates the form into the request body.
    pub fn to_draft(&self) -> Result<BookDraft, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_owned());
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err("Author is required".to_owned());
        }

        let published_year = match optional(&self.published_year) {
            Some(year) => Some(
                year.parse::<i32>()
                    .map_err(|_| "Published year must be a whole number".to_owned())?,
            ),
            None => None,
        };

        let total_copies = match optional(&self.total_copies) {
            Some(copies) => copies
                .parse::<u32>()
                .map_err(|_| "Copies must be a non-negative whole number".to_owned())?,
            None => 0,
        };

        let price = match optional(&self.price) {
            Some(price) => {
                let price = price
                    .trim_start_matches('$')
                    .parse::<f64>()
                    .map_err(|_| "Price must be a number".to_owned())?;
                if !price.is_finite() || price < 0.0 {
                    return Err("Price must be a non-negative number".to_owned());
                }
                Some(price)
            }
            None => None,
        };

        Ok(BookDraft {
            title: title.to_owned(),
            author: author.to_owned(),
            isbn: optional(&self.isbn),
            genre: optional(&self.genre),
            description: optional(&self.description),
            published_year,
            total_copies,
            price,
        })
    }
}

/// State of the inventory page.
#[derive(Debug, Clone, Default)]
pub struct BooksState {
    pub list: ListPageState<Book>,
    pub form: Option<BookForm>,
}

impl State for BooksState {}

pub fn book_columns(display: &Display) -> Vec<Column<Book>> {
    vec![
        Column::text("title", "Title", |book: &Book| book.title.as_str().into()),
        Column::text("author", "Author", |book: &Book| book.author.as_str().into()),
        Column::text("isbn", "ISBN", |book: &Book| book.isbn.as_deref().into()),
        Column::chip_with(
            "genre",
            "Genre",
            |book: &Book| book.genre.as_deref().into(),
            |_| ChipProps::color(ChipColor::Info).outlined(),
        ),
        Column::text("copies", "Copies", |book: &Book| {
            CellValue::Text(format!("{}/{}", book.available_copies, book.total_copies))
        })
        .align(crate::widgets::CellAlign::Center),
        Column::currency("price", "Price", display.currency.clone(), |book: &Book| {
            book.price.into()
        }),
        Column::date("created_at", "Added", |book: &Book| {
            book.created_at.as_deref().into()
        }),
    ]
}

pub fn books_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<BooksState, _>(ctx, |ctx, state| render(ctx, ui, state));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, state: &mut BooksState) {
    let display = Display::from_ctx(ctx);
    let page = &mut state.list;

    ui.heading("Manage books");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        search_box(ui, page, "Search by title, author or ISBN");
        if ui.button("New book").clicked() {
            state.form = Some(BookForm::create());
        }
    });
    ui.add_space(8.0);

    ensure_fetched::<Book>(ctx, &page.query());
    mutation_feedback::<Book>(ctx, ui);

    if bulk_delete_bar(ui, page) {
        page.request_bulk_delete();
    }

    let columns = book_columns(&display);
    let mut events = ListEvents::default();
    let mut viewed = None;
    let mut edited = None;
    let mut deleted = None;

    {
        let books = ctx.state::<CollectionState<Book>>();
        collection_error(ui, books.error());

        let table = DataTable::new("books", &columns, books.items())
            .loading(books.is_loading())
            .locale(display.locale)
            .selected(&page.selected)
            .pagination(page.pagination(books.total_elements()))
            .on_view(|book| viewed = Some(book.clone()))
            .on_edit(|book| edited = Some(BookForm::edit(book)))
            .on_delete(|book| deleted = Some((book.id, book.title.clone())));
        events.attach(table, true).show(ui);
    }

    page.apply(events);
    if viewed.is_some() {
        page.viewing = viewed;
    }
    if edited.is_some() {
        state.form = edited;
    }
    if let Some((id, title)) = deleted {
        page.request_delete(id, title);
    }

    confirm_pending_delete::<Book>(ctx, ui, page);

    if let Some(book) = &page.viewing
        && details_window(ui, "Book details", &book_details(book, &display))
    {
        page.viewing = None;
    }

    show_form(ctx, ui, &mut state.form);
}

fn show_form(ctx: &mut StateCtx, ui: &Ui, form_slot: &mut Option<BookForm>) {
    let Some(form) = form_slot.as_mut() else {
        return;
    };

    let mut open = true;
    let mut submit = false;
    let mut cancel = false;
    let in_flight = ctx.state::<MutationState<Book>>().is_in_flight();

    Window::new(form.title())
        .id(egui::Id::new("book_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &form.error {
                ui.colored_label(COLOR_RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            Grid::new("book_form_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    text_row(ui, "Title", &mut form.title);
                    text_row(ui, "Author", &mut form.author);
                    text_row(ui, "ISBN", &mut form.isbn);
                    text_row(ui, "Genre", &mut form.genre);
                    text_row(ui, "Published year", &mut form.published_year);
                    text_row(ui, "Copies", &mut form.total_copies);
                    text_row(ui, "Price", &mut form.price);
                    ui.label("Description");
                    ui.add(TextEdit::multiline(&mut form.description).desired_rows(3));
                    ui.end_row();
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!in_flight, egui::Button::new("Save"))
                    .clicked()
                {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if in_flight {
                    ui.spinner();
                }
            });
        });

    if submit {
        match form.to_draft() {
            Ok(draft) => {
                save::<Book>(ctx, form.editing, draft);
                *form_slot = None;
            }
            Err(error) => form.error = Some(error),
        }
        return;
    }

    if cancel || !open {
        *form_slot = None;
    }
}

fn text_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).desired_width(240.0));
    ui.end_row();
}
