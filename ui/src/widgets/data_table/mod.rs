//! Generic, configuration-driven data table.
//!
//! The table renders typed rows through [`Column`] descriptors and reports
//! user intents through optional handlers. It never owns rows, selection or
//! pagination: the caller passes them in every frame and applies the intents.
//!
//! Handlers run after the grid has been laid out, so they may freely borrow
//! the caller's state mutably.
//!
//! - `columns`: descriptors and cell values
//! - `cells`: date/currency formatting and cell rendering
//! - `header`: header row and select-all checkbox
//! - `row`: body cells, default action buttons, loading/empty row
//! - `selection`: select-all state math
//! - `pagination`: pagination model and footer

mod cells;
mod columns;
mod header;
mod pagination;
mod row;
mod selection;

use std::fmt::Debug;
use std::hash::Hash;

use egui::{Frame, Grid, Id, Margin, Response, ScrollArea, Stroke, Ui};
use libris_business::DateLocale;

pub use cells::{PLACEHOLDER, format_currency, format_date, render_chip};
pub use columns::{
    CellAlign, CellValue, ChipColor, ChipProps, ChipVariant, Column, ColumnKind,
};
pub use pagination::{DEFAULT_ROWS_PER_PAGE_OPTIONS, Pagination};
pub use selection::{
    HeaderCheckState, all_ids, header_check_state, is_selected, toggle_selection,
};

use cells::render_cell;
use header::{render_column_headers, render_select_all};
use pagination::{PaginationEvent, show_footer};
use row::{
    DefaultActions, RowAction, TABLE_BORDER_COLOR, data_cell, render_default_actions,
    render_placeholder_row, render_row_checkbox,
};

/// A row that can be shown in a [`DataTable`].
pub trait DataRow {
    type Id: Clone + Eq + Hash + Debug;

    fn row_id(&self) -> Self::Id;
}

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

type RowHandler<'a, R> = Box<dyn FnMut(&R) + 'a>;

enum TableEvent<'r, R: DataRow> {
    Row(RowAction, &'r R),
    SelectAll(bool),
    SelectOne(R::Id, bool),
    Pagination(PaginationEvent),
}

/// Builder for one frame of a data table.
///
/// ```ignore
/// DataTable::new("books", &columns, books)
///     .selectable(true)
///     .selected(&selection)
///     .pagination(Pagination::new(page, 10, total))
///     .on_edit(|book| edited = Some(book.id))
///     .show(ui);
/// ```
pub struct DataTable<'a, R: DataRow> {
    id: Id,
    columns: &'a [Column<R>],
    data: &'a [R],
    loading: bool,
    selectable: bool,
    selected: &'a [R::Id],
    pagination: Option<Pagination>,
    locale: DateLocale,
    actions: bool,
    empty_message: String,
    on_view: Option<RowHandler<'a, R>>,
    on_edit: Option<RowHandler<'a, R>>,
    on_delete: Option<RowHandler<'a, R>>,
    on_select_all: Option<Box<dyn FnMut(Vec<R::Id>) + 'a>>,
    on_select_one: Option<Box<dyn FnMut(R::Id, bool) + 'a>>,
    on_page_change: Option<Box<dyn FnMut(usize) + 'a>>,
    on_rows_per_page_change: Option<Box<dyn FnMut(usize) + 'a>>,
    custom_actions: Option<Box<dyn FnMut(&mut Ui, &R) + 'a>>,
}

impl<'a, R: DataRow> DataTable<'a, R> {
    pub fn new(id_salt: impl Hash, columns: &'a [Column<R>], data: &'a [R]) -> Self {
        debug_assert!(!columns.is_empty(), "a data table needs at least one column");

        Self {
            id: Id::new(id_salt),
            columns,
            data,
            loading: false,
            selectable: false,
            selected: &[],
            pagination: None,
            locale: DateLocale::default(),
            actions: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
            on_view: None,
            on_edit: None,
            on_delete: None,
            on_select_all: None,
            on_select_one: None,
            on_page_change: None,
            on_rows_per_page_change: None,
            custom_actions: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Adds a checkbox column and a select-all checkbox.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn selected(mut self, selected: &'a [R::Id]) -> Self {
        self.selected = selected;
        self
    }

    /// Shows the footer when `pagination.total_rows > 0`.
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn locale(mut self, locale: DateLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Disables the default View/Edit/Delete buttons when `false`.
    ///
    /// With `true` the actions column still only appears once a View, Edit or
    /// Delete handler is set, or when [`Self::custom_actions`] is used.
    pub fn actions(mut self, actions: bool) -> Self {
        self.actions = actions;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn on_view(mut self, handler: impl FnMut(&R) + 'a) -> Self {
        self.on_view = Some(Box::new(handler));
        self
    }

    pub fn on_edit(mut self, handler: impl FnMut(&R) + 'a) -> Self {
        self.on_edit = Some(Box::new(handler));
        self
    }

    pub fn on_delete(mut self, handler: impl FnMut(&R) + 'a) -> Self {
        self.on_delete = Some(Box::new(handler));
        self
    }

    /// Receives every displayed id when toggled on, an empty list when off.
    pub fn on_select_all(mut self, handler: impl FnMut(Vec<R::Id>) + 'a) -> Self {
        self.on_select_all = Some(Box::new(handler));
        self
    }

    pub fn on_select_one(mut self, handler: impl FnMut(R::Id, bool) + 'a) -> Self {
        self.on_select_one = Some(Box::new(handler));
        self
    }

    pub fn on_page_change(mut self, handler: impl FnMut(usize) + 'a) -> Self {
        self.on_page_change = Some(Box::new(handler));
        self
    }

    pub fn on_rows_per_page_change(mut self, handler: impl FnMut(usize) + 'a) -> Self {
        self.on_rows_per_page_change = Some(Box::new(handler));
        self
    }

    /// Replaces the default action buttons with caller-rendered content.
    pub fn custom_actions(mut self, render: impl FnMut(&mut Ui, &R) + 'a) -> Self {
        self.custom_actions = Some(Box::new(render));
        self
    }

    fn default_actions(&self) -> DefaultActions {
        DefaultActions {
            view: self.on_view.is_some(),
            edit: self.on_edit.is_some(),
            delete: self.on_delete.is_some(),
        }
    }

    fn shows_actions_column(&self) -> bool {
        self.custom_actions.is_some() || (self.actions && self.default_actions().any())
    }

    pub fn show(mut self, ui: &mut Ui) -> Response {
        let mut events: Vec<TableEvent<'a, R>> = Vec::new();
        let scroll_id = self.id.with("scroll");

        let response = ui
            .vertical(|ui| {
                Frame::NONE
                    .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                    .inner_margin(Margin::ZERO)
                    .show(ui, |ui| {
                        ScrollArea::horizontal()
                            .id_salt(scroll_id)
                            .show(ui, |ui| self.render_body(ui, &mut events));
                    });

                if let Some(pagination) = self.pagination.as_ref().filter(|p| p.is_visible()) {
                    ui.add_space(4.0);
                    if let Some(event) = show_footer(ui, self.id.with("footer"), pagination) {
                        events.push(TableEvent::Pagination(event));
                    }
                }
            })
            .response;

        for event in events {
            self.emit(event);
        }

        response
    }

    fn render_body(&mut self, ui: &mut Ui, events: &mut Vec<TableEvent<'a, R>>) {
        let data = self.data;
        let columns = self.columns;
        let selected = self.selected;
        let locale = self.locale;
        let selectable = self.selectable;
        let default_actions = self.default_actions();
        let with_actions = self.shows_actions_column();
        let show_rows = !self.loading && !data.is_empty();
        let num_columns = columns.len() + usize::from(selectable) + usize::from(with_actions);

        Grid::new(self.id.with("grid"))
            .num_columns(num_columns)
            .striped(true)
            .spacing([16.0, 0.0])
            .min_col_width(40.0)
            .show(ui, |ui| {
                if selectable {
                    let displayed = if show_rows { data } else { &[] };
                    let state = header_check_state(displayed, selected);
                    if let Some(checked) = render_select_all(ui, state, show_rows) {
                        events.push(TableEvent::SelectAll(checked));
                    }
                }
                render_column_headers(ui, columns, with_actions);
                ui.end_row();

                if !show_rows {
                    return;
                }

                for row in data {
                    if selectable {
                        if let Some(checked) = render_row_checkbox(ui, is_selected(row, selected)) {
                            events.push(TableEvent::SelectOne(row.row_id(), checked));
                        }
                    }

                    for column in columns {
                        data_cell(ui, |ui| render_cell(ui, column, row, locale));
                    }

                    if with_actions {
                        data_cell(ui, |ui| match self.custom_actions.as_mut() {
                            Some(render) => render(ui, row),
                            None => {
                                if let Some(action) = render_default_actions(ui, default_actions) {
                                    events.push(TableEvent::Row(action, row));
                                }
                            }
                        });
                    }

                    ui.end_row();
                }
            });

        if !show_rows {
            render_placeholder_row(ui, self.loading, &self.empty_message);
        }
    }

    fn emit(&mut self, event: TableEvent<'_, R>) {
        match event {
            TableEvent::Row(RowAction::View, row) => {
                if let Some(handler) = self.on_view.as_mut() {
                    handler(row);
                }
            }
            TableEvent::Row(RowAction::Edit, row) => {
                if let Some(handler) = self.on_edit.as_mut() {
                    handler(row);
                }
            }
            TableEvent::Row(RowAction::Delete, row) => {
                if let Some(handler) = self.on_delete.as_mut() {
                    handler(row);
                }
            }
            TableEvent::SelectAll(_) if self.loading => {}
            TableEvent::SelectAll(checked) => {
                if let Some(handler) = self.on_select_all.as_mut() {
                    let ids = if checked {
                        all_ids(self.data)
                    } else {
                        Vec::new()
                    };
                    handler(ids);
                }
            }
            TableEvent::SelectOne(id, checked) => {
                if let Some(handler) = self.on_select_one.as_mut() {
                    handler(id, checked);
                }
            }
            TableEvent::Pagination(PaginationEvent::PageChange(page)) => {
                if let Some(handler) = self.on_page_change.as_mut() {
                    handler(page);
                }
            }
            TableEvent::Pagination(PaginationEvent::RowsPerPageChange(size)) => {
                if let Some(handler) = self.on_rows_per_page_change.as_mut() {
                    handler(size);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
