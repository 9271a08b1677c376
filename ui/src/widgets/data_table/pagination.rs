//! Pagination model and footer.

use egui::{ComboBox, Id, Ui};

pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Server-side pagination. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
    pub total_rows: usize,
    pub options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: 10,
            total_rows: 0,
            options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
        }
    }
}

impl Pagination {
    pub fn new(page: usize, rows_per_page: usize, total_rows: usize) -> Self {
        Self {
            page,
            rows_per_page,
            total_rows,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.options = options.into();
        self
    }

    fn page_size(&self) -> usize {
        self.rows_per_page.max(1)
    }

    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.page_size())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        (self.page + 1) * self.page_size() < self.total_rows
    }

    /// `"{from}-{to} of {total}"`, one-based and clamped to `total`.
    pub fn range_label(&self) -> String {
        let total = self.total_rows;
        let from = if total == 0 {
            0
        } else {
            (self.page * self.page_size() + 1).min(total)
        };
        let to = ((self.page + 1) * self.page_size()).min(total);
        format!("{from}-{to} of {total}")
    }

    /// The footer is only shown when there is something to page through.
    pub fn is_visible(&self) -> bool {
        self.total_rows > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    PageChange(usize),
    RowsPerPageChange(usize),
}

/// Renders the footer and returns the intent the user expressed, if any.
pub fn show_footer(ui: &mut Ui, id: Id, pagination: &Pagination) -> Option<PaginationEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.label("Rows per page");
        ComboBox::from_id_salt(id.with("rows_per_page"))
            .selected_text(pagination.rows_per_page.to_string())
            .show_ui(ui, |ui| {
                for &option in &pagination.options {
                    let selected = option == pagination.rows_per_page;
                    if ui.selectable_label(selected, option.to_string()).clicked() && !selected {
                        event = Some(PaginationEvent::RowsPerPageChange(option));
                    }
                }
            });

        ui.add_space(16.0);
        ui.label(pagination.range_label());
        ui.add_space(8.0);

        if ui
            .add_enabled(pagination.has_previous(), egui::Button::new("Previous"))
            .clicked()
        {
            event = Some(PaginationEvent::PageChange(pagination.page - 1));
        }
        if ui
            .add_enabled(pagination.has_next(), egui::Button::new("Next"))
            .clicked()
        {
            event = Some(PaginationEvent::PageChange(pagination.page + 1));
        }
    });

    event
}
