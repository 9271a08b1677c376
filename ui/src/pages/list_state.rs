//! UI state shared by every list page.

use libris_business::PageQuery;
use libris_business::models::{EntityId, Resource};
use libris_states::State;

use crate::widgets::data_table::toggle_selection;
use crate::widgets::{DataRow, DataTable, Pagination};

/// A delete waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    One { id: EntityId, label: String },
    Many(Vec<EntityId>),
}

impl PendingDelete {
    pub fn prompt(&self, noun: &str) -> String {
        match self {
            Self::One { label, .. } => format!("Are you sure you want to delete {noun} '{label}'?"),
            Self::Many(ids) => format!("Are you sure you want to delete {} selected items?", ids.len()),
        }
    }
}

/// Search, filter, pagination and selection of one list page.
///
/// Stored in the [`libris_states::StateCtx`] so it survives switching pages.
#[derive(Debug, Clone)]
pub struct ListPageState<T> {
    pub search: String,
    pub status: Option<&'static str>,
    pub page: usize,
    pub rows_per_page: usize,
    pub selected: Vec<EntityId>,
    pub pending_delete: Option<PendingDelete>,
    /// Row shown in the details dialog.
    pub viewing: Option<T>,
}

impl<T> Default for ListPageState<T> {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<T: Resource> State for ListPageState<T> {}

impl<T> ListPageState<T> {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            search: String::new(),
            status: None,
            page: 0,
            rows_per_page: rows_per_page.max(1),
            selected: Vec::new(),
            pending_delete: None,
            viewing: None,
        }
    }

    /// The query the page currently wants loaded.
    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.page, self.rows_per_page)
            .with_search(&self.search)
            .with_status(self.status)
    }

    pub fn pagination(&self, total_rows: usize) -> Pagination {
        Pagination::new(self.page, self.rows_per_page, total_rows)
    }

    /// Restarts from the first page after the search text was edited.
    pub fn search_changed(&mut self) {
        self.page = 0;
        self.selected.clear();
    }

    pub fn set_status(&mut self, status: Option<&'static str>) {
        if self.status != status {
            self.status = status;
            self.page = 0;
            self.selected.clear();
        }
    }

    /// Selection is dropped on every page change.
    pub fn set_page(&mut self, page: usize) {
        if self.page != page {
            self.page = page;
            self.selected.clear();
        }
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
        self.selected.clear();
    }

    pub fn select_all(&mut self, ids: Vec<EntityId>) {
        self.selected = ids;
    }

    pub fn select_one(&mut self, id: EntityId, checked: bool) {
        toggle_selection(&mut self.selected, id, checked);
    }

    pub fn request_delete(&mut self, id: EntityId, label: impl Into<String>) {
        self.pending_delete = Some(PendingDelete::One {
            id,
            label: label.into(),
        });
    }

    pub fn request_bulk_delete(&mut self) {
        if !self.selected.is_empty() {
            self.pending_delete = Some(PendingDelete::Many(self.selected.clone()));
        }
    }
}

/// Pagination and selection intents reported by a table during one frame.
///
/// Each handler writes its own field, so the table can hold all of them at
/// once while the page state stays untouched until [`ListPageState::apply`].
#[derive(Debug, Default)]
pub struct ListEvents {
    pub page: Option<usize>,
    pub rows_per_page: Option<usize>,
    pub select_all: Option<Vec<EntityId>>,
    pub select_one: Option<(EntityId, bool)>,
}

impl ListEvents {
    /// Wires the pagination handlers, and the selection handlers when
    /// `selectable`.
    pub fn attach<'a, R>(&'a mut self, table: DataTable<'a, R>, selectable: bool) -> DataTable<'a, R>
    where
        R: DataRow<Id = EntityId>,
    {
        let table = table
            .on_page_change(|page| self.page = Some(page))
            .on_rows_per_page_change(|size| self.rows_per_page = Some(size));

        if selectable {
            table
                .selectable(true)
                .on_select_all(|ids| self.select_all = Some(ids))
                .on_select_one(|id, checked| self.select_one = Some((id, checked)))
        } else {
            table
        }
    }
}

impl<T> ListPageState<T> {
    pub fn apply(&mut self, events: ListEvents) {
        if let Some(ids) = events.select_all {
            self.select_all(ids);
        }
        if let Some((id, checked)) = events.select_one {
            self.select_one(id, checked);
        }
        if let Some(size) = events.rows_per_page {
            self.set_rows_per_page(size);
        }
        if let Some(page) = events.page {
            self.set_page(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use libris_business::models::Book;

    use super::*;

    fn state() -> ListPageState<Book> {
        ListPageState::new(10)
    }

    #[test]
    fn query_reflects_filters() {
        let mut page = state();
        page.search = "  dune ".to_owned();
        page.set_status(Some("ACTIVE"));
        page.set_page(2);

        let query = page.query();
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 10);
        assert_eq!(query.search.as_deref(), Some("dune"));
        assert_eq!(query.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn blank_search_is_not_sent() {
        let mut page = state();
        page.search = "   ".to_owned();

        assert_eq!(page.query().search, None);
    }

    #[test]
    fn page_change_clears_selection() {
        let mut page = state();
        page.select_all(vec![1, 2, 3]);
        page.set_page(1);

        assert!(page.selected.is_empty());
    }

    #[test]
    fn same_page_keeps_selection() {
        let mut page = state();
        page.select_one(4, true);
        page.set_page(0);

        assert_eq!(page.selected, vec![4]);
    }

    #[test]
    fn filters_reset_to_first_page() {
        let mut page = state();
        page.set_page(3);
        page.set_status(Some("PAID"));
        assert_eq!(page.page, 0);

        page.set_page(3);
        page.set_rows_per_page(25);
        assert_eq!(page.page, 0);
        assert_eq!(page.rows_per_page, 25);

        page.set_page(3);
        page.search_changed();
        assert_eq!(page.page, 0);
    }

    #[test]
    fn select_one_toggles() {
        let mut page = state();
        page.select_one(1, true);
        page.select_one(2, true);
        page.select_one(1, false);

        assert_eq!(page.selected, vec![2]);
    }

    #[test]
    fn bulk_delete_requires_selection() {
        let mut page = state();
        page.request_bulk_delete();
        assert_eq!(page.pending_delete, None);

        page.select_all(vec![5, 6]);
        page.request_bulk_delete();
        assert_eq!(page.pending_delete, Some(PendingDelete::Many(vec![5, 6])));
    }

    #[test]
    fn prompts_name_the_target() {
        let one = PendingDelete::One {
            id: 1,
            label: "Dune".to_owned(),
        };
        assert_eq!(one.prompt("book"), "Are you sure you want to delete book 'Dune'?");
        assert_eq!(
            PendingDelete::Many(vec![1, 2]).prompt("book"),
            "Are you sure you want to delete 2 selected items?"
        );
    }

    #[test]
    fn apply_handles_every_event() {
        let mut page = state();
        page.apply(ListEvents {
            select_all: Some(vec![1, 2]),
            select_one: Some((3, true)),
            ..ListEvents::default()
        });
        assert_eq!(page.selected, vec![1, 2, 3]);

        page.apply(ListEvents {
            page: Some(2),
            ..ListEvents::default()
        });
        assert_eq!(page.page, 2);
        assert!(page.selected.is_empty());

        page.apply(ListEvents {
            rows_per_page: Some(50),
            ..ListEvents::default()
        });
        assert_eq!(page.page, 0);
        assert_eq!(page.rows_per_page, 50);
    }

    #[test]
    fn pagination_mirrors_page_state() {
        let mut page = state();
        page.set_page(1);

        let pagination = page.pagination(31);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.rows_per_page, 10);
        assert_eq!(pagination.range_label(), "11-20 of 31");
    }
}
