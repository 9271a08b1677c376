use egui::accesskit::Role;
use egui_kittest::Harness;
use kittest::Queryable;

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Book {
    id: u32,
    title: String,
    price: Option<String>,
    published: Option<String>,
    status: &'static str,
}

impl DataRow for Book {
    type Id = u32;

    fn row_id(&self) -> u32 {
        self.id
    }
}

fn book(id: u32, title: &str) -> Book {
    Book {
        id,
        title: title.to_owned(),
        price: Some("19.5".to_owned()),
        published: Some("2024-03-05T00:00:00Z".to_owned()),
        status: "Available",
    }
}

fn dune() -> Book {
    book(1, "Dune")
}

fn three_books() -> Vec<Book> {
    vec![book(1, "Dune"), book(2, "Emma"), book(3, "Ulysses")]
}

fn title_columns() -> Vec<Column<Book>> {
    vec![Column::text("title", "Title", |b: &Book| b.title.as_str().into())]
}

fn all_kind_columns() -> Vec<Column<Book>> {
    vec![
        Column::text("title", "Title", |b: &Book| b.title.as_str().into()),
        Column::currency("price", "Price", "$", |b: &Book| b.price.as_deref().into()),
        Column::date("published", "Published", |b: &Book| {
            b.published.as_deref().into()
        }),
        Column::chip_with(
            "status",
            "Status",
            |b: &Book| b.status.into(),
            |_| ChipProps::color(ChipColor::Success),
        ),
        Column::custom("badge", "Badge", |ui: &mut Ui, b: &Book| {
            ui.label(format!("#{}", b.id));
        }),
    ]
}

#[derive(Default)]
struct TestState {
    rows: Vec<Book>,
    selected: Vec<u32>,
    loading: bool,
    pagination: Option<Pagination>,
    edited: Option<Book>,
    viewed: Vec<u32>,
    deleted: Vec<u32>,
    reserved: Vec<u32>,
    select_all_calls: Vec<Vec<u32>>,
    select_one_calls: Vec<(u32, bool)>,
    page_changes: Vec<usize>,
    size_changes: Vec<usize>,
}

impl TestState {
    fn with_rows(rows: Vec<Book>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }
}

fn checkbox_count(harness: &Harness<'_, TestState>) -> usize {
    harness.query_all_by_role(Role::CheckBox).count()
}

// Scenarios

#[test]
fn single_column_single_row_renders_plain_table() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows).show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("Title").is_some(), "header");
    assert!(harness.query_by_label("Dune").is_some(), "body cell");
    assert_eq!(checkbox_count(&harness), 0, "no checkbox column");
    assert!(
        harness.query_by_label("Rows per page").is_none(),
        "no footer"
    );
    assert!(
        harness.query_by_label("Actions").is_none(),
        "no actions column without handlers"
    );
}

#[test]
fn edit_button_invokes_handler_with_row() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .on_edit(|row| state.edited = Some(row.clone()))
                .show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("Actions").is_some());
    assert_eq!(harness.query_all_by_label("Edit").count(), 1);
    assert!(harness.query_by_label("View").is_none());
    assert!(harness.query_by_label("Delete").is_none());

    harness.get_by_label("Edit").click();
    harness.step();

    assert_eq!(harness.state().edited, Some(dune()));
}

// Cell kinds

#[test]
fn every_column_kind_renders() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = all_kind_columns();
            DataTable::new("books", &columns, &state.rows).show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("$19.50").is_some(), "currency");
    assert!(harness.query_by_label("3/5/2024").is_some(), "date");
    assert!(harness.query_by_label("Available").is_some(), "chip");
    assert!(harness.query_by_label("#1").is_some(), "custom");
}

#[test]
fn missing_values_render_placeholders() {
    let mut row = dune();
    row.price = None;
    row.published = Some("not a date".to_owned());

    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = all_kind_columns();
            DataTable::new("books", &columns, &state.rows).show(ui);
        },
        TestState::with_rows(vec![row]),
    );

    assert_eq!(harness.query_all_by_label(PLACEHOLDER).count(), 2);
}

#[test]
fn date_columns_follow_locale() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = all_kind_columns();
            DataTable::new("books", &columns, &state.rows)
                .locale(DateLocale::EnGb)
                .show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("05/03/2024").is_some());
}

// Loading and empty

#[test]
fn loading_shows_single_indicator_row() {
    let mut state = TestState::with_rows(three_books());
    state.loading = true;

    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .loading(state.loading)
                .show(ui);
        },
        state,
    );

    assert_eq!(harness.query_all_by_label("Loading...").count(), 1);
    assert!(harness.query_by_label("Dune").is_none(), "no data cells");
    assert!(harness.query_by_label(DEFAULT_EMPTY_MESSAGE).is_none());
    assert!(harness.query_by_label("Title").is_some(), "header stays");
}

#[test]
fn empty_data_shows_default_message_once() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows).show(ui);
        },
        TestState::default(),
    );

    assert_eq!(harness.query_all_by_label("No data available").count(), 1);
    assert!(harness.query_by_label("Loading...").is_none());
}

#[test]
fn empty_message_is_configurable() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .empty_message("No books match your search")
                .show(ui);
        },
        TestState::default(),
    );

    assert!(harness.query_by_label("No books match your search").is_some());
    assert!(harness.query_by_label(DEFAULT_EMPTY_MESSAGE).is_none());
}

#[test]
fn loading_takes_priority_over_empty() {
    let mut state = TestState::default();
    state.loading = true;

    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .loading(state.loading)
                .show(ui);
        },
        state,
    );

    assert!(harness.query_by_label("Loading...").is_some());
    assert!(harness.query_by_label(DEFAULT_EMPTY_MESSAGE).is_none());
}

// Actions

#[test]
fn default_buttons_appear_only_for_set_handlers() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .on_view(|row| state.viewed.push(row.id))
                .on_delete(|row| state.deleted.push(row.id))
                .show(ui);
        },
        TestState::with_rows(three_books()),
    );

    assert_eq!(harness.query_all_by_label("View").count(), 3);
    assert_eq!(harness.query_all_by_label("Delete").count(), 3);
    assert_eq!(harness.query_all_by_label("Edit").count(), 0);
}

#[test]
fn view_and_delete_report_clicked_row() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .on_view(|row| state.viewed.push(row.id))
                .on_delete(|row| state.deleted.push(row.id))
                .show(ui);
        },
        TestState::with_rows(three_books()),
    );

    if let Some(button) = harness.query_all_by_label("View").nth(1) {
        button.click();
    }
    harness.step();
    if let Some(button) = harness.query_all_by_label("Delete").nth(2) {
        button.click();
    }
    harness.step();

    assert_eq!(harness.state().viewed, vec![2]);
    assert_eq!(harness.state().deleted, vec![3]);
}

#[test]
fn custom_actions_replace_default_buttons() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            let reserved = &mut state.reserved;
            DataTable::new("books", &columns, &state.rows)
                .on_view(|_| {})
                .on_edit(|_| {})
                .on_delete(|_| {})
                .custom_actions(|ui, row| {
                    if ui.button("Reserve").clicked() {
                        reserved.push(row.id);
                    }
                })
                .show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("Actions").is_some());
    assert!(harness.query_by_label("View").is_none());
    assert!(harness.query_by_label("Edit").is_none());
    assert!(harness.query_by_label("Delete").is_none());

    harness.get_by_label("Reserve").click();
    harness.step();

    assert_eq!(harness.state().reserved, vec![1]);
}

#[test]
fn actions_flag_hides_default_buttons() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .actions(false)
                .on_edit(|row| state.edited = Some(row.clone()))
                .show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("Actions").is_none());
    assert!(harness.query_by_label("Edit").is_none());
}

#[test]
fn actions_flag_alone_needs_a_handler() {
    let harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            DataTable::new("books", &columns, &state.rows)
                .actions(true)
                .show(ui);
        },
        TestState::with_rows(vec![dune()]),
    );

    assert!(harness.query_by_label("Actions").is_none());
}

// Selection

fn selectable_harness<'a>(state: TestState) -> Harness<'a, TestState> {
    Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            let select_all_calls = &mut state.select_all_calls;
            let select_one_calls = &mut state.select_one_calls;
            DataTable::new("books", &columns, &state.rows)
                .selectable(true)
                .selected(&state.selected)
                .on_select_all(|ids| select_all_calls.push(ids))
                .on_select_one(|id, checked| select_one_calls.push((id, checked)))
                .show(ui);
        },
        state,
    )
}

#[test]
fn selectable_adds_header_and_row_checkboxes() {
    let harness = selectable_harness(TestState::with_rows(three_books()));

    assert_eq!(checkbox_count(&harness), 4);
}

#[test]
fn select_all_on_emits_every_displayed_id() {
    let mut harness = selectable_harness(TestState::with_rows(three_books()));

    if let Some(header) = harness.query_all_by_role(Role::CheckBox).next() {
        header.click();
    }
    harness.step();

    assert_eq!(harness.state().select_all_calls, vec![vec![1, 2, 3]]);
}

#[test]
fn select_all_off_emits_empty_list() {
    let mut state = TestState::with_rows(three_books());
    state.selected = vec![1, 2, 3];
    let mut harness = selectable_harness(state);

    if let Some(header) = harness.query_all_by_role(Role::CheckBox).next() {
        header.click();
    }
    harness.step();

    assert_eq!(harness.state().select_all_calls, vec![Vec::<u32>::new()]);
}

#[test]
fn indeterminate_header_selects_all() {
    let mut state = TestState::with_rows(three_books());
    state.selected = vec![2];
    let mut harness = selectable_harness(state);

    if let Some(header) = harness.query_all_by_role(Role::CheckBox).next() {
        header.click();
    }
    harness.step();

    assert_eq!(harness.state().select_all_calls, vec![vec![1, 2, 3]]);
}

#[test]
fn row_checkbox_emits_toggle_for_row() {
    let mut state = TestState::with_rows(three_books());
    state.selected = vec![3];
    let mut harness = selectable_harness(state);

    // Header is the first checkbox; rows follow in order.
    if let Some(row) = harness.query_all_by_role(Role::CheckBox).nth(1) {
        row.click();
    }
    harness.step();
    if let Some(row) = harness.query_all_by_role(Role::CheckBox).nth(3) {
        row.click();
    }
    harness.step();

    assert_eq!(
        harness.state().select_one_calls,
        vec![(1, true), (3, false)]
    );
    assert!(harness.state().select_all_calls.is_empty());
}

#[test]
fn selection_checkboxes_hidden_while_loading() {
    let mut state = TestState::with_rows(three_books());
    state.loading = true;

    let mut harness = Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            let select_all_calls = &mut state.select_all_calls;
            DataTable::new("books", &columns, &state.rows)
                .selectable(true)
                .selected(&state.selected)
                .loading(state.loading)
                .on_select_all(|ids| select_all_calls.push(ids))
                .show(ui);
        },
        state,
    );

    assert_eq!(checkbox_count(&harness), 1, "only the header checkbox");

    if let Some(header) = harness.query_all_by_role(Role::CheckBox).next() {
        header.click();
    }
    harness.step();

    assert!(
        harness.state().select_all_calls.is_empty(),
        "hidden rows must not be selected"
    );
}

// Pagination

fn paginated_harness<'a>(state: TestState) -> Harness<'a, TestState> {
    Harness::new_ui_state(
        |ui, state: &mut TestState| {
            let columns = title_columns();
            let page_changes = &mut state.page_changes;
            let size_changes = &mut state.size_changes;
            let mut table = DataTable::new("books", &columns, &state.rows)
                .on_page_change(|page| page_changes.push(page))
                .on_rows_per_page_change(|size| size_changes.push(size));
            if let Some(pagination) = state.pagination.clone() {
                table = table.pagination(pagination);
            }
            table.show(ui);
        },
        state,
    )
}

#[test]
fn footer_hidden_when_total_is_zero() {
    let mut state = TestState::with_rows(three_books());
    state.pagination = Some(Pagination::new(0, 10, 0));
    let harness = paginated_harness(state);

    assert!(harness.query_by_label("Rows per page").is_none());
    assert!(harness.query_by_label("Next").is_none());
}

#[test]
fn footer_shows_range_and_navigation() {
    let mut state = TestState::with_rows(three_books());
    state.pagination = Some(Pagination::new(0, 10, 31));
    let mut harness = paginated_harness(state);

    assert!(harness.query_by_label("Rows per page").is_some());
    assert!(harness.query_by_label("1-10 of 31").is_some());

    harness.get_by_label("Previous").click();
    harness.step();
    assert!(
        harness.state().page_changes.is_empty(),
        "previous is disabled on the first page"
    );

    harness.get_by_label("Next").click();
    harness.step();
    assert_eq!(harness.state().page_changes, vec![1]);
}

#[test]
fn rows_per_page_offers_configured_options() {
    let mut state = TestState::with_rows(three_books());
    state.pagination = Some(Pagination::new(0, 10, 31).with_options(vec![5, 10, 25]));
    let mut harness = paginated_harness(state);

    harness.get_by_role(Role::ComboBox).click();
    harness.run();

    assert!(harness.query_by_label("5").is_some());
    assert!(harness.query_by_label("25").is_some());
    assert!(harness.query_by_label("50").is_none());

    harness.get_by_label("25").click();
    harness.run();

    assert_eq!(harness.state().size_changes, vec![25]);
}

#[test]
fn table_never_slices_data() {
    let rows: Vec<Book> = (1..=12).map(|id| book(id, &format!("Book {id}"))).collect();
    let mut state = TestState::with_rows(rows);
    state.pagination = Some(Pagination::new(0, 5, 12));
    let harness = paginated_harness(state);

    assert!(harness.query_by_label("Book 12").is_some());
    assert!(harness.query_by_label("1-5 of 12").is_some());
}
