//! Building blocks shared by the list pages.

use egui::{ComboBox, TextEdit, Ui};
use libris_business::models::{Resource, StatusFilter};
use libris_business::{
    BusinessConfig, CollectionState, DateLocale, MutationState, PageQuery, delete, delete_many,
    fetch_page,
};
use libris_states::{State, StateCtx};

use super::list_state::{ListPageState, PendingDelete};
use super::modals::confirm_delete;
use crate::widgets::mutation_banner;

/// Display settings read from [`BusinessConfig`] once per frame.
#[derive(Debug, Clone)]
pub struct Display {
    pub locale: DateLocale,
    pub currency: String,
}

impl Display {
    pub fn from_ctx(ctx: &StateCtx) -> Self {
        match ctx.try_state::<BusinessConfig>() {
            Ok(config) => Self {
                locale: config.locale,
                currency: config.currency_symbol.clone(),
            },
            Err(_) => Self {
                locale: DateLocale::default(),
                currency: "$".to_owned(),
            },
        }
    }
}

/// Takes page state `S` out of the store for the duration of `f`.
///
/// This lets a page mutate its own state while it borrows collection
/// slices from the same store.
pub fn with_page_state<S, R>(ctx: &mut StateCtx, f: impl FnOnce(&mut StateCtx, &mut S) -> R) -> R
where
    S: State + Default,
{
    let mut page = std::mem::take(ctx.state_mut::<S>());
    let result = f(ctx, &mut page);
    *ctx.state_mut::<S>() = page;
    result
}

/// Starts a fetch when `query` differs from what the slice holds, or the
/// slice was marked stale by a mutation.
pub fn ensure_fetched<T: Resource>(ctx: &mut StateCtx, query: &PageQuery) {
    if ctx.state::<CollectionState<T>>().needs_fetch(query) {
        log::debug!("Fetching {} page {} (size {})", T::PATH, query.page, query.size);
        fetch_page::<T>(ctx, query.clone());
    }
}

pub fn search_box<T>(ui: &mut Ui, page: &mut ListPageState<T>, hint: &str) {
    let response = ui.add(
        TextEdit::singleline(&mut page.search)
            .hint_text(hint)
            .desired_width(240.0),
    );
    if response.changed() {
        page.search_changed();
    }
}

pub const ALL_STATUSES: &str = "All statuses";

/// Combo box over `S::FILTERS`, plus an entry clearing the filter.
pub fn status_filter<S: StatusFilter, T>(ui: &mut Ui, id_salt: &str, page: &mut ListPageState<T>) {
    let selected_text = page
        .status
        .and_then(|code| S::FILTERS.iter().find(|status| status.code() == code))
        .map_or(ALL_STATUSES, |status| status.label());

    let mut status = page.status;
    ComboBox::from_id_salt(id_salt)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut status, None, ALL_STATUSES);
            for filter in S::FILTERS {
                ui.selectable_value(&mut status, Some(filter.code()), filter.label());
            }
        });
    page.set_status(status);
}

/// Shows the latest mutation outcome for `T` and clears it when dismissed.
pub fn mutation_feedback<T: Resource>(ctx: &mut StateCtx, ui: &mut Ui) {
    if mutation_banner(ui, ctx.state::<MutationState<T>>().status()) {
        ctx.state_mut::<MutationState<T>>().clear();
    }
}

/// Shows the confirmation for `page.pending_delete` and runs it once confirmed.
pub fn confirm_pending_delete<T: Resource>(
    ctx: &mut StateCtx,
    ui: &Ui,
    page: &mut ListPageState<T>,
) {
    let Some(pending) = page.pending_delete.clone() else {
        return;
    };

    let title = format!("Delete {}", T::NAME);
    match confirm_delete(ui, &title, &pending.prompt(T::NAME)) {
        Some(true) => {
            page.pending_delete = None;
            match pending {
                PendingDelete::One { id, .. } => {
                    delete::<T>(ctx, id);
                    page.select_one(id, false);
                }
                PendingDelete::Many(ids) => {
                    delete_many::<T>(ctx, ids);
                    page.selected.clear();
                }
            }
        }
        Some(false) => page.pending_delete = None,
        None => {}
    }
}

/// `"{n} selected"` next to a bulk delete button. Returns `true` on click.
pub fn bulk_delete_bar<T>(ui: &mut Ui, page: &ListPageState<T>) -> bool {
    if page.selected.is_empty() {
        return false;
    }
    ui.horizontal(|ui| {
        ui.label(format!("{} selected", page.selected.len()));
        ui.button("Delete selected").clicked()
    })
    .inner
}

/// Formats an optional value for the details dialog.
pub fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(crate::widgets::data_table::PLACEHOLDER)
        .to_owned()
}
