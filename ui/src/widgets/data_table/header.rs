//! Header row rendering.

use egui::{Checkbox, Ui};

use super::cells::render_header_label;
use super::columns::Column;
use super::row::header_cell;
use super::selection::HeaderCheckState;

/// Renders the select-all checkbox, greyed out unless `enabled`.
///
/// Returns the new checked value when the user toggled it.
pub fn render_select_all(ui: &mut Ui, state: HeaderCheckState, enabled: bool) -> Option<bool> {
    let mut checked = state == HeaderCheckState::Checked;
    let indeterminate = state == HeaderCheckState::Indeterminate;

    header_cell(ui, |ui| {
        ui.add_enabled(
            enabled,
            Checkbox::without_text(&mut checked).indeterminate(indeterminate),
        )
            .on_hover_text("Select all")
            .clicked()
            .then_some(checked)
    })
    .inner
}

/// Renders the column titles, plus the actions title when `with_actions`.
pub fn render_column_headers<R>(ui: &mut Ui, columns: &[Column<R>], with_actions: bool) {
    for column in columns {
        header_cell(ui, |ui| render_header_label(ui, column));
    }
    if with_actions {
        header_cell(ui, |ui| {
            ui.strong("Actions");
        });
    }
}
