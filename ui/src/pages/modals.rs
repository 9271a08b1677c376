//! Dialogs shared by the list pages.

use egui::{Grid, Id, RichText, Ui, Window};

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

/// Label of the confirming button, distinct from the table's row buttons.
pub const CONFIRM_DELETE_LABEL: &str = "Yes, delete";

/// Shows a delete confirmation.
///
/// Returns `Some(true)` when confirmed, `Some(false)` when cancelled or
/// closed, and `None` while the user has not decided.
pub fn confirm_delete(ui: &Ui, title: &str, prompt: &str) -> Option<bool> {
    let mut open = true;
    let mut decision = None;

    Window::new(title)
        .id(Id::new(("confirm_delete", title)))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.colored_label(COLOR_AMBER, "Warning");
            ui.add_space(4.0);
            ui.label(prompt);
            ui.label("This action cannot be undone.");
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(CONFIRM_DELETE_LABEL).color(COLOR_RED))
                    .clicked()
                {
                    decision = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(false);
                }
            });
        });

    if !open {
        decision = Some(false);
    }
    decision
}

/// Shows read-only `(label, value)` pairs. Returns `true` once closed.
pub fn details_window(ui: &Ui, title: &str, fields: &[(&str, String)]) -> bool {
    let mut open = true;
    let mut close = false;

    Window::new(title)
        .id(Id::new(("details", title)))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new(("details_grid", title))
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for (label, value) in fields {
                        ui.strong(*label);
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    close || !open
}
