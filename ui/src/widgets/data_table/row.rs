//! Body row rendering.
//!
//! Uses a Typora-like style: a light header band, padded cells and a thin
//! outer border drawn by the table.

use egui::{Checkbox, Color32, Frame, InnerResponse, Margin, RichText, Ui};

/// Border color of the table frame (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

pub fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Which default action button was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// Buttons rendered for the handlers that are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActions {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl DefaultActions {
    pub fn any(self) -> bool {
        self.view || self.edit || self.delete
    }
}

pub fn render_default_actions(ui: &mut Ui, actions: DefaultActions) -> Option<RowAction> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        if actions.view && ui.button("View").clicked() {
            clicked = Some(RowAction::View);
        }
        if actions.edit && ui.button("Edit").clicked() {
            clicked = Some(RowAction::Edit);
        }
        if actions.delete
            && ui
                .button(RichText::new("Delete").color(Color32::from_rgb(211, 47, 47)))
                .clicked()
        {
            clicked = Some(RowAction::Delete);
        }
    });

    clicked
}

/// Returns the new checked value when the row checkbox was toggled.
pub fn render_row_checkbox(ui: &mut Ui, selected: bool) -> Option<bool> {
    let mut checked = selected;
    data_cell(ui, |ui| ui.add(Checkbox::without_text(&mut checked)).clicked())
        .inner
        .then_some(checked)
}

/// The single full-width row shown instead of data while loading or empty.
pub fn render_placeholder_row(ui: &mut Ui, loading: bool, empty_message: &str) {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 16))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                if loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading...");
                    });
                } else {
                    ui.label(RichText::new(empty_message).weak());
                }
            });
        });
}
