//! Row selection math.

use super::DataRow;

/// State of the select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Computes the header state over the displayed rows.
///
/// Checked iff every row in `data` is selected and `data` is non-empty,
/// indeterminate iff some but not all are, unchecked otherwise.
pub fn header_check_state<R: DataRow>(data: &[R], selected: &[R::Id]) -> HeaderCheckState {
    let selected_count = data
        .iter()
        .filter(|row| selected.contains(&row.row_id()))
        .count();

    if data.is_empty() || selected_count == 0 {
        HeaderCheckState::Unchecked
    } else if selected_count == data.len() {
        HeaderCheckState::Checked
    } else {
        HeaderCheckState::Indeterminate
    }
}

pub fn all_ids<R: DataRow>(data: &[R]) -> Vec<R::Id> {
    data.iter().map(DataRow::row_id).collect()
}

pub fn is_selected<R: DataRow>(row: &R, selected: &[R::Id]) -> bool {
    selected.contains(&row.row_id())
}

/// Applies a row toggle to an owned selection, keeping insertion order.
pub fn toggle_selection<Id: PartialEq>(selected: &mut Vec<Id>, id: Id, checked: bool) {
    let position = selected.iter().position(|existing| *existing == id);
    match (checked, position) {
        (true, None) => selected.push(id),
        (false, Some(index)) => {
            selected.remove(index);
        }
        _ => {}
    }
}
