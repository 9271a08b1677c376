//! Cell formatting and rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use egui::{Align, Color32, CornerRadius, Frame, Layout, Margin, RichText, Stroke, Ui};
use libris_business::DateLocale;

use super::columns::{CellAlign, CellValue, ChipColor, ChipProps, ChipVariant, Column, ColumnKind};

/// Shown for dates and amounts that cannot be parsed.
pub const PLACEHOLDER: &str = "-";

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(local) = NaiveDateTime::parse_from_str(text, format) {
            return Some(local.date());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Formats `value` as a short date in `locale`.
///
/// Text is parsed as RFC 3339, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`;
/// integers are Unix timestamps in milliseconds. Instants are shown in UTC.
pub fn format_date(value: &CellValue, locale: DateLocale) -> String {
    let date = match value {
        CellValue::Text(text) => parse_date(text),
        CellValue::Integer(millis) => {
            DateTime::<Utc>::from_timestamp_millis(*millis).map(|instant| instant.date_naive())
        }
        _ => None,
    };

    date.map_or_else(
        || PLACEHOLDER.to_owned(),
        |date| date.format(locale.short_date_format()).to_string(),
    )
}

/// Formats `value` as `{symbol}{amount:.2}`, e.g. `"19.5"` as `$19.50`.
pub fn format_currency(value: &CellValue, symbol: &str) -> String {
    let amount = match value {
        CellValue::Text(text) => text.trim().parse::<f64>().ok(),
        CellValue::Integer(value) => Some(*value as f64),
        CellValue::Float(value) => Some(*value),
        CellValue::Empty | CellValue::Bool(_) => None,
    };

    let Some(cents) = amount
        .map(|amount| (amount * 100.0).round())
        .filter(|cents| cents.is_finite())
    else {
        return PLACEHOLDER.to_owned();
    };

    // Amounts that round to zero lose their sign.
    if cents < 0.0 {
        format!("-{symbol}{:.2}", -cents / 100.0)
    } else {
        format!("{symbol}{:.2}", cents.abs() / 100.0)
    }
}

fn chip_color(color: ChipColor) -> Color32 {
    match color {
        ChipColor::Default => Color32::from_rgb(97, 97, 97),
        ChipColor::Primary => Color32::from_rgb(25, 118, 210),
        ChipColor::Success => Color32::from_rgb(46, 125, 50),
        ChipColor::Warning => Color32::from_rgb(237, 108, 2),
        ChipColor::Error => Color32::from_rgb(211, 47, 47),
        ChipColor::Info => Color32::from_rgb(2, 136, 209),
    }
}

/// Renders `label` as a rounded chip.
pub fn render_chip(ui: &mut Ui, label: &str, props: ChipProps) {
    let color = chip_color(props.color);
    let (fill, stroke, text_color) = match props.variant {
        ChipVariant::Filled => (color, Stroke::NONE, Color32::WHITE),
        ChipVariant::Outlined => (Color32::TRANSPARENT, Stroke::new(1.0, color), color),
    };

    Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(text_color));
        });
}

fn layout_for(align: CellAlign) -> Layout {
    match align {
        CellAlign::Left => Layout::left_to_right(Align::Center),
        CellAlign::Center => Layout::centered_and_justified(egui::Direction::LeftToRight),
        CellAlign::Right => Layout::right_to_left(Align::Center),
    }
}

/// Renders one body cell of `column` for `row`.
pub fn render_cell<R>(ui: &mut Ui, column: &Column<R>, row: &R, locale: DateLocale) {
    if let Some(width) = column.min_width {
        ui.set_min_width(width);
    }

    ui.with_layout(layout_for(column.align), |ui| match &column.kind {
        ColumnKind::Custom(render) => render(ui, row),
        ColumnKind::Chip { accessor, props } => {
            let value = accessor(row);
            if value.is_empty() {
                return;
            }
            let props = props.as_ref().map_or_else(ChipProps::default, |f| f(&value));
            render_chip(ui, &value.to_text(), props);
        }
        ColumnKind::Date(accessor) => {
            ui.label(format_date(&accessor(row), locale));
        }
        ColumnKind::Currency { accessor, symbol } => {
            ui.label(format_currency(&accessor(row), symbol));
        }
        ColumnKind::Plain(accessor) => {
            ui.label(accessor(row).to_text());
        }
    });
}

/// Renders a header label with the column's alignment.
pub fn render_header_label<R>(ui: &mut Ui, column: &Column<R>) {
    if let Some(width) = column.min_width {
        ui.set_min_width(width);
    }
    ui.with_layout(layout_for(column.align), |ui| {
        ui.strong(&column.header);
    });
}
