//! Fines raised by the backend; staff can record payment or waive them.

use egui::Ui;
use libris_business::models::{EntityId, Fine, FineStatus, StatusFilter};
use libris_business::{CollectionState, MutationState, invoke_action};
use libris_states::StateCtx;

use super::list_state::{ListEvents, ListPageState};
use super::shared::{
    Display, ensure_fetched, mutation_feedback, search_box, status_filter, with_page_state,
};
use crate::widgets::{CellValue, ChipColor, ChipProps, Column, DataTable, collection_error};

pub fn fine_status_chip(value: &CellValue) -> ChipProps {
    match value.to_text().as_str() {
        "Unpaid" => ChipProps::color(ChipColor::Error),
        "Paid" => ChipProps::color(ChipColor::Success),
        "Waived" => ChipProps::color(ChipColor::Default).outlined(),
        _ => ChipProps::default(),
    }
}

pub fn fine_columns(display: &Display) -> Vec<Column<Fine>> {
    vec![
        Column::text("member_name", "Member", |fine: &Fine| {
            fine.member_name.as_str().into()
        }),
        Column::text("reason", "Reason", |fine: &Fine| fine.reason.as_str().into()),
        Column::currency("amount", "Amount", display.currency.clone(), |fine: &Fine| {
            fine.amount.into()
        }),
        Column::chip_with(
            "status",
            "Status",
            |fine: &Fine| fine.status.label().into(),
            fine_status_chip,
        ),
        Column::date("issued_at", "Issued", |fine: &Fine| {
            fine.issued_at.as_deref().into()
        }),
    ]
}

pub fn fines_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<ListPageState<Fine>, _>(ctx, |ctx, page| render(ctx, ui, page));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, page: &mut ListPageState<Fine>) {
    let display = Display::from_ctx(ctx);

    ui.heading("Manage fines");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        search_box(ui, page, "Search by member or reason");
        status_filter::<FineStatus, _>(ui, "fine_status_filter", page);
    });
    ui.add_space(8.0);

    ensure_fetched::<Fine>(ctx, &page.query());
    mutation_feedback::<Fine>(ctx, ui);

    let busy = ctx.state::<MutationState<Fine>>().is_in_flight();
    let columns = fine_columns(&display);
    let mut events = ListEvents::default();
    let mut action: Option<(EntityId, &'static str, &'static str)> = None;

    {
        let fines = ctx.state::<CollectionState<Fine>>();
        collection_error(ui, fines.error());

        let table = DataTable::new("fines", &columns, fines.items())
            .loading(fines.is_loading())
            .locale(display.locale)
            .pagination(page.pagination(fines.total_elements()))
            .empty_message("No fines found")
            .custom_actions(|ui, fine: &Fine| {
                if !fine.is_outstanding() {
                    ui.weak("Settled");
                    return;
                }
                ui.add_enabled_ui(!busy, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Mark paid").clicked() {
                            action = Some((fine.id, "pay", "Fine marked as paid"));
                        }
                        if ui.button("Waive").clicked() {
                            action = Some((fine.id, "waive", "Fine waived"));
                        }
                    });
                });
            });
        events.attach(table, false).show(ui);
    }

    page.apply(events);

    if let Some((id, path, done_message)) = action {
        log::info!("Fine {id}: {path}");
        invoke_action::<Fine>(ctx, id, path, done_message);
    }
}
