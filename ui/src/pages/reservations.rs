//! Reservation queue. Deleting a reservation cancels the hold.

use egui::Ui;
use libris_business::CollectionState;
use libris_business::models::{Reservation, ReservationStatus, StatusFilter};
use libris_states::StateCtx;

use super::list_state::{ListEvents, ListPageState};
use super::shared::{
    Display, confirm_pending_delete, ensure_fetched, mutation_feedback, search_box,
    status_filter, with_page_state,
};
use crate::widgets::{CellValue, ChipColor, ChipProps, Column, DataTable, collection_error};

pub fn reservation_status_chip(value: &CellValue) -> ChipProps {
    match value.to_text().as_str() {
        "Pending" => ChipProps::color(ChipColor::Warning),
        "Ready for pickup" => ChipProps::color(ChipColor::Success),
        "Fulfilled" => ChipProps::color(ChipColor::Primary).outlined(),
        "Cancelled" | "Expired" => ChipProps::color(ChipColor::Default).outlined(),
        _ => ChipProps::default(),
    }
}

pub fn reservation_columns() -> Vec<Column<Reservation>> {
    vec![
        Column::text("book_title", "Book", |reservation: &Reservation| {
            reservation.book_title.as_str().into()
        }),
        Column::text("member_name", "Member", |reservation: &Reservation| {
            reservation.member_name.as_str().into()
        }),
        Column::date("reserved_at", "Reserved", |reservation: &Reservation| {
            reservation.reserved_at.as_deref().into()
        }),
        Column::chip_with(
            "status",
            "Status",
            |reservation: &Reservation| reservation.status.label().into(),
            reservation_status_chip,
        ),
    ]
}

pub fn reservations_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<ListPageState<Reservation>, _>(ctx, |ctx, page| render(ctx, ui, page));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, page: &mut ListPageState<Reservation>) {
    let display = Display::from_ctx(ctx);

    ui.heading("Manage reservations");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        search_box(ui, page, "Search by book or member");
        status_filter::<ReservationStatus, _>(ui, "reservation_status_filter", page);
    });
    ui.add_space(8.0);

    ensure_fetched::<Reservation>(ctx, &page.query());
    mutation_feedback::<Reservation>(ctx, ui);

    let columns = reservation_columns();
    let mut events = ListEvents::default();
    let mut cancelled = None;

    {
        let reservations = ctx.state::<CollectionState<Reservation>>();
        collection_error(ui, reservations.error());

        let table = DataTable::new("reservations", &columns, reservations.items())
            .loading(reservations.is_loading())
            .locale(display.locale)
            .pagination(page.pagination(reservations.total_elements()))
            .empty_message("No reservations found")
            .on_delete(|reservation| {
                cancelled = Some((reservation.id, reservation.book_title.clone()));
            });
        events.attach(table, false).show(ui);
    }

    page.apply(events);
    if let Some((id, title)) = cancelled {
        page.request_delete(id, title);
    }

    confirm_pending_delete::<Reservation>(ctx, ui, page);
}
