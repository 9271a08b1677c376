use egui::Ui;
use libris_business::CollectionState;
use libris_business::models::{StatusFilter, Subscription, SubscriptionStatus};
use libris_states::StateCtx;

use super::list_state::{ListEvents, ListPageState};
use super::shared::{
    Display, confirm_pending_delete, ensure_fetched, mutation_feedback, search_box,
    status_filter, with_page_state,
};
use crate::widgets::{CellValue, ChipColor, ChipProps, Column, DataTable, collection_error};

fn subscription_status_chip(value: &CellValue) -> ChipProps {
    match value.to_text().as_str() {
        "Active" => ChipProps::color(ChipColor::Success),
        "Expired" => ChipProps::color(ChipColor::Warning).outlined(),
        "Cancelled" => ChipProps::color(ChipColor::Default).outlined(),
        _ => ChipProps::default(),
    }
}

pub fn subscription_columns(display: &Display) -> Vec<Column<Subscription>> {
    vec![
        Column::text("member_name", "Member", |subscription: &Subscription| {
            subscription.member_name.as_str().into()
        }),
        Column::text("plan", "Plan", |subscription: &Subscription| {
            subscription.plan.as_str().into()
        }),
        Column::currency(
            "price",
            "Price",
            display.currency.clone(),
            |subscription: &Subscription| subscription.price.into(),
        ),
        Column::date("start_date", "Starts", |subscription: &Subscription| {
            subscription.start_date.as_deref().into()
        }),
        Column::date("end_date", "Ends", |subscription: &Subscription| {
            subscription.end_date.as_deref().into()
        }),
        Column::chip_with(
            "status",
            "Status",
            |subscription: &Subscription| subscription.status.label().into(),
            subscription_status_chip,
        ),
    ]
}

pub fn subscriptions_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<ListPageState<Subscription>, _>(ctx, |ctx, page| render(ctx, ui, page));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, page: &mut ListPageState<Subscription>) {
    let display = Display::from_ctx(ctx);

    ui.heading("Manage subscriptions");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        search_box(ui, page, "Search by member or plan");
        status_filter::<SubscriptionStatus, _>(ui, "subscription_status_filter", page);
    });
    ui.add_space(8.0);

    ensure_fetched::<Subscription>(ctx, &page.query());
    mutation_feedback::<Subscription>(ctx, ui);

    let columns = subscription_columns(&display);
    let mut events = ListEvents::default();
    let mut deleted = None;

    {
        let subscriptions = ctx.state::<CollectionState<Subscription>>();
        collection_error(ui, subscriptions.error());

        let table = DataTable::new("subscriptions", &columns, subscriptions.items())
            .loading(subscriptions.is_loading())
            .locale(display.locale)
            .pagination(page.pagination(subscriptions.total_elements()))
            .empty_message("No subscriptions found")
            .on_delete(|subscription| {
                deleted = Some((
                    subscription.id,
                    format!("{} ({})", subscription.plan, subscription.member_name),
                ));
            });
        events.attach(table, false).show(ui);
    }

    page.apply(events);
    if let Some((id, label)) = deleted {
        page.request_delete(id, label);
    }

    confirm_pending_delete::<Subscription>(ctx, ui, page);
}
