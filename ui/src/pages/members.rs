//! Library members, with role filter and bulk delete.

use egui::Ui;
use libris_business::CollectionState;
use libris_business::models::{Member, MemberRole, StatusFilter};
use libris_states::StateCtx;

use super::list_state::{ListEvents, ListPageState};
use super::modals::details_window;
use super::shared::{
    Display, bulk_delete_bar, confirm_pending_delete, ensure_fetched, mutation_feedback,
    or_placeholder, search_box, status_filter, with_page_state,
};
use crate::widgets::data_table::format_date;
use crate::widgets::{CellValue, ChipColor, ChipProps, Column, DataTable, collection_error};

fn role_chip(value: &CellValue) -> ChipProps {
    match value.to_text().as_str() {
        "Admin" => ChipProps::color(ChipColor::Error),
        "Librarian" => ChipProps::color(ChipColor::Primary),
        _ => ChipProps::color(ChipColor::Default).outlined(),
    }
}

pub fn member_columns() -> Vec<Column<Member>> {
    vec![
        Column::text("name", "Name", |member: &Member| member.name.as_str().into()),
        Column::text("email", "Email", |member: &Member| member.email.as_str().into()),
        Column::chip_with(
            "role",
            "Role",
            |member: &Member| member.role.label().into(),
            role_chip,
        ),
        Column::date("joined_at", "Joined", |member: &Member| {
            member.joined_at.as_deref().into()
        }),
    ]
}

fn member_details(member: &Member, display: &Display) -> Vec<(&'static str, String)> {
    vec![
        ("Name", member.name.clone()),
        ("Email", member.email.clone()),
        ("Phone", or_placeholder(member.phone.as_deref())),
        ("Role", member.role.label().to_owned()),
        (
            "Joined",
            format_date(&member.joined_at.as_deref().into(), display.locale),
        ),
    ]
}

pub fn members_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<ListPageState<Member>, _>(ctx, |ctx, page| render(ctx, ui, page));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, page: &mut ListPageState<Member>) {
    let display = Display::from_ctx(ctx);

    ui.heading("Manage members");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        search_box(ui, page, "Search by name or email");
        status_filter::<MemberRole, _>(ui, "member_role_filter", page);
    });
    ui.add_space(8.0);

    ensure_fetched::<Member>(ctx, &page.query());
    mutation_feedback::<Member>(ctx, ui);

    if bulk_delete_bar(ui, page) {
        page.request_bulk_delete();
    }

    let columns = member_columns();
    let mut events = ListEvents::default();
    let mut viewed = None;
    let mut deleted = None;

    {
        let members = ctx.state::<CollectionState<Member>>();
        collection_error(ui, members.error());

        let table = DataTable::new("members", &columns, members.items())
            .loading(members.is_loading())
            .locale(display.locale)
            .selected(&page.selected)
            .pagination(page.pagination(members.total_elements()))
            .empty_message("No members found")
            .on_view(|member| viewed = Some(member.clone()))
            .on_delete(|member| deleted = Some((member.id, member.name.clone())));
        events.attach(table, true).show(ui);
    }

    page.apply(events);
    if viewed.is_some() {
        page.viewing = viewed;
    }
    if let Some((id, name)) = deleted {
        page.request_delete(id, name);
    }

    confirm_pending_delete::<Member>(ctx, ui, page);

    if let Some(member) = &page.viewing
        && details_window(ui, "Member details", &member_details(member, &display))
    {
        page.viewing = None;
    }
}
