//! Loan desk: track checkouts and run returns and renewals.

use egui::Ui;
use libris_business::models::{BookLoan, EntityId, LoanStatus, StatusFilter};
use libris_business::{CollectionState, MutationState, invoke_action};
use libris_states::StateCtx;

use super::list_state::{ListEvents, ListPageState};
use super::shared::{
    Display, ensure_fetched, mutation_feedback, search_box, status_filter, with_page_state,
};
use crate::widgets::{CellValue, ChipColor, ChipProps, Column, DataTable, collection_error};

pub fn loan_status_chip(value: &CellValue) -> ChipProps {
    match value.to_text().as_str() {
        "Active" => ChipProps::color(ChipColor::Primary),
        "Overdue" => ChipProps::color(ChipColor::Error),
        "Returned" => ChipProps::color(ChipColor::Default).outlined(),
        _ => ChipProps::default(),
    }
}

pub fn loan_columns() -> Vec<Column<BookLoan>> {
    vec![
        Column::text("book_title", "Book", |loan: &BookLoan| {
            loan.book_title.as_str().into()
        }),
        Column::text("member_name", "Member", |loan: &BookLoan| {
            loan.member_name.as_str().into()
        }),
        Column::date("checkout_date", "Checked out", |loan: &BookLoan| {
            loan.checkout_date.as_deref().into()
        }),
        Column::date("due_date", "Due", |loan: &BookLoan| {
            loan.due_date.as_deref().into()
        }),
        Column::chip_with(
            "status",
            "Status",
            |loan: &BookLoan| loan.status.label().into(),
            loan_status_chip,
        ),
    ]
}

/// Loan actions run on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoanAction {
    Return,
    Renew,
}

impl LoanAction {
    fn path(self) -> &'static str {
        match self {
            Self::Return => "return",
            Self::Renew => "renew",
        }
    }

    fn done_message(self) -> &'static str {
        match self {
            Self::Return => "Loan returned",
            Self::Renew => "Loan renewed",
        }
    }
}

pub fn loans_page(ctx: &mut StateCtx, ui: &mut Ui) {
    with_page_state::<ListPageState<BookLoan>, _>(ctx, |ctx, page| render(ctx, ui, page));
}

fn render(ctx: &mut StateCtx, ui: &mut Ui, page: &mut ListPageState<BookLoan>) {
    let display = Display::from_ctx(ctx);

    ui.heading("Manage loans");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        search_box(ui, page, "Search by book or member");
        status_filter::<LoanStatus, _>(ui, "loan_status_filter", page);
    });
    ui.add_space(8.0);

    ensure_fetched::<BookLoan>(ctx, &page.query());
    mutation_feedback::<BookLoan>(ctx, ui);

    let busy = ctx.state::<MutationState<BookLoan>>().is_in_flight();
    let columns = loan_columns();
    let mut events = ListEvents::default();
    let mut action: Option<(EntityId, LoanAction)> = None;

    {
        let loans = ctx.state::<CollectionState<BookLoan>>();
        collection_error(ui, loans.error());

        let table = DataTable::new("loans", &columns, loans.items())
            .loading(loans.is_loading())
            .locale(display.locale)
            .pagination(page.pagination(loans.total_elements()))
            .empty_message("No loans found")
            .custom_actions(|ui, loan: &BookLoan| {
                if !loan.is_open() {
                    ui.weak("Closed");
                    return;
                }
                ui.add_enabled_ui(!busy, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Return").clicked() {
                            action = Some((loan.id, LoanAction::Return));
                        }
                        if ui.button("Renew").clicked() {
                            action = Some((loan.id, LoanAction::Renew));
                        }
                    });
                });
            });
        events.attach(table, false).show(ui);
    }

    page.apply(events);

    if let Some((id, action)) = action {
        log::info!("Loan {id}: {}", action.path());
        invoke_action::<BookLoan>(ctx, id, action.path(), action.done_message());
    }
}
