//! Integration tests for the loan, fine and member pages.

mod common;

use crate::common::{TestCtx, book_json, loan_json, page_json};
use kittest::Queryable;
use libris_ui::pages::Page;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![book_json(1, "Dune", "Frank Herbert", 2)],
            1,
        )))
        .mount(&mock_server)
        .await;

    mock_server
}

async fn open(mock_server: MockServer, nav_label: &str) -> TestCtx<'static> {
    let mut ctx = TestCtx::new_app(mock_server).await;
    ctx.settle().await;

    ctx.harness_mut().get_by_label(nav_label).click();
    ctx.settle().await;

    ctx
}

#[tokio::test]
async fn test_loans_page_runs_return_action() {
    let mock_server = server().await;

    Mock::given(method("GET"))
        .and(path("/api/loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                loan_json(5, "Dune", "OVERDUE"),
                loan_json(6, "Emma", "RETURNED"),
            ],
            2,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/loans/5/return"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = open(mock_server, "Loans").await;
    assert_eq!(ctx.harness().state().page(), Page::Loans);

    {
        let harness = ctx.harness();
        assert!(harness.query_by_label("Overdue").is_some());
        assert!(harness.query_by_label("3/15/2024").is_some());
        assert_eq!(harness.query_all_by_label("Return").count(), 1);
        assert!(harness.query_by_label("Closed").is_some());
    }

    ctx.harness_mut().get_by_label("Return").click();
    ctx.settle().await;

    assert!(ctx.harness().query_by_label("Loan returned").is_some());
}

#[tokio::test]
async fn test_failed_action_shows_error() {
    let mock_server = server().await;

    Mock::given(method("GET"))
        .and(path("/api/loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![loan_json(5, "Dune", "ACTIVE")],
            1,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/loans/5/renew"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Renewal limit reached"
        })))
        .mount(&mock_server)
        .await;

    let mut ctx = open(mock_server, "Loans").await;

    ctx.harness_mut().get_by_label("Renew").click();
    ctx.settle().await;

    assert!(
        ctx.harness()
            .query_by_label("Error: Renewal limit reached")
            .is_some()
    );
}

#[tokio::test]
async fn test_status_filter_is_sent_to_backend() {
    let mock_server = server().await;

    Mock::given(method("GET"))
        .and(path("/api/fines"))
        .and(query_param("status", "PAID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![json!({
                "id": 3,
                "memberId": 2,
                "memberName": "Ada Lovelace",
                "reason": "Late return",
                "amount": 2.5,
                "status": "PAID",
                "issuedAt": "2024-03-20T10:00:00Z",
            })],
            1,
        )))
        .expect(1..)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/fines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&mock_server)
        .await;

    let mut ctx = open(mock_server, "Fines").await;
    assert!(ctx.harness().query_by_label("No fines found").is_some());

    ctx.harness_mut()
        .get_by_role(egui::accesskit::Role::ComboBox)
        .click();
    ctx.settle().await;
    ctx.harness_mut().get_by_label("Paid").click();
    ctx.settle().await;

    let harness = ctx.harness();
    assert!(harness.query_by_label("$2.50").is_some());
    assert!(harness.query_by_label("Settled").is_some());
    assert!(harness.query_by_label("Mark paid").is_none());
}

#[tokio::test]
async fn test_members_page_shows_roles() {
    let mock_server = server().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![json!({
                "id": 2,
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "role": "LIBRARIAN",
                "joinedAt": "2023-11-02",
            })],
            1,
        )))
        .mount(&mock_server)
        .await;

    let mut ctx = open(mock_server, "Members").await;
    {
        let harness = ctx.harness();
        assert!(harness.query_by_label("Manage members").is_some());
        assert!(harness.query_by_label("Librarian").is_some());
        assert!(harness.query_by_label("11/2/2023").is_some());
    }

    ctx.harness_mut().get_by_label("View").click();
    ctx.settle().await;

    assert!(ctx.harness().query_by_label("Member details").is_some());
}
