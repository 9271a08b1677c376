use std::time::Duration;

use egui_kittest::Harness;
use libris_ui::LibrisApp;
use libris_ui::state::State;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Frames and network waits used by [`TestCtx::settle`].
pub const SETTLE_FRAMES: usize = 10;
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 25;

pub struct TestCtx<'a, T = LibrisApp> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Steps frames while giving spawned requests time to finish.
    pub async fn settle(&mut self) {
        for _ in 0..SETTLE_FRAMES {
            self.harness.step();
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        self.harness.step();
    }
}

impl<'a> TestCtx<'a, LibrisApp> {
    /// Starts the app against `mock_server`. Mount the mocks the first
    /// frame needs before calling this.
    pub async fn new_app(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = State::test(mock_server.uri());
        let app = LibrisApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Backend page payload.
pub fn page_json(content: Vec<Value>, total_elements: usize) -> Value {
    json!({
        "content": content,
        "totalElements": total_elements,
        "number": 0,
        "size": 10,
    })
}

pub fn book_json(id: i64, title: &str, author: &str, available_copies: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": author,
        "genre": "Fiction",
        "totalCopies": 2,
        "availableCopies": available_copies,
        "price": 19.5,
        "createdAt": "2024-03-05T00:00:00Z",
    })
}

#[allow(unused)]
pub fn loan_json(id: i64, book_title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "bookId": 1,
        "bookTitle": book_title,
        "memberId": 2,
        "memberName": "Ada Lovelace",
        "checkoutDate": "2024-03-01",
        "dueDate": "2024-03-15",
        "status": status,
    })
}
