//! Inline feedback for fetches and mutations.

use egui::Ui;
use libris_business::MutationStatus;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Renders `Error: {message}` in red when the last fetch failed.
pub fn collection_error(ui: &mut Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.colored_label(COLOR_RED, format!("Error: {error}"));
    }
}

/// Renders the outcome of the latest mutation.
///
/// Returns `true` when the user dismissed a finished outcome.
pub fn mutation_banner(ui: &mut Ui, status: &MutationStatus) -> bool {
    match status {
        MutationStatus::Idle => false,
        MutationStatus::InFlight(label) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("{label}..."));
            });
            false
        }
        MutationStatus::Done(message) => {
            ui.horizontal(|ui| {
                ui.colored_label(COLOR_GREEN, message);
                ui.small_button("Dismiss").clicked()
            })
            .inner
        }
        MutationStatus::Failed(message) => {
            ui.horizontal(|ui| {
                ui.colored_label(COLOR_RED, format!("Error: {message}"));
                ui.small_button("Dismiss").clicked()
            })
            .inner
        }
    }
}

#[cfg(test)]
mod status_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use libris_business::MutationStatus;

    use super::{collection_error, mutation_banner};

    #[test]
    fn collection_error_is_prefixed() {
        let harness = Harness::new_ui(|ui| {
            collection_error(ui, Some("Service unavailable"));
        });

        assert!(harness.query_by_label("Error: Service unavailable").is_some());
    }

    #[test]
    fn no_error_renders_nothing() {
        let harness = Harness::new_ui(|ui| {
            collection_error(ui, None);
        });

        assert!(harness.query_by_label_contains("Error").is_none());
    }

    #[test]
    fn idle_banner_is_empty() {
        let harness = Harness::new_ui(|ui| {
            mutation_banner(ui, &MutationStatus::Idle);
        });

        assert!(harness.query_by_label("Dismiss").is_none());
    }

    #[test]
    fn failed_banner_can_be_dismissed() {
        let mut harness = Harness::new_ui_state(
            |ui, dismissed: &mut bool| {
                let status = MutationStatus::Failed("Book not found".to_owned());
                if mutation_banner(ui, &status) {
                    *dismissed = true;
                }
            },
            false,
        );

        assert!(harness.query_by_label("Error: Book not found").is_some());

        harness.get_by_label("Dismiss").click();
        harness.step();

        assert!(*harness.state());
    }

    #[test]
    fn done_banner_shows_message() {
        let harness = Harness::new_ui(|ui| {
            mutation_banner(ui, &MutationStatus::Done("Book created".to_owned()));
        });

        assert!(harness.query_by_label("Book created").is_some());
    }
}
