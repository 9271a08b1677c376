//! Per-entity store slices.
//!
//! Pages read these through [`libris_states::StateCtx`]; commands write them
//! through an [`libris_states::Updater`].

use std::marker::PhantomData;

use libris_states::State;

use crate::api::{ApiError, Page, PageQuery};
use crate::models::Resource;

/// The current page of `T` as last fetched from the backend.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    items: Vec<T>,
    total_elements: usize,
    loading: bool,
    error: Option<String>,
    query: Option<PageQuery>,
    generation: u64,
    stale: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_elements: 0,
            loading: false,
            error: None,
            query: None,
            generation: 0,
            stale: false,
        }
    }
}

impl<T: Resource> State for CollectionState<T> {}

impl<T> CollectionState<T> {
    /// Pre-populated slice, for previews and tests.
    pub fn with_items(items: Vec<T>, total_elements: usize) -> Self {
        Self {
            items,
            total_elements,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Query of the latest fetch, if any fetch was started.
    pub fn query(&self) -> Option<&PageQuery> {
        self.query.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `query` differs from what is loaded or loading.
    pub fn needs_fetch(&self, query: &PageQuery) -> bool {
        self.stale || self.query.as_ref() != Some(query)
    }

    /// Forces the next [`CollectionState::needs_fetch`] to return `true`.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Records a new fetch and returns its generation.
    ///
    /// Only the result carrying the latest generation is accepted by
    /// [`CollectionState::finish`].
    pub fn begin_fetch(&mut self, query: PageQuery) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.stale = false;
        self.query = Some(query);
        self.generation
    }

    /// Applies a fetch result. Returns `false` for a superseded generation.
    pub fn finish(&mut self, generation: u64, result: Result<Page<T>, ApiError>) -> bool {
        if generation != self.generation {
            log::debug!(
                "Ignoring stale fetch result (generation {generation}, current {})",
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.content;
                self.total_elements = page.total_elements;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        true
    }
}

/// Outcome of the latest create/update/delete/action on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    InFlight(String),
    Done(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct MutationState<T> {
    status: MutationStatus,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for MutationState<T> {
    fn default() -> Self {
        Self {
            status: MutationStatus::Idle,
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> State for MutationState<T> {}

impl<T> MutationState<T> {
    pub fn status(&self) -> &MutationStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.status, MutationStatus::InFlight(_))
    }

    pub fn start(&mut self, label: impl Into<String>) {
        self.status = MutationStatus::InFlight(label.into());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.status = MutationStatus::Done(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = MutationStatus::Failed(message.into());
    }

    pub fn clear(&mut self) {
        self.status = MutationStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_owned(),
            author: "Anon".to_owned(),
            isbn: None,
            genre: None,
            description: None,
            published_year: None,
            total_copies: 1,
            available_copies: 1,
            price: None,
            created_at: None,
        }
    }

    fn page_of(items: Vec<Book>, total: usize) -> Page<Book> {
        Page {
            content: items,
            total_elements: total,
            number: 0,
            size: 10,
        }
    }

    #[test]
    fn begin_fetch_sets_loading_and_clears_error() {
        let mut state = CollectionState::<Book>::default();
        let generation = state.begin_fetch(PageQuery::default());
        state.finish(generation, Err(ApiError::Network("offline".to_owned())));
        assert_eq!(state.error(), Some("Network error: offline"));

        state.begin_fetch(PageQuery::default());
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn finish_applies_latest_page() {
        let mut state = CollectionState::<Book>::default();
        let generation = state.begin_fetch(PageQuery::new(0, 10));

        assert!(state.finish(generation, Ok(page_of(vec![book(1, "Dune")], 31))));
        assert!(!state.is_loading());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.total_elements(), 31);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut state = CollectionState::<Book>::default();
        let first = state.begin_fetch(PageQuery::new(0, 10));
        let second = state.begin_fetch(PageQuery::new(1, 10));

        assert!(state.finish(second, Ok(page_of(vec![book(2, "Emma")], 2))));
        assert!(!state.finish(first, Ok(page_of(vec![book(1, "Dune")], 1))));

        assert_eq!(state.items()[0].title, "Emma");
        assert_eq!(state.total_elements(), 2);
    }

    #[test]
    fn error_keeps_previous_items() {
        let mut state = CollectionState::with_items(vec![book(1, "Dune")], 1);
        let generation = state.begin_fetch(PageQuery::default());

        state.finish(
            generation,
            Err(ApiError::Status {
                status: 503,
                message: "Service Unavailable".to_owned(),
            }),
        );

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.error(), Some("Service Unavailable"));
    }

    #[test]
    fn needs_fetch_tracks_query_and_staleness() {
        let mut state = CollectionState::<Book>::default();
        let query = PageQuery::new(0, 10);
        assert!(state.needs_fetch(&query), "never fetched");

        state.begin_fetch(query.clone());
        assert!(!state.needs_fetch(&query));
        assert!(state.needs_fetch(&PageQuery::new(1, 10)));

        state.mark_stale();
        assert!(state.needs_fetch(&query));
    }

    #[test]
    fn mutation_status_transitions() {
        let mut state = MutationState::<Book>::default();
        assert_eq!(state.status(), &MutationStatus::Idle);

        state.start("Deleting book");
        assert!(state.is_in_flight());

        state.fail("Book has active loans");
        assert_eq!(
            state.status(),
            &MutationStatus::Failed("Book has active loans".to_owned())
        );

        state.clear();
        assert_eq!(state.status(), &MutationStatus::Idle);
    }
}
