use libris_business::{BusinessConfig, register_library_states};
use libris_states::StateCtx;

use crate::pages::register_page_states;

/// The main application state.
pub struct State {
    /// The state context for business logic and page state.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        register_library_states(&mut ctx, config);
        register_page_states(&mut ctx);

        Self { ctx }
    }

    /// State talking to a mock backend at `base_url`.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}

#[cfg(test)]
mod tests {
    use libris_business::CollectionState;
    use libris_business::models::{Book, Member};

    use super::*;
    use crate::pages::{BooksState, CatalogState, ListPageState};

    #[test]
    fn registers_business_and_page_states() {
        let state = State::test("http://localhost:8080".to_owned());

        assert!(state.ctx.contains::<CollectionState<Book>>());
        assert!(state.ctx.contains::<CatalogState>());
        assert!(state.ctx.contains::<BooksState>());
        assert!(state.ctx.contains::<ListPageState<Member>>());
    }

    #[test]
    fn page_size_follows_config() {
        let mut config = BusinessConfig::new("http://localhost:8080");
        config.default_page_size = 25;
        let state = State::new(config);

        assert_eq!(state.ctx.state::<CatalogState>().list.rows_per_page, 25);
        assert_eq!(state.ctx.state::<ListPageState<Member>>().rows_per_page, 25);
    }
}
