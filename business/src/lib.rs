//! Business layer of the Libris front end: configuration, REST client,
//! entity models and the store slices pages read from.

pub mod api;
mod collection;
mod commands;
mod config;
pub mod models;

pub use api::{ApiClient, ApiError, ApiResult, Page, PageQuery, SortDirection};
pub use collection::{CollectionState, MutationState, MutationStatus};
pub use commands::{
    DeleteCommand, DeleteManyCommand, EntityActionCommand, FetchPageCommand, SaveCommand, delete,
    delete_many, fetch_page, invoke_action, refresh, save,
};
pub use config::{BusinessConfig, ConfigError, DateLocale};

use libris_states::StateCtx;
use models::{Book, BookLoan, Fine, Member, Reservation, Resource, Subscription};

fn register_resource<T: Resource>(ctx: &mut StateCtx) {
    ctx.add_state(CollectionState::<T>::default());
    ctx.add_state(MutationState::<T>::default());
}

/// Registers the configuration, API client and one collection and mutation
/// slice per entity.
///
/// An invalid API URL is logged and leaves the client unregistered; every
/// request then fails with [`ApiError::InvalidConfig`].
pub fn register_library_states(ctx: &mut StateCtx, config: BusinessConfig) {
    match ApiClient::from_config(&config) {
        Ok(client) => ctx.add_state(client),
        Err(err) => log::error!("API client unavailable: {err}"),
    }
    ctx.add_state(config);

    register_resource::<Book>(ctx);
    register_resource::<BookLoan>(ctx);
    register_resource::<Reservation>(ctx);
    register_resource::<Fine>(ctx);
    register_resource::<Subscription>(ctx);
    register_resource::<Member>(ctx);
}
