//! Commands that talk to the backend and publish results to the store.
//!
//! UI code calls the helper functions ([`fetch_page`], [`save`], [`delete`],
//! [`delete_many`], [`invoke_action`]). They update the relevant slice
//! synchronously (loading / in-flight), then dispatch a command whose result
//! is applied at the next [`StateCtx::sync`].

use std::marker::PhantomData;

use libris_states::{Command, CommandFuture, StateCtx, Updater};

use crate::api::{ApiClient, ApiError, PageQuery};
use crate::collection::{CollectionState, MutationState};
use crate::models::{EntityId, Resource};

/// Fetches one page of `T` into [`CollectionState<T>`].
pub struct FetchPageCommand<T: Resource> {
    client: ApiClient,
    query: PageQuery,
    generation: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Command for FetchPageCommand<T> {
    fn run(self: Box<Self>, updater: Updater) -> CommandFuture {
        let Self {
            client,
            query,
            generation,
            ..
        } = *self;

        Box::pin(async move {
            let result = client.list::<T>(&query).await;
            if let Err(err) = &result {
                log::warn!("Failed to fetch {}: {err}", T::PATH);
            }
            updater.apply::<CollectionState<T>, _>(move |state| {
                state.finish(generation, result);
            });
        })
    }
}

/// Creates `T` when `id` is `None`, updates it otherwise.
pub struct SaveCommand<T: Resource> {
    client: ApiClient,
    id: Option<EntityId>,
    draft: T::Draft,
}

impl<T: Resource> Command for SaveCommand<T> {
    fn run(self: Box<Self>, updater: Updater) -> CommandFuture {
        let Self { client, id, draft } = *self;

        Box::pin(async move {
            let result = match id {
                Some(id) => client.update::<T>(id, &draft).await,
                None => client.create::<T>(&draft).await,
            };
            let message = match id {
                Some(_) => format!("{} updated", capitalized(T::NAME)),
                None => format!("{} created", capitalized(T::NAME)),
            };
            publish_mutation::<T>(
                &updater,
                result.map(|_| message).map_err(user_message),
            );
        })
    }
}

pub struct DeleteCommand<T: Resource> {
    client: ApiClient,
    id: EntityId,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Command for DeleteCommand<T> {
    fn run(self: Box<Self>, updater: Updater) -> CommandFuture {
        let Self { client, id, .. } = *self;

        Box::pin(async move {
            let result = client.delete::<T>(id).await;
            publish_mutation::<T>(
                &updater,
                result
                    .map(|()| format!("{} deleted", capitalized(T::NAME)))
                    .map_err(user_message),
            );
        })
    }
}

/// Deletes every id in turn. Any failure fails the whole command.
pub struct DeleteManyCommand<T: Resource> {
    client: ApiClient,
    ids: Vec<EntityId>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Command for DeleteManyCommand<T> {
    fn run(self: Box<Self>, updater: Updater) -> CommandFuture {
        let Self { client, ids, .. } = *self;

        Box::pin(async move {
            let total = ids.len();
            let mut deleted = 0;
            let mut first_error: Option<ApiError> = None;

            for id in ids {
                match client.delete::<T>(id).await {
                    Ok(()) => deleted += 1,
                    Err(err) => {
                        log::warn!("Failed to delete {} {id}: {err}", T::NAME);
                        first_error.get_or_insert(err);
                    }
                }
            }

            let result = match first_error {
                None => Ok(format!("Deleted {deleted} {}", plural(T::NAME, deleted))),
                Some(err) => Err(format!(
                    "Deleted {deleted} of {total} {}: {}",
                    plural(T::NAME, total),
                    err.user_message()
                )),
            };

            // Partial success still changed the collection.
            if deleted > 0 {
                updater.apply::<CollectionState<T>, _>(CollectionState::mark_stale);
                T::invalidate_related(&updater);
            }
            publish_mutation::<T>(&updater, result);
        })
    }
}

/// Invokes a server-side action such as `return`, `renew`, `pay` or `waive`.
pub struct EntityActionCommand<T: Resource> {
    client: ApiClient,
    id: EntityId,
    action: &'static str,
    done_message: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Command for EntityActionCommand<T> {
    fn run(self: Box<Self>, updater: Updater) -> CommandFuture {
        let Self {
            client,
            id,
            action,
            done_message,
            ..
        } = *self;

        Box::pin(async move {
            let result = client.invoke::<T>(id, action).await;
            publish_mutation::<T>(
                &updater,
                result.map(|()| done_message).map_err(user_message),
            );
        })
    }
}

fn publish_mutation<T: Resource>(updater: &Updater, result: Result<String, String>) {
    match result {
        Ok(message) => {
            log::info!("{message}");
            updater.apply::<CollectionState<T>, _>(CollectionState::mark_stale);
            T::invalidate_related(updater);
            updater.apply::<MutationState<T>, _>(move |state| state.succeed(message));
        }
        Err(message) => {
            log::warn!("{} mutation failed: {message}", T::NAME);
            updater.apply::<MutationState<T>, _>(move |state| state.fail(message));
        }
    }
}

fn user_message(err: ApiError) -> String {
    err.user_message()
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn plural(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_owned()
    } else {
        format!("{word}s")
    }
}

fn client(ctx: &StateCtx) -> Result<ApiClient, ApiError> {
    ctx.try_state::<ApiClient>()
        .cloned()
        .map_err(|err| ApiError::InvalidConfig(err.to_string()))
}

fn not_scheduled() -> ApiError {
    ApiError::InvalidConfig("no async runtime is available to run the request".to_owned())
}

/// Starts fetching `query` into [`CollectionState<T>`].
///
/// Returns `false` if the request could not be started; the slice then
/// carries the error.
pub fn fetch_page<T: Resource>(ctx: &mut StateCtx, query: PageQuery) -> bool {
    let generation = ctx
        .state_mut::<CollectionState<T>>()
        .begin_fetch(query.clone());

    let client = match client(ctx) {
        Ok(client) => client,
        Err(err) => {
            ctx.state_mut::<CollectionState<T>>()
                .finish(generation, Err(err));
            return false;
        }
    };

    let dispatched = ctx.dispatch(FetchPageCommand::<T> {
        client,
        query,
        generation,
        _marker: PhantomData,
    });
    if !dispatched {
        ctx.state_mut::<CollectionState<T>>()
            .finish(generation, Err(not_scheduled()));
    }
    dispatched
}

/// Re-runs the last query of [`CollectionState<T>`], if any.
pub fn refresh<T: Resource>(ctx: &mut StateCtx) -> bool {
    match ctx.state::<CollectionState<T>>().query().cloned() {
        Some(query) => fetch_page::<T>(ctx, query),
        None => false,
    }
}

fn dispatch_mutation<T, C>(
    ctx: &mut StateCtx,
    label: String,
    build: impl FnOnce(ApiClient) -> C,
) -> bool
where
    T: Resource,
    C: Command,
{
    let client = match client(ctx) {
        Ok(client) => client,
        Err(err) => {
            ctx.state_mut::<MutationState<T>>().fail(err.user_message());
            return false;
        }
    };

    ctx.state_mut::<MutationState<T>>().start(label);
    let dispatched = ctx.dispatch(build(client));
    if !dispatched {
        ctx.state_mut::<MutationState<T>>()
            .fail(not_scheduled().user_message());
    }
    dispatched
}

/// Creates (`id == None`) or updates `T`.
pub fn save<T: Resource>(ctx: &mut StateCtx, id: Option<EntityId>, draft: T::Draft) -> bool {
    let label = format!("Saving {}", T::NAME);
    dispatch_mutation::<T, _>(ctx, label, |client| SaveCommand::<T> { client, id, draft })
}

pub fn delete<T: Resource>(ctx: &mut StateCtx, id: EntityId) -> bool {
    let label = format!("Deleting {}", T::NAME);
    dispatch_mutation::<T, _>(ctx, label, |client| DeleteCommand::<T> {
        client,
        id,
        _marker: PhantomData,
    })
}

/// Deletes all `ids`. An empty list is a no-op.
pub fn delete_many<T: Resource>(ctx: &mut StateCtx, ids: Vec<EntityId>) -> bool {
    if ids.is_empty() {
        return false;
    }
    let label = format!("Deleting {} {}", ids.len(), plural(T::NAME, ids.len()));
    dispatch_mutation::<T, _>(ctx, label, |client| DeleteManyCommand::<T> {
        client,
        ids,
        _marker: PhantomData,
    })
}

/// `POST /{path}/{id}/{action}`; `done_message` is shown on success.
pub fn invoke_action<T: Resource>(
    ctx: &mut StateCtx,
    id: EntityId,
    action: &'static str,
    done_message: impl Into<String>,
) -> bool {
    let label = format!("Running {action} on {} {id}", T::NAME);
    let done_message = done_message.into();
    dispatch_mutation::<T, _>(ctx, label, |client| EntityActionCommand::<T> {
        client,
        id,
        action,
        done_message,
        _marker: PhantomData,
    })
}
