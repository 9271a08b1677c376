use std::any::{Any, TypeId, type_name};

use flume::Sender;

/// Marker for values that can live inside a [`crate::StateCtx`].
///
/// Every state is stored once per concrete type and looked up by `TypeId`.
pub trait State: Any {}

/// A deferred mutation produced off the UI thread.
pub(crate) struct Mutation {
    pub(crate) id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) apply: Box<dyn FnOnce(&mut dyn Any) + Send>,
}

/// Cloneable, `Send` handle that async work uses to publish state changes.
///
/// Mutations are queued and only applied when the owning
/// [`crate::StateCtx::sync`] runs, so every write lands on the UI thread in
/// the order it was sent.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Mutation>,
}

impl std::fmt::Debug for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutation")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Mutation>) -> Self {
        Self { send }
    }

    /// Queues `f` to run against the registered `T`.
    pub fn apply<T, F>(&self, f: F)
    where
        T: State,
        F: FnOnce(&mut T) + Send + 'static,
    {
        let mutation = Mutation {
            id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            apply: Box::new(move |any: &mut dyn Any| {
                if let Some(state) = any.downcast_mut::<T>() {
                    f(state);
                }
            }),
        };

        if self.send.send(mutation).is_err() {
            log::debug!("StateCtx dropped; discarding update for {}", type_name::<T>());
        }
    }

    /// Queues a wholesale replacement of the registered `T`.
    pub fn set<T>(&self, value: T)
    where
        T: State + Send,
    {
        self.apply::<T, _>(move |state| *state = value);
    }
}
