use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use flume::Receiver;

use crate::command::spawn;
use crate::state::Mutation;
use crate::{Command, State, StateError, Updater};

/// The application's state store.
///
/// Holds one value per registered [`State`] type. UI code reads and writes
/// it synchronously; async commands publish changes through an [`Updater`]
/// which are applied by [`StateCtx::sync`] at the start of each frame.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn Any>>,
    updater: Updater,
    recv: Receiver<Mutation>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.storage.len())
            .field("pending", &self.recv.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            storage: BTreeMap::new(),
            updater: Updater::new(send),
            recv,
        }
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn contains<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| StateError::state_not_found(type_name::<T>()))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, StateError> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
            .ok_or_else(|| StateError::state_not_found(type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered via [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// Panics if `T` was never registered via [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutates `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Handle for publishing changes from async work.
    pub fn updater(&self) -> Updater {
        self.updater.clone()
    }

    /// Applies every queued mutation, in arrival order.
    ///
    /// Returns how many mutations were applied. Mutations targeting a state
    /// that is not registered are dropped.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;

        while let Ok(mutation) = self.recv.try_recv() {
            match self.storage.get_mut(&mutation.id) {
                Some(state) => {
                    (mutation.apply)(&mut **state);
                    applied += 1;
                }
                None => {
                    log::warn!(
                        "Dropping update for unregistered state {}",
                        mutation.type_name
                    );
                }
            }
        }

        applied
    }

    /// Spawns `command` on the platform executor.
    ///
    /// Returns `false` if the command could not be scheduled.
    pub fn dispatch<C: Command>(&self, command: C) -> bool {
        let command = Box::new(command);
        let name = command.name();
        log::debug!("Dispatching {name}");

        let future = command.run(self.updater());
        spawn(name, future)
    }
}
