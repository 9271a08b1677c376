//! Commands: explicit, manual-only side effects.
//!
//! A command owns its inputs, performs async IO, and reports back only
//! through an [`Updater`]. Commands never run implicitly; UI code dispatches
//! them via [`crate::StateCtx::dispatch`].

use std::future::Future;
use std::pin::Pin;

use crate::Updater;

/// Future returned by [`Command::run`].
///
/// On native targets the future must be `Send` so it can be spawned on Tokio.
/// On wasm32 it runs on the JS event loop and may hold non-`Send` JS values.
#[cfg(not(target_arch = "wasm32"))]
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

#[cfg(target_arch = "wasm32")]
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

pub trait Command: 'static {
    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn run(self: Box<Self>, updater: Updater) -> CommandFuture;
}

/// Spawns a command future on the platform executor.
///
/// Returns `false` when no executor is available (native code outside a
/// Tokio runtime); the command is dropped in that case.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn(name: &'static str, future: CommandFuture) -> bool {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            drop(handle.spawn(future));
            true
        }
        Err(err) => {
            log::error!("Cannot dispatch {name}: {err}");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn(_name: &'static str, future: CommandFuture) -> bool {
    wasm_bindgen_futures::spawn_local(future);
    true
}
