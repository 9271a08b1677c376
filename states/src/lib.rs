//! Typed state store for the Libris front end.
//!
//! - [`StateCtx`] holds one value per [`State`] type.
//! - [`Command`]s perform async IO and publish results through an [`Updater`].
//! - [`StateCtx::sync`] applies queued results on the UI thread.

mod command;
mod ctx;
mod error;
mod state;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::StateError;
pub use state::{State, Updater};
