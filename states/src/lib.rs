//! Reactive state container for the roster app.
//!
//! The model is deliberately small:
//! - [`State`]: plain data owned by the UI thread, stored in a [`StateCtx`].
//! - [`Compute`]: a cache readable by the UI and replaced wholesale by
//!   commands through the [`Updater`] channel.
//! - [`Command`]: a manual-only side effect (network IO, timers) that reads
//!   a [`CommandSnapshot`] and publishes results back via the updater.
//! - [`Debouncer`]: a cancellable scheduled delivery, used for search.
//!
//! All mutation happens on the UI thread; async results re-enter through
//! channels and are applied during the frame.

mod command;
mod compute;
mod ctx;
mod debounce;
mod error;
mod runtime;
mod snapshot;
mod state;
mod task;
mod time;
mod updater;

pub use command::Command;
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use debounce::Debouncer;
pub use error::Error;
pub use runtime::StateRuntime;
pub use snapshot::{CommandSnapshot, ComputeSnapshot, StateSnapshot};
pub use state::State;
pub use task::{TaskHandle, TaskId};
pub use time::Time;
pub use updater::Updater;
