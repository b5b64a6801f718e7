use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// A manual-only side effect (network IO, timers).
///
/// Commands are enqueued via
/// [`StateCtx::enqueue_command`](crate::StateCtx::enqueue_command) and
/// spawned at the end of the frame by
/// [`StateCtx::flush_commands`](crate::StateCtx::flush_commands). A command
/// reads from the [`CommandSnapshot`] taken at spawn time and publishes
/// results through the [`Updater`]; it never holds references into live
/// state.
///
/// Spawning a command while a previous run of the same type is still in
/// flight cancels that run through its token.
pub trait Command: Send {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
