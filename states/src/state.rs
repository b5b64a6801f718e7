use std::any::Any;

/// A unit of application state stored in [`StateCtx`](crate::StateCtx).
///
/// States are plain data owned by the UI thread. Async work never touches
/// them directly: commands read cloned snapshots and publish results back
/// through the [`Updater`](crate::Updater) channel.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned copy included in command snapshots. `None` keeps the state out
    /// of snapshots (single-owner state that commands never read).
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
