use std::any::Any;

/// A compute-shaped cache: read by the UI via
/// [`StateCtx::cached`](crate::StateCtx::cached) and replaced wholesale by
/// commands via [`Updater::set`](crate::Updater::set).
pub trait Compute: Any {
    fn as_any(&self) -> &dyn Any;

    /// Cloned copy included in command snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>>;

    /// Replaces this cache with a value published through the updater
    /// channel. Implementations delegate to [`assign_impl`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Downcasts `new_self` to `T` and moves it into `slot`. A value of a
/// foreign type is dropped with a warning rather than panicking the frame
/// loop.
pub fn assign_impl<T: Compute + Sized>(slot: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *slot = *value,
        Err(_) => log::warn!(
            "dropped compute update with wrong type for {}",
            std::any::type_name::<T>()
        ),
    }
}
