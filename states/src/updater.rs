use std::any::{Any, TypeId};

use flume::Sender;

use crate::Compute;

/// Write handle given to commands for publishing compute updates.
///
/// Values sent here are applied on the UI thread by
/// [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    /// Publishes a full replacement value for the compute cache `T`.
    pub fn set<T: Compute + Send>(&self, value: T) {
        // Send failure means the ctx is gone; the result is moot then.
        let _ = self.send.send((TypeId::of::<T>(), Box::new(value)));
    }
}
