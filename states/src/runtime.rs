use std::any::{Any, TypeId};
use std::future::Future;
use std::sync::OnceLock;

use flume::{Receiver, Sender};

use crate::Updater;

/// Channel plumbing and task spawning shared by a
/// [`StateCtx`](crate::StateCtx).
///
/// Owns the updater channel pair and knows how to spawn futures: on the
/// ambient tokio runtime when one is running (tests), or on a lazily built
/// fallback runtime otherwise (the native app, where eframe owns the main
/// thread).
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
    recv: Receiver<(TypeId, Box<dyn Any + Send>)>,
    fallback: OnceLock<tokio::runtime::Runtime>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            fallback: OnceLock::new(),
        }
    }

    /// A write handle for publishing compute updates.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub(crate) fn receiver(&self) -> &Receiver<(TypeId, Box<dyn Any + Send>)> {
        &self.recv
    }

    /// Spawns `fut` on the ambient tokio runtime, or on the fallback runtime
    /// when none is running.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(fut);
            }
            Err(_) => {
                let runtime = self.fallback.get_or_init(|| {
                    tokio::runtime::Builder::new_multi_thread()
                        .worker_threads(2)
                        .enable_all()
                        .build()
                        .expect("failed to build the state runtime")
                });
                runtime.spawn(fut);
            }
        }
    }
}
