//! Cancellable scheduled delivery.
//!
//! Each [`Debouncer::schedule`] call cancels the outstanding task and arms a
//! new one that delivers its value after the quiet period. Only the most
//! recently scheduled value can fire; values from superseded tasks are
//! discarded even if their timer already expired.

use std::any::TypeId;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{StateRuntime, TaskHandle, TaskId};

pub struct Debouncer<T> {
    delay: Duration,
    send: flume::Sender<(u64, T)>,
    recv: flume::Receiver<(u64, T)>,
    pending: Option<TaskHandle>,
    generation: u64,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            delay,
            send,
            recv,
            pending: None,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer with `value`, cancelling any pending delivery.
    pub fn schedule(&mut self, runtime: &StateRuntime, value: T) -> TaskId {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        self.generation += 1;
        let id = TaskId::new(TypeId::of::<T>(), self.generation);
        let token = CancellationToken::new();
        let handle = TaskHandle::new(id, token.clone());

        let send = self.send.clone();
        let delay = self.delay;
        let generation = self.generation;
        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = send.send((generation, value));
                }
            }
        });

        self.pending = Some(handle);
        id
    }

    /// Drops the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    /// Returns the value whose quiet period elapsed since the last poll, if
    /// any. Values from superseded schedules are dropped here.
    pub fn poll(&mut self) -> Option<T> {
        let mut fired = None;
        while let Ok((generation, value)) = self.recv.try_recv() {
            if generation == self.generation {
                fired = Some(value);
            }
        }
        if fired.is_some() {
            self.pending = None;
        }
        fired
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_cancelled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(800);

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_quiet_period() {
        let runtime = StateRuntime::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(&runtime, "alpha".to_owned());
        assert!(debouncer.poll().is_none());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(900)).await;

        assert_eq!(debouncer.poll().as_deref(), Some("alpha"));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_cancels_the_pending_delivery() {
        let runtime = StateRuntime::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(&runtime, "alpha".to_owned());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.schedule(&runtime, "beta".to_owned());

        // 900ms after the first schedule, but only 500ms after the second.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(debouncer.poll().is_none());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(debouncer.poll().as_deref(), Some("beta"));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_delivery() {
        let runtime = StateRuntime::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(&runtime, "alpha".to_owned());
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(debouncer.poll().is_none());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn value_fired_before_a_reschedule_is_dropped() {
        let runtime = StateRuntime::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(&runtime, "alpha".to_owned());
        tokio::time::sleep(Duration::from_millis(900)).await;
        // "alpha" has fired but was not polled; a newer schedule supersedes it.
        debouncer.schedule(&runtime, "beta".to_owned());

        assert!(debouncer.poll().is_none());

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(debouncer.poll().as_deref(), Some("beta"));
    }
}
