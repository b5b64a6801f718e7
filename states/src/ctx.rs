use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, HashMap};

use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandSnapshot, Compute, ComputeSnapshot, Error, State, StateRuntime, StateSnapshot,
    TaskHandle, TaskId,
};

/// Owner of all registered states, compute caches, and commands.
///
/// Lives on the UI thread; every mutation goes through `&mut self`. Async
/// results re-enter through the updater channel and are applied by
/// [`sync_computes`](Self::sync_computes). Typical frame order:
/// `sync_computes` → read/mutate state → `flush_commands`.
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queued: Vec<TypeId>,
    in_flight: HashMap<TypeId, TaskHandle>,
    generation: u64,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runtime(&self) -> &StateRuntime {
        &self.runtime
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command + 'static>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// # Panics
    /// Panics if `T` was never registered; that is a wiring error.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered; that is a wiring error.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", type_name::<T>()))
    }

    /// Mutates the registered `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        self.cached::<T>()
            .ok_or_else(|| Error::compute_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    /// Queues a command for spawning at the next [`flush_commands`](Self::flush_commands).
    /// Queueing the same type twice in one frame spawns it once.
    pub fn enqueue_command<T: Command + 'static>(&mut self) {
        let id = TypeId::of::<T>();
        if !self.queued.contains(&id) {
            self.queued.push(id);
        }
    }

    /// Spawns every queued command with a snapshot taken now. A command type
    /// with a previous run still in flight cancels that run first.
    pub fn flush_commands(&mut self) {
        if self.queued.is_empty() {
            return;
        }
        let queued = std::mem::take(&mut self.queued);
        for id in queued {
            if let Some(previous) = self.in_flight.remove(&id) {
                previous.cancel();
            }
            self.generation += 1;
            let generation = self.generation;
            let snap = self.snapshot();
            let updater = self.runtime.updater();
            let token = CancellationToken::new();

            let Some(command) = self.commands.get(&id) else {
                log::warn!("enqueued command was never recorded: {id:?}");
                continue;
            };
            let fut = command.run(snap, updater, token.clone());
            self.runtime.spawn(fut);
            self.in_flight
                .insert(id, TaskHandle::new(TaskId::new(id, generation), token));
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut states = StateSnapshot::new();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                states.insert_cloned(*id, cloned);
            }
        }
        let mut computes = ComputeSnapshot::new();
        for (id, compute) in &self.computes {
            if let Some(cloned) = compute.snapshot() {
                computes.insert_cloned(*id, cloned);
            }
        }
        CommandSnapshot::new(states, computes)
    }

    /// Applies compute updates published by commands since the last call.
    pub fn sync_computes(&mut self) {
        while let Ok((id, value)) = self.runtime.receiver().try_recv() {
            match self.computes.get_mut(&id) {
                Some(compute) => compute.assign_box(value),
                None => log::warn!("compute update for an unregistered cache: {id:?}"),
            }
        }
    }
}
