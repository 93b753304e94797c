use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::updater::Update;
use crate::runtime::Spawner;
use crate::{Command, CommandSnapshot, Error, State, Updater};

/// The application store: typed states, registered commands and the update channel.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .field("pending_updates", &self.recv.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            commands: BTreeMap::new(),
            send,
            recv,
        }
    }

    /// Register a state. Adding the same type twice replaces the previous value.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    pub fn state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::state"))
    }

    pub fn state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::state_mut"))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> Result<(), Error> {
        f(self.state_mut::<T>()?);
        Ok(())
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Clone every state that opts into snapshots.
    pub fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }

    /// Run a registered command and spawn the future it returns.
    ///
    /// The runtime is looked up before `run`, so a failed dispatch leaves no
    /// queued updates behind.
    pub fn dispatch<C: Command>(&self) -> Result<(), Error> {
        let name = type_name::<C>();
        let command = self
            .commands
            .get(&TypeId::of::<C>())
            .ok_or_else(|| Error::command_not_found(name))?;
        let spawner = Spawner::current(name)?;

        debug!("Dispatching {name}");
        let fut = command.run(self.snapshot(), self.updater())?;
        spawner.spawn(fut);
        Ok(())
    }

    /// Apply every update queued by commands. Returns how many were applied.
    pub fn sync_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.recv.try_recv() {
            match self.states.get_mut(&update.id) {
                Some(state) => {
                    (update.apply)(state.as_any_mut());
                    applied += 1;
                }
                None => warn!("Update for unregistered state {} dropped", update.name),
            }
        }
        applied
    }
}
