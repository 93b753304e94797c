use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::State;

pub(crate) type ApplyFn = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending mutation of one state, produced off the UI thread.
pub(crate) struct Update {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
    pub(crate) apply: ApplyFn,
}

/// Send-safe handle commands use to publish results back into `StateCtx`.
///
/// Updates queue on a channel and take effect on the next
/// [`crate::StateCtx::sync_updates`], which the UI calls once per frame.
#[derive(Clone, Debug)]
pub struct Updater {
    send: Sender<Update>,
}

impl std::fmt::Debug for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update").field("state", &self.name).finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Replace the whole state.
    pub fn set<T: State + Send>(&self, value: T) {
        self.update::<T>(move |state| *state = value);
    }

    /// Mutate the state in place once the update is applied.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let name = type_name::<T>();
        let apply: ApplyFn = Box::new(move |any| match any.downcast_mut::<T>() {
            Some(state) => f(state),
            None => warn!("Updater: stored value is not a {name}, update dropped"),
        });

        let update = Update {
            id: TypeId::of::<T>(),
            name,
            apply,
        };

        if self.send.send(update).is_err() {
            warn!("Updater: state context is gone, update for {name} dropped");
        }
    }
}
