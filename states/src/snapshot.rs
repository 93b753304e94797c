use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Cloned view of every snapshot-able state, taken when a command is dispatched.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.inner.len())
            .finish()
    }
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: State + Clone>(&self) -> Option<T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
    }

    /// Like [`Self::get`] but reports which state was missing.
    pub fn state<T: State + Clone>(&self) -> Result<T, Error> {
        self.get::<T>()
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "command snapshot"))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
