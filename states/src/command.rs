use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, Error, Updater};

/// Future returned by a command; it is spawned and never awaited by the UI.
#[cfg(not(target_arch = "wasm32"))]
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Future returned by a command; it is spawned and never awaited by the UI.
#[cfg(target_arch = "wasm32")]
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// A manual-only side effect, dispatched explicitly via `StateCtx::dispatch`.
///
/// `run` executes synchronously on the UI thread: it reads what it needs from the
/// snapshot (failing fast if a state is missing) and returns the async part, which
/// reports back exclusively through the `Updater`.
pub trait Command: Any {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> Result<CommandFuture, Error>;
}
