//! Minimal typed state store shared by the business and UI crates.
//!
//! - `State`: a value stored in `StateCtx`, looked up by type.
//! - `Command`: an explicitly dispatched side effect. It reads a `CommandSnapshot`
//!   and reports back through an `Updater`.
//! - `StateCtx::sync_updates` applies queued updates on the UI thread.

mod command;
mod ctx;
mod error;
mod runtime;
mod snapshot;
mod state;
mod updater;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::Error;
pub use runtime::{Spawner, spawn};
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use updater::Updater;
