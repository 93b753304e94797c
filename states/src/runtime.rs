use crate::{CommandFuture, Error};

/// Handle to the runtime command futures are spawned on.
///
/// Acquired before a command runs, so a missing runtime is reported before the
/// command has queued any update.
#[derive(Debug, Clone)]
pub struct Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: tokio::runtime::Handle,
}

impl Spawner {
    /// Native builds need a Tokio runtime entered on the calling thread; the binary
    /// enters one before starting eframe and tests run under `#[tokio::test]`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn current(name: &'static str) -> Result<Self, Error> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::no_runtime(name, e.to_string()))?;
        Ok(Self { handle })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn current(_name: &'static str) -> Result<Self, Error> {
        Ok(Self {})
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(&self, fut: CommandFuture) {
        self.handle.spawn(fut);
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn(&self, fut: CommandFuture) {
        wasm_bindgen_futures::spawn_local(fut);
    }
}

/// Spawn a command future on the ambient runtime.
pub fn spawn(name: &'static str, fut: CommandFuture) -> Result<(), Error> {
    Spawner::current(name)?.spawn(fut);
    Ok(())
}
