use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name}, context: {context}")]
    StateNotFound { name: &'static str, context: String },
    #[error("Command not found: {name}")]
    CommandNotFound { name: &'static str },
    #[error("No async runtime available to spawn {name}: {reason}")]
    NoRuntime { name: &'static str, reason: String },
}

impl Error {
    pub fn state_not_found(name: &'static str, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            name,
            context: context.into(),
        }
    }

    pub fn command_not_found(name: &'static str) -> Self {
        Self::CommandNotFound { name }
    }

    pub fn no_runtime(name: &'static str, reason: impl Into<String>) -> Self {
        Self::NoRuntime {
            name,
            reason: reason.into(),
        }
    }
}
