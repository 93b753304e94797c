//! Route state for page navigation.
//!
//! Navigating is replacing this state; the app renders the page it names.

use hub_admin_states::State;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Application root (`/`): the paged user list.
    #[default]
    Home,
    /// `/add-users`: the add users form.
    AddUsers,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AddUsers => "/add-users",
        }
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}
