//! Add users domain module.
//!
//! This module is the single home for:
//! - `AddUsersForm`: local state of the add users form
//! - `UsersPage` / `UserPageEvent`: the shared user listing and its refresh event
//! - `UsersApi`: the injected backend, with the JupyterHub implementation
//! - `AddUsersCommand` / `RefreshUsersCommand`: the side effects the UI dispatches
//!
//! UI code under `ui/src/**` should not define domain `State`/`Command`.
//! It should only read via `ctx.state::<T>()` and trigger changes via `ctx.dispatch::<Cmd>()`.

pub mod api;
pub mod command;
pub mod form;
pub mod page;
pub mod submit;

pub use api::{AddUsersResponse, ApiResult, HubUsersApi, UsersApi, UsersApiError};
pub use command::{AddUsersCommand, RefreshUsersCommand};
pub use form::{AddUsersForm, AdminCheckbox, EMPTY_PLACEHOLDER, EmptyCommit, FormPolicy, PendingUser};
pub use page::{UserPageEvent, UserSummary, UsersPage};
pub use submit::{CONFLICT_STATUS, SubmitError, submit_new_users};
