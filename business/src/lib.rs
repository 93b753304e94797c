//! Business layer of the hub admin app: configuration, routing and the add users flow.

mod config;
mod route;
pub mod users;

pub use config::{BusinessConfig, ConfigError, DEFAULT_HUB_API_URL, DEFAULT_PAGE_LIMIT};
pub use route::Route;
pub use users::{
    AddUsersCommand, AddUsersForm, AddUsersResponse, AdminCheckbox, EmptyCommit, FormPolicy,
    HubUsersApi, PendingUser, RefreshUsersCommand, SubmitError, UserPageEvent, UserSummary,
    UsersApi, UsersApiError, UsersPage,
};
