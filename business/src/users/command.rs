//! Commands for the add users form and the user listing.
//!
//! Both are manual-only: the UI dispatches them explicitly. They read the shared
//! store through the command snapshot and publish results through the `Updater`;
//! the backend is the `UsersApi` injected at registration.
//!
//! ## How to use
//! 1) Register once during app setup:
//!    - `ctx.record_command(AddUsersCommand::new(api.clone()));`
//!    - `ctx.record_command(RefreshUsersCommand::new(api));`
//!
//! 2) When the user clicks "Add Users":
//!    - `ctx.dispatch::<AddUsersCommand>()`
//!    - later in the frame loop: `ctx.sync_updates()`

use std::sync::Arc;

use hub_admin_states::{Command, CommandFuture, CommandSnapshot, Error, Updater};
use log::{error, info};

use super::api::UsersApi;
use super::form::AddUsersForm;
use super::page::{UserPageEvent, UsersPage};
use super::submit::submit_new_users;
use crate::Route;

/// Submits the pending users of `AddUsersForm`.
///
/// On success: publishes the page-0 `UserPageEvent`, resets the form and navigates
/// to `Route::Home`. On failure: sets the form error and leaves the input intact.
pub struct AddUsersCommand {
    api: Arc<dyn UsersApi>,
}

impl AddUsersCommand {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for AddUsersCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddUsersCommand").finish_non_exhaustive()
    }
}

impl Command for AddUsersCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> Result<CommandFuture, Error> {
        let form = snap.state::<AddUsersForm>()?;
        let limit = snap.state::<UsersPage>()?.limit;

        let usernames = form.usernames();
        if usernames.is_empty() {
            info!("AddUsersCommand: nothing pending, skipping");
            let fut: CommandFuture = Box::pin(async {});
            return Ok(fut);
        }

        if form.policy().guard_in_flight && form.is_in_flight() {
            info!("AddUsersCommand: a submission is already in flight, skipping");
            let fut: CommandFuture = Box::pin(async {});
            return Ok(fut);
        }

        updater.update::<AddUsersForm>(AddUsersForm::begin_submit);

        let api = Arc::clone(&self.api);
        let admin = form.is_admin();

        let fut: CommandFuture = Box::pin(async move {
            info!(
                "AddUsersCommand: creating {} user(s), admin: {admin}",
                usernames.len()
            );

            match submit_new_users(api.as_ref(), usernames, admin, limit).await {
                Ok(event) => {
                    updater.update::<UsersPage>(move |page| page.apply(event));
                    updater.update::<AddUsersForm>(AddUsersForm::reset);
                    updater.set(Route::Home);
                }
                Err(err) => {
                    let message = err.to_string();
                    updater.update::<AddUsersForm>(move |form| {
                        form.set_error(Some(message));
                        form.finish_submit();
                    });
                }
            }
        });
        Ok(fut)
    }
}

/// Re-fetches the current page of `UsersPage`.
///
/// A result is dropped when another page event was applied while it was in flight.
pub struct RefreshUsersCommand {
    api: Arc<dyn UsersApi>,
}

impl RefreshUsersCommand {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for RefreshUsersCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshUsersCommand").finish_non_exhaustive()
    }
}

impl Command for RefreshUsersCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> Result<CommandFuture, Error> {
        let current = snap.state::<UsersPage>()?;
        let (page, limit, revision) = (current.page, current.limit, current.revision());

        updater.update::<UsersPage>(UsersPage::set_loading);

        let api = Arc::clone(&self.api);
        let fut: CommandFuture = Box::pin(async move {
            match api.update_users(page, limit).await {
                Ok(data) => {
                    info!("RefreshUsersCommand: loaded page {page}");
                    updater.update::<UsersPage>(move |p| {
                        p.apply_refresh(revision, UserPageEvent { data, page });
                    });
                }
                Err(err) => {
                    error!("RefreshUsersCommand: {err}");
                    let message = err.to_string();
                    updater.update::<UsersPage>(move |p| {
                        p.refresh_failed(revision, message);
                    });
                }
            }
        });
        Ok(fut)
    }
}
