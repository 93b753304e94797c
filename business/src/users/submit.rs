//! Create-then-refresh sequence behind the "Add Users" button.

use log::{error, info, warn};
use thiserror::Error;

use super::api::UsersApi;
use super::page::UserPageEvent;

pub const CONFLICT_STATUS: u16 = 409;

/// Why a submission failed. `Display` is the message shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The create call could not be made at all.
    #[error("Failed to create user.")]
    CreateRejected,
    /// The create call answered with a status of 300 or above.
    #[error("Failed to create user. {}", conflict_hint(.status))]
    CreateStatus { status: u16 },
    /// Users were created but refreshing the listing failed.
    #[error("Failed to update users.")]
    RefreshFailed,
}

fn conflict_hint(status: &u16) -> &'static str {
    if *status == CONFLICT_STATUS {
        "User already exists."
    } else {
        ""
    }
}

/// Create `usernames`, then refresh page 0 of the listing at `limit`.
///
/// The refresh only runs after a successful create. On success the returned event
/// carries the refresh result for page 0.
pub async fn submit_new_users(
    api: &dyn UsersApi,
    usernames: Vec<String>,
    admin: bool,
    limit: usize,
) -> Result<UserPageEvent, SubmitError> {
    let count = usernames.len();

    let response = api.add_users(usernames, admin).await.map_err(|e| {
        error!("Creating {count} user(s) failed: {e}");
        SubmitError::CreateRejected
    })?;

    if !response.is_success() {
        warn!("Creating {count} user(s) returned status {}", response.status);
        return Err(SubmitError::CreateStatus {
            status: response.status,
        });
    }

    info!("Created {count} user(s), refreshing page 0 with limit {limit}");

    let data = api.update_users(0, limit).await.map_err(|e| {
        error!("Refreshing users after create failed: {e}");
        SubmitError::RefreshFailed
    })?;

    Ok(UserPageEvent { data, page: 0 })
}
