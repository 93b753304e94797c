//! One page per `Route`.
//!
//! - `home_page`: the current page of hub users
//! - `add_users_page`: the form that creates new users

mod add_users_page;
mod home_page;

pub use add_users_page::{ADMIN_LABEL, NEW_USERS_LABEL, PAGE_TITLE, SUBMIT_LABEL, add_users_page};
pub use home_page::{ADD_USERS_LABEL, REFRESH_LABEL, home_page};
