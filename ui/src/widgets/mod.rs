mod breadcrumbs;
mod error_banner;
mod token_input;

pub use breadcrumbs::{Crumb, breadcrumbs};
pub use error_banner::error_banner;
pub use token_input::{REMOVE_TOKEN, TokenInputEvent, token_input};
