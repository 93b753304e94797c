//! Home page: the current page of hub users.
//!
//! Shows whatever the last `UserPageEvent` stored in `UsersPage`. The first visit
//! loads page 0 on its own; "Refresh" reloads the current page.

use egui::{Button, Grid, RichText, Ui};
use hub_admin_business::{RefreshUsersCommand, Route, UsersPage};
use hub_admin_states::StateCtx;
use log::error;

use crate::utils::colors::ADMIN_BADGE;
use crate::widgets::error_banner;

pub const REFRESH_LABEL: &str = "🔄 Refresh";
pub const ADD_USERS_LABEL: &str = "Add Users";

pub fn home_page(ctx: &mut StateCtx, ui: &mut Ui) {
    let Ok(page) = ctx.state::<UsersPage>() else {
        error!("Home page cannot render: UsersPage is not registered");
        return;
    };

    let needs_initial_load = page.data.is_none() && !page.is_loading && page.error.is_none();
    let mut refresh = needs_initial_load;
    let mut navigate = None;

    ui.horizontal(|ui| {
        ui.heading("Users");
        if ui
            .add_enabled(!page.is_loading, Button::new(REFRESH_LABEL))
            .clicked()
        {
            refresh = true;
        }
        if ui.button(ADD_USERS_LABEL).clicked() {
            navigate = Some(Route::AddUsers);
        }
        if page.is_loading {
            ui.spinner();
        }
    });
    ui.separator();

    if let Some(message) = &page.error {
        error_banner(ui, message);
        ui.add_space(8.0);
    }

    users_table(ui, page);

    if refresh && let Err(err) = ctx.dispatch::<RefreshUsersCommand>() {
        error!("Failed to dispatch RefreshUsersCommand: {err}");
    }

    if let Some(route) = navigate
        && let Err(err) = ctx.update::<Route>(|current| *current = route)
    {
        error!("Failed to navigate to {}: {err}", route.path());
    }
}

fn users_table(ui: &mut Ui, page: &UsersPage) {
    let Some(data) = &page.data else {
        ui.weak("No users loaded yet.");
        return;
    };

    let Some(users) = page.users() else {
        // Not a shape we know; show it raw rather than nothing.
        ui.monospace(data.to_string());
        return;
    };

    let first = page.offset() + 1;
    let last = page.offset() + users.len();
    match page.total() {
        Some(total) => ui.weak(format!("Showing {first}-{last} of {total}")),
        None => ui.weak(format!("Page {}", page.page + 1)),
    };

    Grid::new("users_grid")
        .striped(true)
        .num_columns(3)
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Admin");
            ui.strong("Last activity");
            ui.end_row();

            for user in &users {
                ui.label(&user.name);
                if user.admin {
                    ui.label(RichText::new("admin").color(ADMIN_BADGE));
                } else {
                    ui.label("");
                }
                ui.label(user.last_activity.as_deref().unwrap_or("never"));
                ui.end_row();
            }
        });
}
