//! The add users form.
//!
//! Reads and mutates `AddUsersForm` directly for keystrokes and clicks; submitting
//! goes through `AddUsersCommand`, whose results show up after the next
//! `sync_updates`.

use egui::{Button, RichText, Ui};
use hub_admin_business::{AddUsersCommand, AddUsersForm, Route};
use hub_admin_states::StateCtx;
use log::error;

use crate::widgets::{Crumb, TokenInputEvent, breadcrumbs, error_banner, token_input};

pub const PAGE_TITLE: &str = "Add Users";
pub const NEW_USERS_LABEL: &str = "New User(s)";
pub const ADMIN_LABEL: &str = "Give Admin Privileges";
pub const SUBMIT_LABEL: &str = "Add Users";

pub fn add_users_page(ctx: &mut StateCtx, ui: &mut Ui) {
    let navigate = breadcrumbs(
        ui,
        &[Crumb::link("Home", Route::Home), Crumb::current(PAGE_TITLE)],
    );
    ui.separator();

    let submit = match ctx.state_mut::<AddUsersForm>() {
        Ok(form) => form_body(ui, form),
        Err(err) => {
            error!("Add users page cannot render: {err}");
            false
        }
    };

    if submit && let Err(err) = ctx.dispatch::<AddUsersCommand>() {
        error!("Failed to dispatch AddUsersCommand: {err}");
    }

    if let Some(route) = navigate
        && let Err(err) = ctx.update::<Route>(|current| *current = route)
    {
        error!("Failed to navigate to {}: {err}", route.path());
    }
}

/// Returns true when the submit button was clicked.
fn form_body(ui: &mut Ui, form: &mut AddUsersForm) -> bool {
    ui.horizontal(|ui| {
        ui.label(RichText::new("👤").size(22.0));
        ui.heading(PAGE_TITLE);
    });

    if let Some(message) = form.error() {
        ui.add_space(12.0);
        error_banner(ui, message);
    }

    ui.add_space(12.0);
    ui.label(RichText::new(NEW_USERS_LABEL).strong());

    let hint = form.placeholder();
    let pending = form.pending().to_vec();
    match token_input(ui, &pending, form.current_text_mut(), hint) {
        Some(TokenInputEvent::Commit) => {
            form.commit_current_text();
        }
        Some(TokenInputEvent::Remove(id)) => {
            form.remove_user(id);
        }
        None => {}
    }

    ui.add_space(8.0);
    let mut checked = form.is_admin();
    if ui.checkbox(&mut checked, ADMIN_LABEL).changed() {
        form.on_admin_checkbox(checked);
    }

    ui.add_space(12.0);
    ui.separator();

    ui.horizontal(|ui| {
        let clicked = ui
            .add_enabled(form.can_submit(), Button::new(SUBMIT_LABEL))
            .clicked();
        if form.is_in_flight() {
            ui.spinner();
        }
        clicked
    })
    .inner
}
