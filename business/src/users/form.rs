//! Local state of the add users form.
//!
//! Everything here is synchronous bookkeeping driven by UI events. The only async
//! part of the form, submission, lives in `AddUsersCommand`.

use hub_admin_states::State;
use serde::Deserialize;
use std::any::Any;

pub const EMPTY_PLACEHOLDER: &str = "Press enter to add a user";

/// What Enter does when the text field is empty or whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCommit {
    /// Commit the text as typed, even if empty.
    #[default]
    Allow,
    /// Leave the pending list untouched.
    Ignore,
}

/// How the admin checkbox maps onto the admin flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminCheckbox {
    /// Every interaction inverts the current flag, ignoring the checkbox value.
    #[default]
    Toggle,
    /// The flag follows the value the checkbox reports.
    Controlled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormPolicy {
    pub empty_commit: EmptyCommit,
    pub admin_checkbox: AdminCheckbox,
    /// Disable submitting while a submission is in flight.
    pub guard_in_flight: bool,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            empty_commit: EmptyCommit::default(),
            admin_checkbox: AdminCheckbox::default(),
            guard_in_flight: true,
        }
    }
}

/// A username entered but not yet submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUser {
    pub text: String,
    pub id: u32,
}

#[derive(Debug, Clone, Default)]
pub struct AddUsersForm {
    current_text: String,
    pending: Vec<PendingUser>,
    admin: bool,
    error: Option<String>,
    in_flight: bool,
    policy: FormPolicy,
}

impl AddUsersForm {
    pub fn new(policy: FormPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// A fresh form keeping the same policy.
    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// Text field binding for the UI.
    pub fn current_text_mut(&mut self) -> &mut String {
        &mut self.current_text
    }

    pub fn set_current_text(&mut self, text: impl Into<String>) {
        self.current_text = text.into();
    }

    /// Turn the typed text into a pending user (Enter key).
    ///
    /// The new id is the last id plus one, or 0 for an empty list. Returns the
    /// assigned id, or `None` when the empty-text policy skipped the commit.
    pub fn commit_current_text(&mut self) -> Option<u32> {
        if self.policy.empty_commit == EmptyCommit::Ignore && self.current_text.trim().is_empty()
        {
            self.current_text.clear();
            return None;
        }

        let id = self.pending.last().map_or(0, |user| user.id + 1);
        let text = std::mem::take(&mut self.current_text);
        self.pending.push(PendingUser { text, id });
        Some(id)
    }

    /// Returns whether an entry was removed.
    pub fn remove_user(&mut self, id: u32) -> bool {
        let before = self.pending.len();
        self.pending.retain(|user| user.id != id);
        self.pending.len() != before
    }

    pub fn pending(&self) -> &[PendingUser] {
        &self.pending
    }

    pub fn usernames(&self) -> Vec<String> {
        self.pending.iter().map(|user| user.text.clone()).collect()
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
    }

    pub fn toggle_admin(&mut self) {
        self.admin = !self.admin;
    }

    /// Checkbox interaction, `checked` being the value the widget reports.
    pub fn on_admin_checkbox(&mut self, checked: bool) {
        match self.policy.admin_checkbox {
            AdminCheckbox::Toggle => self.toggle_admin(),
            AdminCheckbox::Controlled => self.set_admin(checked),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn begin_submit(&mut self) {
        self.in_flight = true;
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    pub fn can_submit(&self) -> bool {
        !self.pending.is_empty() && !(self.policy.guard_in_flight && self.in_flight)
    }

    /// Hint shown in the text field while nothing is pending.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.pending.is_empty().then_some(EMPTY_PLACEHOLDER)
    }
}

impl State for AddUsersForm {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
