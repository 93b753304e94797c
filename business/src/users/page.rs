//! The shared user listing page and the event that refreshes it.

use hub_admin_states::State;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::any::Any;

/// Broadcast after a user page has been fetched (the `USER_PAGE` action).
///
/// `data` is whatever `update_users` returned, forwarded untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPageEvent {
    pub data: Value,
    pub page: usize,
}

/// Row shape of the JupyterHub user model; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    pub name: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub last_activity: Option<String>,
}

/// Process-wide user listing state.
///
/// `limit` is the page size every refresh requests. It is set from configuration
/// and only read by the add users flow.
#[derive(Debug, Clone)]
pub struct UsersPage {
    pub limit: usize,
    pub page: usize,
    pub data: Option<Value>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Bumped by every applied event. Refresh results carry the revision they
    /// started from and are dropped once a newer event landed.
    revision: u64,
}

impl UsersPage {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            page: 0,
            data: None,
            is_loading: false,
            error: None,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply(&mut self, event: UserPageEvent) {
        self.data = Some(event.data);
        self.page = event.page;
        self.is_loading = false;
        self.error = None;
        self.revision += 1;
    }

    /// Apply a refresh started at `revision`. Returns false, and only clears the
    /// loading flag, when a newer event has been applied since.
    pub fn apply_refresh(&mut self, revision: u64, event: UserPageEvent) -> bool {
        if revision != self.revision {
            debug!("Dropping stale refresh of page {} (revision {revision})", event.page);
            self.is_loading = false;
            return false;
        }
        self.apply(event);
        true
    }

    /// Record a failed refresh started at `revision`, unless a newer event landed.
    pub fn refresh_failed(&mut self, revision: u64, error: String) -> bool {
        if revision != self.revision {
            debug!("Dropping stale refresh error (revision {revision}): {error}");
            self.is_loading = false;
            return false;
        }
        self.set_error(error);
        true
    }

    pub fn set_loading(&mut self) {
        self.is_loading = true;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_loading = false;
    }

    pub fn offset(&self) -> usize {
        self.page * self.limit
    }

    /// Users in the stored page.
    ///
    /// Accepts both the paginated envelope (`{"items": [...], "_pagination": {...}}`)
    /// and a bare array. Returns `None` when nothing is loaded or the shape is unknown.
    pub fn users(&self) -> Option<Vec<UserSummary>> {
        let data = self.data.as_ref()?;
        let items = match data {
            Value::Array(_) => data,
            Value::Object(map) => map.get("items")?,
            _ => return None,
        };
        serde_json::from_value(items.clone()).ok()
    }

    /// Total number of users reported by the paginated envelope.
    pub fn total(&self) -> Option<u64> {
        self.data
            .as_ref()?
            .get("_pagination")?
            .get("total")?
            .as_u64()
    }
}

impl Default for UsersPage {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_LIMIT)
    }
}

impl State for UsersPage {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn refresh_from_an_older_revision_is_dropped() {
        let mut page = UsersPage::new(10);
        let started_at = page.revision();
        page.set_loading();

        page.apply(UserPageEvent {
            data: json!({"items": [{"name": "new"}]}),
            page: 0,
        });
        page.set_loading();

        let applied = page.apply_refresh(
            started_at,
            UserPageEvent {
                data: json!({"items": []}),
                page: 0,
            },
        );

        assert!(!applied);
        assert!(!page.is_loading);
        assert_eq!(page.data, Some(json!({"items": [{"name": "new"}]})));

        assert!(!page.refresh_failed(started_at, "late".to_string()));
        assert!(page.error.is_none());
    }

    #[test]
    fn refresh_from_the_current_revision_applies() {
        let mut page = UsersPage::new(10);
        let started_at = page.revision();
        page.set_loading();

        assert!(page.apply_refresh(
            started_at,
            UserPageEvent {
                data: json!([]),
                page: 0,
            },
        ));
        assert_eq!(page.data, Some(json!([])));
        assert_eq!(page.revision(), started_at + 1);

        let started_at = page.revision();
        assert!(page.refresh_failed(started_at, "boom".to_string()));
        assert_eq!(page.error.as_deref(), Some("boom"));
    }

    #[test]
    fn apply_stores_data_and_page() {
        let mut page = UsersPage::new(10);
        page.set_loading();
        page.set_error("boom".to_string());

        page.apply(UserPageEvent {
            data: json!({"data": []}),
            page: 2,
        });

        assert_eq!(page.page, 2);
        assert_eq!(page.data, Some(json!({"data": []})));
        assert!(!page.is_loading);
        assert!(page.error.is_none());
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn users_from_paginated_envelope() {
        let mut page = UsersPage::new(50);
        page.apply(UserPageEvent {
            data: json!({
                "items": [
                    {"name": "alice", "admin": true, "kind": "user"},
                    {"name": "bob"}
                ],
                "_pagination": {"offset": 0, "limit": 50, "total": 2}
            }),
            page: 0,
        });

        let users = page.users().expect("users should parse");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "alice");
        assert!(users[0].admin);
        assert!(!users[1].admin);
        assert_eq!(page.total(), Some(2));
    }

    #[test]
    fn users_from_bare_array() {
        let mut page = UsersPage::new(50);
        page.apply(UserPageEvent {
            data: json!([{"name": "carol", "admin": false}]),
            page: 0,
        });

        let users = page.users().expect("users should parse");
        assert_eq!(users[0].name, "carol");
        assert_eq!(page.total(), None);
    }

    #[test]
    fn unknown_shape_has_no_users() {
        let mut page = UsersPage::new(50);
        assert!(page.users().is_none());

        page.apply(UserPageEvent {
            data: json!({"data": [1, 2, 3]}),
            page: 0,
        });
        assert!(page.users().is_none());
    }
}
