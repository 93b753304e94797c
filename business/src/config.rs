use hub_admin_states::State;
use log::info;
use serde::Deserialize;
use std::any::Any;
use std::env::vars;
use thiserror::Error;
use ustr::Ustr;

use crate::users::{AdminCheckbox, EmptyCommit, FormPolicy};

pub const DEFAULT_HUB_API_URL: &str = "http://127.0.0.1:8081/hub/api";
pub const DEFAULT_PAGE_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("PAGE_LIMIT must be greater than zero")]
    ZeroPageLimit,
}

/// Shape of the environment, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    hub_api_url: Option<String>,
    hub_api_token: Option<String>,
    page_limit: Option<usize>,
    empty_usernames: Option<EmptyCommit>,
    admin_checkbox: Option<AdminCheckbox>,
    guard_in_flight: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub hub_api_url: String,
    /// JupyterHub API token, sent as `Authorization: token <value>` when present.
    pub api_token: Option<String>,
    pub page_limit: usize,
    pub form: FormPolicy,
}

impl BusinessConfig {
    pub fn new(hub_api_url: String) -> Self {
        Self {
            hub_api_url,
            ..Self::default()
        }
    }

    /// Loads configuration from environment variables, falling back to defaults.
    pub fn init() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            hub_api_url,
            hub_api_token,
            page_limit,
            empty_usernames,
            admin_checkbox,
            guard_in_flight,
        } = raw;

        let page_limit = page_limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if page_limit == 0 {
            return Err(ConfigError::ZeroPageLimit);
        }

        let defaults = FormPolicy::default();
        let form = FormPolicy {
            empty_commit: empty_usernames.unwrap_or(defaults.empty_commit),
            admin_checkbox: admin_checkbox.unwrap_or(defaults.admin_checkbox),
            guard_in_flight: guard_in_flight.unwrap_or(defaults.guard_in_flight),
        };

        let hub_api_url = hub_api_url.unwrap_or_else(|| DEFAULT_HUB_API_URL.to_string());
        info!("Using hub API at {hub_api_url}, page limit {page_limit}, form policy {form:?}");

        Ok(Self {
            hub_api_url,
            api_token: hub_api_token.filter(|token| !token.is_empty()),
            page_limit,
            form,
        })
    }

    /// Base URL without a trailing slash.
    pub fn api_url(&self) -> Ustr {
        Ustr::from(self.hub_api_url.trim_end_matches('/'))
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            hub_api_url: DEFAULT_HUB_API_URL.to_string(),
            api_token: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            form: FormPolicy::default(),
        }
    }
}

impl State for BusinessConfig {
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
    use serde_env::from_iter;

    #[test]
    fn defaults_when_environment_is_empty() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");
        let config = BusinessConfig::from_raw(raw).expect("empty env should build");

        assert_eq!(config.hub_api_url, DEFAULT_HUB_API_URL);
        assert_eq!(config.page_limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(config.api_token(), None);
        assert_eq!(config.form, FormPolicy::default());
    }

    #[test]
    fn reads_all_variables() {
        let raw: RawConfig = from_iter(vec![
            ("HUB_API_URL", "https://hub.example.org/hub/api/"),
            ("HUB_API_TOKEN", "secret"),
            ("PAGE_LIMIT", "25"),
            ("EMPTY_USERNAMES", "ignore"),
            ("ADMIN_CHECKBOX", "controlled"),
            ("GUARD_IN_FLIGHT", "false"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(
            config.api_url(),
            Ustr::from("https://hub.example.org/hub/api")
        );
        assert_eq!(config.api_token(), Some("secret"));
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.form.empty_commit, EmptyCommit::Ignore);
        assert_eq!(config.form.admin_checkbox, AdminCheckbox::Controlled);
        assert!(!config.form.guard_in_flight);
    }

    #[test]
    fn zero_page_limit_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("PAGE_LIMIT", "0")]).expect("RawConfig should deserialize");

        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("PAGE_LIMIT"));
    }

    #[test]
    fn empty_token_is_treated_as_missing() {
        let raw: RawConfig =
            from_iter(vec![("HUB_API_TOKEN", "")]).expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.api_token(), None);
    }
}
