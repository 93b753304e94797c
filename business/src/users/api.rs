//! The two backend calls the add users flow depends on.
//!
//! `UsersApi` is the injection seam: commands hold an `Arc<dyn UsersApi>` and never
//! know which implementation they talk to. `HubUsersApi` is the JupyterHub REST
//! implementation used by the app.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use ustr::Ustr;

use crate::BusinessConfig;

pub const PAGINATION_ACCEPT: &str = "application/jupyterhub-pagination+json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// Result of a create call. Only the status is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddUsersResponse {
    pub status: u16,
}

impl AddUsersResponse {
    pub fn is_success(&self) -> bool {
        self.status < 300
    }
}

#[derive(Debug, Serialize)]
struct AddUsersRequest<'a> {
    usernames: &'a [String],
    admin: bool,
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait UsersApi: Send + Sync {
    /// Create the given users.
    ///
    /// `Ok` carries whatever status the backend answered with; `Err` means the call
    /// itself could not be made.
    async fn add_users(&self, usernames: Vec<String>, admin: bool) -> ApiResult<AddUsersResponse>;

    /// Fetch one page of users; the body is returned as-is.
    async fn update_users(&self, page: usize, limit: usize) -> ApiResult<Value>;
}

/// `UsersApi` backed by the JupyterHub REST API.
#[derive(Debug, Clone)]
pub struct HubUsersApi {
    client: reqwest::Client,
    api_url: Ustr,
    token: Option<String>,
}

impl HubUsersApi {
    pub fn new(api_url: Ustr, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            token,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.api_url(), config.api_token().map(str::to_string))
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.api_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("token {token}")),
            None => request,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl UsersApi for HubUsersApi {
    async fn add_users(&self, usernames: Vec<String>, admin: bool) -> ApiResult<AddUsersResponse> {
        let body = AddUsersRequest {
            usernames: &usernames,
            admin,
        };

        let response = self
            .authorize(self.client.post(self.users_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| UsersApiError::Request(e.to_string()))?;

        Ok(AddUsersResponse {
            status: response.status().as_u16(),
        })
    }

    async fn update_users(&self, page: usize, limit: usize) -> ApiResult<Value> {
        let offset = page * limit;

        let response = self
            .authorize(self.client.get(self.users_url()))
            .query(&[("offset", offset), ("limit", limit)])
            .header("Accept", PAGINATION_ACCEPT)
            .send()
            .await
            .map_err(|e| UsersApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UsersApiError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UsersApiError::Decode(e.to_string()))
    }
}
