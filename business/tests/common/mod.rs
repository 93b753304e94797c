#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hub_admin_business::users::ApiResult;
use hub_admin_business::{
    AddUsersCommand, AddUsersForm, AddUsersResponse, FormPolicy, RefreshUsersCommand, Route,
    UsersApi, UsersPage,
};
use hub_admin_states::StateCtx;
use serde_json::Value;

pub const TEST_LIMIT: usize = 25;

/// `UsersApi` answering with fixed results and recording every call.
pub struct ScriptedUsersApi {
    add_result: ApiResult<AddUsersResponse>,
    update_result: ApiResult<Value>,
    add_calls: Mutex<Vec<(Vec<String>, bool)>>,
    update_calls: Mutex<Vec<(usize, usize)>>,
}

impl ScriptedUsersApi {
    pub fn new(add_result: ApiResult<AddUsersResponse>, update_result: ApiResult<Value>) -> Arc<Self> {
        Arc::new(Self {
            add_result,
            update_result,
            add_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_status(status: u16, update_result: ApiResult<Value>) -> Arc<Self> {
        Self::new(Ok(AddUsersResponse { status }), update_result)
    }

    pub fn add_calls(&self) -> Vec<(Vec<String>, bool)> {
        self.add_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<(usize, usize)> {
        self.update_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsersApi for ScriptedUsersApi {
    async fn add_users(&self, usernames: Vec<String>, admin: bool) -> ApiResult<AddUsersResponse> {
        self.add_calls.lock().unwrap().push((usernames, admin));
        self.add_result.clone()
    }

    async fn update_users(&self, page: usize, limit: usize) -> ApiResult<Value> {
        self.update_calls.lock().unwrap().push((page, limit));
        self.update_result.clone()
    }
}

/// A store laid out like the app's, with the form open on the add users route.
pub fn setup_ctx(api: Arc<ScriptedUsersApi>, policy: FormPolicy) -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(AddUsersForm::new(policy));
    ctx.add_state(UsersPage::new(TEST_LIMIT));
    ctx.add_state(Route::AddUsers);
    ctx.record_command(AddUsersCommand::new(api.clone()));
    ctx.record_command(RefreshUsersCommand::new(api));
    ctx
}

pub fn type_users(ctx: &mut StateCtx, names: &[&str]) {
    let form = ctx.state_mut::<AddUsersForm>().unwrap();
    for name in names {
        form.set_current_text(*name);
        form.commit_current_text();
    }
}

/// Let spawned commands finish and apply everything they published.
pub async fn settle(ctx: &mut StateCtx) {
    for _ in 0..10 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        ctx.sync_updates();
    }
}
