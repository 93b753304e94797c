#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use hub_admin_business::Route;
use hub_admin_ui::HubAdminApp;
use hub_admin_ui::state::State;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, HubAdminApp>,
}

impl<'a> TestCtx<'a> {
    /// App against a fresh mock hub, opened on `route`.
    pub async fn new(route: Route) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        let mut state = State::test(format!("{}/hub/api", mock_server.uri()));
        state
            .ctx
            .update::<Route>(|current| *current = route)
            .unwrap();

        let harness = Harness::new_ui_state(
            |ui, app: &mut HubAdminApp| app.ui(ui),
            HubAdminApp::new(state),
        );

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, HubAdminApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, HubAdminApp> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn state(&self) -> &State {
        self.harness.state().state()
    }

    /// Steps frames, giving background commands time to answer, until `done` holds.
    pub async fn run_until(&mut self, done: impl Fn(&State) -> bool) {
        for _ in 0..50 {
            self.harness.step();
            if done(self.state()) {
                // One more frame so the result is drawn.
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("condition not reached after 50 frames");
    }

    /// Steps a few frames without waiting on anything in particular.
    pub async fn idle(&mut self) {
        for _ in 0..5 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

pub fn users_body(names: &[&str]) -> serde_json::Value {
    let items: Vec<_> = names
        .iter()
        .map(|name| json!({"name": name, "admin": false, "last_activity": null}))
        .collect();
    json!({
        "items": items,
        "_pagination": {"offset": 0, "limit": 50, "total": names.len()}
    })
}

pub async fn mount_users_listing(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/hub/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_create_status(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/hub/api/users"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
