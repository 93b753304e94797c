use std::sync::Arc;

use hub_admin_business::{
    AddUsersCommand, AddUsersForm, BusinessConfig, HubUsersApi, RefreshUsersCommand, Route,
    UsersApi, UsersPage,
};
use hub_admin_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let api = Arc::new(HubUsersApi::from_config(&config));
        Self::with_api(config, api)
    }

    /// Builds the state around any `UsersApi`, so tests can swap the hub out.
    pub fn with_api(config: BusinessConfig, api: Arc<dyn UsersApi>) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(AddUsersForm::new(config.form));
        ctx.add_state(UsersPage::new(config.page_limit));
        ctx.add_state(Route::default());
        ctx.add_state(config);

        ctx.record_command(AddUsersCommand::new(api.clone()));
        ctx.record_command(RefreshUsersCommand::new(api));

        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
