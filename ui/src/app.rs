use hub_admin_business::{BusinessConfig, Route};

use crate::{pages, state::State};

pub struct HubAdminApp {
    state: State,
}

impl HubAdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies finished command results, then draws the page for the current route.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let applied = self.state.ctx.sync_updates();
        if applied > 0 {
            ui.ctx().request_repaint();
        }

        let route = self.state.ctx.state::<Route>().copied().unwrap_or_default();
        match route {
            Route::Home => pages::home_page(&mut self.state.ctx, ui),
            Route::AddUsers => pages::add_users_page(&mut self.state.ctx, ui),
        }
    }
}

impl eframe::App for HubAdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Hub Admin");
                if let Ok(config) = self.state.ctx.state::<BusinessConfig>() {
                    ui.separator();
                    ui.weak(config.api_url().as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));

        // Results arrive from background tasks; keep polling while any is pending.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
