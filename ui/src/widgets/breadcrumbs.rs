use egui::{RichText, Ui};
use hub_admin_business::Route;

/// One breadcrumb entry. Entries without a target render as the current page.
#[derive(Debug, Clone, Copy)]
pub struct Crumb<'a> {
    label: &'a str,
    target: Option<Route>,
}

impl<'a> Crumb<'a> {
    pub fn link(label: &'a str, target: Route) -> Self {
        Self {
            label,
            target: Some(target),
        }
    }

    pub fn current(label: &'a str) -> Self {
        Self {
            label,
            target: None,
        }
    }
}

/// Renders `Home / Add Users` style breadcrumbs. Returns the route of a clicked link.
pub fn breadcrumbs(ui: &mut Ui, crumbs: &[Crumb<'_>]) -> Option<Route> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        for (index, crumb) in crumbs.iter().enumerate() {
            if index > 0 {
                ui.weak("/");
            }

            match crumb.target {
                Some(route) => {
                    if ui.link(crumb.label).clicked() {
                        clicked = Some(route);
                    }
                }
                None => {
                    ui.label(RichText::new(crumb.label).strong());
                }
            }
        }
    });

    clicked
}
