//! Text field that collects entries as removable tokens.
//!
//! Tokens sit on a single row in front of the text field and scroll horizontally
//! instead of wrapping. Enter commits the typed text, the `×` on a token removes it.
//! The widget only reports what happened; the caller owns the token list.

use egui::{Frame, Key, Margin, ScrollArea, TextEdit, Ui};
use hub_admin_business::PendingUser;

pub const REMOVE_TOKEN: &str = "×";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenInputEvent {
    /// Enter was pressed in the text field.
    Commit,
    /// The remove button of the token with this id was clicked.
    Remove(u32),
}

pub fn token_input(
    ui: &mut Ui,
    tokens: &[PendingUser],
    text: &mut String,
    hint: Option<&str>,
) -> Option<TokenInputEvent> {
    let mut event = None;

    ScrollArea::horizontal()
        .id_salt("token_input")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for token in tokens {
                    if token_chip(ui, token) {
                        event = Some(TokenInputEvent::Remove(token.id));
                    }
                }

                let mut edit = TextEdit::singleline(text).desired_width(200.0);
                if let Some(hint) = hint {
                    edit = edit.hint_text(hint);
                }
                let response = ui.add(edit);

                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    event = Some(TokenInputEvent::Commit);
                    // Keep typing the next name without clicking back in.
                    response.request_focus();
                }
            });
        });

    event
}

/// Returns true when the chip's remove button was clicked.
fn token_chip(ui: &mut Ui, token: &PendingUser) -> bool {
    let fill = ui.visuals().faint_bg_color;
    let stroke = ui.visuals().widgets.inactive.bg_stroke;

    Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(&token.text);
                ui.small_button(REMOVE_TOKEN)
                    .on_hover_text(format!("Remove {}", token.text))
                    .clicked()
            })
            .inner
        })
        .inner
}
