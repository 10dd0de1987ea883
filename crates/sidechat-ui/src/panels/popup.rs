//! Chat popup — singleton window with header controls, scrollback,
//! and the input row.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Vec2};
use crate::state::{ChatEntry, EntryRole, UiState};
use crate::theme::*;

/// What the caller should do after rendering the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupAction {
    /// The user submitted a message
    Submit(String),
    /// Start a fresh conversation
    NewChat,
    /// The history control — surface exists, behavior does not
    ShowHistory,
}

/// Render the popup window when open. Returns an action when the user
/// pressed a header control or submitted input. The window identity is
/// fixed, so showing it twice can never create a second panel.
pub fn popup_window(ctx: &egui::Context, state: &mut UiState) -> Option<PopupAction> {
    if !state.popup_open {
        return None;
    }

    let mut action = None;
    let mut open = true;

    egui::Window::new("AI Chat")
        .id(egui::Id::new("sidechat_popup"))
        .open(&mut open)
        .default_size(Vec2::new(300.0, 420.0))
        .collapsible(false)
        .show(ctx, |ui| {
            // ── Header ───────────────────────────────────────
            ui.horizontal(|ui| {
                if ui.button("＋ New chat").clicked() {
                    action = Some(PopupAction::NewChat);
                }
                if ui.button("History").clicked() {
                    action = Some(PopupAction::ShowHistory);
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                    ui.label(
                        RichText::new(&state.status_text)
                            .color(status_color)
                            .small(),
                    );
                });
            });

            ui.separator();

            // ── Scrollback ───────────────────────────────────
            let available_height = ui.available_height() - 60.0;
            ScrollArea::vertical()
                .max_height(available_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &state.entries {
                        render_entry(ui, entry);
                        ui.add_space(4.0);
                    }

                    // Placeholder while the reply is in flight
                    if state.pending {
                        egui::Frame::default()
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.label(RichText::new("...").color(TEXT_SECONDARY));
                            });
                    }
                });

            ui.add_space(8.0);

            // ── Input row ────────────────────────────────────
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.input_text)
                    .hint_text("Type a message...")
                    .desired_width(ui.available_width() - 70.0)
                    .font(egui::FontId::proportional(14.0));

                let response = ui.add(input);

                let send_enabled = !state.input_text.trim().is_empty() && !state.is_busy();
                let send_btn = ui.add_enabled(
                    send_enabled,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                );

                // Submit on Enter or button click
                if (response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && send_enabled)
                    || send_btn.clicked()
                {
                    let text = state.input_text.trim().to_string();
                    action = Some(PopupAction::Submit(text));
                    state.input_text.clear();
                    response.request_focus();
                }
            });
        });

    // ✖ in the title bar hides the window; entries survive for re-show
    state.popup_open = open;

    action
}

fn render_entry(ui: &mut egui::Ui, entry: &ChatEntry) {
    let error_bg = Color32::from_rgb(50, 20, 20);
    let (label, label_color, bg) = match entry.role {
        EntryRole::User => ("You", TEXT_PRIMARY, ACCENT),
        EntryRole::Assistant => ("Gemini", SUCCESS, BG_SECONDARY),
        EntryRole::Error => ("Error", ERROR, error_bg),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&entry.content).color(TEXT_PRIMARY));
        });
}
