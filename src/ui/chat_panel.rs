use crate::chat::{ChatMessage, MessageRole, Transcript};
use eframe::egui;

/// Floating career assistant panel. Closed on startup; the round button in
/// the corner opens and closes it. Nothing else changes its visibility.
#[derive(Default)]
pub struct ChatPanel {
    open: bool,
    input_text: String,
}

impl ChatPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[cfg(test)]
    fn set_input(&mut self, text: &str) {
        self.input_text = text.to_string();
    }

    /// Trimmed pending input, or None when there is nothing to send.
    /// The input box is cleared only when a message is actually taken.
    fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input_text.clear();
        Some(text)
    }

    /// Draws the toggle button and, when open, the panel itself. Returns the
    /// message the user submitted this frame, if any.
    pub fn show(&mut self, ctx: &egui::Context, transcript: &Transcript) -> Option<String> {
        egui::Area::new(egui::Id::new("chat_toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -24.0])
            .show(ctx, |ui| {
                let icon = if self.open { "✖" } else { "💬" };
                let button = egui::Button::new(egui::RichText::new(icon).size(22.0)).rounding(24.0);
                if ui.add_sized([48.0, 48.0], button).clicked() {
                    self.toggle();
                }
            });

        if !self.open {
            return None;
        }

        let mut submitted = None;

        egui::Window::new("Career Assistant")
            .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -84.0])
            .collapsible(false)
            .resizable(false)
            .fixed_size([330.0, 430.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .max_height(350.0)
                    .show(ui, |ui| {
                        ui.add_space(6.0);
                        for message in transcript.messages() {
                            render_bubble(ui, message);
                            ui.add_space(8.0);
                        }
                    });

                ui.separator();

                ui.horizontal(|ui| {
                    let response = ui.add_sized(
                        [ui.available_width() - 70.0, 30.0],
                        egui::TextEdit::singleline(&mut self.input_text)
                            .hint_text("Ask about careers, skills, trends..."),
                    );

                    let enter_pressed =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let send_clicked =
                        ui.add_sized([60.0, 30.0], egui::Button::new("Send")).clicked();

                    if enter_pressed || send_clicked {
                        submitted = self.take_input();
                        if enter_pressed {
                            response.request_focus();
                        }
                    }
                });
            });

        submitted
    }
}

fn render_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let is_user = matches!(message.role, MessageRole::User);

    let layout = if is_user {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(if is_user {
                egui::Color32::from_rgb(65, 105, 170)
            } else {
                egui::Color32::from_rgb(75, 85, 110)
            })
            .rounding(10.0)
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(240.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&message.text)
                            .size(14.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(message.timestamp.format("%H:%M").to_string())
                            .size(10.0)
                            .color(egui::Color32::from_rgb(200, 210, 220)),
                    );
                });
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_closed() {
        assert!(!ChatPanel::default().is_open());
    }

    #[test]
    fn test_toggle_pair_is_identity() {
        let mut panel = ChatPanel::default();
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_take_input_trims() {
        let mut panel = ChatPanel::default();
        panel.set_input("  Hello  ");
        assert_eq!(panel.take_input(), Some("Hello".to_string()));
        // Input box is cleared once taken
        assert_eq!(panel.take_input(), None);
    }

    #[test]
    fn test_whitespace_input_is_not_sent() {
        let mut panel = ChatPanel::default();
        panel.set_input("   \t  ");
        assert_eq!(panel.take_input(), None);

        panel.set_input("");
        assert_eq!(panel.take_input(), None);
    }
}
