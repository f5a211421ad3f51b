/// Check result display -- status message and free-space summary.
use crate::state::IntroState;
use crate::theme::IntroTheme;
use egui::Ui;

/// Draw the status message and the free-space line.
pub fn status_line(ui: &mut Ui, state: &IntroState) {
    let theme = IntroTheme::for_visuals(ui.visuals());
    let color_normal = ui.visuals().text_color();

    if state.awaiting_reply && state.status_message.is_empty() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Checking...").size(12.0).color(theme.text_muted));
        });
        return;
    }

    let message_color = if state.status_is_error {
        theme.error
    } else {
        color_normal
    };
    ui.label(
        egui::RichText::new(&state.status_message)
            .size(12.0)
            .color(message_color),
    );

    if !state.free_space_text.is_empty() {
        let space_color = if state.free_space_warning {
            theme.warning
        } else {
            color_normal
        };
        ui.label(
            egui::RichText::new(&state.free_space_text)
                .size(12.0)
                .color(space_color),
        );
    }
}
