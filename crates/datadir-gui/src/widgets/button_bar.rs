/// OK / Cancel row at the bottom of the dialog.
use crate::state::IntroState;
use egui::Ui;

/// Draw the button row.
pub fn button_bar(ui: &mut Ui, state: &mut IntroState) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add(egui::Button::new("Cancel").min_size(egui::vec2(70.0, 28.0)))
            .clicked()
        {
            state.cancel();
        }

        let ok = ui
            .add_enabled(
                state.confirm_enabled,
                egui::Button::new("OK").min_size(egui::vec2(70.0, 28.0)),
            )
            .on_disabled_hover_text(if state.awaiting_reply {
                "Checking the selected directory..."
            } else {
                "Choose a directory that can be created"
            });
        if ok.clicked() {
            state.confirm();
        }

        if state.awaiting_reply {
            ui.spinner();
        }
    });
}
