/// Data directory selection -- default/custom options, the path field and
/// the browse button.
use crate::state::IntroState;
use egui::Ui;

/// Width reserved for the browse button next to the path field.
const BROWSE_BUTTON_WIDTH: f32 = 32.0;

/// Draw the directory selection controls.
pub fn dir_field(ui: &mut Ui, state: &mut IntroState) {
    if ui
        .radio(state.use_default, "Use the default data directory")
        .clicked()
    {
        state.select_default();
    }
    if ui
        .radio(!state.use_default, "Use a custom data directory:")
        .clicked()
    {
        state.select_custom();
    }

    ui.add_space(2.0);

    ui.horizontal(|ui| {
        let field_width =
            (ui.available_width() - BROWSE_BUTTON_WIDTH - ui.spacing().item_spacing.x).max(120.0);
        let field = egui::TextEdit::singleline(&mut state.data_directory)
            .desired_width(field_width)
            .hint_text("Data directory");
        let response = ui.add_enabled(state.editing_enabled, field);
        if response.changed() {
            state.on_text_changed();
        }

        let browse = ui
            .add_enabled(
                state.editing_enabled,
                egui::Button::new("\u{2026}").min_size(egui::vec2(BROWSE_BUTTON_WIDTH, 0.0)),
            )
            .on_hover_text("Choose data directory");
        if browse.clicked() {
            let mut picker = rfd::FileDialog::new().set_title("Choose data directory");
            if !state.data_directory.is_empty() {
                picker = picker.set_directory(&state.data_directory);
            }
            state.apply_browsed(picker.pick_folder());
        }
    });
}
