/// [`ChooserDialog`] backed by an eframe window and native message boxes.
use crate::app::{IntroApp, OutcomeSlot};
use crate::state::{IntroOutcome, IntroState};
use crate::APP_NAME;
use datadir_core::chooser::{ChooserDialog, ChooserError};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Shows the chooser window once per `exec` call.
pub struct EguiChooserDialog {
    default_dir: PathBuf,
}

impl EguiChooserDialog {
    pub fn new(default_dir: impl Into<PathBuf>) -> Self {
        Self {
            default_dir: default_dir.into(),
        }
    }
}

impl ChooserDialog for EguiChooserDialog {
    fn exec(&mut self, initial: &Path) -> Result<Option<PathBuf>, ChooserError> {
        let mut state = IntroState::new(&self.default_dir)?;
        state.set_data_directory(&initial.to_string_lossy());

        let outcome = OutcomeSlot::default();
        let outcome_clone = outcome.clone();
        let icon = crate::icon::generate_icon(64);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("Welcome")
                .with_inner_size([560.0, 300.0])
                .with_min_inner_size([420.0, 260.0])
                .with_icon(icon),
            ..Default::default()
        };

        info!("Showing data directory dialog at {}", initial.display());
        eframe::run_native(
            APP_NAME,
            options,
            Box::new(move |cc| Ok(Box::new(IntroApp::new(cc, state, outcome_clone)))),
        )
        .map_err(|e| {
            error!("eframe error: {e}");
            ChooserError::Dialog(e.to_string())
        })?;

        let result = outcome.lock().take();
        match result {
            Some(Ok(IntroOutcome::Accepted(dir))) => Ok(Some(dir)),
            Some(Ok(IntroOutcome::Cancelled)) | None => Ok(None),
            Some(Err(e)) => Err(e.into()),
        }
    }

    fn show_error(&mut self, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(APP_NAME)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
