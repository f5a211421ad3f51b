/// `eframe::App` implementation for the chooser dialog.
///
/// One window per dialog run: the central panel holds the explanation,
/// the directory controls and the check status; the bottom panel holds the
/// OK/Cancel buttons. The outcome is handed back through a shared slot
/// because `eframe::run_native` does not return the app.
use crate::state::{IntroOutcome, IntroState};
use datadir_core::checker::CheckerError;
use crate::theme::IntroTheme;
use crate::widgets;
use crate::APP_NAME;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Where the dialog leaves its result for the caller of `run_native`.
/// Stays `None` if the window never got to close itself.
pub type OutcomeSlot = Arc<Mutex<Option<Result<IntroOutcome, CheckerError>>>>;

/// Repaint interval while a check reply is outstanding.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// The chooser dialog application.
pub struct IntroApp {
    state: IntroState,
    outcome: OutcomeSlot,
    closed: bool,
}

impl IntroApp {
    /// Create the app from pre-built state. The state should already hold
    /// the initial directory so the first frame shows it.
    pub fn new(cc: &eframe::CreationContext<'_>, state: IntroState, outcome: OutcomeSlot) -> Self {
        IntroTheme::for_visuals(&cc.egui_ctx.style().visuals).apply(&cc.egui_ctx);
        Self {
            state,
            outcome,
            closed: false,
        }
    }
}

impl eframe::App for IntroApp {
    /// Match the GPU clear colour to the panel background so resizing does
    /// not flash.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Process background messages ───────────────────────────────────
        self.state.process_check_replies();
        if self.state.awaiting_reply {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }

        // ── Keyboard shortcuts ────────────────────────────────────────────
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.cancel();
        }

        // ── Buttons ───────────────────────────────────────────────────────
        egui::TopBottomPanel::bottom("buttons")
            .min_height(44.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                widgets::button_bar::button_bar(ui, &mut self.state);
                ui.add_space(6.0);
            });

        // ── Body ──────────────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            let muted = IntroTheme::for_visuals(ui.visuals()).text_muted;

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("Welcome to {APP_NAME}."))
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(format!(
                "As this is the first time the program is launched, you can choose where \
                 {APP_NAME} will store its data."
            ));
            ui.add_space(2.0);
            ui.label(egui::RichText::new(IntroState::size_warning_text()).color(muted));
            ui.add_space(12.0);

            widgets::dir_field::dir_field(ui, &mut self.state);

            ui.add_space(8.0);
            widgets::status_line::status_line(ui, &self.state);
        });

        // ── Close on OK / Cancel / window close ───────────────────────────
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        if !self.closed && (close_requested || self.state.outcome.is_some()) {
            self.closed = true;
            let result = self.state.close();
            tracing::debug!("Dialog closed: {:?}", result);
            *self.outcome.lock() = Some(result);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
