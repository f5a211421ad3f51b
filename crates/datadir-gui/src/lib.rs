/// DataDirChooser GUI -- egui-based first-run dialog.
///
/// This crate contains all UI code. Business logic lives in `datadir-core`.
pub mod app;
pub mod dialog;
pub mod icon;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::IntroApp;
pub use dialog::EguiChooserDialog;

/// Application name shown in window titles and message boxes.
pub const APP_NAME: &str = "DataDirChooser";
