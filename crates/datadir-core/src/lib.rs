/// DataDirChooser Core -- validation, checking, and the selection flow.
///
/// This crate contains all business logic with zero UI dependencies.
/// The GUI crate drives it; tests drive it with scripted dialogs.
///
/// # Modules
///
/// - [`checker`] -- Background free-space checker with a last-write-wins request slot.
/// - [`model`] -- Size thresholds, formatting, and status derivation.
/// - [`chooser`] -- The startup flow that settles on a data directory.
/// - [`settings`] -- Persisted key/value settings.
/// - [`args`] -- Command-line options and the effective configuration.
/// - [`platform`] -- Free-space queries and OS default locations.
pub mod args;
pub mod checker;
pub mod chooser;
pub mod model;
pub mod platform;
pub mod settings;
