//! Startup flow that settles on a data directory.
//!
//! Order of precedence: explicit `--datadir`, then the directory saved in
//! settings, then the OS default. The dialog is shown when that directory
//! does not exist yet or `--choosedatadir` was given, and re-shown until a
//! directory can actually be created or the user cancels.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::args::RuntimeArgs;
use crate::checker::CheckerError;
use crate::settings::{SettingsStore, KEY_DATA_DIR};

/// The interactive part of the flow, implemented by the GUI (and by
/// scripted fakes in tests).
pub trait ChooserDialog {
    /// Show the chooser with `initial` preselected. `Ok(None)` means the
    /// user cancelled; `Err` means the dialog could not be shown at all.
    fn exec(&mut self, initial: &Path) -> Result<Option<PathBuf>, ChooserError>;

    /// Show a modal error before the chooser is shown again.
    fn show_error(&mut self, message: &str);
}

/// How the data directory was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Given on the command line; settings and dialog were skipped.
    FromArgs(PathBuf),
    /// Saved or default directory already exists; no dialog was needed.
    Existing(PathBuf),
    /// Chosen in the dialog and created.
    Chosen(PathBuf),
    /// The user cancelled the dialog.
    Cancelled,
}

impl PickOutcome {
    pub fn data_dir(&self) -> Option<&Path> {
        match self {
            Self::FromArgs(dir) | Self::Existing(dir) | Self::Chosen(dir) => Some(dir),
            Self::Cancelled => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChooserError {
    #[error("data directory path is empty")]
    EmptyPath,
    #[error("could not show the data directory dialog: {0}")]
    Dialog(String),
    #[error("data directory checker failed: {0}")]
    Checker(#[from] CheckerError),
    #[error("data directory {} can not be created: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Create `dir` and any missing parents. An existing directory is fine;
/// an existing file is not.
pub fn create_data_directory(dir: &Path) -> Result<(), ChooserError> {
    if dir.as_os_str().is_empty() {
        return Err(ChooserError::EmptyPath);
    }
    std::fs::create_dir_all(dir).map_err(|source| ChooserError::Create {
        path: dir.to_path_buf(),
        source,
    })
}

/// Alert text shown when the chosen directory cannot be created.
pub fn creation_failed_message(dir: &Path) -> String {
    format!(
        "Error: Specified data directory \"{}\" can not be created.",
        dir.display()
    )
}

/// Settle on a data directory, asking the user through `dialog` if needed.
///
/// On success the directory is saved under [`KEY_DATA_DIR`] (only when the
/// dialog was shown) and soft-set into `args`. Creation failures re-prompt;
/// only a dialog that cannot be shown is an error.
pub fn pick_data_directory(
    args: &mut RuntimeArgs,
    settings: &mut dyn SettingsStore,
    default_dir: &Path,
    dialog: &mut dyn ChooserDialog,
) -> Result<PickOutcome, ChooserError> {
    if let Some(dir) = args.datadir() {
        info!("Data directory given on command line: {}", dir.display());
        return Ok(PickOutcome::FromArgs(dir.to_path_buf()));
    }

    let mut data_dir = settings
        .get(KEY_DATA_DIR)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| default_dir.to_path_buf());

    if data_dir.exists() && !args.choose_datadir() {
        info!("Using existing data directory {}", data_dir.display());
        args.soft_set_datadir(&data_dir);
        return Ok(PickOutcome::Existing(data_dir));
    }

    loop {
        let Some(chosen) = dialog.exec(&data_dir)? else {
            info!("Data directory selection cancelled");
            return Ok(PickOutcome::Cancelled);
        };
        match create_data_directory(&chosen) {
            Ok(()) => {
                data_dir = chosen;
                break;
            }
            Err(e) => {
                warn!("{e}");
                dialog.show_error(&creation_failed_message(&chosen));
                // Re-open with the rejected path so the user can fix it.
                data_dir = chosen;
            }
        }
    }

    if let Err(e) = settings.set(KEY_DATA_DIR, &data_dir.to_string_lossy()) {
        warn!("Could not save data directory choice: {e}");
    }
    args.soft_set_datadir(&data_dir);
    info!("Data directory chosen: {}", data_dir.display());
    Ok(PickOutcome::Chosen(data_dir))
}
