/// Dialog state management.
///
/// Centralises all mutable state that the chooser dialog reads and writes.
/// The checker thread communicates via its reply channel; state updates
/// happen in `process_check_replies()` which runs once per frame.
///
/// Confirmation is disabled on every edit and only re-enabled by a reply
/// for exactly the path currently shown, so a stale judgement can never be
/// confirmed.
use datadir_core::checker::{CheckReply, CheckerError, CheckerHandle};
use datadir_core::model::size::{whole_gb, MIN_FREE_BYTES};
use datadir_core::model::StatusView;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Maximum replies drained from the checker per frame.
const MAX_REPLIES_PER_FRAME: usize = 64;

/// How the dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntroOutcome {
    Accepted(PathBuf),
    Cancelled,
}

/// All dialog state.
pub struct IntroState {
    // ── Path ───────────────────────────────────────────
    /// Contents of the path field.
    pub data_directory: String,
    /// The OS default, used by the "default" radio option.
    pub default_dir: String,
    /// `true` when the "use the default data directory" option is selected.
    pub use_default: bool,
    /// Whether the path field and browse button accept input.
    pub editing_enabled: bool,

    // ── Check status ───────────────────────────────────
    pub status_message: String,
    pub status_is_error: bool,
    pub free_space_text: String,
    /// Free space is below the recommended minimum (warning only).
    pub free_space_warning: bool,
    pub confirm_enabled: bool,
    /// A reply for the current path has not arrived yet.
    pub awaiting_reply: bool,

    // ── Outcome ────────────────────────────────────────
    pub outcome: Option<IntroOutcome>,

    checker: Option<CheckerHandle>,
}

impl IntroState {
    /// Create dialog state and start its checker thread.
    pub fn new(default_dir: &Path) -> Result<Self, CheckerError> {
        let checker = datadir_core::checker::start_checker()?;
        Ok(Self::with_checker(default_dir, checker))
    }

    /// Create dialog state around an already running checker.
    pub fn with_checker(default_dir: &Path, checker: CheckerHandle) -> Self {
        Self {
            data_directory: String::new(),
            default_dir: default_dir.to_string_lossy().into_owned(),
            use_default: false,
            editing_enabled: true,
            status_message: String::new(),
            status_is_error: false,
            free_space_text: String::new(),
            free_space_warning: false,
            confirm_enabled: false,
            awaiting_reply: false,
            outcome: None,
            checker: Some(checker),
        }
    }

    /// Text explaining how much space the data directory will need.
    pub fn size_warning_text() -> String {
        format!(
            "At least {}GB of data will be stored in this directory, and it will grow over time.",
            whole_gb(MIN_FREE_BYTES)
        )
    }

    /// The path currently shown.
    pub fn data_directory(&self) -> &str {
        &self.data_directory
    }

    /// Show `dir`, selecting the default or custom option to match.
    pub fn set_data_directory(&mut self, dir: &str) {
        self.data_directory = dir.to_owned();
        if dir == self.default_dir {
            self.use_default = true;
            self.editing_enabled = false;
        } else {
            self.use_default = false;
            self.editing_enabled = true;
        }
        self.on_text_changed();
    }

    /// Called whenever the path text changes.
    pub fn on_text_changed(&mut self) {
        // Disabled until the check result for this text comes in.
        self.confirm_enabled = false;
        self.awaiting_reply = true;
        let path = self.data_directory.clone();
        self.request_path_check(&path);
    }

    /// Hand `path` to the checker (last write wins).
    pub fn request_path_check(&self, path: &str) {
        if let Some(ref checker) = self.checker {
            checker.request_check(path);
        }
    }

    /// Apply a check reply to the visible status.
    pub fn set_status(&mut self, reply: &CheckReply) {
        let view = StatusView::from_reply(reply);
        self.status_message = view.message;
        self.status_is_error = view.is_error;
        self.free_space_text = view.free_space;
        self.free_space_warning = view.low_space;
        self.confirm_enabled = view.confirm_enabled;
    }

    /// Drain pending checker replies. Called once per frame.
    ///
    /// Replies for a path other than the one shown are discarded; the
    /// checker always follows up with a check of the latest path.
    /// Returns `true` if the UI should repaint.
    pub fn process_check_replies(&mut self) -> bool {
        let mut replies = Vec::new();
        if let Some(ref checker) = self.checker {
            while replies.len() < MAX_REPLIES_PER_FRAME {
                match checker.replies().try_recv() {
                    Ok(reply) => replies.push(reply),
                    Err(_) => break,
                }
            }
        }

        let mut repaint = false;
        for reply in replies {
            if reply.path != self.data_directory {
                debug!("Discarding superseded reply for {:?}", reply.path);
                continue;
            }
            self.set_status(&reply);
            self.awaiting_reply = false;
            repaint = true;
        }
        repaint
    }

    /// "Use the default data directory" was clicked.
    pub fn select_default(&mut self) {
        let default_dir = self.default_dir.clone();
        self.set_data_directory(&default_dir);
    }

    /// "Use a custom data directory" was clicked.
    pub fn select_custom(&mut self) {
        self.use_default = false;
        self.editing_enabled = true;
    }

    /// Result of the native folder picker; `None` leaves the path alone.
    pub fn apply_browsed(&mut self, picked: Option<PathBuf>) {
        if let Some(dir) = picked {
            self.data_directory = dir.to_string_lossy().into_owned();
            self.on_text_changed();
        }
    }

    /// Accept the current path. Returns `false` while confirmation is disabled.
    pub fn confirm(&mut self) -> bool {
        if !self.confirm_enabled {
            return false;
        }
        self.outcome = Some(IntroOutcome::Accepted(PathBuf::from(&self.data_directory)));
        true
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(IntroOutcome::Cancelled);
    }

    /// Settle the dialog when its window goes away: the chosen outcome
    /// (closing without one is a cancel) once the checker thread has exited.
    pub fn close(&mut self) -> Result<IntroOutcome, CheckerError> {
        let outcome = self.outcome.take().unwrap_or(IntroOutcome::Cancelled);
        self.shutdown()?;
        Ok(outcome)
    }

    /// Stop the checker thread and wait for it to exit.
    pub fn shutdown(&mut self) -> Result<(), CheckerError> {
        match self.checker.take() {
            Some(checker) => checker.shutdown(),
            None => Ok(()),
        }
    }
}
