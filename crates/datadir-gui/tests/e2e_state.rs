/// End-to-end tests for `IntroState` -- the dialog controller.
///
/// These tests exercise the real state transitions and the real checker
/// thread without spinning up an egui window, keeping them fast and
/// deterministic.
///
/// **Scope:**
///   - Status derivation for files, directories and missing paths
///   - Free-space warning vs. blocking errors
///   - Confirmation disabled on every edit until a fresh reply arrives
///   - Superseded replies are discarded
///   - Default/custom option handling, browse, confirm, cancel, shutdown
use crossbeam_channel::{Receiver, Sender};
use datadir_core::checker::{start_checker_with, CheckerError, CheckerHandle};
use datadir_core::platform::SpaceQuery;
use datadir_gui::state::{IntroOutcome, IntroState};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Reports a fixed amount of free space for every path.
struct FixedSpace(u64);

impl SpaceQuery for FixedSpace {
    fn available_space(&self, _path: &Path) -> io::Result<u64> {
        Ok(self.0)
    }
}

/// Blocks each query until released and reports entry.
struct GatedSpace {
    entered: Sender<PathBuf>,
    release: Receiver<()>,
}

impl SpaceQuery for GatedSpace {
    fn available_space(&self, path: &Path) -> io::Result<u64> {
        let _ = self.entered.send(path.to_path_buf());
        let _ = self.release.recv();
        Ok(50_000_000_000)
    }
}

/// Kills the checker thread on its first query.
struct PanickingSpace;

impl SpaceQuery for PanickingSpace {
    fn available_space(&self, _path: &Path) -> io::Result<u64> {
        panic!("space query exploded");
    }
}

fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

fn state_with_space(default_dir: &Path, bytes: u64) -> IntroState {
    let checker: CheckerHandle = start_checker_with(FixedSpace(bytes)).unwrap();
    IntroState::with_checker(default_dir, checker)
}

/// Pump `process_check_replies()` until the reply for the current path
/// arrives or the deadline expires.
fn pump_until_checked(state: &mut IntroState) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while state.awaiting_reply {
        assert!(
            Instant::now() < deadline,
            "check did not complete within 10 seconds"
        );
        state.process_check_replies();
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn type_path(state: &mut IntroState, path: &str) {
    state.data_directory = path.to_owned();
    state.on_text_changed();
}

// ── Status derivation ────────────────────────────────────────────────────────

/// A regular file is an error and blocks confirmation.
#[test]
fn existing_file_blocks_confirmation() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("file.txt");
    std::fs::write(&file, b"x").unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);

    type_path(&mut state, &path_str(&file));
    pump_until_checked(&mut state);

    assert!(state.status_is_error);
    assert_eq!(
        state.status_message,
        "Error: Path already exists, and is not a directory."
    );
    assert!(state.free_space_text.is_empty());
    assert!(!state.confirm_enabled);
}

/// An existing directory is allowed, with a hint.
#[test]
fn existing_directory_is_allowed_with_hint() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);

    type_path(&mut state, &path_str(tmp.path()));
    pump_until_checked(&mut state);

    assert!(!state.status_is_error);
    assert!(state.status_message.starts_with("Directory already exists."));
    assert!(state.confirm_enabled);
    assert!(!state.free_space_warning);
    assert_eq!(state.free_space_text, "50GB of free space available.");
}

/// Low free space warns but does not block.
#[test]
fn low_space_warns_without_blocking() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 5_000_000_000);
    let candidate = tmp.path().join("nonexistent").join("newdir");

    type_path(&mut state, &path_str(&candidate));
    pump_until_checked(&mut state);

    assert_eq!(state.status_message, "A new data directory will be created.");
    assert_eq!(
        state.free_space_text,
        "5GB of free space available (of 10GB needed)."
    );
    assert!(state.free_space_warning);
    assert!(state.confirm_enabled);
}

/// Exactly the threshold shows no warning.
#[test]
fn threshold_space_has_no_warning() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 10_000_000_000);

    type_path(&mut state, &path_str(&tmp.path().join("new")));
    pump_until_checked(&mut state);

    assert!(!state.free_space_warning);
    assert_eq!(state.free_space_text, "10GB of free space available.");
}

// ── Edit / reply ordering ────────────────────────────────────────────────────

/// Every edit disables confirmation until the next reply.
#[test]
fn edit_disables_confirmation_until_reply() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);

    type_path(&mut state, &path_str(&tmp.path().join("a")));
    assert!(!state.confirm_enabled);
    pump_until_checked(&mut state);
    assert!(state.confirm_enabled);

    type_path(&mut state, &path_str(&tmp.path().join("b")));
    assert!(!state.confirm_enabled, "edit must disable confirmation");
    assert!(state.awaiting_reply);
    pump_until_checked(&mut state);
    assert!(state.confirm_enabled);
}

/// A reply for a path that has since been edited away must not update the
/// status or enable confirmation.
#[test]
fn superseded_reply_is_discarded() {
    let tmp = TempDir::new().unwrap();
    let (entered_tx, entered) = crossbeam_channel::unbounded();
    let (release, release_rx) = crossbeam_channel::unbounded();
    let checker = start_checker_with(GatedSpace {
        entered: entered_tx,
        release: release_rx,
    })
    .unwrap();
    let mut state = IntroState::with_checker(&tmp.path().join("default"), checker);

    let first = path_str(&tmp.path().join("first"));
    let second = path_str(&tmp.path().join("second"));

    type_path(&mut state, &first);
    entered.recv_timeout(Duration::from_secs(10)).unwrap();
    type_path(&mut state, &second);

    // Finish the first check; the thread then enters the second one, which
    // means the first reply is already in the channel.
    release.send(()).unwrap();
    entered.recv_timeout(Duration::from_secs(10)).unwrap();

    state.process_check_replies();
    assert!(state.awaiting_reply);
    assert!(!state.confirm_enabled);
    assert!(state.status_message.is_empty());

    release.send(()).unwrap();
    pump_until_checked(&mut state);
    assert_eq!(state.data_directory(), second);
    assert!(state.confirm_enabled);
}

// ── Default / custom options ─────────────────────────────────────────────────

#[test]
fn default_directory_locks_editing() {
    let tmp = TempDir::new().unwrap();
    let default_dir = tmp.path().join("default");
    let mut state = state_with_space(&default_dir, 50_000_000_000);

    state.set_data_directory(&path_str(&default_dir));
    assert!(state.use_default);
    assert!(!state.editing_enabled);

    state.set_data_directory(&path_str(&tmp.path().join("custom")));
    assert!(!state.use_default);
    assert!(state.editing_enabled);
}

#[test]
fn select_custom_keeps_path_and_unlocks_editing() {
    let tmp = TempDir::new().unwrap();
    let default_dir = tmp.path().join("default");
    let mut state = state_with_space(&default_dir, 50_000_000_000);

    state.select_default();
    assert_eq!(state.data_directory(), path_str(&default_dir));
    state.select_custom();
    assert!(state.editing_enabled);
    assert!(!state.use_default);
    assert_eq!(state.data_directory(), path_str(&default_dir));
}

#[test]
fn browse_result_replaces_path() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);
    type_path(&mut state, "/typed");
    pump_until_checked(&mut state);

    state.apply_browsed(None);
    assert_eq!(state.data_directory(), "/typed");

    state.apply_browsed(Some(tmp.path().to_path_buf()));
    assert_eq!(state.data_directory(), path_str(tmp.path()));
    assert!(state.awaiting_reply);
    pump_until_checked(&mut state);
    assert!(state.confirm_enabled);
}

// ── Outcome ──────────────────────────────────────────────────────────────────

#[test]
fn confirm_requires_fresh_ok_reply() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);
    let candidate = tmp.path().join("new");

    type_path(&mut state, &path_str(&candidate));
    assert!(!state.confirm(), "confirm must be refused before the reply");
    assert_eq!(state.outcome, None);

    pump_until_checked(&mut state);
    assert!(state.confirm());
    assert_eq!(state.outcome, Some(IntroOutcome::Accepted(candidate)));
}

#[test]
fn cancel_sets_outcome() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);
    state.cancel();
    assert_eq!(state.outcome, Some(IntroOutcome::Cancelled));
}

#[test]
fn size_warning_mentions_threshold() {
    assert_eq!(
        IntroState::size_warning_text(),
        "At least 10GB of data will be stored in this directory, and it will grow over time."
    );
}

// ── Shutdown ─────────────────────────────────────────────────────────────────

#[test]
fn shutdown_stops_checker_once() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);
    type_path(&mut state, &path_str(tmp.path()));
    pump_until_checked(&mut state);

    state.shutdown().unwrap();
    // Second shutdown and further edits are harmless no-ops.
    state.shutdown().unwrap();
    type_path(&mut state, "/after");
    assert!(!state.process_check_replies());
}

#[test]
fn close_returns_outcome_and_stops_checker() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);
    type_path(&mut state, &path_str(tmp.path()));
    pump_until_checked(&mut state);
    assert!(state.confirm());

    assert_eq!(
        state.close().unwrap(),
        IntroOutcome::Accepted(tmp.path().to_path_buf())
    );
    assert_eq!(state.outcome, None);
    type_path(&mut state, "/after");
    assert!(!state.process_check_replies());
}

#[test]
fn close_without_choice_is_cancel() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with_space(&tmp.path().join("default"), 50_000_000_000);
    assert_eq!(state.close().unwrap(), IntroOutcome::Cancelled);
}

#[test]
fn close_reports_dead_checker() {
    let tmp = TempDir::new().unwrap();
    let checker = start_checker_with(PanickingSpace).unwrap();
    let mut state = IntroState::with_checker(&tmp.path().join("default"), checker);
    // The check is queued ahead of the stop, so the worker always dies first.
    type_path(&mut state, "/anything");

    assert!(matches!(state.close(), Err(CheckerError::WorkerPanicked)));
}
