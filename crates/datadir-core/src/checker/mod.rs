/// Checker module -- asynchronous free-space and validity checks.
///
/// One dedicated thread serves one controller. The UI writes each edited
/// path into a shared [`CheckSlot`] and dispatches at most one
/// [`CheckerCommand::Check`] at a time; the thread reads the slot when it
/// actually runs, so a burst of keystrokes produces one check of the latest
/// path instead of a queue of stale ones. Replies come back over a
/// crossbeam channel that the UI drains once per frame.
pub mod probe;
pub mod reply;
pub mod slot;

pub use reply::{CheckReply, CheckStatus, CheckerCommand};
pub use slot::CheckSlot;

use crate::platform::{Fs2Space, SpaceQuery};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info, warn};

/// Capacity of the command channel.
///
/// The slot's `signalled` flag allows at most one pending `Check`, plus the
/// final `Stop`, so sends never block.
pub const COMMAND_CHANNEL_CAPACITY: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("failed to spawn checker thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("checker thread panicked before it could be stopped")]
    WorkerPanicked,
}

/// Handle to the running checker thread.
///
/// Dropping the handle stops the thread and waits for it to exit, so no
/// background activity outlives the owner.
pub struct CheckerHandle {
    slot: Arc<CheckSlot>,
    command_tx: Sender<CheckerCommand>,
    reply_rx: Receiver<CheckReply>,
    thread: Option<thread::JoinHandle<()>>,
}

impl CheckerHandle {
    /// Queue `path` for checking (last write wins).
    ///
    /// Only dispatches a command when no check is already signalled; a
    /// signalled check reads the slot when it runs and so sees `path`.
    pub fn request_check(&self, path: &str) {
        if self.slot.request(path) && self.command_tx.send(CheckerCommand::Check).is_err() {
            warn!("Checker: thread is gone, dropping check of {:?}", path);
        }
    }

    /// Receiver for replies from the checker thread.
    pub fn replies(&self) -> &Receiver<CheckReply> {
        &self.reply_rx
    }

    /// The shared slot (exposed for diagnostics and tests).
    pub fn slot(&self) -> &Arc<CheckSlot> {
        &self.slot
    }

    /// Stop the thread and wait for it to exit.
    pub fn shutdown(mut self) -> Result<(), CheckerError> {
        self.stop_and_join()
    }

    fn stop_and_join(&mut self) -> Result<(), CheckerError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        // The thread may already have exited if it panicked; join reports that.
        let _ = self.command_tx.send(CheckerCommand::Stop);
        thread.join().map_err(|_| {
            error!("Checker: thread panicked; it must always be stoppable");
            CheckerError::WorkerPanicked
        })?;
        debug!("Checker: joined");
        Ok(())
    }
}

impl Drop for CheckerHandle {
    fn drop(&mut self) {
        let _ = self.stop_and_join();
    }
}

/// Start a checker that queries free space through `fs2`.
pub fn start_checker() -> Result<CheckerHandle, CheckerError> {
    start_checker_with(Fs2Space)
}

/// Start a checker with a custom free-space source.
pub fn start_checker_with<S>(space: S) -> Result<CheckerHandle, CheckerError>
where
    S: SpaceQuery + Send + 'static,
{
    let slot = Arc::new(CheckSlot::new());
    let slot_clone = Arc::clone(&slot);
    let (command_tx, command_rx) =
        crossbeam_channel::bounded::<CheckerCommand>(COMMAND_CHANNEL_CAPACITY);
    // At most one reply per completed check; the UI drains every frame.
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<CheckReply>();

    let thread = thread::Builder::new()
        .name("datadir-checker".into())
        .spawn(move || run_checker(slot_clone, space, command_rx, reply_tx))
        .map_err(CheckerError::Spawn)?;

    info!("Checker: started");

    Ok(CheckerHandle {
        slot,
        command_tx,
        reply_rx,
        thread: Some(thread),
    })
}

// ─── Background thread ──────────────────────────────────────────────────────

fn run_checker<S: SpaceQuery>(
    slot: Arc<CheckSlot>,
    space: S,
    command_rx: Receiver<CheckerCommand>,
    reply_tx: Sender<CheckReply>,
) {
    for command in command_rx.iter() {
        match command {
            CheckerCommand::Check => {
                let path = slot.take();
                let reply = probe::probe(&path, &space);
                debug!("Checker: {:?} -> {:?}", path, reply.status);
                if reply_tx.send(reply).is_err() {
                    debug!("Checker: reply receiver dropped");
                    break;
                }
            }
            CheckerCommand::Stop => break,
        }
    }
    debug!("Checker: stopped");
}
