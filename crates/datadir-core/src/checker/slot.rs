/// The single "path to check" slot shared by the UI and the checker thread.
///
/// Holds at most one pending path plus a `signalled` flag. Writers overwrite
/// any unconsumed path; the checker reads the slot lazily when it runs, so
/// intermediate values typed between two reads are never examined.
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct CheckRequest {
    path: String,
    signalled: bool,
}

/// Mutex-guarded last-write-wins slot. The lock is held only for the
/// duration of a read or write, never across filesystem I/O.
#[derive(Debug, Default)]
pub struct CheckSlot {
    inner: Mutex<CheckRequest>,
}

impl CheckSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `path` as the next path to check.
    ///
    /// Returns `true` if the caller must dispatch a check command, i.e. no
    /// check was signalled yet. Returns `false` when a signalled check has
    /// not consumed the slot; that check will pick up `path`.
    pub fn request(&self, path: &str) -> bool {
        let mut req = self.inner.lock();
        req.path.clear();
        req.path.push_str(path);
        if req.signalled {
            false
        } else {
            req.signalled = true;
            true
        }
    }

    /// Read the current path and clear the signalled flag so a new request
    /// can be dispatched while this one is processed.
    pub fn take(&self) -> String {
        let mut req = self.inner.lock();
        req.signalled = false;
        req.path.clone()
    }

    /// Whether a dispatched check has not yet read the slot.
    pub fn is_signalled(&self) -> bool {
        self.inner.lock().signalled
    }
}
