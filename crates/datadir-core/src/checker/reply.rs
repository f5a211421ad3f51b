/// Messages exchanged between the UI thread and the checker thread.

/// Commands sent from the UI thread to the checker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerCommand {
    /// Check whatever path is currently in the slot.
    Check,
    /// Release resources and exit the thread.
    Stop,
}

/// Outcome class of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The path can be used (possibly with a hint).
    Ok,
    /// The path cannot be used; confirmation must be blocked.
    Error,
}

/// Result of checking one path, sent from the checker thread to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReply {
    /// The path that was examined, exactly as read from the slot.
    pub path: String,
    pub status: CheckStatus,
    /// Human-readable explanation.
    pub message: String,
    /// Free bytes at the nearest existing ancestor; 0 if unknown.
    pub available: u64,
}

impl CheckReply {
    pub fn ok(path: impl Into<String>, message: impl Into<String>, available: u64) -> Self {
        Self {
            path: path.into(),
            status: CheckStatus::Ok,
            message: message.into(),
            available,
        }
    }

    pub fn error(path: impl Into<String>, message: impl Into<String>, available: u64) -> Self {
        Self {
            path: path.into(),
            status: CheckStatus::Error,
            message: message.into(),
            available,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == CheckStatus::Error
    }
}
