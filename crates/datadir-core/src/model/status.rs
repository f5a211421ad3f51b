/// What the dialog shows for a check reply.
///
/// Pure derivation so the rules can be tested without a window: errors
/// block confirmation and hide the free-space line; low free space is a
/// warning only.
use crate::checker::{CheckReply, CheckStatus};
use crate::model::size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Status line text; errors carry an `"Error: "` prefix.
    pub message: String,
    /// Style the status line as an error.
    pub is_error: bool,
    /// Free-space line; empty on error.
    pub free_space: String,
    /// Style the free-space line as a warning (below the recommended minimum).
    pub low_space: bool,
    /// Whether the confirm button may be enabled.
    pub confirm_enabled: bool,
}

impl StatusView {
    pub fn from_reply(reply: &CheckReply) -> Self {
        match reply.status {
            CheckStatus::Ok => Self {
                message: reply.message.clone(),
                is_error: false,
                free_space: size::free_space_summary(reply.available),
                low_space: size::is_low_space(reply.available),
                confirm_enabled: true,
            },
            CheckStatus::Error => Self {
                message: format!("Error: {}", reply.message),
                is_error: true,
                free_space: String::new(),
                low_space: false,
                confirm_enabled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::size::{GB_BYTES, MIN_FREE_BYTES};

    #[test]
    fn error_blocks_confirmation_and_hides_space() {
        let view = StatusView::from_reply(&CheckReply::error(
            "/existing/file.txt",
            "Path already exists, and is not a directory.",
            123 * GB_BYTES,
        ));
        assert!(view.is_error);
        assert!(!view.confirm_enabled);
        assert_eq!(
            view.message,
            "Error: Path already exists, and is not a directory."
        );
        assert!(view.free_space.is_empty());
        assert!(!view.low_space);
    }

    #[test]
    fn low_space_warns_but_allows_confirmation() {
        let view = StatusView::from_reply(&CheckReply::ok(
            "/nonexistent/newdir",
            "A new data directory will be created.",
            5_000_000_000,
        ));
        assert!(!view.is_error);
        assert!(view.confirm_enabled);
        assert!(view.low_space);
        assert_eq!(
            view.free_space,
            "5GB of free space available (of 10GB needed)."
        );
    }

    #[test]
    fn enough_space_has_no_warning() {
        let view = StatusView::from_reply(&CheckReply::ok("/d", "ok", MIN_FREE_BYTES));
        assert!(!view.low_space);
        assert!(view.confirm_enabled);
        assert_eq!(view.message, "ok");
        assert_eq!(view.free_space, "10GB of free space available.");
    }
}
