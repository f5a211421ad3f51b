/// The filesystem probe run by the checker thread for each request.
///
/// Read-only: walks up to the nearest existing ancestor, asks the platform
/// for free space there, then classifies the candidate path itself. Every
/// failure becomes a [`CheckReply`] with `CheckStatus::Error`; nothing is
/// propagated to the caller.
use crate::checker::reply::CheckReply;
use crate::model::size::whole_gb;
use crate::platform::SpaceQuery;
use std::io::ErrorKind;
use std::path::{Path, MAIN_SEPARATOR};
use tracing::debug;

pub const MSG_NEW_DIRECTORY: &str = "A new data directory will be created.";
pub const MSG_NOT_A_DIRECTORY: &str = "Path already exists, and is not a directory.";
pub const MSG_CANNOT_CREATE: &str = "Cannot create data directory here.";

/// Hint shown when the candidate is an existing directory.
pub fn msg_directory_exists() -> String {
    format!(
        "Directory already exists. Add {MAIN_SEPARATOR}name if you intend to create a new directory here."
    )
}

/// Walk upward from `path` until an existing path is found, or until a path
/// with no parent is reached (returned even if it does not exist).
pub fn nearest_existing_ancestor(path: &Path) -> &Path {
    let mut dir = path;
    while !dir.exists() {
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    dir
}

/// Check `candidate` and build the reply for it.
pub fn probe<S: SpaceQuery + ?Sized>(candidate: &str, space: &S) -> CheckReply {
    let path = Path::new(candidate);
    let ancestor = nearest_existing_ancestor(path);

    let available = match space.available_space(ancestor) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(
                "Checker: free space query failed at {:?} for {:?}: {}",
                ancestor, path, e
            );
            return CheckReply::error(candidate, MSG_CANNOT_CREATE, 0);
        }
    };
    debug!(
        "Checker: {}GB ({} bytes) available at {:?} for {:?}",
        whole_gb(available),
        available,
        ancestor,
        path
    );

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => CheckReply::ok(candidate, msg_directory_exists(), available),
        Ok(_) => CheckReply::error(candidate, MSG_NOT_A_DIRECTORY, available),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            CheckReply::ok(candidate, MSG_NEW_DIRECTORY, available)
        }
        Err(e) => {
            // Not-a-directory components, permission errors and the like.
            debug!("Checker: cannot stat {:?}: {}", path, e);
            CheckReply::error(candidate, MSG_CANNOT_CREATE, 0)
        }
    }
}
