/// Free-space queries.
use std::io;
use std::path::Path;

/// Source of "bytes available to the current user" for a path.
///
/// The checker is generic over this so tests can report fixed amounts.
pub trait SpaceQuery {
    fn available_space(&self, path: &Path) -> io::Result<u64>;
}

/// Queries the filesystem containing `path` via `fs2`
/// (`statvfs` on Unix, `GetDiskFreeSpaceExW` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fs2Space;

impl SpaceQuery for Fs2Space {
    fn available_space(&self, path: &Path) -> io::Result<u64> {
        fs2::available_space(path)
    }
}
