/// Size thresholds and the free-space summary text.
///
/// All internal sizes are `u64` bytes. The free-space summary uses decimal
/// gigabytes (10^9) to match what disk vendors and file managers print.

/// One decimal gigabyte.
pub const GB_BYTES: u64 = 1_000_000_000;

/// Minimum recommended free space for a data directory.
pub const MIN_FREE_BYTES: u64 = 10 * GB_BYTES;

/// Whole gigabytes contained in `bytes`, rounded down.
pub fn whole_gb(bytes: u64) -> u64 {
    bytes / GB_BYTES
}

/// Whether `bytes` falls below [`MIN_FREE_BYTES`].
pub fn is_low_space(bytes: u64) -> bool {
    bytes < MIN_FREE_BYTES
}

/// Summary line shown under the path field, e.g.
/// `"5GB of free space available (of 10GB needed)."`.
pub fn free_space_summary(bytes: u64) -> String {
    let mut text = format!("{}GB of free space available", whole_gb(bytes));
    if is_low_space(bytes) {
        text.push_str(&format!(" (of {}GB needed)", whole_gb(MIN_FREE_BYTES)));
    }
    text.push('.');
    text
}
