/// Thresholds, size formatting and status derivation.
pub mod size;
pub mod status;

pub use status::StatusView;
