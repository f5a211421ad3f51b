/// Platform-specific functionality -- free-space queries and the default
/// data directory location.

pub mod data_dir;
pub mod space;

pub use data_dir::{default_data_dir, default_settings_path};
pub use space::{Fs2Space, SpaceQuery};
