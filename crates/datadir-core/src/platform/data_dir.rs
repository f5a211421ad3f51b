/// OS-specific default locations, resolved through `directories`.
///
/// - Linux: `$XDG_DATA_HOME/datadir-chooser` (usually `~/.local/share/...`)
/// - macOS: `~/Library/Application Support/io.github.Swatto86.DataDirChooser`
/// - Windows: `%APPDATA%\Swatto86\DataDirChooser\data`
use directories::ProjectDirs;
use std::path::PathBuf;

const QUALIFIER: &str = "io.github";
const ORGANIZATION: &str = "Swatto86";
const APPLICATION: &str = "DataDirChooser";

/// Settings file name inside the config directory.
pub const SETTINGS_FILENAME: &str = "settings.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Default data directory for this OS.
///
/// Falls back to `./data` when no home directory can be determined
/// (e.g. a stripped-down service account).
pub fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            tracing::warn!("No home directory found -- defaulting data directory to ./data");
            PathBuf::from("data")
        })
}

/// Default location of the persisted settings file.
pub fn default_settings_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_not_empty() {
        assert!(!default_data_dir().as_os_str().is_empty());
    }

    #[test]
    fn settings_path_ends_with_file_name() {
        assert!(default_settings_path().ends_with(SETTINGS_FILENAME));
    }
}
