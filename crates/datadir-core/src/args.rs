//! Command-line options and the effective runtime configuration.
//!
//! Parsed with `clap`. The legacy single-dash spellings (`-datadir=DIR`,
//! `-choosedatadir`) are accepted alongside the usual `--` forms.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

/// Long options that may also be written with a single dash.
const LEGACY_LONG_FLAGS: &[&str] = &["datadir", "choosedatadir", "settings"];

/// Choose where application data is stored.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "datadir-chooser", version)]
pub struct RuntimeArgs {
    /// Use this data directory and skip the chooser.
    #[arg(long = "datadir", value_name = "DIR")]
    datadir: Option<PathBuf>,

    /// Show the chooser even if the data directory already exists.
    #[arg(long = "choosedatadir")]
    choose_datadir: bool,

    /// Settings file (defaults to the per-user config directory).
    #[arg(long = "settings", value_name = "FILE")]
    settings: Option<PathBuf>,
}

impl RuntimeArgs {
    /// Parse the process arguments; exits with a usage message on error.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn try_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(args))
    }

    /// The explicitly configured data directory, if any. An empty value
    /// counts as unset.
    pub fn datadir(&self) -> Option<&Path> {
        self.datadir
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn choose_datadir(&self) -> bool {
        self.choose_datadir
    }

    /// Settings file to use.
    pub fn settings_path(&self) -> PathBuf {
        self.settings
            .clone()
            .unwrap_or_else(crate::platform::default_settings_path)
    }

    /// Record `dir` as the data directory unless one was given explicitly.
    ///
    /// Returns `true` if the value was stored.
    pub fn soft_set_datadir(&mut self, dir: &Path) -> bool {
        if self.datadir().is_some() {
            return false;
        }
        self.datadir = Some(dir.to_path_buf());
        true
    }
}

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value` for the
/// known long options. Everything else passes through untouched.
fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if LEGACY_LONG_FLAGS.contains(&name) {
                OsString::from(format!("--{rest}"))
            } else {
                arg
            }
        })
        .collect()
}
