//! DataDirChooser -- first-run data directory selection.
//!
//! Thin binary entry point. All logic lives in the `datadir-core`
//! and `datadir-gui` crates.

use datadir_core::args::RuntimeArgs;
use datadir_core::chooser::{pick_data_directory, PickOutcome};
use datadir_core::settings::JsonSettings;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("DataDirChooser starting");

    let mut args = RuntimeArgs::from_env();
    let mut settings = JsonSettings::open(args.settings_path());
    let default_dir = datadir_core::platform::default_data_dir();
    let mut dialog = datadir_gui::EguiChooserDialog::new(&default_dir);

    let outcome = pick_data_directory(&mut args, &mut settings, &default_dir, &mut dialog)?;

    if outcome == PickOutcome::Cancelled {
        // Declining to choose a directory is not a failure.
        tracing::info!("No data directory chosen -- exiting");
        std::process::exit(0);
    }

    if let Some(dir) = args.datadir() {
        println!("{}", dir.display());
    }
    Ok(())
}
