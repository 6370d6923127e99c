use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use melodeon_core::{catalog::load_tracks, config::Settings, logger::init_logger};
use melodeon_library::Library;

mod handlers;

use handlers::{CommandHandler, utils::WriteAdapter};

/// Options configurable via the CLI.
#[derive(Debug, Parser)]
#[command(name = "melodeon-cli", version = env!("CARGO_PKG_VERSION"), about)]
struct Flags {
    /// config file path, defaults to the melodeon config directory
    #[clap(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// The JSON file of extracted track metadata, overrides `library.catalog` from the config
    #[clap(long, short, value_hint = clap::ValueHint::FilePath)]
    catalog: Option<PathBuf>,
    /// Set the log level, overrides `log_level` from the config
    #[clap(long)]
    log_level: Option<log::LevelFilter>,
    /// subcommand to run
    #[clap(subcommand)]
    subcommand: Option<handlers::Command>,
}

#[test]
fn verify_cli() {
    Flags::command().debug_assert();
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    clap_complete::CompleteEnv::with_factory(Flags::command).complete();

    let flags = Flags::parse();

    let config_path = match flags.config {
        Some(path) => path,
        None => Settings::get_config_path().context("Could not find the config file")?,
    };
    let settings = Settings::init(config_path, flags.catalog, flags.log_level)?;

    init_logger(settings.log_level);

    let Some(subcommand) = flags.subcommand else {
        eprintln!("No subcommand provided");
        return Ok(());
    };

    let catalog = settings.library.catalog.context(
        "No catalog to read, pass one with --catalog or set `library.catalog` in the config",
    )?;
    let tracks = load_tracks(&catalog)
        .with_context(|| format!("Could not load {}", catalog.display()))?;
    let mut library = Library::from_tracks(tracks, settings.library.empty_policy);

    let mut stdout_adapter = WriteAdapter(std::io::stdout());
    let mut stderr_adapter = WriteAdapter(std::io::stderr());

    subcommand.handle(&mut library, &mut stdout_adapter, &mut stderr_adapter)
}
