//! A pass-and-play impostor word game for the terminal.
//!
//! One device goes around the table; every player privately sees a word
//! and the group tries to find the one player whose word differs.

use anyhow::{Context, Error};
use impostor::{FileStore, Preferences};
use log::info;
use pico_args::Arguments;
use std::fs::{self, File};

use imp_client::{
    camera::FileCamera,
    config::{ClientConfig, Overrides},
    effects::TerminalEffects,
    tui_app::TuiApp,
};

const HELP: &str = "\
Play a game of impostor on one shared terminal

USAGE:
  imp_client [OPTIONS]

OPTIONS:
  --players    N         Number of players  [default: 4]
  --mode       MODE      Word mode, 'auto' or 'custom'
  --data-dir   DIR       Where preferences are kept  [default: env IMPOSTOR_DATA_DIR or .impostor]
  --seed       N         Seed for word and impostor draws  [default: env IMPOSTOR_SEED or random]
  --log-file   PATH      Log output file  [default: env IMPOSTOR_LOG or DATA_DIR/impostor.log]

FLAGS:
  --mute                 Start with sound effects off
  -h, --help             Print help information

ENVIRONMENT:
  RUST_LOG               Log filter (e.g., info, imp_client=debug)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        player_count: pargs.opt_value_from_str("--players")?,
        mode: pargs.opt_value_from_str("--mode")?,
        data_dir: pargs.opt_value_from_str("--data-dir")?,
        seed: pargs.opt_value_from_str("--seed")?,
        log_file: pargs.opt_value_from_str("--log-file")?,
        muted: pargs.contains("--mute"),
    };
    let config = ClientConfig::from_env(overrides).context("invalid configuration")?;

    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("couldn't create {}", config.data_dir.display()))?;

    // The terminal belongs to the TUI, so logs go to a file.
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("couldn't open {}", config.log_file.display()))?;
    env_logger::builder()
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    info!(
        "starting with {} players, data in {}",
        config.player_count,
        config.data_dir.display()
    );

    let preferences = Preferences::new(FileStore::in_dir(&config.data_dir));
    let app = TuiApp::new(
        &config,
        preferences,
        TerminalEffects::new(config.muted),
        FileCamera::new(),
    );

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result
}
