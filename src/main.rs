//! Mot du Jour - CLI
//!
//! Daily French word game with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mot_du_jour::{
    commands::run_simple,
    config::{DictionarySource, GameConfig, StateLocation},
    controller::GameController,
    game::read_total,
    interactive::{App, run_tui},
    output::print_total_score,
    storage::{FileStore, KeyValueStore, MemoryStore},
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mot_du_jour",
    about = "Guess the French word of the day in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to use instead of the embedded one (.txt: one word per line, otherwise a JSON array)
    #[arg(short, long, global = true, env = "MOT_DU_JOUR_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// File holding the daily word and the total score
    #[arg(short, long, global = true, env = "MOT_DU_JOUR_STATE")]
    state: Option<PathBuf>,

    /// Keep state in memory only; nothing is written to disk (overrides --state)
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Do not reveal the first letter of each row
    #[arg(long, global = true)]
    no_hint: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode, one guess per line
    Simple,

    /// Print the total score and exit
    Score,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let dictionary = self
            .dictionary
            .clone()
            .map_or(DictionarySource::Embedded, DictionarySource::File);

        let state = if self.ephemeral {
            StateLocation::Memory
        } else {
            self.state
                .clone()
                .map_or_else(StateLocation::default, StateLocation::File)
        };

        GameConfig {
            dictionary,
            state,
            reveal_first_letter: !self.no_hint,
            ..GameConfig::default()
        }
    }
}

/// Logs go to stderr, except in the TUI where they would corrupt the screen
fn init_tracing(log_file: Option<&PathBuf>, command: Commands) -> Result<()> {
    let default_level = if log_file.is_none() && command == Commands::Play {
        "off"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn open_store(location: &StateLocation) -> Box<dyn KeyValueStore> {
    match location {
        StateLocation::Memory => Box::new(MemoryStore::new()),
        StateLocation::File(path) => Box::new(FileStore::new(path)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_ref(), command)?;

    let config = cli.game_config();
    let store = open_store(&config.state);

    if command == Commands::Score {
        return run_score_command(store.as_ref());
    }

    let mut controller = GameController::new(config, store);
    match controller.load_dictionary() {
        Ok(count) => info!(count, "Dictionary ready"),
        Err(err) => warn!(error = %err, "Continuing without a dictionary"),
    }

    match command {
        Commands::Simple => run_simple(&mut controller).context("console game failed"),
        _ => run_tui(App::new(controller)),
    }
}

fn run_score_command(store: &dyn KeyValueStore) -> Result<()> {
    let total = read_total(store).context("cannot read the stored score")?;
    print_total_score(total);
    Ok(())
}
