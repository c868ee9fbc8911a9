//! Mastermind - CLI
//!
//! Code-breaking game with TUI and text modes, persisted records and a
//! solving helper.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        SettingsUpdate, collect_stats, reset_stats, run_benchmark, run_simple, update_settings,
    },
    game::Mode,
    i18n::Language,
    output::{print_benchmark_result, print_settings, print_stats},
    storage::{FileStore, records::load_settings},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

const STORE_FILE: &str = ".mastermind.json";

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with stopwatch and score modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Where settings and records are kept (default: ~/.mastermind.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Language for color names and messages (default: from $LANG, else en)
    #[arg(short, long, global = true, value_enum)]
    lang: Option<Language>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text game without TUI)
    Simple,

    /// Show or change the stored settings
    Settings {
        /// Number of rows (guesses) per game
        #[arg(short, long)]
        rows: Option<usize>,

        /// Number of colors offered per game
        #[arg(short, long)]
        poll: Option<usize>,

        /// Whether the code may repeat colors
        #[arg(short, long)]
        duplicates: Option<bool>,

        /// Relax, stopwatch or score
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Show remaining codes and a suggestion while playing
        #[arg(long)]
        helper: Option<bool>,
    },

    /// Show best time and score for the current settings
    Stats {
        /// Clear the records for the current settings
        #[arg(long)]
        reset: bool,
    },

    /// Auto-play games with the helper's suggestions
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn store_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
            .join(STORE_FILE)
    })
}

fn language(explicit: Option<Language>) -> Language {
    explicit
        .or_else(|| {
            std::env::var("LANG")
                .ok()
                .and_then(|lang| Language::from_code(&lang))
        })
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = FileStore::open(store_path(cli.store));
    let language = language(cli.lang);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(store, language),
        Commands::Simple => run_simple(&mut store, language).map_err(|e| anyhow::anyhow!(e)),
        Commands::Settings {
            rows,
            poll,
            duplicates,
            mode,
            helper,
        } => {
            let update = SettingsUpdate {
                rows,
                color_poll_length: poll,
                allow_duplicates: duplicates,
                mode,
                helper_enabled: helper,
            };
            let config = update_settings(&mut store, &update)?;
            print_settings(&config);
            Ok(())
        }
        Commands::Stats { reset } => {
            let config = load_settings(&store);
            let report = if reset {
                reset_stats(&mut store, &config)?
            } else {
                collect_stats(&store, &config)
            };
            print_stats(&report, language);
            Ok(())
        }
        Commands::Benchmark { count, seed } => run_benchmark_command(&store, count, seed),
    }
}

fn run_benchmark_command(store: &FileStore, count: usize, seed: Option<u64>) -> Result<()> {
    let config = load_settings(store);
    println!(
        "Running benchmark on {count} games with settings {}...",
        config.fingerprint()
    );

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let result = run_benchmark(&config, count, &mut rng, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(store: FileStore, language: Language) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(store, language).context("could not start a game")?;
    run_tui(app)
}
