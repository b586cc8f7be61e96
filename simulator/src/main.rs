use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf, str::FromStr};
use tally_execution::{shoe::DEFAULT_DECKS, Engine};
use tally_simulator::{play, simulate, storage, write_snapshot, Mode, Session};
use tally_types::MAX_HANDS;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML registry file (defaults to the standard strategies)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Print snapshots as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Record hands from stdin (P, B, T, undo, reset, show, history, quit)
    Play {
        /// Hand log to resume from and save to after every change
        #[arg(short, long)]
        session: Option<PathBuf>,
    },
    /// Rebuild and print the state of a saved hand log
    Replay { log: PathBuf },
    /// Deal hands from a shuffled shoe and print the resulting state
    Simulate {
        #[arg(short = 'n', long, default_value_t = 80)]
        hands: usize,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, default_value_t = DEFAULT_DECKS)]
        decks: usize,

        /// Save the dealt hands to this hand log
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger (stdout carries snapshots)
    let level = Level::from_str(&args.log_level)
        .with_context(|| format!("invalid log level: {}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Load registry
    let registry = storage::load_registry(args.config.as_deref())
        .context("failed to load strategy registry")?;
    let mode = if args.json { Mode::Json } else { Mode::Text };

    match args.command {
        Action::Play { session } => {
            let mut session = Session::open(registry, session).context("failed to open session")?;
            play(&mut session, io::stdin().lock(), io::stdout().lock(), mode)
                .context("session failed")?;
        }
        Action::Replay { log } => {
            let hands = storage::load_log(&log).context("failed to load hand log")?;
            let engine = Engine::resume(registry, &hands);
            write_snapshot(&mut io::stdout().lock(), &engine.snapshot(), mode, true)?;
        }
        Action::Simulate {
            hands,
            seed,
            decks,
            output,
        } => {
            anyhow::ensure!(hands <= MAX_HANDS, "at most {MAX_HANDS} hands can be simulated");
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, "dealing shoe");
            let engine = simulate(registry, hands, seed, decks);
            write_snapshot(&mut io::stdout().lock(), &engine.snapshot(), mode, true)?;
            if let Some(path) = output {
                storage::save_log(&path, &engine.hand_log())
                    .with_context(|| format!("failed to save {}", path.display()))?;
            }
        }
    }
    Ok(())
}
