//! Interactive sessions backed by an optional hand log file.

use crate::{
    command::Command,
    render::{History, Mode, Stats, Summary},
    storage, Error,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};
use tally_execution::{Engine, Registry, Shoe};
use tally_types::{HandLog, Snapshot, MAX_HANDS};
use tracing::{info, warn};

/// What a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// State changed.
    Updated(Snapshot),
    /// Full statistics were requested.
    Stats(Snapshot),
    History(HandLog),
    Quit,
}

pub struct Session {
    engine: Engine,
    path: Option<PathBuf>,
}

impl Session {
    /// Starts a session, resuming from `path` when the file exists.
    pub fn open(registry: Registry, path: Option<PathBuf>) -> Result<Self, Error> {
        let engine = match &path {
            Some(path) if path.exists() => Engine::resume(registry, &storage::load_log(path)?),
            _ => Engine::new(registry),
        };
        Ok(Self { engine, path })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs one command. Recording is refused once the history holds
    /// `MAX_HANDS` hands, the most a saved log can hold.
    pub fn execute(&mut self, command: Command) -> Result<Reply, Error> {
        let snapshot = match command {
            Command::Record(_) if self.engine.history().len() >= MAX_HANDS => {
                return Err(Error::Full)
            }
            Command::Record(outcome) => self.engine.record(outcome),
            Command::Undo => self.engine.undo_last(),
            Command::Reset => self.engine.reset_all(),
            Command::Show => return Ok(Reply::Stats(self.engine.snapshot())),
            Command::History => return Ok(Reply::History(self.engine.hand_log())),
            Command::Quit => return Ok(Reply::Quit),
        };
        self.persist()?;
        Ok(Reply::Updated(snapshot))
    }

    fn persist(&self) -> Result<(), Error> {
        match &self.path {
            Some(path) => storage::save_log(path, &self.engine.hand_log()),
            None => Ok(()),
        }
    }
}

/// Writes a snapshot in the requested mode; `full` selects the stats table.
pub fn write_snapshot(
    output: &mut impl Write,
    snapshot: &Snapshot,
    mode: Mode,
    full: bool,
) -> Result<(), Error> {
    match mode {
        Mode::Json => writeln!(output, "{}", serde_json::to_string(snapshot)?)?,
        Mode::Text if full => write!(output, "{}", Stats(snapshot))?,
        Mode::Text => write!(output, "{}", Summary(snapshot))?,
    }
    Ok(())
}

fn write_history(output: &mut impl Write, log: &HandLog, mode: Mode) -> Result<(), Error> {
    match mode {
        Mode::Json => writeln!(output, "{}", serde_json::to_string(log)?)?,
        Mode::Text => write!(output, "{}", History(log))?,
    }
    Ok(())
}

/// Runs commands from `input` until it ends or a quit command is read.
/// Unknown commands are reported on `output` and skipped.
pub fn play(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
    mode: Mode,
) -> Result<(), Error> {
    write_snapshot(&mut output, &session.engine.snapshot(), mode, false)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(input = line.trim(), "ignored command");
                writeln!(output, "{err}")?;
                continue;
            }
        };
        let reply = match session.execute(command) {
            Ok(reply) => reply,
            Err(err @ Error::Full) => {
                warn!("session full");
                writeln!(output, "{err}")?;
                continue;
            }
            Err(err) => return Err(err),
        };
        match reply {
            Reply::Updated(snapshot) => write_snapshot(&mut output, &snapshot, mode, false)?,
            Reply::Stats(snapshot) => write_snapshot(&mut output, &snapshot, mode, true)?,
            Reply::History(log) => write_history(&mut output, &log, mode)?,
            Reply::Quit => break,
        }
        output.flush()?;
    }
    info!(hands = session.engine.history().len(), "session ended");
    Ok(())
}

/// Deals `hands` hands from a freshly shuffled shoe and records them.
pub fn simulate(registry: Registry, hands: usize, seed: u64, decks: usize) -> Engine {
    let shoe = Shoe::new(ChaCha20Rng::seed_from_u64(seed), decks);
    let engine = Engine::replay(registry, shoe.take(hands));
    info!(hands, seed, decks, "simulated shoe");
    engine
}
