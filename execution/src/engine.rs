//! Hand history and strategy bookkeeping.
//!
//! The history is the source of truth. Recording a hand feeds it to every
//! strategy (the same step a replay would take); undoing a hand rebuilds every
//! strategy by replaying the remaining history from a reset state, so undo is
//! exact for every strategy kind.

use crate::registry::Registry;
use crate::Error;
use tally_types::{HandLog, Outcome, Snapshot, Tallies};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    registry: Registry,
    history: Vec<Outcome>,
    tallies: Tallies,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Registry::standard())
    }
}

impl Engine {
    pub fn new(mut registry: Registry) -> Self {
        registry.reset();
        Self {
            registry,
            history: Vec::new(),
            tallies: Tallies::default(),
        }
    }

    /// Rebuilds state from an ordered list of outcomes.
    pub fn replay(registry: Registry, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut engine = Self::new(registry);
        for outcome in outcomes {
            engine.apply(outcome);
        }
        engine
    }

    /// Rebuilds state from a persisted log.
    pub fn resume(registry: Registry, log: &HandLog) -> Self {
        let engine = Self::replay(registry, log.outcomes.iter().copied());
        info!(hands = engine.history.len(), "resumed session");
        engine
    }

    pub fn record(&mut self, outcome: Outcome) -> Snapshot {
        self.apply(outcome);
        debug!(hand = self.history.len(), %outcome, "recorded");
        self.snapshot()
    }

    /// Parses and records a symbol (`P`, `B`, `T`). Invalid input leaves the
    /// engine untouched.
    pub fn record_symbol(&mut self, symbol: &str) -> Result<Snapshot, Error> {
        let outcome = symbol.parse::<Outcome>().map_err(|err| {
            warn!(symbol, "rejected outcome");
            err
        })?;
        Ok(self.record(outcome))
    }

    /// Removes the most recent hand. Does nothing on an empty history.
    pub fn undo_last(&mut self) -> Snapshot {
        let Some(outcome) = self.history.pop() else {
            return self.snapshot();
        };
        self.tallies.remove(outcome);
        self.recompute();
        debug!(hand = self.history.len() + 1, %outcome, "undone");
        self.snapshot()
    }

    /// Clears the history and returns every strategy to its initial state.
    pub fn reset_all(&mut self) -> Snapshot {
        self.history.clear();
        self.tallies = Tallies::default();
        self.registry.reset();
        info!("reset all");
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hands: self.history.len(),
            tallies: self.tallies,
            strategies: self.registry.snapshots(),
        }
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn hand_log(&self) -> HandLog {
        HandLog::from(self.history.as_slice())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    fn apply(&mut self, outcome: Outcome) {
        self.history.push(outcome);
        self.tallies.add(outcome);
        self.registry.observe(outcome);
    }

    fn recompute(&mut self) {
        self.registry.reset();
        for &outcome in &self.history {
            self.registry.observe(outcome);
        }
    }
}
