//! Guessing strategies.
//!
//! Every strategy is a small deterministic state machine fed one outcome at a
//! time:
//! - [Simple]: a fixed cyclic sequence of guesses
//! - [Conditional]: a cyclic sequence that only runs after a trigger outcome
//! - [Phased]: repeat-the-last betting that switches to a derived sequence
//!   after a losing run
//!
//! Ties never change the state of any strategy.

mod conditional;
mod phased;
mod record;
mod sequence;
mod simple;

pub use conditional::Conditional;
pub use phased::{derive, PhaseKind, Phased, FOLLOW_WINDOW, MISS_LIMIT, TRACK_WINDOW};
pub use record::Record;
pub use sequence::{Sequence, SequenceError, Step, Walk};
pub use simple::Simple;

use tally_types::{Outcome, Prediction, StrategySnapshot};

/// How a bet on a decided hand settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Hit,
    Miss,
}

/// Behavior shared by all strategy kinds.
pub trait Progression {
    /// Guess for the next hand. Has no side effects.
    fn predict(&self) -> Prediction;

    /// Advance on a recorded outcome. Returns the settled bet, if one was placed.
    fn observe(&mut self, outcome: Outcome) -> Option<Verdict>;

    /// Return to the freshly constructed state.
    fn reset(&mut self);

    fn record(&self) -> &Record;

    fn snapshot(&self, name: &str) -> StrategySnapshot {
        self.record().snapshot(name, self.predict())
    }
}

/// A strategy of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Simple(Simple),
    Conditional(Conditional),
    Phased(Phased),
}

impl Strategy {
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Simple(_) => "simple",
            Strategy::Conditional(_) => "conditional",
            Strategy::Phased(_) => "phased",
        }
    }
}

impl Progression for Strategy {
    fn predict(&self) -> Prediction {
        match self {
            Strategy::Simple(s) => s.predict(),
            Strategy::Conditional(s) => s.predict(),
            Strategy::Phased(s) => s.predict(),
        }
    }

    fn observe(&mut self, outcome: Outcome) -> Option<Verdict> {
        match self {
            Strategy::Simple(s) => s.observe(outcome),
            Strategy::Conditional(s) => s.observe(outcome),
            Strategy::Phased(s) => s.observe(outcome),
        }
    }

    fn reset(&mut self) {
        match self {
            Strategy::Simple(s) => s.reset(),
            Strategy::Conditional(s) => s.reset(),
            Strategy::Phased(s) => s.reset(),
        }
    }

    fn record(&self) -> &Record {
        match self {
            Strategy::Simple(s) => s.record(),
            Strategy::Conditional(s) => s.record(),
            Strategy::Phased(s) => s.record(),
        }
    }
}

impl From<Simple> for Strategy {
    fn from(strategy: Simple) -> Self {
        Strategy::Simple(strategy)
    }
}

impl From<Conditional> for Strategy {
    fn from(strategy: Conditional) -> Self {
        Strategy::Conditional(strategy)
    }
}

impl From<Phased> for Strategy {
    fn from(strategy: Phased) -> Self {
        Strategy::Phased(strategy)
    }
}
