//! Two-phase progression.
//!
//! Track (phase 1): once three outcomes have been seen, bet that the last one
//! repeats. A hit sits out the next hand. Four misses in a row switch to
//! Follow with an empty window.
//!
//! Follow (phase 2): sit out until two fresh outcomes have been seen, derive a
//! four-guess sequence from them and walk it like [super::Simple]. A hit, or
//! four misses, returns to Track with everything but the record cleared.

use super::{Progression, Record, Sequence, Step, Verdict, Walk};
use std::collections::VecDeque;
use tally_types::{Outcome, Prediction};

/// Outcomes Track needs before it starts betting.
pub const TRACK_WINDOW: usize = 3;
/// Consecutive Track misses that trigger the switch to Follow.
pub const MISS_LIMIT: usize = 4;
/// Outcomes Follow derives its sequence from.
pub const FOLLOW_WINDOW: usize = 2;

use Outcome::{Banker as B, Player as P};

/// Follow sequences keyed by (second-last, last).
const FOLLOW_TABLE: [((Outcome, Outcome), [Outcome; 4]); 4] = [
    ((P, P), [P, P, B, B]),
    ((B, B), [B, B, P, P]),
    ((P, B), [P, B, P, B]),
    ((B, P), [B, P, B, P]),
];

/// Looks up the Follow sequence for the pair `(second_last, last)`.
///
/// Panics if either outcome is a tie.
pub fn derive(second_last: Outcome, last: Outcome) -> Sequence {
    let (_, guesses) = FOLLOW_TABLE
        .iter()
        .find(|(key, _)| *key == (second_last, last))
        .expect("ties never enter the window");
    Sequence::new(guesses.to_vec()).expect("table sequences are valid")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Track {
    window: VecDeque<Outcome>,
    misses: usize,
    cooling: bool,
}

impl Track {
    fn predict(&self) -> Prediction {
        if self.cooling || self.window.len() < TRACK_WINDOW {
            return Prediction::Waiting;
        }
        match self.window.back() {
            Some(&last) => Prediction::Guess(last),
            None => Prediction::Waiting,
        }
    }

    /// Settles `outcome`; returns the phase to switch to, if any.
    fn observe(
        &mut self,
        record: &mut Record,
        outcome: Outcome,
    ) -> (Option<Verdict>, Option<Phase>) {
        let verdict = match self.predict() {
            Prediction::Waiting => {
                self.cooling = false;
                None
            }
            Prediction::Guess(guess) if guess == outcome => {
                record.hit();
                self.misses = 0;
                self.cooling = true;
                Some(Verdict::Hit)
            }
            Prediction::Guess(_) => {
                record.miss();
                self.misses += 1;
                Some(Verdict::Miss)
            }
        };

        if self.misses == MISS_LIMIT {
            return (verdict, Some(Phase::Follow(Follow::default())));
        }
        if self.window.len() == TRACK_WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(outcome);
        (verdict, None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Follow {
    /// Collecting the outcomes the sequence is derived from.
    Seeding(Vec<Outcome>),
    Walking(Walk),
}

impl Default for Follow {
    fn default() -> Self {
        Follow::Seeding(Vec::with_capacity(FOLLOW_WINDOW))
    }
}

impl Follow {
    fn predict(&self) -> Prediction {
        match self {
            Follow::Seeding(_) => Prediction::Waiting,
            Follow::Walking(walk) => Prediction::Guess(walk.current()),
        }
    }

    /// Settles `outcome`; returns the phase to switch to, if any.
    fn observe(
        &mut self,
        record: &mut Record,
        outcome: Outcome,
    ) -> (Option<Verdict>, Option<Phase>) {
        match self {
            Follow::Seeding(window) => {
                window.push(outcome);
                let sequence = match window[..] {
                    [second_last, last] => Some(derive(second_last, last)),
                    _ => None,
                };
                if let Some(sequence) = sequence {
                    *self = Follow::Walking(Walk::new(sequence));
                }
                (None, None)
            }
            Follow::Walking(walk) => match walk.advance(outcome) {
                Step::Hit => {
                    record.hit();
                    (Some(Verdict::Hit), Some(Phase::default()))
                }
                Step::Miss => {
                    record.miss();
                    (Some(Verdict::Miss), None)
                }
                Step::Exhausted => {
                    record.miss();
                    (Some(Verdict::Miss), Some(Phase::default()))
                }
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Track(Track),
    Follow(Follow),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Track(Track::default())
    }
}

/// Which phase a [Phased] strategy is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Track,
    Follow,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Phased {
    phase: Phase,
    record: Record,
}

impl Phased {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Track(_) => PhaseKind::Track,
            Phase::Follow(_) => PhaseKind::Follow,
        }
    }

    /// Sequence being walked in Follow, once derived.
    pub fn follow_sequence(&self) -> Option<&Sequence> {
        match &self.phase {
            Phase::Follow(Follow::Walking(walk)) => Some(walk.sequence()),
            _ => None,
        }
    }
}

impl Progression for Phased {
    fn predict(&self) -> Prediction {
        match &self.phase {
            Phase::Track(track) => track.predict(),
            Phase::Follow(follow) => follow.predict(),
        }
    }

    fn observe(&mut self, outcome: Outcome) -> Option<Verdict> {
        if !outcome.is_decided() {
            return None;
        }
        let (verdict, next) = match &mut self.phase {
            Phase::Track(track) => track.observe(&mut self.record, outcome),
            Phase::Follow(follow) => follow.observe(&mut self.record, outcome),
        };
        if let Some(phase) = next {
            self.phase = phase;
        }
        verdict
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record(&self) -> &Record {
        &self.record
    }
}
