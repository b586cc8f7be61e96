//! Cyclic progression: bet `sequence[cursor]`, go back to the start on a hit,
//! step forward (wrapping) on a miss.

use super::{Progression, Record, Sequence, Step, Verdict, Walk};
use tally_types::{Outcome, Prediction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simple {
    walk: Walk,
    record: Record,
}

impl Simple {
    pub fn new(sequence: Sequence) -> Self {
        Self {
            walk: Walk::new(sequence),
            record: Record::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.walk.cursor()
    }

    pub fn sequence(&self) -> &Sequence {
        self.walk.sequence()
    }
}

impl Progression for Simple {
    fn predict(&self) -> Prediction {
        Prediction::Guess(self.walk.current())
    }

    fn observe(&mut self, outcome: Outcome) -> Option<Verdict> {
        if !outcome.is_decided() {
            return None;
        }
        match self.walk.advance(outcome) {
            Step::Hit => {
                self.record.hit();
                Some(Verdict::Hit)
            }
            Step::Miss | Step::Exhausted => {
                self.record.miss();
                Some(Verdict::Miss)
            }
        }
    }

    fn reset(&mut self) {
        self.walk.rewind();
        self.record = Record::default();
    }

    fn record(&self) -> &Record {
        &self.record
    }
}
