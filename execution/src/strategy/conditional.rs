//! Armed progression: idle until the trigger outcome shows up, then walks its
//! sequence like [super::Simple] until the first hit or until the sequence is
//! exhausted, and goes back to idle.

use super::{Progression, Record, Sequence, SequenceError, Step, Verdict, Walk};
use tally_types::{Outcome, Prediction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conditional {
    walk: Walk,
    trigger: Outcome,
    armed: bool,
    record: Record,
}

impl Conditional {
    /// Fails if the trigger is a tie (ties never reach a strategy).
    pub fn new(sequence: Sequence, trigger: Outcome) -> Result<Self, SequenceError> {
        if !trigger.is_decided() {
            return Err(SequenceError::TieTrigger);
        }
        Ok(Self {
            walk: Walk::new(sequence),
            trigger,
            armed: false,
            record: Record::default(),
        })
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn trigger(&self) -> Outcome {
        self.trigger
    }

    pub fn cursor(&self) -> usize {
        self.walk.cursor()
    }

    pub fn sequence(&self) -> &Sequence {
        self.walk.sequence()
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.walk.rewind();
    }
}

impl Progression for Conditional {
    fn predict(&self) -> Prediction {
        if self.armed {
            Prediction::Guess(self.walk.current())
        } else {
            Prediction::Waiting
        }
    }

    fn observe(&mut self, outcome: Outcome) -> Option<Verdict> {
        if !outcome.is_decided() {
            return None;
        }
        if !self.armed {
            if outcome == self.trigger {
                self.armed = true;
                self.walk.rewind();
            }
            return None;
        }
        match self.walk.advance(outcome) {
            Step::Hit => {
                self.record.hit();
                self.disarm();
                Some(Verdict::Hit)
            }
            Step::Miss => {
                self.record.miss();
                Some(Verdict::Miss)
            }
            Step::Exhausted => {
                self.record.miss();
                self.disarm();
                Some(Verdict::Miss)
            }
        }
    }

    fn reset(&mut self) {
        self.disarm();
        self.record = Record::default();
    }

    fn record(&self) -> &Record {
        &self.record
    }
}
