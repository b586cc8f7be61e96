//! Persisted form of the hand history.
//!
//! Binary format (commonware-codec):
//! [len:varint] [outcome:u8 × len]
//!
//! JSON format:
//! `[{"hand": 1, "outcome": "P"}, {"hand": 2, "outcome": "T"}, ...]`

use crate::Outcome;
use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadRangeExt, Write};
use serde::{Deserialize, Serialize};

/// Maximum number of hands accepted when decoding a log.
pub const MAX_HANDS: usize = 100_000;

/// One row of the hand table (1-based hand number).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand: usize,
    pub outcome: Outcome,
}

/// Ordered list of recorded outcomes, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandLog {
    pub outcomes: Vec<Outcome>,
}

impl HandLog {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = HandRecord> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .map(|(i, &outcome)| HandRecord { hand: i + 1, outcome })
    }
}

impl From<&[Outcome]> for HandLog {
    fn from(outcomes: &[Outcome]) -> Self {
        Self::new(outcomes.to_vec())
    }
}

impl Write for HandLog {
    fn write(&self, writer: &mut impl BufMut) {
        self.outcomes.write(writer);
    }
}

impl Read for HandLog {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            outcomes: Vec::<Outcome>::read_range(reader, 0..=MAX_HANDS)?,
        })
    }
}

impl EncodeSize for HandLog {
    fn encode_size(&self) -> usize {
        self.outcomes.encode_size()
    }
}

// Rows are renumbered on load, so the hand column is informational only.
impl Serialize for HandLog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

impl<'de> Deserialize<'de> for HandLog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<HandRecord>::deserialize(deserializer)?;
        if records.len() > MAX_HANDS {
            return Err(serde::de::Error::custom("hand log too long"));
        }
        Ok(Self {
            outcomes: records.into_iter().map(|record| record.outcome).collect(),
        })
    }
}
