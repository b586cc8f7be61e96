use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Result of a single baccarat hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Outcome {
    #[serde(rename = "P")]
    Player = 0,
    #[serde(rename = "B")]
    Banker = 1,
    #[serde(rename = "T")]
    Tie = 2,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Player, Outcome::Banker, Outcome::Tie];

    /// Single-letter symbol used in logs and hand tables.
    pub fn symbol(self) -> char {
        match self {
            Outcome::Player => 'P',
            Outcome::Banker => 'B',
            Outcome::Tie => 'T',
        }
    }

    /// Whether the hand was decided (ties are ignored by every strategy).
    pub fn is_decided(self) -> bool {
        self != Outcome::Tie
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("invalid outcome symbol: {0:?} (expected P, B or T)")]
pub struct ParseOutcomeError(pub String);

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "player" => Ok(Outcome::Player),
            "b" | "banker" => Ok(Outcome::Banker),
            "t" | "tie" => Ok(Outcome::Tie),
            _ => Err(ParseOutcomeError(s.to_string())),
        }
    }
}

impl TryFrom<char> for Outcome {
    type Error = ParseOutcomeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'P' => Ok(Outcome::Player),
            'B' => Ok(Outcome::Banker),
            'T' => Ok(Outcome::Tie),
            _ => Err(ParseOutcomeError(value.to_string())),
        }
    }
}

impl Write for Outcome {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Outcome {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Player),
            1 => Ok(Self::Banker),
            2 => Ok(Self::Tie),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for Outcome {
    const SIZE: usize = 1;
}

/// What a strategy would bet on the next hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prediction {
    /// Bet on this outcome (never a tie).
    Guess(Outcome),
    /// Strategy is idle for the next hand.
    Waiting,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Guess(outcome) => write!(f, "{outcome}"),
            Prediction::Waiting => write!(f, "Waiting"),
        }
    }
}

impl Serialize for Prediction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Prediction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("waiting") {
            return Ok(Prediction::Waiting);
        }
        match raw.parse::<Outcome>().map_err(serde::de::Error::custom)? {
            Outcome::Tie => Err(serde::de::Error::custom("a tie is never predicted")),
            outcome => Ok(Prediction::Guess(outcome)),
        }
    }
}
