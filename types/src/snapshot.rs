use crate::{Outcome, Prediction};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Loss streak at which a strategy is flagged as cold.
pub const ALERT_LOSS_STREAK: u32 = 4;

/// A percentage with two decimals, stored as basis points (33.33% = 3333).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(u32);

impl Rate {
    /// `part / total * 100`, rounded half-up to two decimals. Zero when `total` is zero.
    pub fn of(part: u32, total: u32) -> Self {
        if total == 0 {
            return Self(0);
        }
        let (part, total) = (part as u64, total as u64);
        Self(((part * 20_000 + total) / (2 * total)) as u32)
    }

    pub fn basis_points(self) -> u32 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.percent())
    }
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let percent = f64::deserialize(deserializer)?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(serde::de::Error::custom("rate out of range"));
        }
        Ok(Self((percent * 100.0).round() as u32))
    }
}

/// Running outcome counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    pub player: u32,
    pub banker: u32,
    pub tie: u32,
}

impl Tallies {
    pub fn add(&mut self, outcome: Outcome) {
        *self.slot(outcome) += 1;
    }

    /// Inverse of [Tallies::add]. Panics if the outcome was never counted.
    pub fn remove(&mut self, outcome: Outcome) {
        let slot = self.slot(outcome);
        *slot = slot
            .checked_sub(1)
            .expect("removed an outcome that was never tallied");
    }

    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Player => self.player,
            Outcome::Banker => self.banker,
            Outcome::Tie => self.tie,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.banker + self.tie
    }

    fn slot(&mut self, outcome: Outcome) -> &mut u32 {
        match outcome {
            Outcome::Player => &mut self.player,
            Outcome::Banker => &mut self.banker,
            Outcome::Tie => &mut self.tie,
        }
    }
}

/// Per-strategy statistics handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySnapshot {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub max_win_streak: u32,
    pub max_loss_streak: u32,
    pub current_win_streak: u32,
    pub current_loss_streak: u32,
    pub win_rate: Rate,
    pub loss_rate: Rate,
    pub prediction: Prediction,
}

impl StrategySnapshot {
    /// Whether the strategy is on a losing run long enough to flag.
    pub fn is_cold(&self) -> bool {
        self.current_loss_streak >= ALERT_LOSS_STREAK
    }
}

/// Consolidated engine state after an operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hands: usize,
    pub tallies: Tallies,
    pub strategies: Vec<StrategySnapshot>,
}

impl Snapshot {
    pub fn strategy(&self, name: &str) -> Option<&StrategySnapshot> {
        self.strategies.iter().find(|s| s.name == name)
    }
}
