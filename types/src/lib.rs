//! Shared types for the baccarat tally engine: outcomes, predictions,
//! persisted hand logs, and the snapshots handed to renderers.

mod history;
mod outcome;
mod snapshot;

pub use history::{HandLog, HandRecord, MAX_HANDS};
pub use outcome::{Outcome, ParseOutcomeError, Prediction};
pub use snapshot::{Rate, Snapshot, StrategySnapshot, Tallies, ALERT_LOSS_STREAK};

#[cfg(test)]
mod tests;
