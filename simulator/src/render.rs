//! Text rendering of engine snapshots.

use std::fmt::{self, Display, Formatter};
use tally_types::{HandLog, Snapshot, StrategySnapshot};

/// Marker appended to strategies on a long losing run.
pub const COLD: &str = "COLD";

/// How snapshots are written to the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Text,
    Json,
}

fn name_width(snapshot: &Snapshot) -> usize {
    snapshot
        .strategies
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Strategy".len())
}

fn streak(stats: &StrategySnapshot) -> String {
    if stats.current_win_streak > 0 {
        format!("W{}", stats.current_win_streak)
    } else if stats.current_loss_streak > 0 {
        format!("L{}", stats.current_loss_streak)
    } else {
        "-".to_string()
    }
}

fn cold(stats: &StrategySnapshot) -> &'static str {
    if stats.is_cold() {
        COLD
    } else {
        ""
    }
}

/// Hand counts on one line.
pub struct Counts<'a>(pub &'a Snapshot);

impl Display for Counts<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tallies = self.0.tallies;
        writeln!(
            f,
            "Hands {} | Player {} | Banker {} | Tie {}",
            self.0.hands, tallies.player, tallies.banker, tallies.tie
        )
    }
}

/// Counts plus the next guess of every strategy.
pub struct Summary<'a>(pub &'a Snapshot);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = name_width(self.0);
        write!(f, "{}", Counts(self.0))?;
        for stats in &self.0.strategies {
            let line = format!(
                "{:<width$}  {:<7}  {}",
                stats.name,
                stats.prediction.to_string(),
                cold(stats)
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Counts plus the full statistics table.
pub struct Stats<'a>(pub &'a Snapshot);

impl Display for Stats<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = name_width(self.0);
        write!(f, "{}", Counts(self.0))?;
        writeln!(
            f,
            "{:<width$}  {:<7}  {:>4}  {:>6}  {:>6}  {:>6}  {:>6}  {:>5}  {:>5}",
            "Strategy", "Next", "Wins", "Losses", "Win%", "Loss%", "Streak", "MaxW", "MaxL"
        )?;
        for stats in &self.0.strategies {
            let line = format!(
                "{:<width$}  {:<7}  {:>4}  {:>6}  {:>6}  {:>6}  {:>6}  {:>5}  {:>5}  {}",
                stats.name,
                stats.prediction.to_string(),
                stats.wins,
                stats.losses,
                stats.win_rate.to_string(),
                stats.loss_rate.to_string(),
                streak(stats),
                stats.max_win_streak,
                stats.max_loss_streak,
                cold(stats)
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Hand table, oldest first.
pub struct History<'a>(pub &'a HandLog);

impl Display for History<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No hands recorded");
        }
        writeln!(f, "{:>5}  Result", "#")?;
        for record in self.0.records() {
            writeln!(f, "{:>5}  {}", record.hand, record.outcome)?;
        }
        Ok(())
    }
}
