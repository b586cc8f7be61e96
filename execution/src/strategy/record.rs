use tally_types::{Prediction, Rate, StrategySnapshot};

/// Win/loss bookkeeping shared by every strategy kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub current_win_streak: u32,
    pub current_loss_streak: u32,
    pub max_win_streak: u32,
    pub max_loss_streak: u32,
}

impl Record {
    pub fn hit(&mut self) {
        self.wins += 1;
        self.current_win_streak += 1;
        self.current_loss_streak = 0;
        self.max_win_streak = self.max_win_streak.max(self.current_win_streak);
    }

    pub fn miss(&mut self) {
        self.losses += 1;
        self.current_loss_streak += 1;
        self.current_win_streak = 0;
        self.max_loss_streak = self.max_loss_streak.max(self.current_loss_streak);
    }

    /// Hands that were bet on and settled.
    pub fn decided(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> Rate {
        Rate::of(self.wins, self.decided())
    }

    pub fn loss_rate(&self) -> Rate {
        Rate::of(self.losses, self.decided())
    }

    pub fn snapshot(&self, name: &str, prediction: Prediction) -> StrategySnapshot {
        StrategySnapshot {
            name: name.to_string(),
            wins: self.wins,
            losses: self.losses,
            max_win_streak: self.max_win_streak,
            max_loss_streak: self.max_loss_streak,
            current_win_streak: self.current_win_streak,
            current_loss_streak: self.current_loss_streak,
            win_rate: self.win_rate(),
            loss_rate: self.loss_rate(),
            prediction,
        }
    }
}
