use std::{fmt, ops::Index, str::FromStr};
use tally_types::{Outcome, ParseOutcomeError};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("guess sequence is empty")]
    Empty,
    #[error("guess sequence contains a tie at position {position}")]
    Tie { position: usize },
    #[error("a tie cannot trigger a strategy")]
    TieTrigger,
    #[error(transparent)]
    Symbol(#[from] ParseOutcomeError),
}

/// Non-empty, tie-free list of guesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence(Vec<Outcome>);

impl Sequence {
    pub fn new(guesses: Vec<Outcome>) -> Result<Self, SequenceError> {
        if guesses.is_empty() {
            return Err(SequenceError::Empty);
        }
        if let Some(position) = guesses.iter().position(|g| !g.is_decided()) {
            return Err(SequenceError::Tie { position });
        }
        Ok(Self(guesses))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Outcome] {
        &self.0
    }
}

impl Index<usize> for Sequence {
    type Output = Outcome;

    fn index(&self, index: usize) -> &Outcome {
        &self.0[index]
    }
}

/// Accepts `BBP`, `B B P` and `B,B,P`.
impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let guesses = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Outcome::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(guesses)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for guess in &self.0 {
            write!(f, "{guess}")?;
        }
        Ok(())
    }
}

/// Result of settling one decided hand against a [Walk].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Guess matched; the cursor went back to the start.
    Hit,
    /// Guess missed; the cursor moved forward.
    Miss,
    /// Guess missed on the last element; the cursor wrapped to the start.
    Exhausted,
}

/// A cursor over a [Sequence]: reset on a hit, advance (wrapping) on a miss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    sequence: Sequence,
    cursor: usize,
}

impl Walk {
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            cursor: 0,
        }
    }

    pub fn current(&self) -> Outcome {
        self.sequence[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Settles `outcome` (must be decided) against the current guess.
    pub fn advance(&mut self, outcome: Outcome) -> Step {
        debug_assert!(outcome.is_decided());
        if self.current() == outcome {
            self.cursor = 0;
            return Step::Hit;
        }
        self.cursor = (self.cursor + 1) % self.sequence.len();
        if self.cursor == 0 {
            Step::Exhausted
        } else {
            Step::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Outcome::*;

    #[test]
    fn test_parse_sequence() {
        let sequence: Sequence = "BBP".parse().unwrap();
        assert_eq!(sequence.as_slice(), &[Banker, Banker, Player]);
        assert_eq!("b, b, p".parse::<Sequence>().unwrap(), sequence);
        assert_eq!(sequence.to_string(), "BBP");
    }

    #[test]
    fn test_reject_invalid_sequences() {
        assert_eq!(Sequence::new(vec![]), Err(SequenceError::Empty));
        assert_eq!("".parse::<Sequence>(), Err(SequenceError::Empty));
        assert_eq!(
            "BTP".parse::<Sequence>(),
            Err(SequenceError::Tie { position: 1 })
        );
        assert!(matches!(
            "BXP".parse::<Sequence>(),
            Err(SequenceError::Symbol(_))
        ));
    }

    #[test]
    fn test_walk_steps() {
        let mut walk = Walk::new("BP".parse().unwrap());
        assert_eq!(walk.advance(Player), Step::Miss);
        assert_eq!(walk.cursor(), 1);
        assert_eq!(walk.advance(Banker), Step::Exhausted);
        assert_eq!(walk.cursor(), 0);
        assert_eq!(walk.advance(Player), Step::Miss);
        assert_eq!(walk.advance(Player), Step::Hit);
        assert_eq!(walk.cursor(), 0);
    }

    #[test]
    fn test_single_guess_walk_always_exhausts_on_miss() {
        let mut walk = Walk::new("P".parse().unwrap());
        assert_eq!(walk.advance(Banker), Step::Exhausted);
        assert_eq!(walk.advance(Player), Step::Hit);
    }
}
