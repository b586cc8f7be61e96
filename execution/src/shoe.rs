//! Baccarat dealing from a multi-deck shoe.
//!
//! Cards are 0-51 per deck: suit = card/13, rank = card%13. Hands follow the
//! standard tableau: naturals (8 or 9 on two cards) stand, the Player draws on
//! 0-5, and the Banker's third card depends on its total and the Player's
//! third card.

use rand::{seq::SliceRandom, Rng};
use tally_types::Outcome;
use tracing::debug;

/// Decks in a standard shoe.
pub const DEFAULT_DECKS: usize = 8;
/// The shoe is reshuffled once fewer cards than this remain.
pub const CUT_CARD: usize = 14;

const DECK_SIZE: usize = 52;

/// Points for a card: ace 1, two to nine at face value, tens and faces 0.
pub fn points(card: u8) -> u8 {
    match card % 13 {
        rank @ 0..=8 => rank + 1,
        _ => 0,
    }
}

/// Last digit of the summed points.
pub fn total(cards: &[u8]) -> u8 {
    cards.iter().fold(0, |sum, &card| (sum + points(card)) % 10)
}

/// Banker's third-card rule, given its total and the Player's third card (if any).
fn banker_draws(banker: u8, player_third: Option<u8>) -> bool {
    let Some(card) = player_third else {
        // Player stood: Banker draws on 0-5 like the Player.
        return banker <= 5;
    };
    let third = points(card);
    match banker {
        0..=2 => true,
        3 => third != 8,
        4 => (2..=7).contains(&third),
        5 => (4..=7).contains(&third),
        6 => third == 6 || third == 7,
        _ => false,
    }
}

/// Cards dealt for one coup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    pub player: Vec<u8>,
    pub banker: Vec<u8>,
}

impl Hand {
    pub fn player_total(&self) -> u8 {
        total(&self.player)
    }

    pub fn banker_total(&self) -> u8 {
        total(&self.banker)
    }

    /// Either side showed 8 or 9 on its first two cards.
    pub fn natural(&self) -> bool {
        total(&self.player[..2]) >= 8 || total(&self.banker[..2]) >= 8
    }

    pub fn outcome(&self) -> Outcome {
        let (player, banker) = (self.player_total(), self.banker_total());
        match player.cmp(&banker) {
            std::cmp::Ordering::Greater => Outcome::Player,
            std::cmp::Ordering::Less => Outcome::Banker,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// A shuffled multi-deck shoe. Iterating yields the outcome of each dealt hand.
pub struct Shoe<R: Rng> {
    rng: R,
    decks: usize,
    cards: Vec<u8>,
    shuffles: u32,
}

impl<R: Rng> Shoe<R> {
    pub fn new(rng: R, decks: usize) -> Self {
        let mut shoe = Self {
            rng,
            decks: decks.max(1),
            cards: Vec::new(),
            shuffles: 0,
        };
        shoe.shuffle();
        shoe
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Times the shoe has been (re)filled and shuffled.
    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }

    pub fn deal(&mut self) -> Hand {
        if self.cards.len() < CUT_CARD {
            self.shuffle();
        }

        // Player, Banker, Player, Banker.
        let mut player = vec![self.draw()];
        let mut banker = vec![self.draw()];
        player.push(self.draw());
        banker.push(self.draw());

        if total(&player) >= 8 || total(&banker) >= 8 {
            return Hand { player, banker };
        }
        // Player draws on 0-5.
        let player_third = (total(&player) <= 5).then(|| self.draw());
        player.extend(player_third);
        if banker_draws(total(&banker), player_third) {
            banker.push(self.draw());
        }
        Hand { player, banker }
    }

    fn shuffle(&mut self) {
        self.cards = (0..self.decks * DECK_SIZE)
            .map(|i| (i % DECK_SIZE) as u8)
            .collect();
        self.cards.shuffle(&mut self.rng);
        self.shuffles += 1;
        debug!(decks = self.decks, shuffles = self.shuffles, "shuffled shoe");
    }

    fn draw(&mut self) -> u8 {
        self.cards
            .pop()
            .expect("cut card leaves enough cards for a full hand")
    }
}

impl<R: Rng> Iterator for Shoe<R> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        Some(self.deal().outcome())
    }
}
