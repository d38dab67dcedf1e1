//! Entities shared between the decision core and the external runtime.
//!
//! Everything here is snapshot data: the runtime owns the live table and
//! hands the engine immutable copies at each callback. Nothing in the core
//! mutates a snapshot after receiving it.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

/// Ordinal card rank, deuce (2) through ace (14). Aces are always high.
pub type Rank = u8;

/// A card is a rank paired with a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Rank, pub Suit);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            14 => write!(f, "A{}", self.1),
            13 => write!(f, "K{}", self.1),
            12 => write!(f, "Q{}", self.1),
            11 => write!(f, "J{}", self.1),
            rank => write!(f, "{rank}{}", self.1),
        }
    }
}

/// A standard 52-card deck, dealt sequentially after a shuffle.
#[derive(Debug)]
pub struct Deck {
    cards: [Card; 52],
    deck_idx: usize,
}

impl Deck {
    /// Deals the next card. Callers reshuffle between hands; dealing past
    /// the 52nd card panics.
    pub fn deal_card(&mut self) -> Card {
        let card = self.cards[self.deck_idx];
        self.deck_idx += 1;
        card
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.deck_idx = 0;
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = [Card(2, Suit::Club); 52];
        for (i, rank) in (2u8..=14).enumerate() {
            for (j, suit) in [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart]
                .into_iter()
                .enumerate()
            {
                cards[4 * i + j] = Card(rank, suit);
            }
        }
        Self { cards, deck_idx: 0 }
    }
}

/// Type alias for chip quantities. Bets, stacks, and raise amounts are all
/// whole chips.
///
/// If a single table ever holds ~4.2 billion chips, bet sizing is the least
/// of anyone's problems.
pub type Chips = u32;

/// Type alias for the seat identities handed out by the runtime.
pub type PlayerId = String;

/// A single seat as the runtime last reported it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    /// Chips left behind the bet.
    pub stack: Chips,
    /// Chips already committed this betting round.
    pub current_bet: Chips,
    pub folded: bool,
}

/// Betting rounds in dealing order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Round {
    /// The betting round that follows, or `None` after the river.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::PreFlop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => None,
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::PreFlop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Everything the runtime shows the agent at a decision point.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableState {
    /// Seat snapshots in table order.
    pub players: Vec<Player>,
    /// The bet every live seat must match to stay in the hand.
    pub target_bet: Chips,
    pub round: Round,
    /// Community cards revealed so far, empty before the flop.
    pub cards: Vec<Card>,
}

impl TableState {
    /// Looks up a seat by id.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }
}

/// A betting decision. `Raise` carries the chip amount.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Action {
    Fold,
    Call,
    Raise(Chips),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Fold => "folds".to_string(),
            Self::Call => "calls".to_string(),
            Self::Raise(amount) => format!("raises ${amount}"),
        };
        write!(f, "{repr}")
    }
}
