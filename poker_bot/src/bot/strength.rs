//! Closed-form preflop hand scoring.
//!
//! Scores are a cheap, monotone proxy for equity: pairs ramp linearly with
//! rank, unpaired hands take a banded base from their high card plus a
//! suited bonus and pay for rank gaps. Nothing here enumerates boards or
//! ranks made hands; postflop play only layers a boolean board-pairing
//! signal on top of the preflop score.

use crate::game::entities::Card;

// === Scoring table ===

/// Baseline for the weakest pair (deuces).
const PAIR_BASE: f32 = 0.4;

/// Spread from deuces up to aces across the twelve rank steps.
const PAIR_SPAN: f32 = 0.6;

/// Base for hands whose high card is a ten or better.
const HIGH_BASE: f32 = 0.7;

/// Base for the middle band of the table.
const MID_BASE: f32 = 0.5;

/// Base for everything else.
const LOW_BASE: f32 = 0.3;

/// Bonus for two cards of one suit, doubled in the lowest band.
const SUITED_BONUS: f32 = 0.04;

/// Penalty per rank strictly between the two cards.
const GAP_PENALTY: f32 = 0.03;

/// Ceiling on the total gap penalty.
const GAP_PENALTY_CAP: f32 = 0.3;

/// Scores two hole cards on a [0.0, 1.0] scale, aces high.
///
/// Pairs ramp linearly from deuces (0.4) to aces (1.0). Unpaired hands
/// start from a band base keyed on the high card, gain the suited bonus,
/// and lose a capped penalty per rank between the two cards, so connected
/// cards keep their full base. Anything other than exactly two cards
/// scores a neutral 0.0.
///
/// # Examples
///
/// ```
/// use poker_bot::bot::strength::preflop_score;
/// use poker_bot::{Card, Suit};
///
/// let aces = [Card(14, Suit::Spade), Card(14, Suit::Diamond)];
/// assert!((preflop_score(&aces) - 1.0).abs() < 1e-6);
///
/// let suited_big_slick = [Card(14, Suit::Spade), Card(13, Suit::Spade)];
/// assert!((preflop_score(&suited_big_slick) - 0.74).abs() < 1e-6);
/// ```
pub fn preflop_score(hole_cards: &[Card]) -> f32 {
    let &[Card(first, first_suit), Card(second, second_suit)] = hole_cards else {
        return 0.0;
    };
    let (lo, hi) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };

    if lo == hi {
        return PAIR_BASE + PAIR_SPAN * (f32::from(lo) - 2.0) / 12.0;
    }

    let suited = first_suit == second_suit;
    let base = if hi >= 10 {
        HIGH_BASE + if suited { SUITED_BONUS } else { 0.0 }
    } else if hi >= 8 && lo >= 10 {
        MID_BASE + if suited { SUITED_BONUS } else { 0.0 }
    } else {
        LOW_BASE + if suited { 2.0 * SUITED_BONUS } else { 0.0 }
    };
    let gap = f32::from(hi) - f32::from(lo) - 1.0;
    (base - (gap * GAP_PENALTY).min(GAP_PENALTY_CAP)).clamp(0.0, 1.0)
}

/// True when any hole-card rank pairs a community card.
pub fn board_match(hole_cards: &[Card], community: &[Card]) -> bool {
    hole_cards
        .iter()
        .any(|&Card(rank, _)| community.iter().any(|&Card(seen, _)| seen == rank))
}
