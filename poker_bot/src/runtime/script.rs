//! Scripted multi-hand scenario generation.
//!
//! Builds [`Scenario`]s against a table of caricature opponents:
//! - Nit: folds to any bet, otherwise checks along
//! - Station: calls everything
//! - Maniac: doubles the current price every chance it gets
//!
//! The generator fabricates plausible table snapshots as stimulus for a
//! bot under test; it does not adjudicate showdowns. The hero is assumed
//! to call after every act request, each hand's winner is drawn uniformly
//! from the seats still in, and stacks reset between hands. Seat one is
//! always a station so every hand reaches the river.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::harness::Scenario;
use super::Event;
use crate::game::entities::{Action, Card, Chips, Deck, Player, PlayerId, Round, TableState};

/// Seat id the generated scenarios assign to the driven bot.
pub const HERO_ID: &str = "hero";

/// A scripted opponent play style.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Folds to any bet, checks when free.
    Nit,
    /// Calls any price.
    Station,
    /// Doubles the current price whenever it acts.
    Maniac,
}

impl Persona {
    const ALL: [Self; 3] = [Self::Nit, Self::Station, Self::Maniac];
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Nit => "nit",
            Self::Station => "station",
            Self::Maniac => "maniac",
        };
        write!(f, "{repr}")
    }
}

/// Parameters for scenario generation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScriptConfig {
    /// Number of hands to generate.
    pub hands: usize,
    /// Number of scripted opponents seated against the hero.
    pub opponents: usize,
    /// Seed for dealing, persona assignment, and winner selection.
    pub seed: u64,
    /// Stack every seat starts each hand with.
    pub starting_stack: Chips,
    /// Preflop price to play; also anchors maniac raise sizing.
    pub big_blind: Chips,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            hands: 20,
            opponents: 3,
            seed: 0,
            starting_stack: 1_000,
            big_blind: 20,
        }
    }
}

impl ScriptConfig {
    /// Checks the parameters describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), String> {
        if self.hands == 0 {
            return Err("hands must be at least 1".to_string());
        }
        if self.opponents == 0 || self.opponents > 9 {
            return Err(format!(
                "opponents must be within [1, 9], got {}",
                self.opponents
            ));
        }
        if self.big_blind == 0 {
            return Err("big_blind must be nonzero".to_string());
        }
        if self.starting_stack < self.big_blind {
            return Err(format!(
                "starting_stack {} cannot cover the big blind {}",
                self.starting_stack, self.big_blind
            ));
        }
        Ok(())
    }
}

struct Seat {
    id: PlayerId,
    persona: Option<Persona>,
    committed: Chips,
    round_bet: Chips,
    folded: bool,
}

impl Seat {
    fn remaining(&self, starting_stack: Chips) -> Chips {
        starting_stack.saturating_sub(self.committed)
    }

    fn snapshot(&self, starting_stack: Chips) -> Player {
        Player {
            id: self.id.clone(),
            stack: self.remaining(starting_stack),
            current_bet: self.round_bet,
            folded: self.folded,
        }
    }

    fn pay(&mut self, amount: Chips) {
        self.round_bet += amount;
        self.committed += amount;
    }
}

/// Generates a multi-hand scenario from the given parameters.
pub fn generate(config: &ScriptConfig) -> Scenario {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let stack = config.starting_stack;

    let mut seats: Vec<Seat> = Vec::with_capacity(config.opponents + 1);
    seats.push(Seat {
        id: HERO_ID.to_string(),
        persona: None,
        committed: 0,
        round_bet: 0,
        folded: false,
    });
    for index in 1..=config.opponents {
        // Seat one anchors the table; later seats are drawn at random.
        let persona = if index == 1 {
            Persona::Station
        } else {
            Persona::ALL[rng.random_range(0..Persona::ALL.len())]
        };
        seats.push(Seat {
            id: format!("{persona}_{index}"),
            persona: Some(persona),
            committed: 0,
            round_bet: 0,
            folded: false,
        });
    }

    let mut events = vec![Event::StartGame {
        my_id: HERO_ID.to_string(),
    }];

    for _ in 0..config.hands {
        for seat in &mut seats {
            seat.committed = 0;
            seat.folded = false;
        }

        let mut deck = Deck::default();
        deck.shuffle(&mut rng);
        let hole_cards = vec![deck.deal_card(), deck.deal_card()];

        let mut board: Vec<Card> = Vec::with_capacity(5);
        let mut round = Some(Round::PreFlop);
        while let Some(current) = round {
            match current {
                Round::PreFlop => {}
                Round::Flop => board.extend([deck.deal_card(), deck.deal_card(), deck.deal_card()]),
                Round::Turn | Round::River => board.push(deck.deal_card()),
            }

            for seat in &mut seats {
                seat.round_bet = 0;
            }
            let mut target: Chips = match current {
                Round::PreFlop => config.big_blind,
                _ => 0,
            };

            for index in 1..seats.len() {
                let seat = &mut seats[index];
                let Some(persona) = seat.persona else {
                    continue;
                };
                if seat.folded {
                    continue;
                }
                let to_call = target.saturating_sub(seat.round_bet);
                let action = match persona {
                    Persona::Nit if to_call > 0 => {
                        seat.folded = true;
                        Action::Fold
                    }
                    Persona::Nit | Persona::Station => {
                        seat.pay(to_call.min(seat.remaining(stack)));
                        Action::Call
                    }
                    Persona::Maniac => {
                        let desired = if target == 0 {
                            config.big_blind.saturating_mul(2)
                        } else {
                            target.saturating_mul(2)
                        };
                        let affordable = desired
                            .saturating_sub(seat.round_bet)
                            .min(seat.remaining(stack));
                        seat.pay(affordable);
                        target = target.max(seat.round_bet);
                        Action::Raise(target)
                    }
                };
                events.push(Event::OpponentAction {
                    action,
                    player: seats[index].snapshot(stack),
                });
            }

            events.push(Event::ActRequest {
                state: TableState {
                    players: seats.iter().map(|seat| seat.snapshot(stack)).collect(),
                    target_bet: target,
                    round: current,
                    cards: board.clone(),
                },
                hole_cards: hole_cards.clone(),
            });

            // Project the hero as a caller so later streets stay coherent.
            let hero_due = target.saturating_sub(seats[0].round_bet);
            let hero_payment = hero_due.min(seats[0].remaining(stack));
            seats[0].pay(hero_payment);

            round = current.next();
        }

        let pot: Chips = seats.iter().map(|seat| seat.committed).sum();
        let alive: Vec<usize> = (0..seats.len()).filter(|&i| !seats[i].folded).collect();
        let winner = alive[rng.random_range(0..alive.len())];
        let payouts = seats
            .iter()
            .enumerate()
            .map(|(i, seat)| {
                let won: i64 = if i == winner { i64::from(pot) } else { 0 };
                (seat.id.clone(), won - i64::from(seat.committed))
            })
            .collect();
        events.push(Event::GameOver { payouts });
    }

    Scenario { events }
}
