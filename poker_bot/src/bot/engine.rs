//! Engine facade implementing the runtime callback contract.
//!
//! One engine instance owns everything a session needs: the opponent
//! profiler, the decision configuration, the random source for bet
//! sizing, and a hands-played tally for reporting. Nothing in here is
//! process-global, so several engines can run side by side.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use super::decision::{self, DecisionConfig, DecisionContext};
use super::profile::Profiler;
use super::strength;
use crate::game::entities::{Action, Card, Player, PlayerId, TableState};
use crate::runtime::Bot;

/// A complete decision engine for one table session.
pub struct Engine<R = SmallRng> {
    profiler: Profiler,
    config: DecisionConfig,
    rng: R,
    hands_played: u64,
}

impl Engine<SmallRng> {
    /// An engine with stock thresholds and an OS-seeded random source.
    pub fn new() -> Self {
        Self::from_parts(DecisionConfig::default(), SmallRng::from_os_rng())
    }

    /// An engine with custom thresholds and an OS-seeded random source.
    pub fn with_config(config: DecisionConfig) -> Self {
        Self::from_parts(config, SmallRng::from_os_rng())
    }

    /// A reproducible engine: the same seed and event sequence always
    /// produce the same actions.
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(DecisionConfig::default(), SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Builds an engine from explicit parts. Useful when the caller wants
    /// to hand over its own random source.
    pub fn from_parts(config: DecisionConfig, rng: R) -> Self {
        Self {
            profiler: Profiler::new(),
            config,
            rng,
            hands_played: 0,
        }
    }

    /// The opponent profiler, for reporting.
    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Completed hands this engine has settled.
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }
}

impl Default for Engine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Bot for Engine<R> {
    fn start_game(&mut self, my_id: PlayerId) {
        log::info!("seated as {my_id}");
        self.profiler.set_identity(my_id);
    }

    fn act(&mut self, state: &TableState, hole_cards: &[Card]) -> Action {
        let score = strength::preflop_score(hole_cards);
        let tendency = self.profiler.classify(&state.players);
        let ctx = DecisionContext {
            state,
            my_id: self.profiler.identity().map(String::as_str),
            hole_cards,
            score,
            tendency,
        };
        let action = decision::choose_action(&ctx, &self.config, &mut self.rng);
        log::debug!(
            "{} with score {score:.2} against a {tendency} table: {action}",
            state.round
        );
        action
    }

    fn opponent_action(&mut self, action: &Action, player: &Player) {
        self.profiler.record(action, player);
    }

    fn game_over(&mut self, payouts: &HashMap<PlayerId, i64>) {
        self.profiler.settle(payouts);
        self.hands_played += 1;
        log::info!(
            "hand {} settled across {} seats",
            self.hands_played,
            payouts.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Round, Suit};

    fn seat(id: &str, stack: u32, current_bet: u32) -> Player {
        Player {
            id: id.to_string(),
            stack,
            current_bet,
            folded: false,
        }
    }

    fn preflop_state(target_bet: u32) -> TableState {
        TableState {
            players: vec![seat("hero", 1000, 0), seat("villain", 1000, target_bet)],
            target_bet,
            round: Round::PreFlop,
            cards: vec![],
        }
    }

    #[test]
    fn test_pocket_eights_call_down_the_middle() {
        let mut engine = Engine::seeded(1);
        engine.start_game("hero".to_string());

        let state = preflop_state(0);
        let hole = [Card(8, Suit::Spade), Card(8, Suit::Diamond)];
        assert_eq!(engine.act(&state, &hole), Action::Call);
    }

    #[test]
    fn test_suited_big_slick_calls() {
        let mut engine = Engine::seeded(2);
        engine.start_game("hero".to_string());

        let state = preflop_state(20);
        let hole = [Card(14, Suit::Spade), Card(13, Suit::Spade)];
        assert_eq!(engine.act(&state, &hole), Action::Call);
    }

    #[test]
    fn test_pocket_aces_raise_within_sizing_bounds() {
        let mut engine = Engine::seeded(3);
        engine.start_game("hero".to_string());

        let state = preflop_state(20);
        let hole = [Card(14, Suit::Spade), Card(14, Suit::Diamond)];
        for _ in 0..100 {
            match engine.act(&state, &hole) {
                Action::Raise(amount) => assert!(
                    (40..=60).contains(&amount),
                    "Aces raised {amount}, outside doubled-to-tripled call sizing"
                ),
                other => panic!("Aces should raise, got {other}"),
            }
        }
    }

    #[test]
    fn test_acts_before_start_game_default_to_call() {
        let mut engine = Engine::seeded(4);

        let state = preflop_state(50);
        let hole = [Card(7, Suit::Club), Card(2, Suit::Diamond)];
        // Weak enough to fold, but no identity means no seat lookup.
        assert_eq!(engine.act(&state, &hole), Action::Call);
    }

    #[test]
    fn test_seeded_engines_replay_identically() {
        let state = preflop_state(20);
        let hole = [Card(14, Suit::Spade), Card(14, Suit::Diamond)];

        let mut runs = Vec::new();
        for _ in 0..2 {
            let mut engine = Engine::seeded(42);
            engine.start_game("hero".to_string());
            let actions: Vec<Action> = (0..20).map(|_| engine.act(&state, &hole)).collect();
            runs.push(actions);
        }
        assert_eq!(runs[0], runs[1]);
    }

    #[test]
    fn test_game_over_advances_tally_and_settles() {
        let mut engine = Engine::seeded(5);
        engine.start_game("hero".to_string());

        engine.opponent_action(&Action::Call, &seat("villain", 980, 20));

        let payouts: HashMap<PlayerId, i64> =
            [("hero".to_string(), 40), ("villain".to_string(), -40)]
                .into_iter()
                .collect();
        engine.game_over(&payouts);
        engine.game_over(&payouts);

        assert_eq!(engine.hands_played(), 2);
        assert_eq!(engine.profiler().get("villain").unwrap().hands, 2);
        assert!(engine.profiler().get("hero").is_none());
    }

    #[test]
    fn test_fold_heavy_read_changes_postflop_line() {
        let mut engine = Engine::seeded(6);
        engine.start_game("hero".to_string());

        // Villain folds every hand for a few settlements.
        for _ in 0..4 {
            engine.opponent_action(&Action::Fold, &seat("villain", 1000, 0));
            let payouts: HashMap<PlayerId, i64> =
                [("hero".to_string(), 10), ("villain".to_string(), -10)]
                    .into_iter()
                    .collect();
            engine.game_over(&payouts);
        }

        // Board pairs the hole nine; a small call against a fold-heavy
        // table takes the pressure raise floor.
        let state = TableState {
            players: vec![seat("hero", 1000, 0), seat("villain", 1000, 10)],
            target_bet: 10,
            round: Round::Flop,
            cards: vec![
                Card(9, Suit::Heart),
                Card(4, Suit::Club),
                Card(12, Suit::Spade),
            ],
        };
        let hole = [Card(9, Suit::Spade), Card(5, Suit::Club)];
        assert_eq!(engine.act(&state, &hole), Action::Raise(80));
    }
}
