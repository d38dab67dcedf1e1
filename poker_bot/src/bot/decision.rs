//! Per-round action selection.
//!
//! The selector maps one decision request (strength score, call cost,
//! stack, table read, betting round) to a single action. It is stateless
//! across calls; everything it needs arrives in the context, and the only
//! side effect is sampling the caller's random source for bet sizing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::profile::Tendency;
use super::strength;
use crate::game::entities::{Action, Card, Chips, Round, TableState};

/// Tunable thresholds and sizings for the selector.
///
/// Scores are hand-strength floats in [0.0, 1.0]; the defaults reproduce
/// the stock play style. Raise floors keep randomized sizings from
/// degenerating into min-bets when the call amount is tiny.
///
/// # Examples
///
/// ```
/// use poker_bot::DecisionConfig;
///
/// let config = DecisionConfig::default();
/// assert_eq!(config.raise_threshold, 0.8);
/// assert_eq!(config.preflop_raise_floor, 40);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DecisionConfig {
    /// Preflop score above this opens with a raise.
    pub raise_threshold: f32,

    /// Preflop score below this folds when facing a live bet.
    pub fold_threshold: f32,

    /// Minimum preflop score to call off the whole stack.
    pub commit_threshold: f32,

    /// Postflop, a preflop score above this plays the strong line even
    /// without pairing the board.
    pub strong_threshold: f32,

    /// Largest call considered cheap: strong postflop hands raise below
    /// it, weak hands fold above it.
    pub cheap_call_limit: Chips,

    /// Smallest preflop raise.
    pub preflop_raise_floor: Chips,

    /// Smallest postflop raise against a fold-heavy table.
    pub pressure_raise_floor: Chips,

    /// Smallest postflop value raise.
    pub value_raise_floor: Chips,

    /// Smallest postflop bluff raise.
    pub bluff_raise_floor: Chips,

    /// Call-amount multiplier base for strong raises; the sizing draw adds
    /// up to one more multiple.
    pub strong_raise_base: f32,

    /// Call-amount multiplier base for cheap value raises.
    pub value_raise_base: f32,

    /// Chance of bluff-raising a fold-heavy table with a weak hand.
    pub bluff_probability: f32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            raise_threshold: 0.8,
            fold_threshold: 0.2,
            commit_threshold: 0.3,
            strong_threshold: 0.7,
            cheap_call_limit: 100,
            preflop_raise_floor: 40,
            pressure_raise_floor: 80,
            value_raise_floor: 60,
            bluff_raise_floor: 60,
            strong_raise_base: 2.0,
            value_raise_base: 1.5,
            bluff_probability: 0.3,
        }
    }
}

impl DecisionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("raise_threshold", self.raise_threshold),
            ("fold_threshold", self.fold_threshold),
            ("commit_threshold", self.commit_threshold),
            ("strong_threshold", self.strong_threshold),
            ("bluff_probability", self.bluff_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be between 0.0 and 1.0"));
            }
        }

        if self.fold_threshold > self.raise_threshold {
            return Err("Fold threshold must not exceed raise threshold".to_string());
        }

        if self.strong_raise_base < 1.0 || self.value_raise_base < 1.0 {
            return Err("Raise bases must be at least 1.0".to_string());
        }

        if self.preflop_raise_floor == 0
            || self.pressure_raise_floor == 0
            || self.value_raise_floor == 0
            || self.bluff_raise_floor == 0
        {
            return Err("Raise floors must be at least 1 chip".to_string());
        }

        Ok(())
    }
}

/// Everything one decision needs, borrowed from the engine.
///
/// The score and table read are computed by the caller so the selector
/// stays a pure mapping over its inputs.
#[derive(Clone, Debug)]
pub struct DecisionContext<'a> {
    /// Table snapshot for this decision.
    pub state: &'a TableState,

    /// Own seat id, if one has been assigned.
    pub my_id: Option<&'a str>,

    /// Own hole cards.
    pub hole_cards: &'a [Card],

    /// Preflop strength score for the hole cards.
    pub score: f32,

    /// Current table read from the profiler.
    pub tendency: Tendency,
}

/// Picks one action for the current decision point.
///
/// Every branch lands on a concrete action: an unlocatable own seat
/// degrades to a call, a call amount at or beyond the stack routes through
/// the forced-commitment rule, and an empty board plays preflop logic
/// whatever the reported round.
///
/// # Arguments
///
/// * `ctx` - Decision context with game state and computed signals
/// * `config` - Thresholds and sizings
/// * `rng` - Random source for bet sizing and bluff draws
///
/// # Returns
///
/// * `Action` - The chosen action
pub fn choose_action<R: Rng>(ctx: &DecisionContext, config: &DecisionConfig, rng: &mut R) -> Action {
    let Some(me) = ctx.my_id.and_then(|id| ctx.state.player(id)) else {
        return Action::Call;
    };
    let call_amount = ctx.state.target_bet.saturating_sub(me.current_bet);

    // Forced commitment: no partial call is possible. Preflop, only a
    // playable hand goes in; on later streets the seat is pot-committed
    // and never folds.
    if call_amount >= me.stack {
        return if ctx.state.round != Round::PreFlop || ctx.score >= config.commit_threshold {
            Action::Call
        } else {
            Action::Fold
        };
    }

    if ctx.state.round == Round::PreFlop || ctx.state.cards.is_empty() {
        preflop_action(ctx.score, call_amount, config, rng)
    } else {
        postflop_action(ctx, call_amount, config, rng)
    }
}

fn preflop_action<R: Rng>(
    score: f32,
    call_amount: Chips,
    config: &DecisionConfig,
    rng: &mut R,
) -> Action {
    if score > config.raise_threshold {
        return Action::Raise(sized_raise(
            call_amount,
            config.strong_raise_base,
            config.preflop_raise_floor,
            rng,
        ));
    }
    if score < config.fold_threshold && call_amount > 0 {
        return Action::Fold;
    }
    Action::Call
}

fn postflop_action<R: Rng>(
    ctx: &DecisionContext,
    call_amount: Chips,
    config: &DecisionConfig,
    rng: &mut R,
) -> Action {
    let matched = strength::board_match(ctx.hole_cards, &ctx.state.cards);

    if matched || ctx.score > config.strong_threshold {
        if ctx.tendency == Tendency::FoldsOften {
            return Action::Raise(sized_raise(
                call_amount,
                config.strong_raise_base,
                config.pressure_raise_floor,
                rng,
            ));
        }
        if call_amount <= config.cheap_call_limit {
            return Action::Raise(sized_raise(
                call_amount,
                config.value_raise_base,
                config.value_raise_floor,
                rng,
            ));
        }
        return Action::Call;
    }

    if call_amount > config.cheap_call_limit {
        return Action::Fold;
    }
    if ctx.tendency == Tendency::FoldsOften
        && rng.random_bool(f64::from(config.bluff_probability.clamp(0.0, 1.0)))
    {
        return Action::Raise(
            call_amount
                .saturating_mul(2)
                .max(config.bluff_raise_floor),
        );
    }
    Action::Call
}

/// Scales the call amount by `base` plus a uniform [0, 1) draw, truncated
/// to whole chips, never below `floor`.
fn sized_raise<R: Rng>(call_amount: Chips, base: f32, floor: Chips, rng: &mut R) -> Chips {
    let scaled = (call_amount as f32 * (base + rng.random::<f32>())) as Chips;
    scaled.max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Player, Suit};
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    /// Constant-bit random source so sizing draws land on exact values:
    /// all zeros pins the uniform draw to 0.0 and fires every probability
    /// check, all ones fails every probability check, and 0xC000_0000
    /// pins the draw to exactly 0.75.
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.0.to_le_bytes();
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = bytes[i % 8];
            }
        }
    }

    fn make_player(id: &str, stack: Chips, current_bet: Chips) -> Player {
        Player {
            id: id.to_string(),
            stack,
            current_bet,
            folded: false,
        }
    }

    fn make_state(target_bet: Chips, round: Round, cards: Vec<Card>) -> TableState {
        TableState {
            players: vec![
                make_player("hero", 1000, 0),
                make_player("villain", 1000, target_bet),
            ],
            target_bet,
            round,
            cards,
        }
    }

    fn make_ctx<'a>(
        state: &'a TableState,
        hole_cards: &'a [Card],
        score: f32,
        tendency: Tendency,
    ) -> DecisionContext<'a> {
        DecisionContext {
            state,
            my_id: Some("hero"),
            hole_cards,
            score,
            tendency,
        }
    }

    const FLOP: [Card; 3] = [
        Card(4, Suit::Club),
        Card(9, Suit::Heart),
        Card(12, Suit::Spade),
    ];

    // Hole cards that miss the FLOP board entirely.
    const BRICKS: [Card; 2] = [Card(7, Suit::Club), Card(2, Suit::Diamond)];

    // Hole cards pairing the nine on the FLOP board.
    const TOP_PAIRISH: [Card; 2] = [Card(9, Suit::Spade), Card(5, Suit::Club)];

    #[test]
    fn test_missing_seat_defaults_to_call() {
        let state = make_state(50, Round::PreFlop, vec![]);
        let mut ctx = make_ctx(&state, &BRICKS, 0.1, Tendency::Normal);
        ctx.my_id = Some("nobody");

        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(choose_action(&ctx, &DecisionConfig::default(), &mut rng), Action::Call);

        ctx.my_id = None;
        assert_eq!(choose_action(&ctx, &DecisionConfig::default(), &mut rng), Action::Call);
    }

    #[test]
    fn test_preflop_bands() {
        let config = DecisionConfig::default();
        let state = make_state(20, Round::PreFlop, vec![]);
        let mut rng = SmallRng::seed_from_u64(2);

        // Premium opens with a raise.
        let premium = make_ctx(&state, &BRICKS, 0.9, Tendency::Normal);
        assert!(matches!(
            choose_action(&premium, &config, &mut rng),
            Action::Raise(_)
        ));

        // Weak hand facing a live bet folds.
        let weak = make_ctx(&state, &BRICKS, 0.1, Tendency::Normal);
        assert_eq!(choose_action(&weak, &config, &mut rng), Action::Fold);

        // Middling hand calls.
        let middling = make_ctx(&state, &BRICKS, 0.5, Tendency::Normal);
        assert_eq!(choose_action(&middling, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_weak_hand_checks_when_nothing_to_call() {
        let config = DecisionConfig::default();
        let state = make_state(0, Round::PreFlop, vec![]);
        let mut rng = SmallRng::seed_from_u64(3);

        let weak = make_ctx(&state, &BRICKS, 0.1, Tendency::Normal);
        assert_eq!(choose_action(&weak, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        let config = DecisionConfig::default();
        let state = make_state(20, Round::PreFlop, vec![]);
        let mut rng = SmallRng::seed_from_u64(4);

        // Exactly at either threshold stays in the call band.
        let at_raise = make_ctx(&state, &BRICKS, 0.8, Tendency::Normal);
        assert_eq!(choose_action(&at_raise, &config, &mut rng), Action::Call);

        let at_fold = make_ctx(&state, &BRICKS, 0.2, Tendency::Normal);
        assert_eq!(choose_action(&at_fold, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_preflop_raise_sizing_bounds() {
        let config = DecisionConfig::default();
        let state = make_state(100, Round::PreFlop, vec![]);
        let ctx = make_ctx(&state, &BRICKS, 0.9, Tendency::Normal);

        // Zero draw lands exactly on the doubled call amount.
        let mut low = ConstRng(0);
        assert_eq!(choose_action(&ctx, &config, &mut low), Action::Raise(200));

        // A 0.75 draw sizes to 2.75 times the call amount.
        let mut mid = ConstRng(0xC000_0000);
        assert_eq!(choose_action(&ctx, &config, &mut mid), Action::Raise(275));
    }

    #[test]
    fn test_preflop_raise_floor_applies() {
        let config = DecisionConfig::default();
        // Call amount of 10 sizes to at most 30, below the floor of 40.
        let state = make_state(10, Round::PreFlop, vec![]);
        let ctx = make_ctx(&state, &BRICKS, 0.9, Tendency::Normal);

        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Raise(40));
        }
    }

    #[test]
    fn test_all_in_preflop_gates_on_commit_threshold() {
        let config = DecisionConfig::default();
        let mut state = make_state(2000, Round::PreFlop, vec![]);
        state.players[0].stack = 500;
        let mut rng = SmallRng::seed_from_u64(6);

        let playable = make_ctx(&state, &BRICKS, 0.35, Tendency::Normal);
        assert_eq!(choose_action(&playable, &config, &mut rng), Action::Call);

        let hopeless = make_ctx(&state, &BRICKS, 0.25, Tendency::Normal);
        assert_eq!(choose_action(&hopeless, &config, &mut rng), Action::Fold);

        // The gate is inclusive.
        let boundary = make_ctx(&state, &BRICKS, 0.3, Tendency::Normal);
        assert_eq!(choose_action(&boundary, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_all_in_postflop_always_calls() {
        let config = DecisionConfig::default();
        let mut state = make_state(2000, Round::Flop, FLOP.to_vec());
        state.players[0].stack = 500;
        let mut rng = SmallRng::seed_from_u64(7);

        for score in [0.0, 0.25, 0.9] {
            let ctx = make_ctx(&state, &BRICKS, score, Tendency::Normal);
            assert_eq!(
                choose_action(&ctx, &config, &mut rng),
                Action::Call,
                "Pot-committed seat folded postflop at score {score}"
            );
        }
    }

    #[test]
    fn test_empty_board_falls_back_to_preflop_logic() {
        let config = DecisionConfig::default();
        // Round says flop but no community cards are visible yet.
        let state = make_state(20, Round::Flop, vec![]);
        let mut rng = SmallRng::seed_from_u64(8);

        let weak = make_ctx(&state, &BRICKS, 0.1, Tendency::Normal);
        assert_eq!(choose_action(&weak, &config, &mut rng), Action::Fold);
    }

    #[test]
    fn test_postflop_pressure_raise_against_fold_heavy_table() {
        let config = DecisionConfig::default();
        let state = make_state(10, Round::Flop, FLOP.to_vec());
        let ctx = make_ctx(&state, &TOP_PAIRISH, 0.3, Tendency::FoldsOften);

        // Sized raise tops out at 30, so the 80-chip floor wins whatever
        // the draw.
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..50 {
            assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Raise(80));
        }
    }

    #[test]
    fn test_postflop_value_raise_when_call_is_cheap() {
        let config = DecisionConfig::default();
        let state = make_state(100, Round::Flop, FLOP.to_vec());
        let ctx = make_ctx(&state, &TOP_PAIRISH, 0.3, Tendency::Normal);

        let mut low = ConstRng(0);
        assert_eq!(choose_action(&ctx, &config, &mut low), Action::Raise(150));

        let mut mid = ConstRng(0xC000_0000);
        assert_eq!(choose_action(&ctx, &config, &mut mid), Action::Raise(225));
    }

    #[test]
    fn test_postflop_strong_hand_calls_expensive_bets() {
        let config = DecisionConfig::default();
        let state = make_state(101, Round::Flop, FLOP.to_vec());
        let ctx = make_ctx(&state, &TOP_PAIRISH, 0.3, Tendency::Normal);

        let mut rng = SmallRng::seed_from_u64(10);
        assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_strong_score_plays_strong_line_without_board_match() {
        let config = DecisionConfig::default();
        let state = make_state(50, Round::Turn, FLOP.to_vec());
        let ctx = make_ctx(&state, &BRICKS, 0.74, Tendency::Normal);

        let mut rng = SmallRng::seed_from_u64(11);
        assert!(matches!(
            choose_action(&ctx, &config, &mut rng),
            Action::Raise(_)
        ));
    }

    #[test]
    fn test_postflop_weak_hand_folds_to_expensive_bets() {
        let config = DecisionConfig::default();
        let state = make_state(101, Round::River, FLOP.to_vec());
        let ctx = make_ctx(&state, &BRICKS, 0.18, Tendency::Normal);

        let mut rng = SmallRng::seed_from_u64(12);
        assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Fold);
    }

    #[test]
    fn test_postflop_weak_hand_calls_cheap_bets() {
        let config = DecisionConfig::default();
        let state = make_state(100, Round::Flop, FLOP.to_vec());
        let ctx = make_ctx(&state, &BRICKS, 0.18, Tendency::Normal);

        let mut rng = SmallRng::seed_from_u64(13);
        assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_bluff_amount_doubles_call_with_floor() {
        let config = DecisionConfig::default();
        let state = make_state(90, Round::Flop, FLOP.to_vec());
        let ctx = make_ctx(&state, &BRICKS, 0.18, Tendency::FoldsOften);

        // All-zero bits force the bluff draw to fire.
        let mut rng = ConstRng(0);
        assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Raise(180));

        let small_state = make_state(10, Round::Flop, FLOP.to_vec());
        let small_ctx = make_ctx(&small_state, &BRICKS, 0.18, Tendency::FoldsOften);
        let mut rng = ConstRng(0);
        assert_eq!(choose_action(&small_ctx, &config, &mut rng), Action::Raise(60));

        // All-one bits never bluff.
        let mut rng = ConstRng(u64::MAX);
        assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_bluff_frequency_is_statistical() {
        let config = DecisionConfig::default();
        let state = make_state(50, Round::Flop, FLOP.to_vec());
        let ctx = make_ctx(&state, &BRICKS, 0.18, Tendency::FoldsOften);

        let mut rng = SmallRng::seed_from_u64(14);
        let trials = 1000;
        let mut bluffs = 0;
        for _ in 0..trials {
            if matches!(choose_action(&ctx, &config, &mut rng), Action::Raise(_)) {
                bluffs += 1;
            }
        }

        // Binomial(1000, 0.3) lands within [230, 370] overwhelmingly often.
        assert!(
            (230..=370).contains(&bluffs),
            "Bluffed {bluffs} times out of {trials} (expected about 300)"
        );
    }

    #[test]
    fn test_saturating_call_amount() {
        let config = DecisionConfig::default();
        // Stale snapshot: own bet exceeds the target.
        let mut state = make_state(20, Round::PreFlop, vec![]);
        state.players[0].current_bet = 80;
        let ctx = make_ctx(&state, &BRICKS, 0.5, Tendency::Normal);

        let mut rng = SmallRng::seed_from_u64(15);
        assert_eq!(choose_action(&ctx, &config, &mut rng), Action::Call);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DecisionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let mut config = DecisionConfig::default();
        config.bluff_probability = 1.5;
        assert!(config.validate().is_err());

        let mut config = DecisionConfig::default();
        config.fold_threshold = 0.9;
        assert!(config.validate().is_err());

        let mut config = DecisionConfig::default();
        config.value_raise_base = 0.5;
        assert!(config.validate().is_err());

        let mut config = DecisionConfig::default();
        config.preflop_raise_floor = 0;
        assert!(config.validate().is_err());
    }
}
