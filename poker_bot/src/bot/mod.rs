//! Heuristic decision making for a single seat at the table.
//!
//! This module implements:
//! - Hand strength scoring: a closed-form preflop score plus a board
//!   pairing check after the flop
//! - Opponent profiling: per-seat fold/call/raise counters rolled up
//!   into a coarse table tendency
//! - Action selection: threshold rules turning a strength score, a
//!   tendency read, and the table state into fold/call/raise
//! - The [`Engine`] facade wiring all three behind the runtime
//!   callbacks
//!
//! ## Example
//!
//! ```
//! use poker_bot::bot::Engine;
//! use poker_bot::runtime::Bot;
//! use poker_bot::{Card, Round, Suit, TableState};
//!
//! let mut engine = Engine::seeded(7);
//! engine.start_game("hero".to_string());
//!
//! let state = TableState {
//!     players: vec![],
//!     target_bet: 0,
//!     round: Round::PreFlop,
//!     cards: vec![],
//! };
//! let hole = [Card(8, Suit::Spade), Card(8, Suit::Heart)];
//! let action = engine.act(&state, &hole);
//! println!("the engine {action}");
//! ```

pub mod decision;
pub mod engine;
pub mod profile;
pub mod strength;

pub use decision::{DecisionConfig, DecisionContext, choose_action};
pub use engine::Engine;
pub use profile::{OpponentStats, Profiler, Tendency};
pub use strength::{board_match, preflop_score};
