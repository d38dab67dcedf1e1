//! # Poker Bot
//!
//! A heuristic Texas Hold'em decision engine built around a closed-form
//! preflop strength score and coarse opponent profiling.
//!
//! This library provides everything a bot seat needs between being dealt
//! in and mucking: hand strength scoring, per-opponent action counters
//! rolled up into a table tendency, threshold-based action selection, and
//! a transport-free runtime for driving the engine from recorded or
//! generated sessions.
//!
//! ## Decision pipeline
//!
//! Every act request flows through the same three steps:
//!
//! - **Score**: the hole cards become a strength score in `[0, 1]`
//!   (pairs scale with rank; offsuit junk bottoms out near zero)
//! - **Read**: observed fold/call/raise counts classify the remaining
//!   table into a single coarse tendency
//! - **Select**: threshold rules combine score, tendency, and price into
//!   a fold, call, or sized raise
//!
//! ## Core Modules
//!
//! - [`bot`]: Strength scoring, opponent profiling, action selection, and
//!   the [`Engine`] facade
//! - [`game`]: Cards, players, table snapshots, and actions
//! - [`runtime`]: The [`Bot`](runtime::Bot) callback contract, scenario
//!   files, and the scripted session harness
//!
//! ## Example
//!
//! ```
//! use poker_bot::bot::Engine;
//! use poker_bot::runtime::Bot;
//! use poker_bot::{Action, Card, Round, Suit, TableState};
//!
//! let mut engine = Engine::seeded(7);
//! engine.start_game("hero".to_string());
//!
//! // Pocket eights, nothing to call yet.
//! let state = TableState {
//!     players: vec![],
//!     target_bet: 0,
//!     round: Round::PreFlop,
//!     cards: vec![],
//! };
//! let hole = [Card(8, Suit::Spade), Card(8, Suit::Heart)];
//! assert_eq!(engine.act(&state, &hole), Action::Call);
//! ```

/// Decision making: scoring, profiling, selection, and the engine facade.
pub mod bot;
pub use bot::{DecisionConfig, Engine, OpponentStats, Profiler, Tendency};

/// Table-facing data model.
pub mod game;
pub use game::entities::{
    self, Action, Card, Chips, Deck, Player, PlayerId, Rank, Round, Suit, TableState,
};

/// Runtime seam: callback contract, scenario files, scripted sessions.
pub mod runtime;
pub use runtime::{Bot, Event, Harness, Scenario, ScenarioError};
