//! Runtime seam between a decision engine and whatever drives it.
//!
//! The engine never owns a transport. It implements [`Bot`], a callback
//! contract mirroring the lifecycle of a table session, and anything able
//! to produce [`Event`]s can drive it: the scripted generator here, a
//! replayed scenario file, or a caller wiring the callbacks to a live
//! connection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::game::entities::{Action, Card, Player, PlayerId, TableState};

/// Scenario files and the harness that replays them.
pub mod harness;

/// Scripted multi-hand scenario generation with opponent personas.
pub mod script;

pub use harness::{Harness, Scenario, ScenarioError};
pub use script::{HERO_ID, Persona, ScriptConfig, generate};

/// Callback contract for one seat at a table.
///
/// Callbacks arrive in session order: `start_game` once, then any number
/// of `opponent_action` and `act` interleavings, then `game_over` once
/// per completed hand.
pub trait Bot {
    /// The session has started and this seat plays as `my_id`.
    fn start_game(&mut self, my_id: PlayerId);

    /// It is this seat's turn; decide on an action.
    fn act(&mut self, state: &TableState, hole_cards: &[Card]) -> Action;

    /// Another seat acted.
    fn opponent_action(&mut self, action: &Action, player: &Player);

    /// The hand finished with the given net chip deltas per seat.
    fn game_over(&mut self, payouts: &HashMap<PlayerId, i64>);
}

/// One inbound runtime event, the owned mirror of a [`Bot`] callback.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// The session has started under the given identity.
    StartGame { my_id: PlayerId },
    /// Another seat acted; the player snapshot is post-action.
    OpponentAction { action: Action, player: Player },
    /// The driven seat must act on the given state and hole cards.
    ActRequest {
        state: TableState,
        hole_cards: Vec<Card>,
    },
    /// The hand finished; net chip deltas per seat.
    GameOver { payouts: HashMap<PlayerId, i64> },
}
