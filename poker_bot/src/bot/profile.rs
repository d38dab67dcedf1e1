//! Opponent profiling from observed actions.
//!
//! The profiler keeps one long-lived counter record per opponent id,
//! feeding a deliberately coarse table read. Records persist across hands
//! and rounds for the lifetime of the engine; nothing ever removes them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::game::entities::{Action, Player, PlayerId};

/// Fold ratio above which a table reads as fold-heavy.
const FOLD_HEAVY: f32 = 0.5;

/// Call ratio above which a table reads as call-heavy.
const CALL_HEAVY: f32 = 0.5;

/// Raise ratio above which a table reads as raise-heavy.
const RAISE_HEAVY: f32 = 0.3;

/// Action tallies for one opponent.
///
/// The action counters move as actions are observed; `hands` moves only at
/// settlement. Every field is monotone over the life of the profiler.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpponentStats {
    pub folds: u32,
    pub calls: u32,
    pub raises: u32,
    /// Completed hands this opponent was settled in.
    pub hands: u32,
}

impl OpponentStats {
    /// Folds per settled hand, zero before any settlement.
    pub fn fold_ratio(&self) -> f32 {
        if self.hands == 0 {
            0.0
        } else {
            self.folds as f32 / self.hands as f32
        }
    }

    /// Calls per settled hand, zero before any settlement.
    pub fn call_ratio(&self) -> f32 {
        if self.hands == 0 {
            0.0
        } else {
            self.calls as f32 / self.hands as f32
        }
    }

    /// Raises per settled hand, zero before any settlement.
    pub fn raise_ratio(&self) -> f32 {
        if self.hands == 0 {
            0.0
        } else {
            self.raises as f32 / self.hands as f32
        }
    }
}

/// Coarse table read aggregated over live opponents.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tendency {
    FoldsOften,
    CallsOften,
    RaisesOften,
    Normal,
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::FoldsOften => "folds often",
            Self::CallsOften => "calls often",
            Self::RaisesOften => "raises often",
            Self::Normal => "normal",
        };
        write!(f, "{repr}")
    }
}

/// Accumulates opponent behavior across hands and classifies the table.
#[derive(Clone, Debug, Default)]
pub struct Profiler {
    me: Option<PlayerId>,
    profiles: HashMap<PlayerId, OpponentStats>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the engine's own seat id so its actions are never profiled.
    pub fn set_identity(&mut self, id: PlayerId) {
        self.me = Some(id);
    }

    pub fn identity(&self) -> Option<&PlayerId> {
        self.me.as_ref()
    }

    /// Tallies one observed action. Own actions are ignored; the first
    /// action from an unseen opponent creates its record.
    pub fn record(&mut self, action: &Action, player: &Player) {
        if self.me.as_deref() == Some(player.id.as_str()) {
            return;
        }
        let stats = self.profiles.entry(player.id.clone()).or_default();
        match action {
            Action::Fold => stats.folds += 1,
            Action::Call => stats.calls += 1,
            Action::Raise(_) => stats.raises += 1,
        }
    }

    /// Credits a completed hand to every settled opponent already on file.
    /// Ids first seen at settlement stay off the books.
    pub fn settle(&mut self, payouts: &HashMap<PlayerId, i64>) {
        for id in payouts.keys() {
            if let Some(stats) = self.profiles.get_mut(id) {
                stats.hands += 1;
            }
        }
    }

    /// Classifies the table from counters aggregated over opponents who are
    /// seated, unfolded, and already on file.
    ///
    /// Checks run in a fixed order (folds, calls, raises) and the first
    /// match wins. With no settled hands among eligible opponents the table
    /// reads as [`Tendency::Normal`]. No confidence weighting is applied;
    /// a single settled hand is enough to move the read.
    pub fn classify(&self, players: &[Player]) -> Tendency {
        let mut total = OpponentStats::default();
        for player in players {
            if self.me.as_deref() == Some(player.id.as_str()) || player.folded {
                continue;
            }
            let Some(stats) = self.profiles.get(&player.id) else {
                continue;
            };
            total.folds += stats.folds;
            total.calls += stats.calls;
            total.raises += stats.raises;
            total.hands += stats.hands;
        }

        if total.hands < 1 {
            Tendency::Normal
        } else if total.fold_ratio() > FOLD_HEAVY {
            Tendency::FoldsOften
        } else if total.call_ratio() > CALL_HEAVY {
            Tendency::CallsOften
        } else if total.raise_ratio() > RAISE_HEAVY {
            Tendency::RaisesOften
        } else {
            Tendency::Normal
        }
    }

    /// Counters observed for one opponent, if any.
    pub fn get(&self, id: &str) -> Option<&OpponentStats> {
        self.profiles.get(id)
    }

    /// Iterates every profiled opponent.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &OpponentStats)> {
        self.profiles.iter()
    }
}
