//! An in-process session driver.
//!
//! The harness is blocking and single-threaded and so is primarily used
//! as a testing and replay utility rather than a live table connection.
//! It feeds recorded or generated [`Event`]s to a [`Bot`] and captures
//! every action the bot returns.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

use super::{Bot, Event};
use crate::game::entities::Action;

/// Errors that can occur while loading or saving a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read or write the file itself.
    #[error("Failed to access scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid scenario document.
    #[error("Failed to parse scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for scenario file operations.
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// A recorded event sequence, replayable byte-for-byte.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Scenario {
    pub events: Vec<Event>,
}

impl Scenario {
    /// Loads a scenario from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain
    /// valid scenario JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes the scenario to a JSON file, pretty-printed for diffing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

/// Drives a [`Bot`] through an event sequence.
pub struct Harness<B> {
    bot: B,
    actions: Vec<Action>,
}

impl<B: Bot> Harness<B> {
    pub fn new(bot: B) -> Self {
        Self {
            bot,
            actions: Vec::new(),
        }
    }

    /// Delivers one event to the bot. Returns the bot's action when the
    /// event was an act request, which is also captured for later
    /// inspection.
    pub fn dispatch(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::StartGame { my_id } => {
                self.bot.start_game(my_id.clone());
                None
            }
            Event::OpponentAction { action, player } => {
                self.bot.opponent_action(action, player);
                None
            }
            Event::ActRequest { state, hole_cards } => {
                let action = self.bot.act(state, hole_cards);
                self.actions.push(action);
                Some(action)
            }
            Event::GameOver { payouts } => {
                self.bot.game_over(payouts);
                None
            }
        }
    }

    /// Delivers a whole event sequence in order.
    pub fn run(&mut self, events: &[Event]) {
        for event in events {
            self.dispatch(event);
        }
    }

    pub fn run_scenario(&mut self, scenario: &Scenario) {
        self.run(&scenario.events);
    }

    /// Every action the bot has returned so far, in dispatch order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    /// Takes the harness apart for post-run inspection of the bot.
    pub fn into_parts(self) -> (B, Vec<Action>) {
        (self.bot, self.actions)
    }
}
