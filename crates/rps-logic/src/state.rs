//! Session state and its persisted form
//!
//! Stored layout (all values are strings):
//! - scores: decimal integers
//! - choices: `"<player>,<computer>"` ordinals, empty when no round is recorded
//! - celebrate: `"true"` / `"false"`
//!
//! Reads never fail. Values that do not parse fall back to their defaults
//! (zero score, no round, not celebrating) and are logged.

use serde::{Deserialize, Serialize};
use crate::choice::{Choice, Outcome};
use crate::config::StorageKeys;
use crate::store::PersistentStore;
use crate::{resolve, ScoreDelta};

/// Top-level view; exactly one is active at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Board,
    Result,
    Celebration,
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Screen::Board => "board",
            Screen::Result => "result",
            Screen::Celebration => "celebration",
        })
    }
}

/// Cumulative scores
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player: u32,
    pub computer: u32,
}

impl ScoreBoard {
    pub fn new(player: u32, computer: u32) -> Self {
        Self { player, computer }
    }

    pub fn apply(&mut self, delta: ScoreDelta) {
        self.player = self.player.saturating_add(delta.player);
        self.computer = self.computer.saturating_add(delta.computer);
    }
}

/// The most recently played round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player: Choice,
    pub computer: Choice,
}

impl RoundRecord {
    pub fn new(player: Choice, computer: Choice) -> Self {
        Self { player, computer }
    }

    pub fn outcome(&self) -> Outcome {
        resolve(self.player, self.computer)
    }

    fn encode(&self) -> String {
        format!("{},{}", self.player.ordinal(), self.computer.ordinal())
    }

    /// `None` for an empty value; `Err` for anything that is not two valid ordinals.
    fn decode(raw: &str) -> Result<Option<Self>, ()> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let mut parts = raw.split(',').map(str::trim);
        let (Some(p), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(());
        };
        let ordinal = |s: &str| s.parse::<u8>().ok().and_then(|o| Choice::from_ordinal(o).ok());
        match (ordinal(p), ordinal(c)) {
            (Some(player), Some(computer)) => Ok(Some(Self { player, computer })),
            _ => Err(()),
        }
    }
}

/// Root aggregate owned by the session controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub scores: ScoreBoard,
    pub round: Option<RoundRecord>,
    pub screen: Screen,
    pub celebrating: bool,
}

impl SessionState {
    /// Read persisted fields. The screen is not stored and starts at `Board`.
    pub fn load<S: PersistentStore + ?Sized>(store: &S, keys: &StorageKeys) -> Self {
        let player = read_score(store, &keys.player_score);
        let computer = read_score(store, &keys.computer_score);

        let round = match store.get(&keys.choices) {
            None => None,
            Some(raw) => RoundRecord::decode(&raw).unwrap_or_else(|_| {
                log::warn!("discarding corrupt round record {:?} under `{}`", raw, keys.choices);
                None
            }),
        };

        let celebrating = match store.get(&keys.celebrate).as_deref().map(str::trim) {
            None | Some("") | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                log::warn!("unrecognised celebrate flag {:?}, treating as false", other);
                false
            }
        };

        Self {
            scores: ScoreBoard { player, computer },
            round,
            screen: Screen::Board,
            celebrating,
        }
    }

    /// Write scores, round record and celebrate flag.
    pub fn persist<S: PersistentStore + ?Sized>(&self, store: &mut S, keys: &StorageKeys) {
        store.set(&keys.player_score, &self.scores.player.to_string());
        store.set(&keys.computer_score, &self.scores.computer.to_string());
        store.set(&keys.choices, &self.round.map(|r| r.encode()).unwrap_or_default());
        store.set(&keys.celebrate, if self.celebrating { "true" } else { "false" });
    }
}

fn read_score<S: PersistentStore + ?Sized>(store: &S, key: &str) -> u32 {
    match store.get(key) {
        None => 0,
        Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
            log::warn!("corrupt score {:?} under `{}`, resetting to 0", raw, key);
            0
        }),
    }
}
