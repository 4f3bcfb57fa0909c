//! Choice and outcome definitions

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::GameError;

/// A hand in rock-paper-scissors
///
/// Ordinal order matters: each choice beats the one directly before it
/// in the cycle (paper beats rock, scissors beats paper, rock beats scissors).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    /// All choices in ordinal order
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Ordinal encoding (0-2)
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Build a choice from its ordinal. Out-of-range values are rejected, never clamped.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, GameError> {
        match ordinal {
            0 => Ok(Choice::Rock),
            1 => Ok(Choice::Paper),
            2 => Ok(Choice::Scissors),
            _ => Err(GameError::InvalidChoice(ordinal.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// Relative path of the icon drawn for this choice
    pub fn icon_path(self) -> String {
        format!("./icons/icon-{}.png", self.ordinal())
    }
}

impl TryFrom<u8> for Choice {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Choice::from_ordinal(value)
    }
}

/// Accepts names as well as the board's control ids ("stone", "scissor").
impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "stone" | "0" => Ok(Choice::Rock),
            "paper" | "1" => Ok(Choice::Paper),
            "scissors" | "scissor" | "2" => Ok(Choice::Scissors),
            _ => Err(GameError::InvalidChoice(s.to_string())),
        }
    }
}

impl core::fmt::Display for Choice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one round, seen from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    PlayerWins,
    ComputerWins,
}

impl Outcome {
    pub fn is_player_win(self) -> bool {
        self == Outcome::PlayerWins
    }
}
