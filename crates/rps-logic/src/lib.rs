//! Rock-Paper-Scissors game logic
//!
//! Match resolution and the session state machine behind the browser game.
//! This crate is compiled to:
//! - Native (for tests and embedding)
//! - WASM (for the browser front end)

mod choice;
mod config;
mod display;
mod error;
mod random;
mod session;
mod state;
mod store;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use choice::{Choice, Outcome};
pub use config::{SessionConfig, StorageKeys};
pub use display::{DisplayCommand, DisplaySurface, Highlight, NullDisplay, RecordingDisplay, ResultView};
pub use error::GameError;
pub use random::{FixedChoices, RandomSource, SeededRng};
pub use session::SessionController;
pub use state::{RoundRecord, ScoreBoard, Screen, SessionState};
pub use store::{MemoryStore, PersistentStore};

/// Points awarded to each side for one round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub player: u32,
    pub computer: u32,
}

/// Decide a round
///
/// A choice beats the one a single step behind it in the ordinal cycle:
/// `(player - computer + 3) mod 3` is 0 for a tie, 1 for a player win,
/// 2 for a computer win.
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    match (player.ordinal() + 3 - computer.ordinal()) % 3 {
        0 => Outcome::Tie,
        1 => Outcome::PlayerWins,
        _ => Outcome::ComputerWins,
    }
}

/// Score change implied by an outcome
pub fn score_delta(outcome: Outcome) -> ScoreDelta {
    match outcome {
        Outcome::Tie => ScoreDelta { player: 0, computer: 0 },
        Outcome::PlayerWins => ScoreDelta { player: 1, computer: 0 },
        Outcome::ComputerWins => ScoreDelta { player: 0, computer: 1 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cyclic_dominance() {
        assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::PlayerWins);
        assert_eq!(resolve(Choice::Scissors, Choice::Paper), Outcome::PlayerWins);
        assert_eq!(resolve(Choice::Paper, Choice::Rock), Outcome::PlayerWins);

        assert_eq!(resolve(Choice::Scissors, Choice::Rock), Outcome::ComputerWins);
        assert_eq!(resolve(Choice::Paper, Choice::Scissors), Outcome::ComputerWins);
        assert_eq!(resolve(Choice::Rock, Choice::Paper), Outcome::ComputerWins);

        assert_eq!(resolve(Choice::Paper, Choice::Paper), Outcome::Tie);
    }

    #[test]
    fn test_all_pairs() {
        for p in Choice::ALL {
            for c in Choice::ALL {
                let d = (p.ordinal() as i32 - c.ordinal() as i32 + 3) % 3;
                let expected = match d {
                    0 => Outcome::Tie,
                    1 => Outcome::PlayerWins,
                    _ => Outcome::ComputerWins,
                };
                assert_eq!(resolve(p, c), expected, "resolve({}, {})", p, c);
                assert_eq!(resolve(p, c) == Outcome::Tie, p == c);
            }
        }
    }

    #[test]
    fn test_score_delta() {
        assert_eq!(score_delta(Outcome::PlayerWins), ScoreDelta { player: 1, computer: 0 });
        assert_eq!(score_delta(Outcome::ComputerWins), ScoreDelta { player: 0, computer: 1 });
        assert_eq!(score_delta(Outcome::Tie), ScoreDelta::default());
    }

    fn any_choice() -> impl Strategy<Value = Choice> {
        prop::sample::select(Choice::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_swapping_sides_mirrors_outcome(p in any_choice(), c in any_choice()) {
            let mirrored = match resolve(p, c) {
                Outcome::Tie => Outcome::Tie,
                Outcome::PlayerWins => Outcome::ComputerWins,
                Outcome::ComputerWins => Outcome::PlayerWins,
            };
            prop_assert_eq!(resolve(c, p), mirrored);
        }

        #[test]
        fn prop_delta_awards_at_most_one_point(p in any_choice(), c in any_choice()) {
            let delta = score_delta(resolve(p, c));
            prop_assert!(delta.player + delta.computer <= 1);
            prop_assert_eq!(delta.player + delta.computer == 0, p == c);
        }
    }
}
