//! Session state machine
//!
//! Screens and the events that move between them:
//!
//! | From        | Event                    | To          |
//! |-------------|--------------------------|-------------|
//! | Board       | `play_round`             | Result      |
//! | Result      | `replay`                 | Board       |
//! | Result      | `advance_to_celebration` | Celebration |
//! | any         | `full_reset`             | Board       |
//! | start       | `initialize`             | Celebration, Result or Board |
//!
//! Every mutating event writes the scores, round record and celebrate flag
//! back to the store before returning. The rules overlay is independent of
//! the screen and never persisted.

use crate::choice::{Choice, Outcome};
use crate::config::StorageKeys;
use crate::display::DisplaySurface;
use crate::error::GameError;
use crate::random::RandomSource;
use crate::state::{RoundRecord, ScoreBoard, Screen, SessionState};
use crate::store::PersistentStore;
use crate::{resolve, score_delta};

/// Owns the game state and drives it from player actions
pub struct SessionController<S, D, R> {
    store: S,
    display: D,
    rng: R,
    keys: StorageKeys,
    state: SessionState,
    rules_open: bool,
}

impl<S, D, R> SessionController<S, D, R>
where
    S: PersistentStore,
    D: DisplaySurface,
    R: RandomSource,
{
    /// Create a controller using the default storage keys.
    ///
    /// Nothing is read until `initialize` runs.
    pub fn new(store: S, display: D, rng: R) -> Self {
        Self::with_keys(store, display, rng, StorageKeys::default())
    }

    pub fn with_keys(store: S, display: D, rng: R, keys: StorageKeys) -> Self {
        Self {
            store,
            display,
            rng,
            keys,
            state: SessionState::default(),
            rules_open: false,
        }
    }

    /// Restore the session from storage. Runs once per process start.
    ///
    /// A set celebrate flag wins over everything else. Otherwise a stored
    /// round is redisplayed without being scored again.
    pub fn initialize(&mut self) -> Screen {
        let loaded = SessionState::load(&self.store, &self.keys);
        self.rules_open = false;
        self.display.set_rules_overlay(false);

        if loaded.celebrating {
            self.state = SessionState {
                round: None,
                screen: Screen::Celebration,
                ..loaded
            };
            log::debug!("restored celebration screen");
            self.display.show_scores(self.state.scores.player, self.state.scores.computer);
            self.display.show_screen(Screen::Celebration);
            return Screen::Celebration;
        }

        self.state = loaded;
        // Rewrites any values that were defaulted while loading
        self.persist();
        self.display.show_scores(loaded.scores.player, loaded.scores.computer);

        match loaded.round {
            Some(round) => {
                let outcome = round.outcome();
                log::debug!(
                    "restored round {} vs {} ({:?}) without rescoring",
                    round.player, round.computer, outcome
                );
                self.state.screen = Screen::Result;
                self.display.show_outcome(outcome, round.player, round.computer);
                self.display.show_screen(Screen::Result);
            }
            None => {
                self.state.screen = Screen::Board;
                self.display.show_screen(Screen::Board);
            }
        }
        self.state.screen
    }

    /// Play one live round against a random computer choice.
    pub fn play_round(&mut self, player: Choice) -> Result<Outcome, GameError> {
        self.require_screen(Screen::Board, "play a round", "rounds start from the board")?;

        let computer = self.rng.next_choice();
        let outcome = resolve(player, computer);
        self.state.scores.apply(score_delta(outcome));
        self.state.round = Some(RoundRecord::new(player, computer));
        self.state.screen = Screen::Result;
        self.persist();

        log::debug!(
            "round {} vs {}: {:?}, score {}-{}",
            player, computer, outcome, self.state.scores.player, self.state.scores.computer
        );
        self.display.show_scores(self.state.scores.player, self.state.scores.computer);
        self.display.show_outcome(outcome, player, computer);
        self.display.show_screen(Screen::Result);
        Ok(outcome)
    }

    /// Back to the board for another round, keeping the scores.
    pub fn replay(&mut self) -> Result<(), GameError> {
        if self.state.screen == Screen::Celebration {
            return Err(self.illegal("replay", "the celebration screen only exits by a full reset"));
        }

        self.state.round = None;
        self.state.screen = Screen::Board;
        self.persist();

        log::debug!("replay requested");
        self.display.show_screen(Screen::Board);
        Ok(())
    }

    /// Erase the whole session and start over at 0-0.
    pub fn full_reset(&mut self) {
        self.store.clear();
        self.state = SessionState::default();
        self.persist();

        log::info!("session reset");
        self.display.show_scores(0, 0);
        self.display.show_screen(Screen::Board);
    }

    /// Move from a won round to the celebration screen.
    pub fn advance_to_celebration(&mut self) -> Result<(), GameError> {
        self.require_screen(Screen::Result, "celebrate", "celebration follows a round result")?;
        if self.last_outcome() != Some(Outcome::PlayerWins) {
            return Err(self.illegal("celebrate", "the last round was not a player win"));
        }

        self.state.round = None;
        self.state.celebrating = true;
        self.state.screen = Screen::Celebration;
        self.persist();

        log::info!(
            "celebrating at {}-{}",
            self.state.scores.player, self.state.scores.computer
        );
        self.display.show_screen(Screen::Celebration);
        Ok(())
    }

    /// Open or close the rules overlay. Returns the new overlay state.
    pub fn toggle_rules(&mut self) -> bool {
        self.rules_open = !self.rules_open;
        self.display.set_rules_overlay(self.rules_open);
        self.rules_open
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn scores(&self) -> ScoreBoard {
        self.state.scores
    }

    pub fn round(&self) -> Option<RoundRecord> {
        self.state.round
    }

    /// Outcome of the recorded round, recomputed from its choices
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.state.round.map(|r| r.outcome())
    }

    pub fn is_celebrating(&self) -> bool {
        self.state.celebrating
    }

    pub fn rules_open(&self) -> bool {
        self.rules_open
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn persist(&mut self) {
        self.state.persist(&mut self.store, &self.keys);
    }

    fn require_screen(
        &self,
        expected: Screen,
        action: &'static str,
        reason: &'static str,
    ) -> Result<(), GameError> {
        if self.state.screen == expected {
            Ok(())
        } else {
            Err(self.illegal(action, reason))
        }
    }

    fn illegal(&self, action: &'static str, reason: &'static str) -> GameError {
        log::debug!("refused to {} on the {} screen", action, self.state.screen);
        GameError::IllegalTransition {
            action,
            screen: self.state.screen,
            reason,
        }
    }
}
