//! Render commands sent to the presentation layer
//!
//! The controller only pushes commands; it never reads display state back.

use serde::Serialize;
use crate::choice::{Choice, Outcome};
use crate::state::Screen;

/// Surface the session renders onto
pub trait DisplaySurface {
    fn show_screen(&mut self, screen: Screen);
    fn show_scores(&mut self, player: u32, computer: u32);
    fn show_outcome(&mut self, outcome: Outcome, player: Choice, computer: Choice);
    fn set_rules_overlay(&mut self, open: bool);
}

/// Which side's pick is highlighted on the result screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Highlight {
    None,
    Player,
    Computer,
}

/// Presentation details of the result screen, derived from an outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub headline: &'static str,
    pub play_again_label: &'static str,
    /// The "next" control leading to the celebration screen
    pub show_next: bool,
    pub show_against_pc: bool,
    pub highlight: Highlight,
    pub player_icon: String,
    pub computer_icon: String,
}

impl ResultView {
    pub fn from_outcome(outcome: Outcome, player: Choice, computer: Choice) -> Self {
        let (headline, play_again_label, highlight) = match outcome {
            Outcome::Tie => ("TIE UP", "REPLAY", Highlight::None),
            Outcome::PlayerWins => ("YOU WIN", "PLAY AGAIN", Highlight::Player),
            Outcome::ComputerWins => ("YOU LOSE", "PLAY AGAIN", Highlight::Computer),
        };
        Self {
            headline,
            play_again_label,
            show_next: outcome.is_player_win(),
            show_against_pc: outcome != Outcome::Tie,
            highlight,
            player_icon: player.icon_path(),
            computer_icon: computer.icon_path(),
        }
    }
}

/// Discards every command
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl DisplaySurface for NullDisplay {
    fn show_screen(&mut self, _: Screen) {}
    fn show_scores(&mut self, _: u32, _: u32) {}
    fn show_outcome(&mut self, _: Outcome, _: Choice, _: Choice) {}
    fn set_rules_overlay(&mut self, _: bool) {}
}

/// A render command, as recorded by `RecordingDisplay`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayCommand {
    Screen(Screen),
    Scores(u32, u32),
    Outcome(Outcome, Choice, Choice),
    RulesOverlay(bool),
}

/// Keeps every command it receives, in order
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    pub commands: Vec<DisplayCommand>,
}

impl RecordingDisplay {
    pub fn last_screen(&self) -> Option<Screen> {
        self.commands.iter().rev().find_map(|c| match c {
            DisplayCommand::Screen(s) => Some(*s),
            _ => None,
        })
    }

    pub fn last_scores(&self) -> Option<(u32, u32)> {
        self.commands.iter().rev().find_map(|c| match c {
            DisplayCommand::Scores(p, q) => Some((*p, *q)),
            _ => None,
        })
    }
}

impl DisplaySurface for RecordingDisplay {
    fn show_screen(&mut self, screen: Screen) {
        self.commands.push(DisplayCommand::Screen(screen));
    }

    fn show_scores(&mut self, player: u32, computer: u32) {
        self.commands.push(DisplayCommand::Scores(player, computer));
    }

    fn show_outcome(&mut self, outcome: Outcome, player: Choice, computer: Choice) {
        self.commands.push(DisplayCommand::Outcome(outcome, player, computer));
    }

    fn set_rules_overlay(&mut self, open: bool) {
        self.commands.push(DisplayCommand::RulesOverlay(open));
    }
}
