//! Error types for the game engine

use crate::state::Screen;

/// Errors surfaced by choice parsing and session transitions.
///
/// Corrupt persisted values are not represented here: they are defaulted
/// where they are read and only logged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A choice was built from an unknown ordinal or name.
    #[error("invalid choice `{0}` (expected rock, paper or scissors)")]
    InvalidChoice(String),

    /// The requested action was refused; session state is unchanged.
    #[error("cannot {action} on the {screen} screen: {reason}")]
    IllegalTransition {
        action: &'static str,
        screen: Screen,
        reason: &'static str,
    },
}
