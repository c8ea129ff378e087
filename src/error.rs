//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two players were required.
    #[error("at least two players are required")]
    InsufficientPlayers,
}

/// Errors that can occur when adding a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The roster is already at capacity.
    #[error("this game can be played by exactly {required} players")]
    RosterFull {
        /// Number of players the game was configured for.
        required: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The roster does not hold the required number of players.
    #[error("this game can be played by exactly {required} players")]
    RosterIncomplete {
        /// Number of players the game was configured for.
        required: usize,
    },
    /// A player already holds a hand.
    #[error("player already holds a hand")]
    AlreadyAssigned,
}

/// Errors that can occur when assigning a hand to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The player's hand was already assigned.
    #[error("player already holds a hand")]
    AlreadyAssigned,
}

impl From<AssignError> for DealError {
    fn from(err: AssignError) -> Self {
        match err {
            AssignError::AlreadyAssigned => Self::AlreadyAssigned,
        }
    }
}

/// Errors that can occur during round play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has not been dealt yet.
    #[error("cannot play a round before the game is dealt")]
    NotStarted,
    /// The player has no cards left to play.
    #[error("no cards left")]
    NoCardsLeft,
}
