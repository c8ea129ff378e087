//! Game state types.

/// Game lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the roster to fill up.
    WaitingForPlayers,
    /// Cards have been dealt; no round has been played yet.
    Dealt,
    /// Rounds are being played.
    InProgress,
    /// Every round has been played and the winner can be determined.
    Finished,
}
