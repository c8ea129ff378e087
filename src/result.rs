//! Round and scoring result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::PlayerId;

/// One player's card played into a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedCard {
    /// The player who played the card.
    pub player: PlayerId,
    /// The card that was played.
    pub card: Card,
}

/// Outcome of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Every card played this round, in roster order.
    pub all_hands: Vec<PlayedCard>,
    /// The play selected by the winner rule.
    pub winning_hand: PlayedCard,
}

/// A player's cumulative score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// The player being scored.
    pub player: PlayerId,
    /// Rounds won so far, one point each.
    pub score: u32,
}

/// Cumulative scores for every player, and the game winner once finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    /// Scores in roster order.
    pub scores: Vec<Score>,
    /// The winning player. `None` until the game is finished.
    pub winner: Option<PlayerId>,
}
