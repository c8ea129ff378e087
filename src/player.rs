//! Player identity and hand management.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::error::{AssignError, PlayError};
use crate::result::PlayedCard;

/// A player's session identifier.
///
/// Generated as a numeric string from the RNG handed to [`Player::new`],
/// unique enough for a single game session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A participant in a game.
///
/// A player owns a private hand, assigned exactly once when the game is
/// dealt, and an append-only history of the cards they have played.
#[derive(Debug, Clone)]
pub struct Player {
    /// Session identifier.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Unplayed cards, in dealt order.
    cards: Vec<Card>,
    /// Cards played so far, in play order.
    played_cards: Vec<Card>,
    /// Whether the hand has been assigned.
    assigned: bool,
}

impl Player {
    /// Creates a new player with a generated identifier.
    ///
    /// The identifier is drawn from `rng`; pass a seeded RNG for
    /// reproducible identifiers.
    #[must_use]
    pub fn new(name: impl Into<String>, rng: &mut impl Rng) -> Self {
        Self {
            id: PlayerId(rng.random_range(0..100_000_u32).to_string()),
            name: name.into(),
            cards: Vec::new(),
            played_cards: Vec::new(),
            assigned: false,
        }
    }

    /// Returns the player's identifier.
    #[must_use]
    pub const fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's unplayed cards, in dealt order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards the player has played, in play order.
    #[must_use]
    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    /// Returns whether the player's hand has been assigned.
    #[must_use]
    pub const fn has_hand(&self) -> bool {
        self.assigned
    }

    /// Assigns the player's hand for the session.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand was already assigned; a player cannot be
    /// re-dealt mid-session.
    pub fn assign_cards(&mut self, cards: Vec<Card>) -> Result<(), AssignError> {
        if self.assigned {
            return Err(AssignError::AlreadyAssigned);
        }
        self.cards = cards;
        self.assigned = true;
        Ok(())
    }

    /// Plays the top card of the hand.
    ///
    /// Cards are played last-dealt-first: the last card of the hand is
    /// removed, recorded in the played history, and returned tagged with the
    /// player's identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty.
    pub fn play_hand(&mut self) -> Result<PlayedCard, PlayError> {
        let card = self.cards.pop().ok_or(PlayError::NoCardsLeft)?;
        self.played_cards.push(card);
        Ok(PlayedCard {
            player: self.id.clone(),
            card,
        })
    }
}
