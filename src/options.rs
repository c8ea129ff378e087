//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use highcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_total_cards(36)
///     .with_required_players(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Total number of cards in the deck.
    pub total_cards: u32,
    /// Number of players the game is played by. Dealing requires exactly
    /// this many players to have joined.
    pub required_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            total_cards: 52,
            required_players: 2,
        }
    }
}

impl GameOptions {
    /// Sets the total number of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_total_cards(36);
    /// assert_eq!(options.total_cards, 36);
    /// ```
    #[must_use]
    pub const fn with_total_cards(mut self, total_cards: u32) -> Self {
        self.total_cards = total_cards;
        self
    }

    /// Sets the required number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_required_players(3);
    /// assert_eq!(options.required_players, 3);
    /// ```
    #[must_use]
    pub const fn with_required_players(mut self, required_players: usize) -> Self {
        self.required_players = required_players;
        self
    }
}
