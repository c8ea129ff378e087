//! Game engine and round flow.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Deck};
use crate::error::{ConfigError, DealError, JoinError, PlayError};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::result::{PlayedCard, Round, Score, ScoreCard};
use crate::rules::WinnerRule;

pub mod state;

pub use state::GameState;

/// A turn-based card game engine.
///
/// The game owns the deck, the player roster, and the win history, and
/// drives the full lifecycle: players join until the roster is full, cards
/// are dealt, rounds are played until every hand is exhausted, and the
/// score card names the winner. The round winner is decided by the
/// [`WinnerRule`] supplied at construction.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Rule that picks each round's winning play.
    winner_rule: WinnerRule,
    /// Undealt cards. Empty once the game has been dealt.
    deck: Deck,
    /// Cards set aside because the deck does not divide evenly.
    discard_pile: Deck,
    /// Players in join order.
    players: Vec<Player>,
    /// Winning play of each completed round.
    winning_hands: Vec<PlayedCard>,
    /// Whether the game has been dealt.
    started: bool,
    /// Random number generator used for the shuffle.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given options, winner rule, and seed.
    ///
    /// The deck is initialized as the ordered sequence `1..=total_cards`;
    /// it is shuffled when the game is dealt. The same seed always produces
    /// the same shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are required.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameOptions, rules};
    ///
    /// let game = Game::new(GameOptions::default(), rules::highest_card, 42).unwrap();
    /// assert_eq!(game.total_cards(), 52);
    /// ```
    pub fn new(
        options: GameOptions,
        winner_rule: impl Fn(&[PlayedCard]) -> PlayedCard + 'static,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if options.required_players < 2 {
            return Err(ConfigError::InsufficientPlayers);
        }

        Ok(Self {
            deck: (1..=options.total_cards).map(Card).collect(),
            options,
            winner_rule: Box::new(winner_rule),
            discard_pile: Vec::new(),
            players: Vec::new(),
            winning_hands: Vec::new(),
            started: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Adds a player to the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster already holds the required number of
    /// players.
    pub fn add_player(&mut self, player: Player) -> Result<(), JoinError> {
        if self.players.len() >= self.options.required_players {
            return Err(JoinError::RosterFull {
                required: self.options.required_players,
            });
        }
        self.players.push(player);
        Ok(())
    }

    /// Shuffles the deck and deals every card.
    ///
    /// Cards that cannot be distributed evenly (`total_cards %
    /// required_players`) are moved from the tail of the shuffled deck to
    /// the discard pile and never played. Each player then receives a
    /// contiguous block of `total_cards / required_players` cards in roster
    /// order; the discard pile and the dealt hands partition the deck
    /// exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is not exactly full, or if any player
    /// already holds a hand.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.players.len() != self.options.required_players {
            return Err(DealError::RosterIncomplete {
                required: self.options.required_players,
            });
        }
        if self.players.iter().any(Player::has_hand) {
            return Err(DealError::AlreadyAssigned);
        }

        self.started = true;
        self.deck.shuffle(&mut self.rng);

        let extra = self.options.total_cards as usize % self.options.required_players;
        self.discard_pile = self.deck.split_off(self.deck.len() - extra);

        let per_player = self.options.total_cards as usize / self.options.required_players;
        for player in &mut self.players {
            let hand: Vec<Card> = self.deck.drain(..per_player).collect();
            player.assign_cards(hand)?;
        }

        Ok(())
    }

    /// Plays one round: every player reveals one card, in roster order, and
    /// the winner rule picks the winning play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been dealt, or if a player has
    /// no cards left. In the latter case the round is aborted before the
    /// win history is touched; cards already revealed by earlier players in
    /// the failed round stay consumed.
    pub fn play_round(&mut self) -> Result<Round, PlayError> {
        if !self.started {
            return Err(PlayError::NotStarted);
        }

        let mut all_hands = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            all_hands.push(player.play_hand()?);
        }

        let winning_hand = (self.winner_rule)(&all_hands);
        self.winning_hands.push(winning_hand.clone());

        Ok(Round {
            all_hands,
            winning_hand,
        })
    }

    /// Plays every remaining round and collects the results in order.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Game::play_round`].
    pub fn play_remaining_rounds(&mut self) -> Result<Vec<Round>, PlayError> {
        if !self.started {
            return Err(PlayError::NotStarted);
        }

        let remaining = self.remaining_turns();
        let mut rounds = Vec::with_capacity(remaining as usize);
        for _ in 0..remaining {
            rounds.push(self.play_round()?);
        }
        Ok(rounds)
    }

    /// Builds the score card: one point per round won, in roster order.
    ///
    /// The winner is populated only once the game is finished, and is the
    /// first player in roster order holding the maximum score.
    #[must_use]
    pub fn score_card(&self) -> ScoreCard {
        let mut scores: Vec<Score> = self
            .players
            .iter()
            .map(|player| Score {
                player: player.id().clone(),
                score: 0,
            })
            .collect();

        for winning_hand in &self.winning_hands {
            if let Some(entry) = scores.iter_mut().find(|s| s.player == winning_hand.player) {
                entry.score += self.round_score();
            }
        }

        let winner = if self.is_finished() {
            Self::best_score(&scores)
        } else {
            None
        };

        ScoreCard { scores, winner }
    }

    /// Returns the players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the total number of cards the game was configured with.
    #[must_use]
    pub const fn total_cards(&self) -> u32 {
        self.options.total_cards
    }

    /// Returns the cards set aside because the deck does not divide evenly.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the total number of rounds the game consists of.
    #[must_use]
    pub const fn total_turns(&self) -> u32 {
        self.options.total_cards / self.options.required_players as u32
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.winning_hands.len() as u32
    }

    /// Returns the number of rounds left to play.
    #[must_use]
    pub fn remaining_turns(&self) -> u32 {
        self.total_turns() - self.rounds_played()
    }

    /// Returns whether every round has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_turns() == 0
    }

    /// Returns the number of unplayed cards across all hands.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.players.iter().map(|player| player.cards().len()).sum()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if !self.started {
            GameState::WaitingForPlayers
        } else if self.is_finished() {
            GameState::Finished
        } else if self.winning_hands.is_empty() {
            GameState::Dealt
        } else {
            GameState::InProgress
        }
    }

    /// Points awarded per round won.
    ///
    /// Fixed at one for now; scoring hook for card-value weighting.
    const fn round_score(&self) -> u32 {
        1
    }

    /// Returns the first player holding the maximum score.
    fn best_score(scores: &[Score]) -> Option<PlayerId> {
        let mut best: Option<&Score> = None;
        for score in scores {
            match best {
                Some(current) if current.score >= score.score => {}
                _ => best = Some(score),
            }
        }
        best.map(|score| score.player.clone())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("players", &self.players)
            .field("discard_pile", &self.discard_pile)
            .field("rounds_played", &self.winning_hands.len())
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
