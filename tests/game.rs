//! Game integration tests.

use highcard::{
    AssignError, Card, ConfigError, DealError, Game, GameOptions, GameState, JoinError, PlayError,
    PlayedCard, Player, rules,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn game_with_players(options: GameOptions, names: &[&str], seed: u64) -> Game {
    let mut rng = rng(seed);
    let mut game = Game::new(options, rules::highest_card, seed).unwrap();
    for name in names {
        game.add_player(Player::new(*name, &mut rng)).unwrap();
    }
    game
}

fn two_player_game(seed: u64) -> Game {
    game_with_players(GameOptions::default(), &["Alice", "Bob"], seed)
}

fn played(player: &str, card: u32) -> PlayedCard {
    PlayedCard {
        player: player.into(),
        card: Card(card),
    }
}

#[test]
fn construction_requires_two_players() {
    let options = GameOptions::default().with_required_players(1);
    assert!(matches!(
        Game::new(options, rules::highest_card, 1),
        Err(ConfigError::InsufficientPlayers)
    ));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_total_cards(36)
        .with_required_players(4);

    assert_eq!(options.total_cards, 36);
    assert_eq!(options.required_players, 4);
}

#[test]
fn roster_full_error_names_required_count() {
    let mut game = two_player_game(3);
    let err = game
        .add_player(Player::new("Carol", &mut rng(4)))
        .unwrap_err();

    assert_eq!(err, JoinError::RosterFull { required: 2 });
    assert!(err.to_string().contains('2'));
    assert_eq!(game.players().len(), 2);
}

#[test]
fn deal_requires_full_roster() {
    let mut game = Game::new(GameOptions::default(), rules::highest_card, 5).unwrap();
    game.add_player(Player::new("Alice", &mut rng(5))).unwrap();

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::RosterIncomplete { required: 2 }
    );
    assert_eq!(game.state(), GameState::WaitingForPlayers);
}

#[test]
fn deal_splits_deck_evenly() {
    let mut game = two_player_game(42);
    game.deal().unwrap();

    for player in game.players() {
        assert_eq!(player.cards().len(), 26);
    }
    assert!(game.discard_pile().is_empty());
    assert_eq!(game.cards_remaining(), 52);
    assert_eq!(game.total_turns(), 26);
}

#[test]
fn deal_discards_remainder() {
    let options = GameOptions::default().with_required_players(3);
    let mut game = game_with_players(options, &["Alice", "Bob", "Carol"], 42);
    game.deal().unwrap();

    for player in game.players() {
        assert_eq!(player.cards().len(), 17);
    }
    assert_eq!(game.discard_pile().len(), 52 % 3);
    assert_eq!(game.total_turns(), 17);
}

#[test]
fn deal_conserves_every_card() {
    let options = GameOptions::default().with_required_players(3);
    let mut game = game_with_players(options, &["Alice", "Bob", "Carol"], 9);
    game.deal().unwrap();

    let mut seen: Vec<Card> = game.discard_pile().to_vec();
    for player in game.players() {
        seen.extend_from_slice(player.cards());
    }
    seen.sort_unstable();

    let full_deck: Vec<Card> = (1..=52).map(Card).collect();
    assert_eq!(seen, full_deck);
}

#[test]
fn deal_is_deterministic_for_seed() {
    let mut first = two_player_game(42);
    let mut second = two_player_game(42);
    first.deal().unwrap();
    second.deal().unwrap();

    for (a, b) in first.players().iter().zip(second.players()) {
        assert_eq!(a.cards(), b.cards());
    }
}

#[test]
fn second_deal_is_rejected() {
    let mut game = two_player_game(6);
    game.deal().unwrap();

    assert_eq!(game.deal().unwrap_err(), DealError::AlreadyAssigned);
}

#[test]
fn play_round_before_deal_fails() {
    let mut game = two_player_game(7);

    assert_eq!(game.play_round().unwrap_err(), PlayError::NotStarted);
    assert_eq!(
        game.play_remaining_rounds().unwrap_err(),
        PlayError::NotStarted
    );
}

#[test]
fn round_reveals_one_card_per_player() {
    let mut game = two_player_game(8);
    game.deal().unwrap();

    let round = game.play_round().unwrap();

    assert_eq!(round.all_hands.len(), 2);
    assert!(round.all_hands.contains(&round.winning_hand));
    for player in game.players() {
        assert_eq!(player.cards().len(), 25);
        assert_eq!(player.played_cards().len(), 1);
    }
}

#[test]
fn round_flow_to_finish() {
    let mut game = two_player_game(42);
    game.deal().unwrap();

    for turn in 1..=26 {
        game.play_round().unwrap();
        assert_eq!(game.rounds_played(), turn);
        assert_eq!(game.cards_remaining() as u32, 52 - turn * 2);
    }

    assert!(game.is_finished());
    assert_eq!(game.remaining_turns(), 0);

    // One more round must fail without extending the win history.
    assert_eq!(game.play_round().unwrap_err(), PlayError::NoCardsLeft);
    assert_eq!(game.rounds_played(), 26);
}

#[test]
fn play_remaining_rounds_plays_out_game() {
    let mut game = two_player_game(11);
    game.deal().unwrap();

    let rounds = game.play_remaining_rounds().unwrap();
    assert_eq!(rounds.len(), 26);
    assert!(game.is_finished());

    // Nothing left to play: a second call is an empty no-op.
    assert!(game.play_remaining_rounds().unwrap().is_empty());
}

#[test]
fn state_transitions_across_lifecycle() {
    let mut game = two_player_game(12);
    assert_eq!(game.state(), GameState::WaitingForPlayers);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::Dealt);

    game.play_round().unwrap();
    assert_eq!(game.state(), GameState::InProgress);

    game.play_remaining_rounds().unwrap();
    assert_eq!(game.state(), GameState::Finished);
}

#[test]
fn score_card_has_no_winner_until_finished() {
    let mut game = two_player_game(13);
    game.deal().unwrap();
    game.play_round().unwrap();

    let score_card = game.score_card();
    assert!(score_card.winner.is_none());
    assert_eq!(score_card.scores.iter().map(|s| s.score).sum::<u32>(), 1);
}

#[test]
fn score_card_awards_one_point_per_round_won() {
    let mut game = two_player_game(42);
    game.deal().unwrap();
    game.play_remaining_rounds().unwrap();

    let score_card = game.score_card();
    assert_eq!(score_card.scores.len(), 2);
    assert_eq!(score_card.scores.iter().map(|s| s.score).sum::<u32>(), 26);

    let max = score_card.scores.iter().map(|s| s.score).max().unwrap();
    let winner = score_card.winner.unwrap();
    let winning_score = score_card
        .scores
        .iter()
        .find(|s| s.player == winner)
        .unwrap();
    assert_eq!(winning_score.score, max);
}

#[test]
fn highest_card_wins_every_round() {
    let mut game = two_player_game(14);
    game.deal().unwrap();

    for round in game.play_remaining_rounds().unwrap() {
        let top = round.all_hands.iter().map(|hand| hand.card).max().unwrap();
        assert_eq!(round.winning_hand.card, top);
    }
}

#[test]
fn lowest_card_rule_picks_minimum() {
    let hands = [played("10", 40), played("20", 3), played("30", 17)];
    assert_eq!(rules::lowest_card(&hands), hands[1]);

    let mut rng = rng(15);
    let options = GameOptions::default().with_total_cards(10);
    let mut game = Game::new(options, rules::lowest_card, 15).unwrap();
    game.add_player(Player::new("Alice", &mut rng)).unwrap();
    game.add_player(Player::new("Bob", &mut rng)).unwrap();
    game.deal().unwrap();

    for round in game.play_remaining_rounds().unwrap() {
        let bottom = round.all_hands.iter().map(|hand| hand.card).min().unwrap();
        assert_eq!(round.winning_hand.card, bottom);
    }
}

#[test]
fn stock_rules_break_ties_by_first_occurrence() {
    let hands = [played("10", 9), played("20", 9), played("30", 4)];
    assert_eq!(rules::highest_card(&hands), hands[0]);

    let hands = [played("10", 4), played("20", 4), played("30", 9)];
    assert_eq!(rules::lowest_card(&hands), hands[0]);
}

#[test]
fn player_plays_in_reverse_deal_order() {
    let mut player = Player::new("Alice", &mut rng(16));
    player
        .assign_cards(vec![Card(1), Card(2), Card(3)])
        .unwrap();

    assert_eq!(player.play_hand().unwrap().card, Card(3));
    assert_eq!(player.play_hand().unwrap().card, Card(2));
    assert_eq!(player.play_hand().unwrap().card, Card(1));
    assert_eq!(player.played_cards(), &[Card(3), Card(2), Card(1)]);

    assert_eq!(player.play_hand().unwrap_err(), PlayError::NoCardsLeft);
}

#[test]
fn player_hand_is_assigned_exactly_once() {
    let mut player = Player::new("Alice", &mut rng(17));
    player.assign_cards(vec![Card(1)]).unwrap();

    assert_eq!(
        player.assign_cards(vec![Card(2)]).unwrap_err(),
        AssignError::AlreadyAssigned
    );
    assert_eq!(player.cards(), &[Card(1)]);
}

#[test]
fn played_card_carries_player_id() {
    let mut player = Player::new("Alice", &mut rng(18));
    player.assign_cards(vec![Card(5)]).unwrap();

    let played = player.play_hand().unwrap();
    assert_eq!(&played.player, player.id());
    assert_eq!(played.card, Card(5));
}
