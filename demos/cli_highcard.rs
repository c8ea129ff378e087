//! CLI high-card simulation example.

use std::collections::HashMap;
use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use highcard::{Game, GameOptions, Player, PlayerId, Round, ScoreCard, rules};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn print_round(count: usize, round: &Round, names: &HashMap<PlayerId, String>) {
    let moves: Vec<String> = round
        .all_hands
        .iter()
        .map(|hand| format!("{}: {}", names[&hand.player], hand.card))
        .collect();

    println!("Round {count}");
    println!("Moves: {}", moves.join("\t"));
    println!("Round winner: {}", names[&round.winning_hand.player]);
    println!("....................................................");
}

fn print_score_card(score_card: &ScoreCard, names: &HashMap<PlayerId, String>) {
    let totals: Vec<String> = score_card
        .scores
        .iter()
        .map(|entry| format!("{}: {}", names[&entry.player], entry.score))
        .collect();

    println!("\nFinal scores: {}", totals.join("\t"));
    if let Some(winner) = &score_card.winner {
        println!("Final winner: {}", names[winner]);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut names = HashMap::new();
    let player1 = Player::new("Alice", &mut rng);
    let player2 = Player::new("Bob", &mut rng);
    names.insert(player1.id().clone(), player1.name().to_string());
    names.insert(player2.id().clone(), player2.name().to_string());

    let mut game = Game::new(GameOptions::default(), rules::highest_card, seed)?;
    game.add_player(player1)?;
    game.add_player(player2)?;

    game.deal()?;
    let rounds = game.play_remaining_rounds()?;
    for (index, round) in rounds.iter().enumerate() {
        print_round(index + 1, round, &names);
    }

    print_score_card(&game.score_card(), &names);
    Ok(())
}
