//! Winner rules for deciding rounds.
//!
//! A winner rule is any `Fn(&[PlayedCard]) -> PlayedCard` that is total over
//! non-empty input and returns one of the input plays by value. The stock
//! rules treat the card number as a rank; custom rules are free to interpret
//! it differently.

use alloc::boxed::Box;

use crate::result::PlayedCard;

/// A boxed winner rule, as stored by the game.
pub type WinnerRule = Box<dyn Fn(&[PlayedCard]) -> PlayedCard>;

/// Picks the play with the highest card number. Ties go to the first
/// occurrence in play order.
///
/// # Panics
///
/// Panics if `hands` is empty.
#[must_use]
pub fn highest_card(hands: &[PlayedCard]) -> PlayedCard {
    hands.iter().skip(1).fold(hands[0].clone(), |best, hand| {
        if hand.card > best.card { hand.clone() } else { best }
    })
}

/// Picks the play with the lowest card number. Ties go to the first
/// occurrence in play order.
///
/// # Panics
///
/// Panics if `hands` is empty.
#[must_use]
pub fn lowest_card(hands: &[PlayedCard]) -> PlayedCard {
    hands.iter().skip(1).fold(hands[0].clone(), |best, hand| {
        if hand.card < best.card { hand.clone() } else { best }
    })
}
