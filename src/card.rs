//! Card and deck types.

use alloc::vec::Vec;
use core::fmt;

/// A playing card, identified by a number.
///
/// The engine assigns identifiers `1..=total_cards` and attaches no rank
/// semantics to them; how a card compares to another is the concern of the
/// winner rule in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(pub u32);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of cards. Shrinks as cards are discarded and dealt.
pub type Deck = Vec<Card>;
