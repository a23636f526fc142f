//! Stock characters and decks.
//!
//! Construction helpers for the built-in roster. Enemy constructors live
//! with their behavior tables in [`crate::enemies`].

use crate::cards::CardKind;
use crate::core::PlayerCharacter;

/// The Silent's starting deck: five Strikes, five Defends, a Survivor
/// and a Neutralize.
#[must_use]
pub fn silent_starting_deck() -> Vec<CardKind> {
    let mut deck = Vec::with_capacity(12);
    deck.extend(std::iter::repeat(CardKind::Strike).take(5));
    deck.extend(std::iter::repeat(CardKind::Defend).take(5));
    deck.push(CardKind::Survivor);
    deck.push(CardKind::Neutralize);
    deck
}

/// The Silent: 77 max HP, 3 energy per turn, 5-card starting hand.
#[must_use]
pub fn silent() -> PlayerCharacter {
    PlayerCharacter::new("Silent", 77, 3, 5, silent_starting_deck())
}
