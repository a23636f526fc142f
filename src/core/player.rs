//! The player character: a combatant with energy and a permanent deck.

use serde::{Deserialize, Serialize};

use super::combatant::{Combatant, CombatantId};
use crate::cards::CardKind;

/// The player-controlled combatant.
///
/// `deck` is the permanent card pool. A battle shuffles a working copy
/// into its draw pile and never touches the original, so the character
/// can be reused across battles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub combatant: Combatant,
    /// Energy resets to this at the start of the player's turn.
    pub energy_per_turn: i32,
    /// Current energy, 0..=energy_per_turn. Card costs are deducted from
    /// it; the engine never lets it go negative.
    pub energy: i32,
    /// Cards drawn at the start of the player's turn.
    pub starting_hand_size: usize,
    /// Permanent deck list.
    pub deck: Vec<CardKind>,
}

impl PlayerCharacter {
    /// Create a player character at full health.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        max_hp: i32,
        energy_per_turn: i32,
        starting_hand_size: usize,
        deck: Vec<CardKind>,
    ) -> Self {
        Self {
            combatant: Combatant::new(CombatantId::Player, name, max_hp),
            energy_per_turn,
            energy: energy_per_turn,
            starting_hand_size,
            deck,
        }
    }

    /// Reset energy to the per-turn amount.
    pub fn reset_energy(&mut self) {
        self.energy = self.energy_per_turn;
    }

    /// Deduct a card's cost. Callers must have validated affordability.
    pub fn spend_energy(&mut self, cost: i32) {
        debug_assert!(cost <= self.energy);
        self.energy -= cost;
    }

    /// Whether the player can afford the given cost this turn.
    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        cost <= self.energy
    }
}
