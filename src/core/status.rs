//! Status effect arithmetic shared by every combatant.
//!
//! ## Decay Rules
//!
//! - `vulnerable`, `weak`, `frail` are turn counters: each decrements by 1
//!   at the end of its owner's turn, floored at 0, independently of the
//!   others.
//! - `ritual` does not decay. At the end of the owner's turn it adds its
//!   value to `strength`, so strength grows monotonically while ritual > 0.
//! - `strength` and `dexterity` are plain modifiers with no decay. Strength
//!   may in principle go negative.
//! - `focus` is a reserved numeric slot, carried in the data model but read
//!   by nothing yet.

use serde::{Deserialize, Serialize};

/// Which status a [`StatusEffects`] field refers to.
///
/// Used by events to report status changes without stringly-typed keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Strength,
    Dexterity,
    Focus,
    Vulnerable,
    Weak,
    Frail,
    Ritual,
}

/// Numeric modifier bundle carried by every combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects {
    /// Deal this much extra attack damage.
    pub strength: i32,
    /// Gain this much extra block from cards.
    pub dexterity: i32,
    /// Reserved, currently read by nothing.
    pub focus: i32,
    /// Take 50% increased attack damage while > 0. Turn counter.
    pub vulnerable: i32,
    /// Deal 25% reduced attack damage while > 0. Turn counter.
    pub weak: i32,
    /// Gain 25% reduced block from cards while > 0. Turn counter.
    pub frail: i32,
    /// Gain this much strength at the end of every turn. Does not decay.
    pub ritual: i32,
}

impl StatusEffects {
    /// A bundle with every status at zero.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Apply end-of-turn status arithmetic.
    ///
    /// Ritual fires first (strength gain), then the three turn counters
    /// each decrement toward 0. All three counters are checked every turn
    /// end, unconditionally relative to each other.
    ///
    /// Returns the list of `(status, new_value)` changes that occurred, for
    /// event reporting.
    pub fn tick_end_of_turn(&mut self) -> Vec<(StatusKind, i32)> {
        let mut changes = Vec::new();

        if self.ritual > 0 {
            self.strength += self.ritual;
            changes.push((StatusKind::Strength, self.strength));
        }
        if self.weak > 0 {
            self.weak -= 1;
            changes.push((StatusKind::Weak, self.weak));
        }
        if self.vulnerable > 0 {
            self.vulnerable -= 1;
            changes.push((StatusKind::Vulnerable, self.vulnerable));
        }
        if self.frail > 0 {
            self.frail -= 1;
            changes.push((StatusKind::Frail, self.frail));
        }

        changes
    }
}
