//! Combatants: hit points, block, and statuses.
//!
//! A `Combatant` is the shared battle body of the player character and
//! every enemy. It knows how to take an attack (block-first absorption),
//! gain block (dexterity/frail adjusted), and run its end-of-turn status
//! tick. It does not know about cards, piles, or turns - those belong to
//! the engine.

use serde::{Deserialize, Serialize};

use super::damage::compute_damage;
use super::status::{StatusEffects, StatusKind};

/// Tagged identity of a combatant within a battle.
///
/// Enemy indices refer to the stable order established at battle start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantId {
    Player,
    Enemy(usize),
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantId::Player => write!(f, "Player"),
            CombatantId::Enemy(i) => write!(f, "Enemy({i})"),
        }
    }
}

/// What a single attack did to its target.
///
/// `block_absorbed + hp_lost == damage` in every branch of the absorption
/// rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Adjusted damage after the damage model.
    pub damage: i32,
    /// Portion absorbed by block.
    pub block_absorbed: i32,
    /// Portion that reached hit points.
    pub hp_lost: i32,
    /// Target hit points after the attack (clamped at 0).
    pub hp_remaining: i32,
}

impl AttackOutcome {
    /// True if the attack reduced the target to 0 hit points.
    #[must_use]
    pub fn lethal(&self) -> bool {
        self.hp_remaining == 0
    }
}

/// A being in a battle: the player character or one enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub max_hp: i32,
    /// Current hit points, 0..=max_hp. Clamped at 0 on a lethal hit.
    pub hp: i32,
    /// Damage buffer, never negative. Resets to 0 at own turn start.
    pub block: i32,
    pub statuses: StatusEffects,
}

impl Combatant {
    /// Create a combatant at full health with no block and no statuses.
    #[must_use]
    pub fn new(id: CombatantId, name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            id,
            name: name.into(),
            max_hp,
            hp: max_hp,
            block: 0,
            statuses: StatusEffects::none(),
        }
    }

    /// Whether this combatant is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Take an attack from `attacker` with the given base damage.
    ///
    /// The base amount is adjusted by the damage model, then applied to
    /// block first: block at 0 sends everything to hit points; block at or
    /// above the damage absorbs it entirely; otherwise block is zeroed and
    /// the remainder hits hit points. Hit points clamp at 0.
    pub fn receive_attack(&mut self, attacker: &Combatant, base: i32) -> AttackOutcome {
        let damage = compute_damage(attacker, base, self);

        let block_absorbed = damage.min(self.block);
        let hp_lost = damage - block_absorbed;

        self.block -= block_absorbed;
        self.hp = (self.hp - hp_lost).max(0);

        AttackOutcome {
            damage,
            block_absorbed,
            hp_lost,
            hp_remaining: self.hp,
        }
    }

    /// Gain block.
    ///
    /// A card-sourced gain adds dexterity, then floor-multiplies by 0.75
    /// while frail, clamped at 0. A non-card source (reserved) bypasses
    /// both modifiers. Returns the effective amount gained.
    pub fn gain_block(&mut self, amount: i32, from_card: bool) -> i32 {
        let gained = if from_card {
            let adjusted = amount + self.statuses.dexterity;
            let adjusted = if self.statuses.frail > 0 {
                (f64::from(adjusted) * 0.75).floor() as i32
            } else {
                adjusted
            };
            adjusted.max(0)
        } else {
            amount.max(0)
        };

        self.block += gained;
        gained
    }

    /// Reset block to 0, as happens at the start of this combatant's turn.
    pub fn reset_block(&mut self) {
        self.block = 0;
    }

    /// Run end-of-turn status arithmetic (ritual, then counter decay).
    ///
    /// Returns the status changes for event reporting.
    pub fn end_of_turn_tick(&mut self) -> Vec<(StatusKind, i32)> {
        self.statuses.tick_end_of_turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(max_hp: i32) -> Combatant {
        Combatant::new(CombatantId::Enemy(0), "Target", max_hp)
    }

    fn attacker() -> Combatant {
        Combatant::new(CombatantId::Player, "Attacker", 77)
    }

    #[test]
    fn test_attack_with_no_block_hits_hp() {
        let mut target = enemy(50);
        let outcome = target.receive_attack(&attacker(), 6);

        assert_eq!(
            outcome,
            AttackOutcome {
                damage: 6,
                block_absorbed: 0,
                hp_lost: 6,
                hp_remaining: 44,
            }
        );
        assert_eq!(target.hp, 44);
    }

    #[test]
    fn test_block_absorbs_entirely() {
        let mut target = enemy(50);
        target.block = 10;

        let outcome = target.receive_attack(&attacker(), 6);

        assert_eq!(outcome.block_absorbed, 6);
        assert_eq!(outcome.hp_lost, 0);
        assert_eq!(target.block, 4);
        assert_eq!(target.hp, 50);
    }

    #[test]
    fn test_block_breaks_and_remainder_hits_hp() {
        let mut target = enemy(50);
        target.block = 4;

        let outcome = target.receive_attack(&attacker(), 6);

        assert_eq!(outcome.block_absorbed, 4);
        assert_eq!(outcome.hp_lost, 2);
        assert_eq!(target.block, 0);
        assert_eq!(target.hp, 48);
    }

    #[test]
    fn test_absorption_conserves_damage() {
        for block in [0, 3, 6, 12] {
            let mut target = enemy(50);
            target.block = block;

            let outcome = target.receive_attack(&attacker(), 6);

            assert_eq!(outcome.block_absorbed + outcome.hp_lost, outcome.damage);
            assert!(target.block >= 0);
        }
    }

    #[test]
    fn test_lethal_hit_clamps_hp_at_zero() {
        let mut target = enemy(3);
        let outcome = target.receive_attack(&attacker(), 10);

        assert_eq!(target.hp, 0);
        assert_eq!(outcome.hp_remaining, 0);
        assert!(outcome.lethal());
        assert!(!target.is_alive());
    }

    #[test]
    fn test_attack_respects_statuses() {
        let mut source = attacker();
        source.statuses.strength = 2;

        let mut target = enemy(50);
        target.statuses.vulnerable = 1;

        let outcome = target.receive_attack(&source, 6);

        // floor((6 + 2) * 1.5) = 12
        assert_eq!(outcome.damage, 12);
        assert_eq!(target.hp, 38);
    }

    #[test]
    fn test_gain_block_adds_dexterity() {
        let mut c = enemy(50);
        c.statuses.dexterity = 2;

        let gained = c.gain_block(5, true);

        assert_eq!(gained, 7);
        assert_eq!(c.block, 7);
    }

    #[test]
    fn test_gain_block_frail_floors() {
        let mut c = enemy(50);
        c.statuses.frail = 1;

        // floor(5 * 0.75) = 3
        let gained = c.gain_block(5, true);

        assert_eq!(gained, 3);
        assert_eq!(c.block, 3);
    }

    #[test]
    fn test_gain_block_non_card_bypasses_modifiers() {
        let mut c = enemy(50);
        c.statuses.dexterity = 2;
        c.statuses.frail = 1;

        let gained = c.gain_block(5, false);

        assert_eq!(gained, 5);
        assert_eq!(c.block, 5);
    }

    #[test]
    fn test_gain_block_never_negative() {
        let mut c = enemy(50);
        c.statuses.dexterity = -10;

        let gained = c.gain_block(5, true);

        assert_eq!(gained, 0);
        assert_eq!(c.block, 0);
    }

    #[test]
    fn test_reset_block() {
        let mut c = enemy(50);
        c.gain_block(8, true);
        c.reset_block();

        assert_eq!(c.block, 0);
    }
}
