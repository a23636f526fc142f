//! Enemy archetypes: intent forecasting and action execution.
//!
//! Each archetype maps (turn number, own action history, target state) to
//! a chosen action. The forecast (`choose_intent`) is computed once per
//! round before the player acts and is *not* recomputed afterwards - the
//! displayed intent is a forecast, not a live view. Execution re-reads
//! live state for the actual damage numbers.

use serde::{Deserialize, Serialize};

use crate::core::{compute_damage, BattleRng, Combatant, CombatantId, StatusKind};
use crate::engine::events::{BattleEvent, EventSink};

/// Archetype-scoped action index.
///
/// Cultist: 0 = buff, 1 = attack. Jaw Worm: 0 = Chomp, 1 = Thrash,
/// 2 = Bellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u8);

const CHOMP: ActionId = ActionId(0);
const THRASH: ActionId = ActionId(1);
const BELLOW: ActionId = ActionId(2);

/// A forecast enemy action for the coming round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Player-facing forecast text, with damage previewed against the
    /// board state at forecast time.
    pub text: String,
    pub action: ActionId,
}

/// Enemy behavior archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Cultist,
    JawWorm,
}

/// One enemy in a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub combatant: Combatant,
    pub archetype: Archetype,
    /// Most recent action taken, for history-conditioned archetypes.
    last_action: Option<ActionId>,
    /// The action before that.
    second_to_last: Option<ActionId>,
}

impl Enemy {
    /// A Cultist with max HP rolled in 50..=56.
    #[must_use]
    pub fn cultist(rng: &mut BattleRng) -> Self {
        let max_hp = rng.gen_range_inclusive(50..=56);
        Self {
            combatant: Combatant::new(CombatantId::Enemy(0), "Cultist", max_hp),
            archetype: Archetype::Cultist,
            last_action: None,
            second_to_last: None,
        }
    }

    /// A Jaw Worm with max HP rolled in 40..=44.
    #[must_use]
    pub fn jaw_worm(rng: &mut BattleRng) -> Self {
        let max_hp = rng.gen_range_inclusive(40..=44);
        Self {
            combatant: Combatant::new(CombatantId::Enemy(0), "Jaw Worm", max_hp),
            archetype: Archetype::JawWorm,
            last_action: None,
            second_to_last: None,
        }
    }

    /// The action taken last round, if any.
    #[must_use]
    pub fn last_action(&self) -> Option<ActionId> {
        self.last_action
    }

    /// Forecast this enemy's action for the given turn number.
    ///
    /// Reads but never mutates combat state; the only side effect is
    /// consuming decision rolls from the battle RNG.
    #[must_use]
    pub fn choose_intent(&self, player: &Combatant, turn: u32, rng: &mut BattleRng) -> Intent {
        match self.archetype {
            Archetype::Cultist => self.cultist_intent(player, turn),
            Archetype::JawWorm => self.jaw_worm_intent(player, turn, rng),
        }
    }

    fn cultist_intent(&self, player: &Combatant, turn: u32) -> Intent {
        let name = &self.combatant.name;
        if turn == 1 {
            Intent {
                text: format!("{name} intends to buff!"),
                action: ActionId(0),
            }
        } else {
            let preview = compute_damage(&self.combatant, 1, player);
            Intent {
                text: format!("{name} is going to attack you for {preview} damage!"),
                action: ActionId(1),
            }
        }
    }

    fn jaw_worm_intent(&self, player: &Combatant, turn: u32, rng: &mut BattleRng) -> Intent {
        let chomp = Intent {
            text: format!(
                "{} is going to attack you for {} damage!",
                self.combatant.name,
                compute_damage(&self.combatant, 11, player)
            ),
            action: CHOMP,
        };
        if turn == 1 {
            return chomp;
        }

        let thrash = Intent {
            text: format!(
                "{} is going to block and attack you for {} damage!",
                self.combatant.name,
                compute_damage(&self.combatant, 7, player)
            ),
            action: THRASH,
        };
        let bellow = Intent {
            text: format!("{} is going to buff and block!", self.combatant.name),
            action: BELLOW,
        };

        // History-conditioned transition table: never Bellow or Chomp
        // twice in a row, never Thrash three times in a row.
        let outcome = rng.roll();
        if self.last_action == Some(BELLOW) {
            if outcome > 0.45 {
                thrash
            } else {
                chomp
            }
        } else if self.last_action == Some(CHOMP) {
            if outcome > 0.4 {
                thrash
            } else {
                bellow
            }
        } else if self.last_action == Some(THRASH) && self.second_to_last == Some(THRASH) {
            if outcome > 0.64 {
                chomp
            } else {
                bellow
            }
        } else if outcome < 0.45 {
            bellow
        } else if outcome > 0.75 {
            chomp
        } else {
            thrash
        }
    }

    /// Carry out a previously forecast action against the player.
    ///
    /// Damage is recomputed from live state; history fields shift so the
    /// next forecast sees this action as the most recent one.
    pub fn execute_action(
        &mut self,
        player: &mut Combatant,
        action: ActionId,
        sink: &mut dyn EventSink,
    ) {
        match self.archetype {
            Archetype::Cultist => self.cultist_action(player, action, sink),
            Archetype::JawWorm => self.jaw_worm_action(player, action, sink),
        }
        self.second_to_last = self.last_action;
        self.last_action = Some(action);
    }

    fn cultist_action(&mut self, player: &mut Combatant, action: ActionId, sink: &mut dyn EventSink) {
        if action == ActionId(0) {
            // The buff sets ritual to a flat 5; repeat casts do not stack.
            self.combatant.statuses.ritual = 5;
            sink.emit(BattleEvent::StatusChanged {
                who: self.combatant.id,
                status: StatusKind::Ritual,
                value: self.combatant.statuses.ritual,
            });
        } else {
            self.attack(player, 1, sink);
        }
    }

    fn jaw_worm_action(&mut self, player: &mut Combatant, action: ActionId, sink: &mut dyn EventSink) {
        match action {
            CHOMP => {
                self.attack(player, 11, sink);
            }
            THRASH => {
                self.attack(player, 7, sink);
                self.block(5, sink);
            }
            BELLOW => {
                self.combatant.statuses.strength += 3;
                sink.emit(BattleEvent::StatusChanged {
                    who: self.combatant.id,
                    status: StatusKind::Strength,
                    value: self.combatant.statuses.strength,
                });
                self.block(6, sink);
            }
            _ => {}
        }
    }

    fn attack(&self, player: &mut Combatant, base: i32, sink: &mut dyn EventSink) {
        let outcome = player.receive_attack(&self.combatant, base);
        sink.emit(BattleEvent::damage(self.combatant.id, player.id, &outcome));
    }

    fn block(&mut self, amount: i32, sink: &mut dyn EventSink) {
        let gained = self.combatant.gain_block(amount, true);
        sink.emit(BattleEvent::BlockGained {
            who: self.combatant.id,
            amount: gained,
            total: self.combatant.block,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::EventLog;

    fn player() -> Combatant {
        Combatant::new(CombatantId::Player, "Silent", 77)
    }

    #[test]
    fn test_cultist_buffs_on_turn_one_then_attacks() {
        let mut rng = BattleRng::new(42);
        let cultist = Enemy::cultist(&mut rng);
        let player = player();

        let intent = cultist.choose_intent(&player, 1, &mut rng);
        assert_eq!(intent.action, ActionId(0));
        assert!(intent.text.contains("buff"));

        let intent = cultist.choose_intent(&player, 2, &mut rng);
        assert_eq!(intent.action, ActionId(1));
        assert!(intent.text.contains("attack you for 1 damage"));
    }

    #[test]
    fn test_cultist_buff_sets_ritual_to_flat_five() {
        let mut rng = BattleRng::new(42);
        let mut cultist = Enemy::cultist(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        cultist.execute_action(&mut player, ActionId(0), &mut log);
        assert_eq!(cultist.combatant.statuses.ritual, 5);

        // A second buff does not accumulate.
        cultist.combatant.statuses.ritual = 5;
        cultist.execute_action(&mut player, ActionId(0), &mut log);
        assert_eq!(cultist.combatant.statuses.ritual, 5);
    }

    #[test]
    fn test_cultist_attack_scales_with_ritual_strength() {
        let mut rng = BattleRng::new(42);
        let mut cultist = Enemy::cultist(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        cultist.execute_action(&mut player, ActionId(0), &mut log);
        cultist.combatant.end_of_turn_tick();
        assert_eq!(cultist.combatant.statuses.strength, 5);

        cultist.execute_action(&mut player, ActionId(1), &mut log);
        // Base 1 + 5 strength.
        assert_eq!(player.hp, 71);
    }

    #[test]
    fn test_jaw_worm_forced_chomp_on_turn_one() {
        let mut rng = BattleRng::new(42);
        let worm = Enemy::jaw_worm(&mut rng);
        let player = player();

        for _ in 0..20 {
            let intent = worm.choose_intent(&player, 1, &mut rng);
            assert_eq!(intent.action, CHOMP);
        }
    }

    #[test]
    fn test_jaw_worm_never_repeats_chomp_or_bellow_never_triple_thrash() {
        let mut rng = BattleRng::new(42);
        let mut worm = Enemy::jaw_worm(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        let mut history = Vec::new();
        for turn in 1..=200 {
            let intent = worm.choose_intent(&player, turn, &mut rng);
            worm.execute_action(&mut player, intent.action, &mut log);
            player.hp = player.max_hp; // keep the target standing
            history.push(intent.action);
        }

        for pair in history.windows(2) {
            assert!(!(pair[0] == CHOMP && pair[1] == CHOMP));
            assert!(!(pair[0] == BELLOW && pair[1] == BELLOW));
        }
        for triple in history.windows(3) {
            assert!(triple != [THRASH, THRASH, THRASH]);
        }
    }

    #[test]
    fn test_jaw_worm_transition_after_bellow() {
        let mut rng = BattleRng::new(42);
        let mut worm = Enemy::jaw_worm(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        worm.execute_action(&mut player, BELLOW, &mut log);

        // After Bellow only Thrash or Chomp are reachable.
        for _ in 0..50 {
            let intent = worm.choose_intent(&player, 2, &mut rng);
            assert!(intent.action == THRASH || intent.action == CHOMP);
        }
    }

    #[test]
    fn test_jaw_worm_thrash_attacks_and_blocks() {
        let mut rng = BattleRng::new(42);
        let mut worm = Enemy::jaw_worm(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        worm.execute_action(&mut player, THRASH, &mut log);

        assert_eq!(player.hp, 70);
        assert_eq!(worm.combatant.block, 5);
        assert_eq!(worm.last_action(), Some(THRASH));
    }

    #[test]
    fn test_jaw_worm_bellow_buffs_and_blocks() {
        let mut rng = BattleRng::new(42);
        let mut worm = Enemy::jaw_worm(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        worm.execute_action(&mut player, BELLOW, &mut log);

        assert_eq!(worm.combatant.statuses.strength, 3);
        assert_eq!(worm.combatant.block, 6);
        assert_eq!(player.hp, 77);
    }

    #[test]
    fn test_history_shifts_on_execution() {
        let mut rng = BattleRng::new(42);
        let mut worm = Enemy::jaw_worm(&mut rng);
        let mut player = player();
        let mut log = EventLog::new();

        worm.execute_action(&mut player, CHOMP, &mut log);
        worm.execute_action(&mut player, THRASH, &mut log);

        assert_eq!(worm.last_action, Some(THRASH));
        assert_eq!(worm.second_to_last, Some(CHOMP));
    }

    #[test]
    fn test_rolled_max_hp_in_range() {
        let mut rng = BattleRng::new(9);
        for _ in 0..50 {
            let cultist = Enemy::cultist(&mut rng);
            assert!((50..=56).contains(&cultist.combatant.max_hp));
            let worm = Enemy::jaw_worm(&mut rng);
            assert!((40..=44).contains(&worm.combatant.max_hp));
        }
    }
}
