//! Pure adjusted-damage calculation.
//!
//! Used both when damage is actually dealt and when previewing enemy
//! intent text, so it must not mutate anything.

use super::combatant::Combatant;

/// Compute the adjusted damage of an attack.
///
/// `raw = base + attacker.strength`, then exactly one multiplier, in this
/// precedence:
///
/// 1. attacker weak AND defender vulnerable: ×1.125 (the two offsetting
///    multipliers combined)
/// 2. attacker weak: ×0.75
/// 3. defender vulnerable: ×1.5
/// 4. otherwise no multiplier
///
/// The product is floored to an integer. Given non-negative inputs the
/// result is never negative.
#[must_use]
pub fn compute_damage(attacker: &Combatant, base: i32, defender: &Combatant) -> i32 {
    let raw = base + attacker.statuses.strength;

    let weak = attacker.statuses.weak > 0;
    let vulnerable = defender.statuses.vulnerable > 0;

    if weak && vulnerable {
        (f64::from(raw) * 1.125).floor() as i32
    } else if weak {
        (f64::from(raw) * 0.75).floor() as i32
    } else if vulnerable {
        (f64::from(raw) * 1.5).floor() as i32
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::combatant::CombatantId;

    fn being(strength: i32, weak: i32, vulnerable: i32) -> Combatant {
        let mut c = Combatant::new(CombatantId::Enemy(0), "Dummy", 50);
        c.statuses.strength = strength;
        c.statuses.weak = weak;
        c.statuses.vulnerable = vulnerable;
        c
    }

    #[test]
    fn test_strength_adds_before_multiplier() {
        let attacker = being(2, 0, 0);
        let defender = being(0, 0, 0);

        assert_eq!(compute_damage(&attacker, 6, &defender), 8);
    }

    #[test]
    fn test_vulnerable_multiplies_by_one_point_five() {
        let attacker = being(2, 0, 0);
        let defender = being(0, 0, 1);

        // floor(8 * 1.5) = 12
        assert_eq!(compute_damage(&attacker, 6, &defender), 12);
    }

    #[test]
    fn test_weak_multiplies_by_three_quarters() {
        let attacker = being(0, 1, 0);
        let defender = being(0, 0, 0);

        // floor(6 * 0.75) = 4
        assert_eq!(compute_damage(&attacker, 6, &defender), 4);
    }

    #[test]
    fn test_weak_and_vulnerable_combine_to_nine_eighths() {
        let attacker = being(2, 1, 0);
        let defender = being(0, 0, 1);

        // floor(8 * 1.125) = 9
        assert_eq!(compute_damage(&attacker, 6, &defender), 9);
    }

    #[test]
    fn test_result_is_floored() {
        let attacker = being(0, 0, 0);
        let defender = being(0, 0, 1);

        // floor(7 * 1.5) = floor(10.5) = 10
        assert_eq!(compute_damage(&attacker, 7, &defender), 10);
    }

    #[test]
    fn test_non_negative_given_non_negative_inputs() {
        for base in 0..20 {
            for strength in 0..5 {
                for weak in 0..2 {
                    for vulnerable in 0..2 {
                        let attacker = being(strength, weak, 0);
                        let defender = being(0, 0, vulnerable);
                        assert!(compute_damage(&attacker, base, &defender) >= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pure_no_mutation() {
        let attacker = being(3, 1, 0);
        let defender = being(0, 0, 2);
        let attacker_before = attacker.clone();
        let defender_before = defender.clone();

        let _ = compute_damage(&attacker, 11, &defender);

        assert_eq!(attacker, attacker_before);
        assert_eq!(defender, defender_before);
    }
}
