//! Core combat arithmetic: combatants, statuses, damage, and RNG.

pub mod combatant;
pub mod damage;
pub mod player;
pub mod rng;
pub mod status;

pub use combatant::{AttackOutcome, Combatant, CombatantId};
pub use damage::compute_damage;
pub use player::PlayerCharacter;
pub use rng::BattleRng;
pub use status::{StatusEffects, StatusKind};
