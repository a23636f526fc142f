//! # spire-sim
//!
//! A deterministic, turn-based card-battle engine: one player character
//! against a group of enemies, with energy-costed cards, block, status
//! effects, and table-driven enemy behavior.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seedable RNG per battle. The same seed and
//!    the same scripted input replay the same battle, event for event.
//!
//! 2. **Presentation-Agnostic**: The engine never prints. Everything
//!    observable streams through an [`engine::EventSink`]; player choices
//!    come in through an [`engine::BattleInput`]. Swap either without
//!    touching combat logic.
//!
//! 3. **Recoverable Input**: Invalid player choices (bad hand index,
//!    unaffordable card, dead target) are rejected and re-requested,
//!    never fatal. A battle ends only by defeat on one side.
//!
//! ## Modules
//!
//! - `core`: Combatants, statuses, the damage formula, energy, RNG
//! - `cards`: The card roster and the draw/discard/hand/exhaust piles
//! - `enemies`: Enemy archetypes and their behavior tables
//! - `engine`: The battle loop, input boundary, and event stream
//! - `roster`: Stock characters and decks
//! - `error`: Recoverable input-validation errors

pub mod cards;
pub mod core;
pub mod enemies;
pub mod engine;
pub mod error;
pub mod roster;

// Re-export commonly used types
pub use crate::core::{
    compute_damage, AttackOutcome, BattleRng, Combatant, CombatantId, PlayerCharacter,
    StatusEffects, StatusKind,
};

pub use crate::cards::{CardInstance, CardInstanceId, CardKind, Piles};

pub use crate::enemies::{ActionId, Archetype, Enemy, Intent};

pub use crate::engine::{
    Battle, BattleEvent, BattleInput, BattleOutcome, EventLog, EventSink, NullSink, PlayerAction,
    ScriptedInput,
};

pub use crate::error::PlayError;
