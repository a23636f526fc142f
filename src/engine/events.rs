//! Structured battle events.
//!
//! The engine never prints: everything observable is emitted as a
//! [`BattleEvent`] to an [`EventSink`] supplied by the caller, keeping the
//! engine presentation-agnostic. A renderer subscribes to the sink; tests
//! use the collecting [`EventLog`].

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::{AttackOutcome, CombatantId, StatusKind};
use crate::enemies::ActionId;

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// The player's hit points reached 0.
    PlayerDefeated,
    /// Every enemy's hit points reached 0.
    AllEnemiesDefeated,
}

/// Something observable that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    TurnStarted {
        actor: CombatantId,
        turn: u32,
    },
    /// The player's energy was reset at turn start.
    EnergyReset {
        amount: i32,
    },
    /// An enemy's forecast for the coming round, computed before any
    /// player action and not revised afterwards.
    IntentRevealed {
        enemy: usize,
        text: String,
        action: ActionId,
    },
    CardPlayed {
        kind: CardKind,
        cost: i32,
    },
    DamageDealt {
        source: CombatantId,
        target: CombatantId,
        amount: i32,
        block_absorbed: i32,
        hp_remaining: i32,
    },
    BlockGained {
        who: CombatantId,
        amount: i32,
        total: i32,
    },
    StatusChanged {
        who: CombatantId,
        status: StatusKind,
        value: i32,
    },
    CardsDrawn {
        count: usize,
    },
    /// The discard pile was shuffled into a fresh draw pile.
    PilesReshuffled {
        count: usize,
    },
    CardDiscarded {
        kind: CardKind,
    },
    TurnEnded {
        actor: CombatantId,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Build a `DamageDealt` event from an attack outcome.
    #[must_use]
    pub fn damage(source: CombatantId, target: CombatantId, outcome: &AttackOutcome) -> Self {
        Self::DamageDealt {
            source,
            target,
            amount: outcome.damage,
            block_absorbed: outcome.block_absorbed,
            hp_remaining: outcome.hp_remaining,
        }
    }
}

/// Consumer of battle events.
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

/// Sink that keeps every event, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<BattleEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The final event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&BattleEvent> {
        self.events.last()
    }

    /// Count events matching a predicate.
    pub fn count_where(&self, pred: impl Fn(&BattleEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BattleEvent) {}
}
