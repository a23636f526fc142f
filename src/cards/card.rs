//! Card definitions and the card-play context.
//!
//! The roster is fixed and small, so cards are a closed enum rather than
//! trait objects. Static properties (`cost`, `name`, `description`,
//! `requires_target`) hang off [`CardKind`]; `apply` performs exactly the
//! textual effect, routing draws and discards through the pile protocols.
//!
//! Same-named cards are interchangeable, but each working copy in a battle
//! is a distinct [`CardInstance`] so pile membership stays unambiguous.

use serde::{Deserialize, Serialize};

use crate::cards::piles::Piles;
use crate::core::{BattleRng, Combatant, StatusKind};
use crate::engine::events::{BattleEvent, EventSink};
use crate::engine::input::BattleInput;

/// Unique identifier of a card instance within one battle's working set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

/// A specific card in a battle's working set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: CardInstanceId,
    pub kind: CardKind,
}

/// Everything a card effect may touch while resolving.
///
/// `target` is present exactly when the played card requires one. The
/// input collaborator is needed for interactive discards (Survivor,
/// Acrobatics).
pub struct PlayContext<'a> {
    pub actor: &'a mut Combatant,
    pub target: Option<&'a mut Combatant>,
    pub piles: &'a mut Piles,
    pub rng: &'a mut BattleRng,
    pub input: &'a mut dyn BattleInput,
    pub sink: &'a mut dyn EventSink,
}

/// The card roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Strike,
    Defend,
    Survivor,
    Neutralize,
    Acrobatics,
    Backflip,
}

impl CardKind {
    /// Energy cost to play this card.
    #[must_use]
    pub fn cost(self) -> i32 {
        match self {
            CardKind::Strike => 1,
            CardKind::Defend => 1,
            CardKind::Survivor => 1,
            CardKind::Neutralize => 0,
            CardKind::Acrobatics => 1,
            CardKind::Backflip => 1,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CardKind::Strike => "Strike",
            CardKind::Defend => "Defend",
            CardKind::Survivor => "Survivor",
            CardKind::Neutralize => "Neutralize",
            CardKind::Acrobatics => "Acrobatics",
            CardKind::Backflip => "Backflip",
        }
    }

    /// Effect text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            CardKind::Strike => "Deal 6 damage.",
            CardKind::Defend => "Gain 5 block.",
            CardKind::Survivor => "Gain 8 block. Discard a card.",
            CardKind::Neutralize => "Deal 3 damage. Apply 1 weak.",
            CardKind::Acrobatics => "Draw 3 cards. Discard a card.",
            CardKind::Backflip => "Gain 5 block. Draw 2 cards.",
        }
    }

    /// Whether playing this card needs a single enemy target.
    #[must_use]
    pub fn requires_target(self) -> bool {
        matches!(self, CardKind::Strike | CardKind::Neutralize)
    }

    /// Resolve this card's effect.
    ///
    /// Callers must supply a target exactly when [`requires_target`] says
    /// so; targetless cards ignore `ctx.target`.
    ///
    /// [`requires_target`]: CardKind::requires_target
    pub fn apply(self, ctx: &mut PlayContext<'_>) {
        match self {
            CardKind::Strike => {
                attack_target(ctx, 6);
            }
            CardKind::Defend => {
                gain_block(ctx, 5);
            }
            CardKind::Survivor => {
                gain_block(ctx, 8);
                ctx.piles.discard_from_hand(1, ctx.input, ctx.sink);
            }
            CardKind::Neutralize => {
                attack_target(ctx, 3);
                if let Some(target) = ctx.target.as_deref_mut() {
                    target.statuses.weak += 1;
                    ctx.sink.emit(BattleEvent::StatusChanged {
                        who: target.id,
                        status: StatusKind::Weak,
                        value: target.statuses.weak,
                    });
                }
            }
            CardKind::Acrobatics => {
                ctx.piles.draw(3, ctx.rng, ctx.sink);
                ctx.piles.discard_from_hand(1, ctx.input, ctx.sink);
            }
            CardKind::Backflip => {
                gain_block(ctx, 5);
                ctx.piles.draw(2, ctx.rng, ctx.sink);
            }
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn attack_target(ctx: &mut PlayContext<'_>, base: i32) {
    if let Some(target) = ctx.target.as_deref_mut() {
        let outcome = target.receive_attack(ctx.actor, base);
        ctx.sink.emit(BattleEvent::damage(ctx.actor.id, target.id, &outcome));
    }
}

fn gain_block(ctx: &mut PlayContext<'_>, amount: i32) {
    let gained = ctx.actor.gain_block(amount, true);
    ctx.sink.emit(BattleEvent::BlockGained {
        who: ctx.actor.id,
        amount: gained,
        total: ctx.actor.block,
    });
}
