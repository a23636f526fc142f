//! The four battle-scoped card piles and their movement protocols.
//!
//! ## Partition Invariant
//!
//! Every card instance in a battle's working set is in exactly one of
//! draw, discard, hand, or exhaust at all times. Cards move only through
//! the protocols here (or a card effect routing itself to exhaust), so the
//! total count is conserved for the whole battle.
//!
//! ## Conventions
//!
//! The top of an ordered pile is the end of its `Vec`, matching how a
//! physical deck is popped. Draw order is shuffle order.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::card::{CardInstance, CardInstanceId, CardKind};
use crate::core::BattleRng;
use crate::engine::events::{BattleEvent, EventSink};
use crate::engine::input::BattleInput;

/// The battle-scoped working set of a player's cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    pub draw: Vec<CardInstance>,
    pub discard: Vec<CardInstance>,
    pub hand: Vec<CardInstance>,
    /// Resting place for cards removed from circulation for the rest of
    /// the battle. Available as a destination; the baseline roster never
    /// routes anything here.
    pub exhaust: Vec<CardInstance>,
}

impl Piles {
    /// Build a working set from a permanent deck list: instantiate every
    /// card and shuffle the result into the draw pile. The other piles
    /// start empty; the permanent list is untouched.
    #[must_use]
    pub fn build(deck: &[CardKind], rng: &mut BattleRng) -> Self {
        let mut draw: Vec<CardInstance> = deck
            .iter()
            .enumerate()
            .map(|(i, &kind)| CardInstance {
                id: CardInstanceId(i as u32),
                kind,
            })
            .collect();
        rng.shuffle(&mut draw);

        Self {
            draw,
            discard: Vec::new(),
            hand: Vec::new(),
            exhaust: Vec::new(),
        }
    }

    /// Total cards across all four piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.discard.len() + self.hand.len() + self.exhaust.len()
    }

    /// Draw up to `n` cards into hand.
    ///
    /// Per iteration: if both draw and discard piles are empty the draw
    /// stops early (the deck is exhausted for this battle; not an error).
    /// If only the draw pile is empty, the discard pile is shuffled into a
    /// fresh draw pile first. Returns the number actually drawn.
    pub fn draw(&mut self, n: usize, rng: &mut BattleRng, sink: &mut dyn EventSink) -> usize {
        let mut drawn = 0;

        for _ in 0..n {
            if self.draw.is_empty() && self.discard.is_empty() {
                break;
            }
            if self.draw.is_empty() {
                std::mem::swap(&mut self.draw, &mut self.discard);
                rng.shuffle(&mut self.draw);
                sink.emit(BattleEvent::PilesReshuffled {
                    count: self.draw.len(),
                });
            }
            let card = self.draw.pop().expect("draw pile refilled above");
            self.hand.push(card);
            drawn += 1;
        }

        if drawn > 0 {
            sink.emit(BattleEvent::CardsDrawn { count: drawn });
        }
        drawn
    }

    /// Discard up to `n` cards from hand.
    ///
    /// Per iteration: an empty hand stops early. When the remaining
    /// iterations cover the whole hand, the hand moves to the discard pile
    /// in one step (the end-of-turn fast path). Otherwise the chooser
    /// selects a card by index; out-of-range answers are rejected and
    /// re-requested.
    pub fn discard_from_hand(
        &mut self,
        n: usize,
        chooser: &mut dyn BattleInput,
        sink: &mut dyn EventSink,
    ) {
        for i in 0..n {
            if self.hand.is_empty() {
                return;
            }

            let remaining = n - i;
            if self.hand.len() <= remaining {
                for card in self.hand.drain(..) {
                    sink.emit(BattleEvent::CardDiscarded { kind: card.kind });
                    self.discard.push(card);
                }
                return;
            }

            let index = loop {
                let index = chooser.choose_discard(&self.hand);
                if index < self.hand.len() {
                    break index;
                }
                warn!(index, hand_size = self.hand.len(), "rejected discard selection");
            };
            let card = self.hand.remove(index);
            sink.emit(BattleEvent::CardDiscarded { kind: card.kind });
            self.discard.push(card);
        }
    }

    /// Move a card that has left the hand to the discard pile (the normal
    /// destination of a played card).
    pub fn discard_played(&mut self, card: CardInstance) {
        self.discard.push(card);
    }

    /// Move a card that has left the hand to the exhaust pile, removing it
    /// from circulation for the rest of the battle.
    pub fn exhaust_card(&mut self, card: CardInstance) {
        self.exhaust.push(card);
    }
}
