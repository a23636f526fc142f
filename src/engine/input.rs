//! The player-input collaborator boundary.
//!
//! The engine blocks on these calls during the player's turn; nothing else
//! acts concurrently. Implementations return whatever the player chose -
//! the engine validates and re-requests on invalid answers, so an
//! implementation never needs to pre-validate.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;

/// One player decision at an action point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the card at this hand index.
    Play { card_index: usize },
    /// End the turn.
    EndTurn,
}

/// Supplies the player's choices to the engine.
pub trait BattleInput {
    /// Choose a card to play (by hand index) or end the turn.
    fn choose_action(&mut self, hand: &[CardInstance], energy: i32) -> PlayerAction;

    /// Choose a target among the living enemies, given their battle-order
    /// indices. The answer must be one of `living`; anything else is
    /// rejected and re-requested.
    fn choose_target(&mut self, living: &[usize]) -> usize;

    /// Choose a card from hand to discard, by hand index.
    fn choose_discard(&mut self, hand: &[CardInstance]) -> usize;
}

/// Scripted input for tests and replays.
///
/// Pops pre-recorded answers from three queues. An exhausted action queue
/// yields `EndTurn`; exhausted target/discard queues fall back to the
/// first valid choice, so a script never wedges the engine.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    actions: VecDeque<PlayerAction>,
    targets: VecDeque<usize>,
    discards: VecDeque<usize>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            targets: VecDeque::new(),
            discards: VecDeque::new(),
        }
    }

    /// Script a sequence of card plays by hand index.
    #[must_use]
    pub fn plays(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(
            indices
                .into_iter()
                .map(|card_index| PlayerAction::Play { card_index }),
        )
    }

    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = usize>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_discards(mut self, discards: impl IntoIterator<Item = usize>) -> Self {
        self.discards = discards.into_iter().collect();
        self
    }
}

impl BattleInput for ScriptedInput {
    fn choose_action(&mut self, _hand: &[CardInstance], _energy: i32) -> PlayerAction {
        self.actions.pop_front().unwrap_or(PlayerAction::EndTurn)
    }

    fn choose_target(&mut self, living: &[usize]) -> usize {
        self.targets
            .pop_front()
            .unwrap_or_else(|| living.first().copied().unwrap_or(0))
    }

    fn choose_discard(&mut self, _hand: &[CardInstance]) -> usize {
        self.discards.pop_front().unwrap_or(0)
    }
}
