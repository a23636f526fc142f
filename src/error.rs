//! Recoverable input-validation errors.
//!
//! Every variant is recovered locally by rejecting the choice and
//! re-requesting input; none is fatal to a battle. Empty-pile draws and
//! permanent deck exhaustion are defined no-ops, not errors, and battle
//! termination is a normal outcome, so none of those appear here.

use thiserror::Error;

use crate::cards::CardKind;

/// Why a player choice was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("card index {index} out of range for hand of {hand_size}")]
    InvalidCardSelection { index: usize, hand_size: usize },

    #[error("{kind} costs {cost} energy, only {available} remaining")]
    InsufficientEnergy {
        kind: CardKind,
        cost: i32,
        available: i32,
    },

    #[error("enemy {index} is not a living target")]
    InvalidTargetSelection { index: usize },
}
