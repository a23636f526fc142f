//! Card model: the roster, per-battle instances, and the four piles.

pub mod card;
pub mod piles;

pub use card::{CardInstance, CardInstanceId, CardKind, PlayContext};
pub use piles::Piles;
