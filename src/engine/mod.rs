//! The battle loop, its input boundary, and its event stream.

pub mod battle;
pub mod events;
pub mod input;

pub use battle::Battle;
pub use events::{BattleEvent, BattleOutcome, EventLog, EventSink, NullSink};
pub use input::{BattleInput, PlayerAction, ScriptedInput};
