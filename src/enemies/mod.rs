//! Enemy archetypes and their behavior tables.

pub mod enemy;

pub use enemy::{ActionId, Archetype, Enemy, Intent};
