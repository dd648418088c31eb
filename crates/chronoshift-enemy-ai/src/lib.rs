//! Enemy AI for CHRONOSHIFT.
//!
//! Implements enemy movement state machines, attack pattern generators,
//! sniper beam geometry, and archetype-driven profiles.

pub mod beam;
pub mod fsm;
pub mod patterns;
pub mod profiles;

pub use chronoshift_core as core;

#[cfg(test)]
mod tests;
