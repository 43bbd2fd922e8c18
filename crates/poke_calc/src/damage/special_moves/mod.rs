//! Moves whose power depends on the situation.
//!
//! `power` computes listed-power replacements (weight and speed callbacks)
//! and the named-move / terrain entries of the base power chain.

pub mod power;
#[cfg(test)]
mod tests;

pub use power::{base_power, move_power_entries, terrain_power_entries};
