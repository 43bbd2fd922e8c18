//! poke_calc - Gen 9 damage calculator
//!
//! Computes the sixteen possible damage rolls of one attack, bit-for-bit with
//! the game's rounding. Species and move records come from a data provider
//! (see [`Species`] and [`Move`] for the accepted JSON shapes), abilities are
//! resolved through a static hook registry, and field-wide entry effects are
//! applied once with [`resolve_field_entry`] before calculating.
//!
//! ```ignore
//! use poke_calc::{calculate_damage, resolve_field_entry, Format, Pokemon, PokemonConfig};
//!
//! let field = resolve_field_entry(Format::VGC, vec![attacker, defender]);
//! // entry boosts live on the roster, in input order
//! let rolls = calculate_damage(&field, &field.roster[0], &field.roster[1], &flamethrower)?;
//! println!("{}-{}", rolls.min(), rolls.max());
//! ```

/// Type definitions and type chart
pub mod types;

/// Natures and stat identifiers
pub mod natures;

/// Ability identifiers, hooks and registry
pub mod abilities;

/// Species records
pub mod species;

/// Move records
pub mod moves;

/// Field state, formats and status conditions
pub mod state;

/// Pokemon configuration and construction
pub mod entities;

/// Raw and in-battle stats
pub mod stats;

/// Speed-ordered on-entry effects
pub mod entry;

/// Damage calculation
pub mod damage;

pub mod error;
pub mod ids;

// Re-export commonly used types
pub use abilities::{AbilityId, Terrain, Weather};
pub use damage::{calculate_damage, DamageRolls};
pub use entities::{Boosts, Pokemon, PokemonConfig};
pub use entry::resolve_field_entry;
pub use error::CalcError;
pub use ids::to_id;
pub use moves::{Move, MoveCategory, MoveFlags, MoveTarget};
pub use natures::{BattleStat, NatureId, Stat};
pub use species::Species;
pub use state::{FieldState, Format, Status};
pub use stats::StatTable;
pub use types::{Effectiveness, Type, TypeEffectiveness};
