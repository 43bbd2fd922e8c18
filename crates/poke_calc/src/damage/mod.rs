//! Damage calculation pipeline.
//!
//! Gen 9 single-attack calculator. The formula:
//! 1. **Base Power**: listed or callback power, then the power chain
//! 2. **Effective Stats**: boosted stat, flat multipliers, attack/defense chains
//! 3. **Base Damage**: `floor(floor(floor(2 * L / 5 + 2) * Power * Atk / Def) / 50) + 2`
//! 4. **Final Damage**: see [`pipeline`]
//!
//! # Usage
//!
//! ```ignore
//! use poke_calc::{calculate_damage, resolve_field_entry, Format};
//!
//! let field = resolve_field_entry(Format::VGC, vec![attacker, defender]);
//! let rolls = calculate_damage(&field, &field.roster[0], &field.roster[1], &hydro_pump)?;
//! assert_eq!(rolls.as_slice().len(), 16);
//! ```

pub mod chain;
pub mod context;
pub mod effectiveness;
pub mod formula;
pub mod modifier;
pub mod modifiers;
pub mod pipeline;
pub mod special_moves;

#[cfg(test)]
mod conditional_moves_tests;

pub use chain::Chain;
pub use context::DamageContext;
pub use modifier::{ChainMultiplier, Modifier};

use crate::abilities::WeatherEffect;
use crate::entities::Pokemon;
use crate::error::CalcError;
use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::state::FieldState;

use self::effectiveness::{calculate_effectiveness, is_immune};
use self::formula::{get_base_damage, of16};
use self::modifiers::{compute_base_power, compute_effective_attack, compute_effective_defense};
use self::pipeline::{compute_final_damage, FinalModifiers, Stab};

/// Result of a damage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageRolls {
    /// Status moves deal no damage and produce no rolls.
    StatusMove,
    /// All 16 possible damage values (random roll 85-100), ascending.
    Rolls([u16; 16]),
}

const STATUS_SENTINEL: [u16; 1] = [0];

impl DamageRolls {
    /// A zero-damage result (immunities, weather failures)
    pub const ZERO: Self = DamageRolls::Rolls([0; 16]);

    /// Rolls as a slice: `[0]` for a status move, sixteen values otherwise.
    pub fn as_slice(&self) -> &[u16] {
        match self {
            DamageRolls::StatusMove => &STATUS_SENTINEL,
            DamageRolls::Rolls(rolls) => rolls,
        }
    }

    /// Minimum damage (roll index 0)
    pub fn min(&self) -> u16 {
        self.as_slice().first().copied().unwrap_or(0)
    }

    /// Maximum damage (roll index 15)
    pub fn max(&self) -> u16 {
        self.as_slice().last().copied().unwrap_or(0)
    }

    /// `(min, max)` as a percentage of `hp`.
    pub fn percent_of(&self, hp: u32) -> (f64, f64) {
        if hp == 0 {
            return (0.0, 0.0);
        }
        let pct = |d: u16| d as f64 * 100.0 / hp as f64;
        (pct(self.min()), pct(self.max()))
    }
}

/// Compute the 16 damage rolls of `move_data` from `attacker` into `defender`.
///
/// `field` should come from [`crate::resolve_field_entry`] when entry
/// abilities matter. Entry boosts are only applied to the copies in
/// `field.roster`, so pass those rather than the originals. Nothing is
/// mutated.
pub fn calculate_damage(
    field: &FieldState,
    attacker: &Pokemon,
    defender: &Pokemon,
    move_data: &Move,
) -> Result<DamageRolls, CalcError> {
    if move_data.category == MoveCategory::Status {
        return Ok(DamageRolls::StatusMove);
    }

    let ctx = DamageContext::new(field, attacker, defender, move_data)?;

    let power = compute_base_power(&ctx)?;
    let attack = compute_effective_attack(&ctx);
    let defense = compute_effective_defense(&ctx);

    let effectiveness = calculate_effectiveness(field, move_data, ctx.move_type, defender);
    if is_immune(&ctx, effectiveness) {
        log::debug!(
            "{} blocked by {:?}",
            move_data.name,
            defender.ability
        );
        return Ok(DamageRolls::ZERO);
    }

    let weather = match field.weather.effect_on(ctx.move_type) {
        WeatherEffect::Neutral => Modifier::ONE,
        WeatherEffect::Scaled(modifier) => modifier,
        WeatherEffect::Fails => {
            log::debug!("{} fails in {:?}", move_data.name, field.weather);
            return Ok(DamageRolls::ZERO);
        }
    };

    let attacker_hooks = ctx.attacker_hooks();
    let stab = match (ctx.has_stab(), attacker_hooks.is_some_and(|h| h.boosts_stab)) {
        (false, _) => Stab::None,
        (true, false) => Stab::Standard,
        (true, true) => Stab::Adaptability,
    };
    let burned = attacker.is_burned()
        && ctx.category == MoveCategory::Physical
        && !attacker_hooks.is_some_and(|h| h.ignores_burn)
        && ctx.move_id() != "facade";

    let mods = FinalModifiers {
        is_spread: move_data.is_spread_in(field.format),
        weather,
        is_crit: ctx.is_crit,
        stab,
        effectiveness,
        burned,
        other: Modifier::ONE,
        hits: move_data.hits(),
    };

    let base_damage = get_base_damage(attacker.level as u32, power, attack, defense);
    log::debug!(
        "{}: power {} atk {} def {} -> base damage {} ({:?})",
        move_data.name,
        power,
        attack,
        defense,
        base_damage,
        mods
    );

    let mut rolls = compute_final_damage(base_damage, &mods, false);

    let strikes_twice = attacker_hooks.is_some_and(|h| h.strikes_twice)
        && !move_data.flags.contains(MoveFlags::NO_PARENTAL_BOND);
    if strikes_twice {
        let second = compute_final_damage(base_damage, &mods, true);
        for (first, extra) in rolls.iter_mut().zip(second) {
            *first = of16(*first as u32 + extra as u32);
        }
    }

    log::debug!("{} rolls {:?}", move_data.name, rolls);
    Ok(DamageRolls::Rolls(rolls))
}
