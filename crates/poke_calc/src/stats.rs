//! Stat computation.
//!
//! Raw stats come from base stats, EVs, IVs, nature and level. The
//! effective (in-battle) stat then folds ability and status flat
//! multipliers, then the boost stage, flooring after each.

use serde::Deserialize;

use crate::damage::formula::{apply_boost, apply_modifier_floor};
use crate::damage::Modifier;
use crate::entities::Pokemon;
use crate::natures::{BattleStat, Stat};
use crate::state::{FieldState, Status};

/// One value per stat, in the pokedex field order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct StatTable {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatTable {
    pub const fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self { hp, atk, def, spa, spd, spe }
    }

    /// The same value everywhere.
    pub const fn splat(value: u16) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub const fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpA => self.spa,
            Stat::SpD => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

/// Unboosted stat from the growth formula.
///
/// HP: `floor((2B + IV + floor(EV/4)) * L / 100) + L + 10`.
/// Others: `floor((floor((2B + IV + floor(EV/4)) * L / 100) + 5) * nature)`.
pub fn raw_stat(pokemon: &Pokemon, stat: Stat) -> u32 {
    let base = pokemon.species.base_stats.get(stat) as u32;
    let iv = pokemon.ivs.get(stat) as u32;
    let ev = pokemon.evs.get(stat) as u32;
    let level = pokemon.level as u32;

    let core = (2 * base + iv + ev / 4) * level / 100;
    match stat.battle_stat() {
        None => core + level + 10,
        Some(battle_stat) => (core + 5) * pokemon.nature.stat_modifier(battle_stat) as u32 / 10,
    }
}

/// Combined flat multiplier (4096 scale) from ability and status.
pub fn flat_multiplier(pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> u32 {
    let mut multiplier = Modifier::ONE.val() as u32;

    if let Some(on_modify_stat) = pokemon.ability.hooks().and_then(|hooks| hooks.on_modify_stat) {
        multiplier = multiplier * on_modify_stat(pokemon, stat, field).val() as u32 / 4096;
    }

    // Paralysis: 0.5x Speed
    if stat == BattleStat::Spe && pokemon.status == Some(Status::Paralysis) {
        multiplier = multiplier * Modifier::HALF.val() as u32 / 4096;
    }

    multiplier
}

/// In-battle stat: raw, then flat multipliers, then the boost stage.
pub fn effective_stat(pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> u32 {
    let raw = raw_stat(pokemon, stat.into());
    let flat = apply_modifier_floor(raw, flat_multiplier(pokemon, stat, field), 4096);
    apply_boost(flat, pokemon.boosts.get(stat))
}
