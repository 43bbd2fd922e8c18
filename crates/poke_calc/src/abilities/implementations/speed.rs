//! Speed-modifying abilities.
//!
//! Called via `OnModifyStat` during effective stat calculation.

use crate::abilities::weather::{Terrain, Weather};
use crate::damage::Modifier;
use crate::entities::Pokemon;
use crate::natures::BattleStat;
use crate::state::FieldState;

fn speed_when(stat: BattleStat, active: bool, modifier: Modifier) -> Modifier {
    if stat == BattleStat::Spe && active {
        modifier
    } else {
        Modifier::ONE
    }
}

/// Chlorophyll: 2x Speed in Sun
pub fn chlorophyll(_pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> Modifier {
    speed_when(stat, field.weather.is_sun(), Modifier::DOUBLE)
}

/// Swift Swim: 2x Speed in Rain
pub fn swift_swim(_pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> Modifier {
    speed_when(stat, field.weather.is_rain(), Modifier::DOUBLE)
}

/// Sand Rush: 2x Speed in Sandstorm
pub fn sand_rush(_pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> Modifier {
    speed_when(stat, field.weather == Weather::Sand, Modifier::DOUBLE)
}

/// Slush Rush: 2x Speed in Hail/Snow
pub fn slush_rush(_pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> Modifier {
    speed_when(
        stat,
        matches!(field.weather, Weather::Hail | Weather::Snow),
        Modifier::DOUBLE,
    )
}

/// Surge Surfer: 2x Speed in Electric Terrain
pub fn surge_surfer(_pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> Modifier {
    speed_when(stat, field.terrain == Terrain::Electric, Modifier::DOUBLE)
}

/// Unburden: 2x Speed without a held item
pub fn unburden(pokemon: &Pokemon, stat: BattleStat, _field: &FieldState) -> Modifier {
    speed_when(stat, pokemon.item.is_none(), Modifier::DOUBLE)
}

/// Quick Feet: 1.5x Speed while statused
pub fn quick_feet(pokemon: &Pokemon, stat: BattleStat, _field: &FieldState) -> Modifier {
    speed_when(stat, pokemon.status.is_some(), Modifier::ONE_POINT_FIVE)
}
