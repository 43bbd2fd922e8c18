//! On-entry effects: terrain, weather and self-boosts.

use crate::abilities::hooks::EntryEffect;
use crate::abilities::weather::{Terrain, Weather};
use crate::entities::Pokemon;
use crate::state::FieldState;

/// Weather left on the field after `incoming` tries to install over `current`.
///
/// Primal weathers always install. Anything else is refused while a
/// primal weather is up.
pub fn install_weather(current: Weather, incoming: Weather) -> Weather {
    if incoming.is_difficult_to_override() || !current.is_difficult_to_override() {
        incoming
    } else {
        current
    }
}

pub fn set_weather(field: &mut FieldState, incoming: Weather) {
    let next = install_weather(field.weather, incoming);
    if next == incoming {
        log::debug!("weather {:?} -> {:?}", field.weather, incoming);
    } else {
        log::debug!("weather {:?} refused, {:?} holds", incoming, field.weather);
    }
    field.weather = next;
}

pub fn set_terrain(field: &mut FieldState, terrain: Terrain) {
    log::debug!("terrain {:?} -> {:?}", field.terrain, terrain);
    field.terrain = terrain;
}

/// Apply one entry effect for `pokemon`.
pub fn apply_entry_effect(field: &mut FieldState, pokemon: &mut Pokemon, effect: EntryEffect) {
    match effect {
        EntryEffect::SetTerrain(terrain) => set_terrain(field, terrain),
        EntryEffect::SetWeather(weather) => set_weather(field, weather),
        EntryEffect::BoostSelf(stat, stages) => {
            let applied = pokemon.boosts.apply(stat, stages);
            log::debug!(
                "{} {:?} {:+} (now {:+})",
                pokemon.species.name,
                stat,
                applied,
                pokemon.boosts.get(stat)
            );
        }
    }
}
