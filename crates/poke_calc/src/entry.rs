//! Speed-ordered field entry.
//!
//! Everyone listed enters the field one at a time, fastest first. Speed is
//! re-read before every pick because an earlier entry can change weather or
//! terrain. Equal Speed goes to whoever was listed first, so the later of two
//! tied weather setters wins.

use std::cmp::Reverse;

use crate::abilities::implementations::weather_setters::apply_entry_effect;
use crate::entities::Pokemon;
use crate::natures::BattleStat;
use crate::state::{FieldState, Format};
use crate::stats::effective_stat;

/// Run every on-entry ability once and return the resulting field.
///
/// The input is left in its original order as the field roster, carrying
/// any boosts picked up on entry. Read the combatants back from
/// `roster` when calculating damage; the values passed in are consumed.
pub fn resolve_field_entry(format: Format, mut combatants: Vec<Pokemon>) -> FieldState {
    let mut field = FieldState::new(format);
    let mut pending: Vec<usize> = (0..combatants.len()).collect();

    while let Some(pos) = fastest(&field, &combatants, &pending) {
        let idx = pending.remove(pos);
        enter(&mut field, &mut combatants[idx]);
    }

    field.roster = combatants;
    field
}

/// Position in `pending` of the next Pokemon to enter.
fn fastest(field: &FieldState, combatants: &[Pokemon], pending: &[usize]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|&(pos, &idx)| (Reverse(effective_stat(&combatants[idx], BattleStat::Spe, field)), pos))
        .map(|(pos, _)| pos)
}

fn enter(field: &mut FieldState, pokemon: &mut Pokemon) {
    let Some(hooks) = pokemon.ability.hooks() else {
        log::debug!("{} enters ({:?}, no entry effect)", pokemon.species.name, pokemon.ability);
        return;
    };

    let mut effects = hooks.on_switch_in.to_vec();
    effects.sort_by_key(|effect| effect.priority());

    log::debug!("{} enters with {:?}", pokemon.species.name, pokemon.ability);
    for effect in effects {
        apply_entry_effect(field, pokemon, effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{AbilityId, Terrain, Weather};
    use crate::entities::PokemonConfig;
    use crate::species::Species;
    use crate::state::Status;
    use crate::stats::StatTable;
    use crate::types::Type;

    fn electrode(ability: AbilityId) -> Pokemon {
        Pokemon::new(
            Species::new("Electrode", &[Type::Electric], StatTable::new(60, 50, 70, 80, 80, 150), 66.6),
            PokemonConfig {
                ability,
                ..PokemonConfig::default()
            },
        )
    }

    fn cosmoem(ability: AbilityId) -> Pokemon {
        Pokemon::new(
            Species::new("Cosmoem", &[Type::Psychic], StatTable::new(43, 29, 131, 29, 131, 37), 999.9),
            PokemonConfig {
                ability,
                ..PokemonConfig::default()
            },
        )
    }

    #[test]
    fn test_slower_setter_wins() {
        let field = resolve_field_entry(
            Format::VGC,
            vec![electrode(AbilityId::Drizzle), cosmoem(AbilityId::Drought)],
        );
        assert_eq!(field.weather, Weather::Sun);

        let field = resolve_field_entry(
            Format::VGC,
            vec![cosmoem(AbilityId::Drizzle), electrode(AbilityId::Drought)],
        );
        assert_eq!(field.weather, Weather::Rain);
    }

    #[test]
    fn test_entry_reads_modified_speed() {
        // paralysis and -1: 170 -> 85 -> 56, under Cosmoem's 57
        let mut slowed = electrode(AbilityId::Drizzle);
        slowed.status = Some(Status::Paralysis);
        slowed.boosts.set(BattleStat::Spe, -1);
        let field = resolve_field_entry(Format::VGC, vec![slowed, cosmoem(AbilityId::Drought)]);
        assert_eq!(field.weather, Weather::Rain);
    }

    #[test]
    fn test_speed_tie_keeps_input_order() {
        let field = resolve_field_entry(
            Format::VGC,
            vec![electrode(AbilityId::Drought), electrode(AbilityId::SandStream)],
        );
        assert_eq!(field.weather, Weather::Sand);
    }

    #[test]
    fn test_roster_keeps_input_order_and_boosts() {
        let field = resolve_field_entry(
            Format::SINGLES,
            vec![cosmoem(AbilityId::IntrepidSword), electrode(AbilityId::ElectricSurge)],
        );
        assert_eq!(field.format, Format::SINGLES);
        assert_eq!(field.terrain, Terrain::Electric);
        assert_eq!(field.roster.len(), 2);
        assert_eq!(field.roster[0].species.name, "Cosmoem");
        assert_eq!(field.roster[0].boosts.get(BattleStat::Atk), 1);
        assert_eq!(field.roster[1].boosts.get(BattleStat::Atk), 0);
    }

    #[test]
    fn test_boost_on_entry_is_clamped() {
        let mut maxed = cosmoem(AbilityId::DauntlessShield);
        maxed.boosts.set(BattleStat::Def, 6);
        let field = resolve_field_entry(Format::VGC, vec![maxed]);
        assert_eq!(field.roster[0].boosts.get(BattleStat::Def), 6);
    }

    #[test]
    fn test_empty_entry() {
        let field = resolve_field_entry(Format::VGC, Vec::new());
        assert_eq!(field.weather, Weather::None);
        assert_eq!(field.terrain, Terrain::None);
        assert!(field.roster.is_empty());
    }
}
