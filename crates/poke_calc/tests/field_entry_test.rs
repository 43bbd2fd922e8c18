//! Field entry ordering: who sets the weather last.

mod common;

use common::{init_logging, mon};
use poke_calc::stats::effective_stat;
use poke_calc::{resolve_field_entry, AbilityId, BattleStat, Format, Pokemon, PokemonConfig, Terrain, Weather};

fn with_ability(name: &str, ability: AbilityId) -> Pokemon {
    mon(
        name,
        PokemonConfig {
            ability,
            ..PokemonConfig::default()
        },
    )
}

fn final_weather(first: (&str, AbilityId), second: (&str, AbilityId)) -> Weather {
    init_logging();
    resolve_field_entry(
        Format::VGC,
        vec![with_ability(first.0, first.1), with_ability(second.0, second.1)],
    )
    .weather
}

#[test]
fn test_faster_drizzle_then_slower_drought() {
    assert_eq!(
        final_weather(("Electrode", AbilityId::Drizzle), ("Cosmoem", AbilityId::Drought)),
        Weather::Sun
    );
}

#[test]
fn test_faster_drought_then_slower_drizzle() {
    assert_eq!(
        final_weather(("Electrode", AbilityId::Drought), ("Cosmoem", AbilityId::Drizzle)),
        Weather::Rain
    );
}

#[test]
fn test_listing_order_does_not_matter() {
    assert_eq!(
        final_weather(("Cosmoem", AbilityId::Drought), ("Electrode", AbilityId::Drizzle)),
        Weather::Sun
    );
}

#[test]
fn test_soft_weather_after_hard_weather() {
    assert_eq!(
        final_weather(("Electrode", AbilityId::DesolateLand), ("Cosmoem", AbilityId::Drizzle)),
        Weather::HarshSun
    );
}

#[test]
fn test_hard_weather_after_hard_weather() {
    assert_eq!(
        final_weather(("Electrode", AbilityId::DesolateLand), ("Cosmoem", AbilityId::PrimordialSea)),
        Weather::HeavyRain
    );
    assert_eq!(
        final_weather(("Electrode", AbilityId::PrimordialSea), ("Cosmoem", AbilityId::DeltaStream)),
        Weather::StrongWinds
    );
}

#[test]
fn test_terrain_and_weather_from_different_setters() {
    init_logging();
    let field = resolve_field_entry(
        Format::VGC,
        vec![
            with_ability("Raichu-Alola", AbilityId::SurgeSurfer),
            with_ability("Electrode", AbilityId::ElectricSurge),
            with_ability("Ninetales", AbilityId::Drought),
        ],
    );
    assert_eq!(field.terrain, Terrain::Electric);
    assert_eq!(field.weather, Weather::Sun);
    assert_eq!(field.roster.len(), 3);
    assert_eq!(effective_stat(&field.roster[0], BattleStat::Spe, &field), 260);
}

#[test]
fn test_entry_boosts_land_on_the_roster() {
    init_logging();
    let field = resolve_field_entry(
        Format::VGC,
        vec![
            with_ability("Swampert", AbilityId::IntrepidSword),
            with_ability("Cosmoem", AbilityId::DauntlessShield),
        ],
    );
    assert_eq!(field.roster[0].boosts.get(BattleStat::Atk), 1);
    assert_eq!(field.roster[0].boosts.get(BattleStat::Def), 0);
    assert_eq!(field.roster[1].boosts.get(BattleStat::Def), 1);
    assert_eq!(field.weather, Weather::None);
}
