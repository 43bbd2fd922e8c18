use crate::abilities::hooks::{AbilityHooks, EntryEffect};
use crate::abilities::implementations::{
    damage_modifiers, immunity, speed, stat_modifiers, type_changers,
};
use crate::abilities::weather::{Terrain, Weather};
use crate::abilities::AbilityId;
use crate::natures::BattleStat;
use crate::types::Type;

// Known but not modeled (neutral): Analytic, Battery, Competitive, Defiant,
// Disguise, Flower Gift, Fluffy, Ice Scales, Intimidate, Multiscale,
// Protosynthesis, Quark Drive, Rivalry, Shadow Shield, Unaware.
pub static ABILITY_REGISTRY: [Option<AbilityHooks>; AbilityId::COUNT] = {
    let mut registry: [Option<AbilityHooks>; AbilityId::COUNT] = [None; AbilityId::COUNT];

    // =========================================================================
    // Entry: Terrain
    // =========================================================================
    registry[AbilityId::ElectricSurge as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetTerrain(Terrain::Electric)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::GrassySurge as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetTerrain(Terrain::Grassy)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MistySurge as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetTerrain(Terrain::Misty)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PsychicSurge as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetTerrain(Terrain::Psychic)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::HadronEngine as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetTerrain(Terrain::Electric)],
        on_flat_attack: Some(stat_modifiers::hadron_engine),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Entry: Weather
    // =========================================================================
    registry[AbilityId::Drizzle as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::Rain)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Drought as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::Sun)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SandStream as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::Sand)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SnowWarning as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::Snow)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::OrichalcumPulse as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::Sun)],
        on_flat_attack: Some(stat_modifiers::orichalcum_pulse),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::DesolateLand as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::HarshSun)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PrimordialSea as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::HeavyRain)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::DeltaStream as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::SetWeather(Weather::StrongWinds)],
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Entry: Self Boosts
    // =========================================================================
    registry[AbilityId::DauntlessShield as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::BoostSelf(BattleStat::Def, 1)],
        ..AbilityHooks::NONE
    });
    registry[AbilityId::IntrepidSword as usize] = Some(AbilityHooks {
        on_switch_in: &[EntryEffect::BoostSelf(BattleStat::Atk, 1)],
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Speed
    // =========================================================================
    registry[AbilityId::Chlorophyll as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::chlorophyll),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SwiftSwim as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::swift_swim),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SandRush as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::sand_rush),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SlushRush as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::slush_rush),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SurgeSurfer as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::surge_surfer),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Unburden as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::unburden),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::QuickFeet as usize] = Some(AbilityHooks {
        on_modify_stat: Some(speed::quick_feet),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Type Changers
    // =========================================================================
    registry[AbilityId::Aerilate as usize] = Some(AbilityHooks {
        on_modify_type: Some(type_changers::aerilate),
        on_base_power: Some(damage_modifiers::ate_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Galvanize as usize] = Some(AbilityHooks {
        on_modify_type: Some(type_changers::galvanize),
        on_base_power: Some(damage_modifiers::ate_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Pixilate as usize] = Some(AbilityHooks {
        on_modify_type: Some(type_changers::pixilate),
        on_base_power: Some(damage_modifiers::ate_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Refrigerate as usize] = Some(AbilityHooks {
        on_modify_type: Some(type_changers::refrigerate),
        on_base_power: Some(damage_modifiers::ate_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::LiquidVoice as usize] = Some(AbilityHooks {
        on_modify_type: Some(type_changers::liquid_voice),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Normalize as usize] = Some(AbilityHooks {
        on_modify_type: Some(type_changers::normalize),
        on_base_power: Some(damage_modifiers::normalize),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Base Power
    // =========================================================================
    registry[AbilityId::IronFist as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::iron_fist),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Reckless as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::reckless),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PunkRock as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::punk_rock),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SandForce as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::sand_force),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SheerForce as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::sheer_force),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ToughClaws as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::tough_claws),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::FlareBoost as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::flare_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MegaLauncher as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::mega_launcher),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Sharpness as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::sharpness),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SteelySpirit as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::steely_spirit),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::StrongJaw as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::strong_jaw),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ToxicBoost as usize] = Some(AbilityHooks {
        on_base_power: Some(damage_modifiers::toxic_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Technician as usize] = Some(AbilityHooks {
        on_partial_base_power: Some(damage_modifiers::technician),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Heatproof as usize] = Some(AbilityHooks {
        on_foe_base_power: Some(damage_modifiers::heatproof),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::DarkAura as usize] = Some(AbilityHooks {
        aura_type: Some(Type::Dark),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::FairyAura as usize] = Some(AbilityHooks {
        aura_type: Some(Type::Fairy),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::AuraBreak as usize] = Some(AbilityHooks {
        breaks_auras: true,
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Attack
    // =========================================================================
    registry[AbilityId::Hustle as usize] = Some(AbilityHooks {
        on_flat_attack: Some(stat_modifiers::hustle),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Blaze as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::blaze),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Overgrow as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::overgrow),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Swarm as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::swarm),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Torrent as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::torrent),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Defeatist as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::defeatist),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::GorillaTactics as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::gorilla_tactics),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Guts as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::guts),
        ignores_burn: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::HugePower as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PurePower as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SlowStart as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::slow_start),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SolarPower as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::solar_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::DragonsMaw as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::dragons_maw),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::RockyPayload as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::rocky_payload),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Steelworker as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::steelworker),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Transistor as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::transistor),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::WaterBubble as usize] = Some(AbilityHooks {
        on_attack: Some(stat_modifiers::water_bubble),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PurifyingSalt as usize] = Some(AbilityHooks {
        on_foe_attack: Some(stat_modifiers::purifying_salt),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Defense
    // =========================================================================
    registry[AbilityId::FurCoat as usize] = Some(AbilityHooks {
        on_defense: Some(stat_modifiers::fur_coat),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::GrassPelt as usize] = Some(AbilityHooks {
        on_defense: Some(stat_modifiers::grass_pelt),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MarvelScale as usize] = Some(AbilityHooks {
        on_defense: Some(stat_modifiers::marvel_scale),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Immunities
    // =========================================================================
    registry[AbilityId::EarthEater as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::ground_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Levitate as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::ground_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::FlashFire as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::fire_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::WellBakedBody as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::fire_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::DrySkin as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::water_immunity),
        on_foe_base_power: Some(damage_modifiers::dry_skin),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::StormDrain as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::water_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::WaterAbsorb as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::water_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::LightningRod as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::electric_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MotorDrive as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::electric_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::VoltAbsorb as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::electric_immunity),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SapSipper as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::sap_sipper),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::WindRider as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::wind_rider),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Bulletproof as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::bulletproof),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Soundproof as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::soundproof),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::WonderGuard as usize] = Some(AbilityHooks {
        on_immunity: Some(immunity::wonder_guard),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Damage Flow
    // =========================================================================
    registry[AbilityId::MoldBreaker as usize] = Some(AbilityHooks {
        ignores_foe_ability: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Teravolt as usize] = Some(AbilityHooks {
        ignores_foe_ability: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Turboblaze as usize] = Some(AbilityHooks {
        ignores_foe_ability: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::BattleArmor as usize] = Some(AbilityHooks {
        blocks_crits: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ShellArmor as usize] = Some(AbilityHooks {
        blocks_crits: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::LongReach as usize] = Some(AbilityHooks {
        prevents_contact: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Merciless as usize] = Some(AbilityHooks {
        crits_poisoned: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Adaptability as usize] = Some(AbilityHooks {
        boosts_stab: true,
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ParentalBond as usize] = Some(AbilityHooks {
        strikes_twice: true,
        ..AbilityHooks::NONE
    });

    registry
};
