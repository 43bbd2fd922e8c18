//! Ability identifiers, hooks and registry.
//!
//! Coverage is partial. Abilities without a registry entry are known
//! names that resolve to neutral multipliers (see [`AbilityId::is_modeled`]).

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::CalcError;
use crate::ids::{deserialize_id, to_id};

pub mod hooks;
pub mod implementations;
pub mod registry;
pub mod weather;

pub use hooks::{AbilityHooks, EntryEffect};
pub use registry::ABILITY_REGISTRY;
pub use weather::{Terrain, Weather, WeatherEffect};

/// Ability identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum AbilityId {
    #[default]
    NoAbility = 0,
    Adaptability,
    Aerilate,
    Analytic,
    AuraBreak,
    Battery,
    BattleArmor,
    Blaze,
    Bulletproof,
    Chlorophyll,
    Competitive,
    DarkAura,
    DauntlessShield,
    Defeatist,
    Defiant,
    DeltaStream,
    DesolateLand,
    Disguise,
    DragonsMaw,
    Drizzle,
    Drought,
    DrySkin,
    EarthEater,
    ElectricSurge,
    FairyAura,
    FlareBoost,
    FlashFire,
    FlowerGift,
    Fluffy,
    FurCoat,
    Galvanize,
    GorillaTactics,
    GrassPelt,
    GrassySurge,
    Guts,
    HadronEngine,
    Heatproof,
    HugePower,
    Hustle,
    IceScales,
    Intimidate,
    IntrepidSword,
    IronFist,
    Levitate,
    LightningRod,
    LiquidVoice,
    LongReach,
    MarvelScale,
    MegaLauncher,
    Merciless,
    MistySurge,
    MoldBreaker,
    MotorDrive,
    Multiscale,
    Normalize,
    OrichalcumPulse,
    Overgrow,
    ParentalBond,
    Pixilate,
    PrimordialSea,
    Protosynthesis,
    PsychicSurge,
    PunkRock,
    PurePower,
    PurifyingSalt,
    QuarkDrive,
    QuickFeet,
    Reckless,
    Refrigerate,
    Rivalry,
    RockyPayload,
    SandForce,
    SandRush,
    SandStream,
    SapSipper,
    ShadowShield,
    Sharpness,
    SheerForce,
    ShellArmor,
    SlowStart,
    SlushRush,
    SnowWarning,
    SolarPower,
    Soundproof,
    SteelySpirit,
    Steelworker,
    StormDrain,
    StrongJaw,
    SurgeSurfer,
    Swarm,
    SwiftSwim,
    Technician,
    Teravolt,
    Torrent,
    ToughClaws,
    ToxicBoost,
    Transistor,
    Turboblaze,
    Unaware,
    Unburden,
    VoltAbsorb,
    WaterAbsorb,
    WaterBubble,
    WellBakedBody,
    WindRider,
    WonderGuard,
}

static ABILITY_LOOKUP: phf::Map<&'static str, AbilityId> = phf::phf_map! {
    "noability" => AbilityId::NoAbility,
    "adaptability" => AbilityId::Adaptability,
    "aerilate" => AbilityId::Aerilate,
    "analytic" => AbilityId::Analytic,
    "aurabreak" => AbilityId::AuraBreak,
    "battery" => AbilityId::Battery,
    "battlearmor" => AbilityId::BattleArmor,
    "blaze" => AbilityId::Blaze,
    "bulletproof" => AbilityId::Bulletproof,
    "chlorophyll" => AbilityId::Chlorophyll,
    "competitive" => AbilityId::Competitive,
    "darkaura" => AbilityId::DarkAura,
    "dauntlessshield" => AbilityId::DauntlessShield,
    "defeatist" => AbilityId::Defeatist,
    "defiant" => AbilityId::Defiant,
    "deltastream" => AbilityId::DeltaStream,
    "desolateland" => AbilityId::DesolateLand,
    "disguise" => AbilityId::Disguise,
    "dragonsmaw" => AbilityId::DragonsMaw,
    "drizzle" => AbilityId::Drizzle,
    "drought" => AbilityId::Drought,
    "dryskin" => AbilityId::DrySkin,
    "eartheater" => AbilityId::EarthEater,
    "electricsurge" => AbilityId::ElectricSurge,
    "fairyaura" => AbilityId::FairyAura,
    "flareboost" => AbilityId::FlareBoost,
    "flashfire" => AbilityId::FlashFire,
    "flowergift" => AbilityId::FlowerGift,
    "fluffy" => AbilityId::Fluffy,
    "furcoat" => AbilityId::FurCoat,
    "galvanize" => AbilityId::Galvanize,
    "gorillatactics" => AbilityId::GorillaTactics,
    "grasspelt" => AbilityId::GrassPelt,
    "grassysurge" => AbilityId::GrassySurge,
    "guts" => AbilityId::Guts,
    "hadronengine" => AbilityId::HadronEngine,
    "heatproof" => AbilityId::Heatproof,
    "hugepower" => AbilityId::HugePower,
    "hustle" => AbilityId::Hustle,
    "icescales" => AbilityId::IceScales,
    "intimidate" => AbilityId::Intimidate,
    "intrepidsword" => AbilityId::IntrepidSword,
    "ironfist" => AbilityId::IronFist,
    "levitate" => AbilityId::Levitate,
    "lightningrod" => AbilityId::LightningRod,
    "liquidvoice" => AbilityId::LiquidVoice,
    "longreach" => AbilityId::LongReach,
    "marvelscale" => AbilityId::MarvelScale,
    "megalauncher" => AbilityId::MegaLauncher,
    "merciless" => AbilityId::Merciless,
    "mistysurge" => AbilityId::MistySurge,
    "moldbreaker" => AbilityId::MoldBreaker,
    "motordrive" => AbilityId::MotorDrive,
    "multiscale" => AbilityId::Multiscale,
    "normalize" => AbilityId::Normalize,
    "orichalcumpulse" => AbilityId::OrichalcumPulse,
    "overgrow" => AbilityId::Overgrow,
    "parentalbond" => AbilityId::ParentalBond,
    "pixilate" => AbilityId::Pixilate,
    "primordialsea" => AbilityId::PrimordialSea,
    "protosynthesis" => AbilityId::Protosynthesis,
    "psychicsurge" => AbilityId::PsychicSurge,
    "punkrock" => AbilityId::PunkRock,
    "purepower" => AbilityId::PurePower,
    "purifyingsalt" => AbilityId::PurifyingSalt,
    "quarkdrive" => AbilityId::QuarkDrive,
    "quickfeet" => AbilityId::QuickFeet,
    "reckless" => AbilityId::Reckless,
    "refrigerate" => AbilityId::Refrigerate,
    "rivalry" => AbilityId::Rivalry,
    "rockypayload" => AbilityId::RockyPayload,
    "sandforce" => AbilityId::SandForce,
    "sandrush" => AbilityId::SandRush,
    "sandstream" => AbilityId::SandStream,
    "sapsipper" => AbilityId::SapSipper,
    "shadowshield" => AbilityId::ShadowShield,
    "sharpness" => AbilityId::Sharpness,
    "sheerforce" => AbilityId::SheerForce,
    "shellarmor" => AbilityId::ShellArmor,
    "slowstart" => AbilityId::SlowStart,
    "slushrush" => AbilityId::SlushRush,
    "snowwarning" => AbilityId::SnowWarning,
    "solarpower" => AbilityId::SolarPower,
    "soundproof" => AbilityId::Soundproof,
    "steelyspirit" => AbilityId::SteelySpirit,
    "steelworker" => AbilityId::Steelworker,
    "stormdrain" => AbilityId::StormDrain,
    "strongjaw" => AbilityId::StrongJaw,
    "surgesurfer" => AbilityId::SurgeSurfer,
    "swarm" => AbilityId::Swarm,
    "swiftswim" => AbilityId::SwiftSwim,
    "technician" => AbilityId::Technician,
    "teravolt" => AbilityId::Teravolt,
    "torrent" => AbilityId::Torrent,
    "toughclaws" => AbilityId::ToughClaws,
    "toxicboost" => AbilityId::ToxicBoost,
    "transistor" => AbilityId::Transistor,
    "turboblaze" => AbilityId::Turboblaze,
    "unaware" => AbilityId::Unaware,
    "unburden" => AbilityId::Unburden,
    "voltabsorb" => AbilityId::VoltAbsorb,
    "waterabsorb" => AbilityId::WaterAbsorb,
    "waterbubble" => AbilityId::WaterBubble,
    "wellbakedbody" => AbilityId::WellBakedBody,
    "windrider" => AbilityId::WindRider,
    "wonderguard" => AbilityId::WonderGuard,
    "none" => AbilityId::NoAbility,
};

impl AbilityId {
    /// Total number of abilities
    pub const COUNT: usize = AbilityId::WonderGuard as usize + 1;

    /// Registered hooks, if this ability has any effect here.
    #[inline]
    pub fn hooks(self) -> Option<&'static AbilityHooks> {
        ABILITY_REGISTRY[self as usize].as_ref()
    }

    /// Whether any calculation reacts to this ability.
    pub fn is_modeled(self) -> bool {
        self == AbilityId::NoAbility || self.hooks().is_some()
    }
}

impl FromStr for AbilityId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ABILITY_LOOKUP
            .get(to_id(s).as_str())
            .copied()
            .ok_or_else(|| CalcError::UnknownAbility(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for AbilityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}
