//! Weather and Terrain definitions.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::damage::Modifier;
use crate::error::CalcError;
use crate::ids::{deserialize_id, to_id};
use crate::types::Type;

/// Field weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Weather {
    #[default]
    None = 0,
    Sun = 1,
    Rain = 2,
    Sand = 3,
    Hail = 4,
    Snow = 5,
    HarshSun = 6,    // Desolate Land
    HeavyRain = 7,   // Primordial Sea
    StrongWinds = 8, // Delta Stream
}

/// How the active weather treats a move of some type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherEffect {
    Neutral,
    Scaled(Modifier),
    /// The move evaporates or fizzles and deals nothing.
    Fails,
}

impl Weather {
    /// Primal weathers cannot be replaced by ordinary weather setters.
    pub const fn is_difficult_to_override(self) -> bool {
        matches!(self, Weather::HarshSun | Weather::HeavyRain | Weather::StrongWinds)
    }

    pub const fn is_sun(self) -> bool {
        matches!(self, Weather::Sun | Weather::HarshSun)
    }

    pub const fn is_rain(self) -> bool {
        matches!(self, Weather::Rain | Weather::HeavyRain)
    }

    /// Weather damage modifier for a move type.
    pub fn effect_on(self, move_type: Type) -> WeatherEffect {
        match (self, move_type) {
            (Weather::Sun | Weather::HarshSun, Type::Fire) => WeatherEffect::Scaled(Modifier::ONE_POINT_FIVE),
            (Weather::Sun, Type::Water) => WeatherEffect::Scaled(Modifier::HALF),
            (Weather::HarshSun, Type::Water) => WeatherEffect::Fails,
            (Weather::Rain | Weather::HeavyRain, Type::Water) => WeatherEffect::Scaled(Modifier::ONE_POINT_FIVE),
            (Weather::Rain, Type::Fire) => WeatherEffect::Scaled(Modifier::HALF),
            (Weather::HeavyRain, Type::Fire) => WeatherEffect::Fails,
            _ => WeatherEffect::Neutral,
        }
    }
}

static WEATHER_LOOKUP: phf::Map<&'static str, Weather> = phf::phf_map! {
    "none" => Weather::None,
    "sun" => Weather::Sun,
    "sunnyday" => Weather::Sun,
    "rain" => Weather::Rain,
    "raindance" => Weather::Rain,
    "sand" => Weather::Sand,
    "sandstorm" => Weather::Sand,
    "hail" => Weather::Hail,
    "snow" => Weather::Snow,
    "harshsun" => Weather::HarshSun,
    "desolateland" => Weather::HarshSun,
    "extremelyharshsunlight" => Weather::HarshSun,
    "heavyrain" => Weather::HeavyRain,
    "primordialsea" => Weather::HeavyRain,
    "strongwinds" => Weather::StrongWinds,
    "deltastream" => Weather::StrongWinds,
};

impl FromStr for Weather {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEATHER_LOOKUP
            .get(to_id(s).as_str())
            .copied()
            .ok_or_else(|| CalcError::UnknownWeather(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Weather {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}

/// Terrain types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Terrain {
    #[default]
    None = 0,
    Electric = 1,
    Grassy = 2,
    Misty = 3,
    Psychic = 4,
}

impl Terrain {
    /// Type boosted for grounded attackers, if any.
    pub const fn boosted_type(self) -> Option<Type> {
        match self {
            Terrain::Electric => Some(Type::Electric),
            Terrain::Grassy => Some(Type::Grass),
            Terrain::Psychic => Some(Type::Psychic),
            Terrain::Misty | Terrain::None => None,
        }
    }
}

impl FromStr for Terrain {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = to_id(s);
        match id.strip_suffix("terrain").unwrap_or(id.as_str()) {
            "" | "none" => Ok(Terrain::None),
            "electric" => Ok(Terrain::Electric),
            "grassy" => Ok(Terrain::Grassy),
            "misty" => Ok(Terrain::Misty),
            "psychic" => Ok(Terrain::Psychic),
            _ => Err(CalcError::UnknownTerrain(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Terrain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}
