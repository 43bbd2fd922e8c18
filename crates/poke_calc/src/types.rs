//! Types and the type chart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::CalcError;
use crate::ids::{deserialize_id, to_id};

/// Elemental type of a species or move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Type {
    #[default]
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
    /// Typeless ("???"), neutral against everything.
    Unknown = 18,
}

impl Type {
    /// Total number of types
    pub const COUNT: usize = 19;

    /// All types in discriminant order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
        Type::Unknown,
    ];
}

static TYPE_LOOKUP: phf::Map<&'static str, Type> = phf::phf_map! {
    "normal" => Type::Normal,
    "fighting" => Type::Fighting,
    "flying" => Type::Flying,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "rock" => Type::Rock,
    "bug" => Type::Bug,
    "ghost" => Type::Ghost,
    "steel" => Type::Steel,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "grass" => Type::Grass,
    "electric" => Type::Electric,
    "psychic" => Type::Psychic,
    "ice" => Type::Ice,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "fairy" => Type::Fairy,
    "unknown" => Type::Unknown,
    "typeless" => Type::Unknown,
};

impl FromStr for Type {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = to_id(s);
        // "???" normalizes to an empty key
        if id.is_empty() && !s.is_empty() {
            return Ok(Type::Unknown);
        }
        TYPE_LOOKUP
            .get(id.as_str())
            .copied()
            .ok_or_else(|| CalcError::UnknownType(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Single type-on-type matchup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeEffectiveness {
    /// 1.0x damage
    Normal = 0,
    /// 2.0x damage
    SuperEffective = 1,
    /// 0.5x damage
    Resistant = 2,
    /// 0.0x damage (immune)
    Immune = 3,
}

impl TypeEffectiveness {
    /// Fixed-point multiplier on the `Effectiveness` scale (8 = 1.0x).
    #[inline]
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::Normal => 8,
            Self::SuperEffective => 16,
            Self::Resistant => 4,
            Self::Immune => 0,
        }
    }
}

/// Attacking type against one defending type.
const fn matchup(attacker: Type, defender: Type) -> TypeEffectiveness {
    use Type::*;
    use TypeEffectiveness::{Immune, Resistant, SuperEffective};

    match attacker {
        Normal => match defender {
            Rock | Steel => Resistant,
            Ghost => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Fighting => match defender {
            Normal | Rock | Steel | Ice | Dark => SuperEffective,
            Flying | Poison | Bug | Psychic | Fairy => Resistant,
            Ghost => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Flying => match defender {
            Fighting | Bug | Grass => SuperEffective,
            Rock | Steel | Electric => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Poison => match defender {
            Grass | Fairy => SuperEffective,
            Poison | Ground | Rock | Ghost => Resistant,
            Steel => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Ground => match defender {
            Poison | Rock | Steel | Fire | Electric => SuperEffective,
            Bug | Grass => Resistant,
            Flying => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Rock => match defender {
            Flying | Bug | Fire | Ice => SuperEffective,
            Fighting | Ground | Steel => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Bug => match defender {
            Grass | Psychic | Dark => SuperEffective,
            Fighting | Flying | Poison | Ghost | Steel | Fire | Fairy => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Ghost => match defender {
            Ghost | Psychic => SuperEffective,
            Dark => Resistant,
            Normal => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Steel => match defender {
            Rock | Ice | Fairy => SuperEffective,
            Steel | Fire | Water | Electric => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Fire => match defender {
            Bug | Steel | Grass | Ice => SuperEffective,
            Rock | Fire | Water | Dragon => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Water => match defender {
            Ground | Rock | Fire => SuperEffective,
            Water | Grass | Dragon => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Grass => match defender {
            Ground | Rock | Water => SuperEffective,
            Flying | Poison | Bug | Steel | Fire | Grass | Dragon => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Electric => match defender {
            Flying | Water => SuperEffective,
            Grass | Electric | Dragon => Resistant,
            Ground => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Psychic => match defender {
            Fighting | Poison => SuperEffective,
            Steel | Psychic => Resistant,
            Dark => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Ice => match defender {
            Flying | Ground | Grass | Dragon => SuperEffective,
            Steel | Fire | Water | Ice => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Dragon => match defender {
            Dragon => SuperEffective,
            Steel => Resistant,
            Fairy => Immune,
            _ => TypeEffectiveness::Normal,
        },
        Dark => match defender {
            Ghost | Psychic => SuperEffective,
            Fighting | Dark | Fairy => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Fairy => match defender {
            Fighting | Dragon | Dark => SuperEffective,
            Poison | Steel | Fire => Resistant,
            _ => TypeEffectiveness::Normal,
        },
        Unknown => TypeEffectiveness::Normal,
    }
}

/// Type chart: TYPE_CHART[defender][attacker] = effectiveness
pub static TYPE_CHART: [[TypeEffectiveness; Type::COUNT]; Type::COUNT] = {
    let mut chart = [[TypeEffectiveness::Normal; Type::COUNT]; Type::COUNT];
    let mut defender = 0;
    while defender < Type::COUNT {
        let mut attacker = 0;
        while attacker < Type::COUNT {
            chart[defender][attacker] = matchup(Type::ALL[attacker], Type::ALL[defender]);
            attacker += 1;
        }
        defender += 1;
    }
    chart
};

/// Look up one matchup.
#[inline]
pub fn type_matchup(attacker: Type, defender: Type) -> TypeEffectiveness {
    TYPE_CHART[defender as usize][attacker as usize]
}

/// Combined effectiveness as a fixed-point multiplier (8 = 1.0x).
///
/// The scale covers 0.125x to 8x so a third factor (Flying Press) still fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Effectiveness(u8);

impl Effectiveness {
    pub const IMMUNE: Self = Self(0);
    pub const QUARTER: Self = Self(2);
    pub const HALF: Self = Self(4);
    pub const NEUTRAL: Self = Self(8);
    pub const DOUBLE: Self = Self(16);
    pub const QUADRUPLE: Self = Self(32);

    /// Raw eighths.
    pub const fn eighths(self) -> u8 {
        self.0
    }

    /// Fold in one more matchup.
    pub fn stack(self, single: TypeEffectiveness) -> Self {
        Self((self.0 as u16 * single.multiplier() as u16 / 8) as u8)
    }

    pub fn is_immune(self) -> bool {
        self.0 == 0
    }

    pub fn is_super_effective(self) -> bool {
        self > Self::NEUTRAL
    }

    /// Floor-multiply a damage value.
    #[inline]
    pub fn apply(self, damage: u32) -> u32 {
        damage * self.0 as u32 / 8
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 8.0
    }
}

impl Default for Effectiveness {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
