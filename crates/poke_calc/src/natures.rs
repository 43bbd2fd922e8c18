//! Stat identifiers and natures.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::CalcError;
use crate::ids::{deserialize_id, to_id};

/// Any of the six stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Stat {
    Hp = 0,
    Atk = 1,
    Def = 2,
    SpA = 3,
    SpD = 4,
    Spe = 5,
}

/// Stat index for boostable, nature-affected stats (HP excluded)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BattleStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
}

impl BattleStat {
    pub const ALL: [BattleStat; 5] = [
        BattleStat::Atk,
        BattleStat::Def,
        BattleStat::SpA,
        BattleStat::SpD,
        BattleStat::Spe,
    ];
}

impl Stat {
    /// The boostable counterpart; `None` for HP.
    pub const fn battle_stat(self) -> Option<BattleStat> {
        match self {
            Stat::Hp => None,
            Stat::Atk => Some(BattleStat::Atk),
            Stat::Def => Some(BattleStat::Def),
            Stat::SpA => Some(BattleStat::SpA),
            Stat::SpD => Some(BattleStat::SpD),
            Stat::Spe => Some(BattleStat::Spe),
        }
    }
}

impl From<BattleStat> for Stat {
    fn from(stat: BattleStat) -> Self {
        match stat {
            BattleStat::Atk => Stat::Atk,
            BattleStat::Def => Stat::Def,
            BattleStat::SpA => Stat::SpA,
            BattleStat::SpD => Stat::SpD,
            BattleStat::Spe => Stat::Spe,
        }
    }
}

static STAT_LOOKUP: phf::Map<&'static str, Stat> = phf::phf_map! {
    "hp" => Stat::Hp,
    "atk" => Stat::Atk,
    "attack" => Stat::Atk,
    "def" => Stat::Def,
    "defense" => Stat::Def,
    "spa" => Stat::SpA,
    "specialattack" => Stat::SpA,
    "spd" => Stat::SpD,
    "specialdefense" => Stat::SpD,
    "spe" => Stat::Spe,
    "speed" => Stat::Spe,
};

impl FromStr for Stat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STAT_LOOKUP
            .get(to_id(s).as_str())
            .copied()
            .ok_or_else(|| CalcError::UnknownStat(s.to_string()))
    }
}

impl FromStr for BattleStat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Stat>()?
            .battle_stat()
            .ok_or_else(|| CalcError::UnknownStat(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}

impl<'de> Deserialize<'de> for BattleStat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}

/// Pokemon nature (affects stat growth)
/// Ordered in a 5x5 grid: nature_id = plus_stat * 5 + minus_stat
/// Diagonal entries (where plus == minus) are neutral natures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy = 0,
    Lonely = 1,
    Adamant = 2,
    Naughty = 3,
    Brave = 4,
    Bold = 5,
    Docile = 6,
    Impish = 7,
    Lax = 8,
    Relaxed = 9,
    Modest = 10,
    Mild = 11,
    Bashful = 12,
    Rash = 13,
    Quiet = 14,
    Calm = 15,
    Gentle = 16,
    Careful = 17,
    Quirky = 18,
    Sassy = 19,
    Timid = 20,
    Hasty = 21,
    Jolly = 22,
    Naive = 23,
    Serious = 24,
}

static NATURE_LOOKUP: phf::Map<&'static str, NatureId> = phf::phf_map! {
    "hardy" => NatureId::Hardy,
    "lonely" => NatureId::Lonely,
    "adamant" => NatureId::Adamant,
    "naughty" => NatureId::Naughty,
    "brave" => NatureId::Brave,
    "bold" => NatureId::Bold,
    "docile" => NatureId::Docile,
    "impish" => NatureId::Impish,
    "lax" => NatureId::Lax,
    "relaxed" => NatureId::Relaxed,
    "modest" => NatureId::Modest,
    "mild" => NatureId::Mild,
    "bashful" => NatureId::Bashful,
    "rash" => NatureId::Rash,
    "quiet" => NatureId::Quiet,
    "calm" => NatureId::Calm,
    "gentle" => NatureId::Gentle,
    "careful" => NatureId::Careful,
    "quirky" => NatureId::Quirky,
    "sassy" => NatureId::Sassy,
    "timid" => NatureId::Timid,
    "hasty" => NatureId::Hasty,
    "jolly" => NatureId::Jolly,
    "naive" => NatureId::Naive,
    "serious" => NatureId::Serious,
};

impl NatureId {
    /// Stat raised by 10%, if any.
    pub const fn plus(self) -> Option<BattleStat> {
        if self.is_neutral() {
            None
        } else {
            Some(BattleStat::ALL[self as usize / 5])
        }
    }

    /// Stat lowered by 10%, if any.
    pub const fn minus(self) -> Option<BattleStat> {
        if self.is_neutral() {
            None
        } else {
            Some(BattleStat::ALL[self as usize % 5])
        }
    }

    /// Get stat modifier for a given stat
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%)
    /// Multiply by stat/10 to apply
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;
        let stat_idx = stat as u8;

        if plus == minus {
            10
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }
}

impl FromStr for NatureId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NATURE_LOOKUP
            .get(to_id(s).as_str())
            .copied()
            .ok_or_else(|| CalcError::UnknownNature(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for NatureId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}
