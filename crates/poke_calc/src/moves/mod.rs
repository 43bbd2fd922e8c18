//! Move records.

use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

use crate::ids::to_id;
use crate::natures::BattleStat;
use crate::state::Format;
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveTarget {
    #[default]
    Normal,
    #[serde(rename = "self")]
    Self_,
    AdjacentAlly,
    AdjacentAllyOrSelf,
    AdjacentFoe,
    AllAdjacent,
    AllAdjacentFoes,
    Allies,
    AllySide,
    AllyTeam,
    Any,
    FoeSide,
    RandomNormal,
    Scripted,
    All,
}

impl MoveTarget {
    /// Hits more than one target, so it is weakened in doubles.
    pub const fn is_spread(self) -> bool {
        !matches!(
            self,
            MoveTarget::Self_
                | MoveTarget::AdjacentAlly
                | MoveTarget::AdjacentAllyOrSelf
                | MoveTarget::AdjacentFoe
                | MoveTarget::Any
                | MoveTarget::Normal
                | MoveTarget::RandomNormal
                | MoveTarget::AllyTeam
                | MoveTarget::Scripted
        )
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveFlags: u32 {
        const CONTACT = 1 << 0;
        const PROTECT = 1 << 1;
        const MIRROR = 1 << 2;
        const HEAL = 1 << 3;
        const BYPASS_SUB = 1 << 4;
        const BITE = 1 << 5;
        const PUNCH = 1 << 6;
        const SOUND = 1 << 7;
        const POWDER = 1 << 8;
        const BULLET = 1 << 9;
        const PULSE = 1 << 10;
        const WIND = 1 << 11;
        const SLICING = 1 << 12;
        const DANCE = 1 << 13;
        const GRAVITY = 1 << 14;
        const DEFROST = 1 << 15;
        const DISTANCE = 1 << 16;
        const CHARGE = 1 << 17;
        const RECHARGE = 1 << 18;
        const NONSKY = 1 << 19;
        const NO_PARENTAL_BOND = 1 << 20;
    }
}

static FLAG_LOOKUP: phf::Map<&'static str, MoveFlags> = phf::phf_map! {
    "contact" => MoveFlags::CONTACT,
    "protect" => MoveFlags::PROTECT,
    "mirror" => MoveFlags::MIRROR,
    "heal" => MoveFlags::HEAL,
    "bypasssub" => MoveFlags::BYPASS_SUB,
    "bite" => MoveFlags::BITE,
    "punch" => MoveFlags::PUNCH,
    "sound" => MoveFlags::SOUND,
    "powder" => MoveFlags::POWDER,
    "bullet" => MoveFlags::BULLET,
    "pulse" => MoveFlags::PULSE,
    "wind" => MoveFlags::WIND,
    "slicing" => MoveFlags::SLICING,
    "dance" => MoveFlags::DANCE,
    "gravity" => MoveFlags::GRAVITY,
    "defrost" => MoveFlags::DEFROST,
    "distance" => MoveFlags::DISTANCE,
    "charge" => MoveFlags::CHARGE,
    "recharge" => MoveFlags::RECHARGE,
    "nonsky" => MoveFlags::NONSKY,
    "noparentalbond" => MoveFlags::NO_PARENTAL_BOND,
};

impl MoveFlags {
    /// Flag for a provider key (`"contact"`, `"noparentalbond"`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        FLAG_LOOKUP.get(to_id(key).as_str()).copied()
    }
}

/// Flags arrive as `{"contact": 1, "protect": 1}`; keys we don't model are dropped.
fn deserialize_flags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<MoveFlags, D::Error> {
    let raw = BTreeMap::<String, u8>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter(|&(_, &set)| set != 0)
        .filter_map(|(key, _)| MoveFlags::from_key(key))
        .fold(MoveFlags::empty(), |flags, flag| flags | flag))
}

/// How many times a move strikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiHit {
    Fixed(u8),
    /// A random count; `resolved` is the count used for the calculation.
    Range { min: u8, max: u8, resolved: u8 },
}

impl MultiHit {
    /// Number of hits, defaulting a range to its maximum.
    pub const fn hits(self) -> u8 {
        match self {
            MultiHit::Fixed(n) => n,
            MultiHit::Range { resolved, .. } => resolved,
        }
    }
}

impl<'de> Deserialize<'de> for MultiHit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Fixed(u8),
            Range([u8; 2]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Fixed(n) => MultiHit::Fixed(n),
            Repr::Range([min, max]) => MultiHit::Range { min, max, resolved: max },
        })
    }
}

/// Whose stats the attack reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OffensivePokemon {
    #[default]
    Source,
    /// Foul Play
    Target,
}

/// Immutable move data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u16,
    #[serde(default)]
    pub target: MoveTarget,
    #[serde(default, deserialize_with = "deserialize_flags")]
    pub flags: MoveFlags,
    #[serde(default)]
    pub multihit: Option<MultiHit>,
    #[serde(default)]
    pub override_offensive_stat: Option<BattleStat>,
    #[serde(default)]
    pub override_defensive_stat: Option<BattleStat>,
    #[serde(default)]
    pub override_offensive_pokemon: OffensivePokemon,
    #[serde(default)]
    pub will_crit: bool,
    #[serde(default)]
    pub ignore_ability: bool,
    /// Power is computed from the field rather than listed
    #[serde(default)]
    pub base_power_callback: bool,
    #[serde(default)]
    pub is_z: bool,
    /// Recoil as a fraction of damage dealt, `[numerator, denominator]`
    #[serde(default)]
    pub recoil: Option<[u16; 2]>,
    #[serde(default)]
    pub has_crash_damage: bool,
    #[serde(default)]
    pub has_sheer_force: bool,
    /// Underlying move when this one wraps another (Z/Max moves)
    #[serde(default)]
    pub real_move: Option<String>,
}

impl Move {
    /// A move with no flags or special behaviour.
    pub fn new(name: &str, move_type: Type, category: MoveCategory, base_power: u16) -> Self {
        Self {
            name: name.to_string(),
            move_type,
            category,
            base_power,
            target: MoveTarget::Normal,
            flags: MoveFlags::empty(),
            multihit: None,
            override_offensive_stat: None,
            override_defensive_stat: None,
            override_offensive_pokemon: OffensivePokemon::Source,
            will_crit: false,
            ignore_ability: false,
            base_power_callback: false,
            is_z: false,
            recoil: None,
            has_crash_damage: false,
            has_sheer_force: false,
            real_move: None,
        }
    }

    pub fn id(&self) -> String {
        to_id(&self.name)
    }

    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    pub fn hits(&self) -> u8 {
        self.multihit.map_or(1, MultiHit::hits)
    }

    /// Spread penalty applies in this format.
    pub fn is_spread_in(&self, format: Format) -> bool {
        format.doubles && self.target.is_spread()
    }
}
