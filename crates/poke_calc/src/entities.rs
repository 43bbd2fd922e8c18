//! Combatants: a species plus its build and in-battle condition.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::abilities::AbilityId;
use crate::ids::to_id;
use crate::natures::{BattleStat, NatureId, Stat};
use crate::species::Species;
use crate::state::Status;
use crate::stats::{raw_stat, StatTable};
use crate::types::Type;

pub const DEFAULT_LEVEL: u8 = 50;
pub const DEFAULT_IVS: StatTable = StatTable::splat(31);
pub const DEFAULT_EVS: StatTable = StatTable::splat(0);

// ============================================================================
// Boosts
// ============================================================================

/// Stat stages for Atk, Def, SpA, SpD and Spe, each in [-6, 6].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Boosts([i8; 5]);

impl Boosts {
    pub const fn get(&self, stat: BattleStat) -> i8 {
        self.0[stat as usize]
    }

    pub fn set(&mut self, stat: BattleStat, stage: i8) {
        self.0[stat as usize] = stage.clamp(-6, 6);
    }

    /// Add `stages`, clamped. Returns the change actually applied.
    pub fn apply(&mut self, stat: BattleStat, stages: i8) -> i8 {
        let before = self.get(stat);
        self.set(stat, before.saturating_add(stages));
        self.get(stat) - before
    }
}

impl<'de> Deserialize<'de> for Boosts {
    /// `{"atk": 1, "spe": -1}`; omitted stats stay at 0.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<BattleStat, i8>::deserialize(deserializer)?;
        let mut boosts = Boosts::default();
        for (stat, stage) in raw {
            boosts.set(stat, stage);
        }
        Ok(boosts)
    }
}

// ============================================================================
// Build
// ============================================================================

/// Everything about a combatant except its species. Omitted fields take
/// the defaults: level 50, 31 IVs, 0 EVs, Hardy, no ability, full HP.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PokemonConfig {
    pub level: u8,
    pub evs: StatTable,
    pub ivs: StatTable,
    pub nature: NatureId,
    pub ability: AbilityId,
    pub item: Option<String>,
    /// `None` means full HP.
    pub current_hp: Option<u32>,
    pub boosts: Boosts,
    pub status: Option<Status>,
}

impl Default for PokemonConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            evs: DEFAULT_EVS,
            ivs: DEFAULT_IVS,
            nature: NatureId::default(),
            ability: AbilityId::default(),
            item: None,
            current_hp: None,
            boosts: Boosts::default(),
            status: None,
        }
    }
}

// ============================================================================
// Pokemon
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Pokemon {
    pub species: Arc<Species>,
    pub ability: AbilityId,
    pub item: Option<String>,
    pub level: u8,
    pub evs: StatTable,
    pub ivs: StatTable,
    pub nature: NatureId,
    pub current_hp: u32,
    pub boosts: Boosts,
    pub status: Option<Status>,
}

impl Pokemon {
    pub fn new(species: impl Into<Arc<Species>>, config: PokemonConfig) -> Self {
        let mut pokemon = Self {
            species: species.into(),
            ability: config.ability,
            item: config.item,
            level: config.level,
            evs: config.evs,
            ivs: config.ivs,
            nature: config.nature,
            current_hp: 0,
            boosts: config.boosts,
            status: config.status,
        };
        let max_hp = pokemon.max_hp();
        pokemon.current_hp = config.current_hp.map_or(max_hp, |hp| hp.min(max_hp));
        pokemon
    }

    pub fn max_hp(&self) -> u32 {
        raw_stat(self, Stat::Hp)
    }

    pub fn types(&self) -> &[Type] {
        &self.species.types
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.species.has_type(t)
    }

    pub fn is_burned(&self) -> bool {
        self.status == Some(Status::Burn)
    }

    pub fn is_poisoned(&self) -> bool {
        self.status.is_some_and(Status::is_poison)
    }

    /// On the ground: not Flying, no Levitate (unless ignored) and no Air Balloon.
    pub fn is_grounded(&self, ignore_abilities: bool) -> bool {
        if self.has_type(Type::Flying) {
            return false;
        }
        if !ignore_abilities && self.ability == AbilityId::Levitate {
            return false;
        }
        !self.item.as_deref().is_some_and(|item| to_id(item) == "airballoon")
    }

    pub fn weight_kg(&self) -> f64 {
        self.species.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corviknight() -> Species {
        Species::new(
            "Corviknight",
            &[Type::Flying, Type::Steel],
            StatTable::new(98, 87, 105, 53, 85, 67),
            75.0,
        )
    }

    fn bronzong() -> Species {
        Species::new(
            "Bronzong",
            &[Type::Steel, Type::Psychic],
            StatTable::new(67, 89, 116, 79, 116, 33),
            187.0,
        )
    }

    #[test]
    fn test_boosts_clamp() {
        let mut boosts = Boosts::default();
        assert_eq!(boosts.apply(BattleStat::Atk, 4), 4);
        assert_eq!(boosts.apply(BattleStat::Atk, 4), 2);
        assert_eq!(boosts.get(BattleStat::Atk), 6);
        assert_eq!(boosts.apply(BattleStat::Atk, 1), 0);
        boosts.set(BattleStat::Spe, -9);
        assert_eq!(boosts.get(BattleStat::Spe), -6);
    }

    #[test]
    fn test_boosts_deserialize() {
        let boosts: Boosts = serde_json::from_str(r#"{"atk": 2, "spe": -1}"#).unwrap();
        assert_eq!(boosts.get(BattleStat::Atk), 2);
        assert_eq!(boosts.get(BattleStat::Spe), -1);
        assert_eq!(boosts.get(BattleStat::Def), 0);
        assert!(serde_json::from_str::<Boosts>(r#"{"hp": 1}"#).is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config: PokemonConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PokemonConfig::default());
        assert_eq!(config.level, 50);
        assert_eq!(config.ivs, StatTable::splat(31));

        let config: PokemonConfig = serde_json::from_str(
            r#"{"nature": "Adamant", "ability": "Tough Claws", "evs": {"atk": 252}, "status": "brn"}"#,
        )
        .unwrap();
        assert_eq!(config.nature, NatureId::Adamant);
        assert_eq!(config.ability, AbilityId::ToughClaws);
        assert_eq!(config.evs.atk, 252);
        assert_eq!(config.evs.hp, 0);
        assert_eq!(config.status, Some(Status::Burn));
    }

    #[test]
    fn test_unknown_ability_rejected() {
        let result = serde_json::from_str::<PokemonConfig>(r#"{"ability": "Wonder Skin Deluxe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_current_hp_capped() {
        let full = Pokemon::new(corviknight(), PokemonConfig::default());
        assert_eq!(full.current_hp, full.max_hp());
        let hurt = Pokemon::new(
            corviknight(),
            PokemonConfig {
                current_hp: Some(10_000),
                ..PokemonConfig::default()
            },
        );
        assert_eq!(hurt.current_hp, hurt.max_hp());
    }

    #[test]
    fn test_grounded() {
        let bird = Pokemon::new(corviknight(), PokemonConfig::default());
        assert!(!bird.is_grounded(false));

        let levitating = Pokemon::new(
            bronzong(),
            PokemonConfig {
                ability: AbilityId::Levitate,
                ..PokemonConfig::default()
            },
        );
        assert!(!levitating.is_grounded(false));
        assert!(levitating.is_grounded(true));

        let ballooned = Pokemon::new(
            bronzong(),
            PokemonConfig {
                item: Some("Air Balloon".to_string()),
                ..PokemonConfig::default()
            },
        );
        assert!(!ballooned.is_grounded(true));

        let plain = Pokemon::new(bronzong(), PokemonConfig::default());
        assert!(plain.is_grounded(false));
    }

    #[test]
    fn test_status_helpers() {
        let toxic = Pokemon::new(
            bronzong(),
            PokemonConfig {
                status: Some(Status::Toxic),
                ..PokemonConfig::default()
            },
        );
        assert!(toxic.is_poisoned());
        assert!(!toxic.is_burned());
    }
}
