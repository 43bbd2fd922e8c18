//! Species records as handed over by the data provider.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::abilities::AbilityId;
use crate::ids::to_id;
use crate::stats::StatTable;
use crate::types::Type;

/// Immutable species data.
///
/// Deserializes from the pokedex shape:
/// `{"name", "types", "baseStats", "abilities": {"0": .., "H": ..}, "weightkg"}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: StatTable,
    /// Legal abilities by slot, as display names.
    #[serde(default)]
    pub abilities: BTreeMap<String, String>,
    #[serde(rename = "weightkg")]
    pub weight_kg: f64,
}

impl Species {
    pub fn new(name: &str, types: &[Type], base_stats: StatTable, weight_kg: f64) -> Self {
        Self {
            name: name.to_string(),
            types: types.to_vec(),
            base_stats,
            abilities: BTreeMap::new(),
            weight_kg,
        }
    }

    pub fn id(&self) -> String {
        to_id(&self.name)
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Whether `ability` is one of the catalogued slots.
    pub fn can_have_ability(&self, ability: AbilityId) -> bool {
        self.abilities
            .values()
            .any(|name| name.parse::<AbilityId>().ok() == Some(ability))
    }
}
