//! Field state shared by every calculation.

use serde::Deserialize;

use crate::abilities::{AbilityHooks, Terrain, Weather};
use crate::entities::Pokemon;

// ============================================================================
// Status
// ============================================================================

/// Major status conditions (only one can be active at a time)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Status {
    #[serde(rename = "brn")]
    Burn,
    #[serde(rename = "frz")]
    Freeze,
    #[serde(rename = "par")]
    Paralysis,
    #[serde(rename = "psn")]
    Poison,
    /// Badly poisoned
    #[serde(rename = "tox")]
    Toxic,
    #[serde(rename = "slp")]
    Sleep,
}

impl Status {
    pub const fn is_poison(self) -> bool {
        matches!(self, Status::Poison | Status::Toxic)
    }
}

// ============================================================================
// Format
// ============================================================================

/// Battle format. Only the doubles flag changes damage (spread moves).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct Format {
    pub doubles: bool,
}

impl Format {
    pub const VGC: Self = Self { doubles: true };
    pub const SINGLES: Self = Self { doubles: false };
}

impl Default for Format {
    fn default() -> Self {
        Self::VGC
    }
}

// ============================================================================
// Field
// ============================================================================

/// Weather, terrain and everyone on the field.
#[derive(Clone, Debug, Default)]
pub struct FieldState {
    pub format: Format,
    pub weather: Weather,
    pub terrain: Terrain,
    /// Active Pokemon, in the order they were listed.
    pub roster: Vec<Pokemon>,
}

impl FieldState {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Hooks of every ability in play for one attack.
    ///
    /// Covers the roster plus the two participants, so a calculation with
    /// an empty roster still sees the attacker's and defender's auras.
    /// Participants already on the roster are not counted twice.
    pub fn abilities_on_field<'a>(
        &'a self,
        attacker: &'a Pokemon,
        defender: &'a Pokemon,
    ) -> impl Iterator<Item = &'static AbilityHooks> + Clone + 'a {
        let extras = [attacker, defender]
            .into_iter()
            .filter(move |p| !self.roster.iter().any(|r| std::ptr::eq(r, *p)));
        self.roster
            .iter()
            .chain(extras)
            .filter_map(|p| p.ability.hooks())
    }
}
