//! Final damage: from base damage to the sixteen rolls.
//!
//! Phases, in order:
//! 1. **Pre-random mods** - spread, Parental Bond second hit, weather, crit
//!    (each pokeRounded)
//! 2. **Random roll** - `floor(damage * r / 100)` for r in 85..=100
//! 3. **Per-roll mods** - STAB, type effectiveness and burn (floored),
//!    then the hit count
//! 4. **Clamp** - at least 1, then 16-bit wraparound

use crate::types::Effectiveness;

use super::formula::{apply_modifier, apply_random_roll, of16, ROLL_PERCENTS};
use super::Modifier;

/// Same-type attack bonus as an integer fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stab {
    None,
    /// 1.5x
    Standard,
    /// 2x (Adaptability)
    Adaptability,
}

impl Stab {
    /// Floor-multiply a roll.
    pub const fn apply(self, damage: u32) -> u32 {
        match self {
            Stab::None => damage,
            Stab::Standard => damage * 3 / 2,
            Stab::Adaptability => damage * 2,
        }
    }
}

/// Everything the final phase needs, decided once per calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalModifiers {
    pub is_spread: bool,
    pub weather: Modifier,
    pub is_crit: bool,
    pub stab: Stab,
    pub effectiveness: Effectiveness,
    pub burned: bool,
    /// Screens, Multiscale and friends; always 1x for now
    pub other: Modifier,
    pub hits: u8,
}

impl Default for FinalModifiers {
    fn default() -> Self {
        Self {
            is_spread: false,
            weather: Modifier::ONE,
            is_crit: false,
            stab: Stab::None,
            effectiveness: Effectiveness::NEUTRAL,
            burned: false,
            other: Modifier::ONE,
            hits: 1,
        }
    }
}

/// Compute all 16 damage values for one hit.
///
/// `second_hit` applies Parental Bond's quarter-power strike.
pub fn compute_final_damage(base_damage: u32, mods: &FinalModifiers, second_hit: bool) -> [u16; 16] {
    let mut damage = base_damage;
    if mods.is_spread {
        damage = apply_modifier(damage, Modifier::THREE_QUARTERS.val());
    }
    if second_hit {
        damage = apply_modifier(damage, Modifier::QUARTER.val());
    }
    damage = apply_modifier(damage, mods.weather.val());
    if mods.is_crit {
        damage = apply_modifier(damage, Modifier::ONE_POINT_FIVE.val());
    }

    ROLL_PERCENTS.map(|roll| {
        let mut d = apply_random_roll(damage, roll);
        d = mods.stab.apply(d);
        d = mods.effectiveness.apply(d);
        if mods.burned {
            d /= 2;
        }
        d = apply_modifier(d, mods.other.val());
        d *= mods.hits as u32;
        of16(d.max(1))
    })
}
